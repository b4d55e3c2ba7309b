use crate::client::PopcatClient;
use crate::error::PopcatError;
use crate::request::EndpointRequest;
use crate::services::to_body;
use crate::validation;

use common::HttpStatusCode;
use models::ShortenRequest;

use log::debug;
use serde_json::Value;

const SHORTEN_PATH: &str = "/shorten";

/// Short links with custom extensions.
#[derive(Debug, Clone)]
pub struct Shortener {
    client: PopcatClient,
}

impl Shortener {
    pub fn new() -> Result<Self, PopcatError> {
        Ok(Self::with_client(PopcatClient::with_defaults()?))
    }

    pub fn with_client(client: PopcatClient) -> Self {
        Self { client }
    }

    /// Register `extension` as a short link to `url`.
    ///
    /// `extension` must be alphanumeric and 3 to 20 characters long.
    pub async fn shorten(&self, url: &str, extension: &str) -> Result<Value, PopcatError> {
        validation::http_url("url", url)?;
        validation::extension("extension", extension)?;

        let body = ShortenRequest {
            url: url.to_string(),
            extension: extension.to_string(),
        };

        self.client
            .fetch_json(EndpointRequest::post(
                SHORTEN_PATH,
                to_body(SHORTEN_PATH, &body)?,
            ))
            .await
    }

    /// Details of an existing short link.
    ///
    /// # Errors
    ///
    /// An unknown extension (HTTP 404) yields [`PopcatError::NotFound`]; any
    /// other failure is returned unchanged.
    pub async fn get_info(&self, extension: &str) -> Result<Value, PopcatError> {
        validation::alphanumeric("extension", extension)?;

        let request = EndpointRequest::get(format!("{}/{}", SHORTEN_PATH, extension));

        match self.client.fetch_json(request).await {
            Err(error)
                if error
                    .status_code()
                    .map(HttpStatusCode::from)
                    .is_some_and(|code| code.is_not_found()) =>
            {
                debug!("Short link '{}' does not exist", extension);
                Err(PopcatError::not_found(format!(
                    "shortened URL with extension '{}'",
                    extension
                )))
            }
            result => result,
        }
    }
}

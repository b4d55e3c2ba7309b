use crate::config::ClientConfig;
use crate::decode::{decode_json, decode_text};
use crate::error::PopcatError;
use crate::request::{EndpointRequest, HttpMethod};

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

/// Dispatcher shared by every endpoint operation.
///
/// Holds the one base URL all requests are resolved against and the
/// underlying HTTP client. Cloning is cheap and clones share the connection
/// pool. No other state is kept between calls.
#[derive(Debug, Clone)]
pub struct PopcatClient {
    base_url: Url,
    client: Client,
}

impl PopcatClient {
    /// Client for `base_url_str` with every other setting at its default.
    pub fn new(base_url_str: &str) -> Result<Self, PopcatError> {
        Self::from_config(&ClientConfig {
            base_url: base_url_str.to_string(),
            ..ClientConfig::default()
        })
    }

    /// Client for the public service origin.
    pub fn with_defaults() -> Result<Self, PopcatError> {
        Self::from_config(&ClientConfig::default())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, PopcatError> {
        let base_url = normalize_base_url(&config.base_url)?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout_secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|error| PopcatError::from_reqwest(base_url.as_str(), &error))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue the request and return the final URL after redirects.
    ///
    /// Image and meme endpoints render at the request URL, so the URL itself
    /// is the deliverable and the body is ignored.
    pub async fn resolve_url(&self, request: EndpointRequest) -> Result<Url, PopcatError> {
        let response = self.send(&request).await?;
        Ok(response.url().clone())
    }

    /// Issue the request and parse the body as JSON.
    pub async fn fetch_json(&self, request: EndpointRequest) -> Result<Value, PopcatError> {
        let response = self.send(&request).await?;
        let body = read_body(&request, response).await?;
        decode_json(&request.path, &body)
    }

    /// Issue the request and reduce the body to one string using `keys`.
    pub async fn fetch_text(
        &self,
        request: EndpointRequest,
        keys: &[&str],
    ) -> Result<String, PopcatError> {
        let response = self.send(&request).await?;
        let body = read_body(&request, response).await?;
        Ok(decode_text(&body, keys))
    }

    async fn send(&self, request: &EndpointRequest) -> Result<Response, PopcatError> {
        let url = request.url(&self.base_url)?;

        debug!("{} {}", request.method, request.path);

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        if let Some(key) = &request.bearer {
            builder = builder.header(AUTHORIZATION, key.bearer_value());
        }

        let response = builder.send().await.map_err(|error| {
            warn!("{} {} failed: {}", request.method, request.path, error);
            PopcatError::from_reqwest(&request.path, &error)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(error) => {
                    debug!("Could not read error body from {}: {}", request.path, error);
                    String::new()
                }
            };
            warn!(
                "{} {} returned HTTP {}",
                request.method,
                request.path,
                status.as_u16()
            );
            return Err(PopcatError::from_http_response(
                &request.path,
                status.as_u16(),
                body,
            ));
        }

        Ok(response)
    }
}

async fn read_body(request: &EndpointRequest, response: Response) -> Result<String, PopcatError> {
    response
        .text()
        .await
        .map_err(|error| PopcatError::from_reqwest(&request.path, &error))
}

/// Parse the base URL and make sure it ends with `/` so endpoint paths join
/// underneath it instead of replacing its last segment.
fn normalize_base_url(base_url_str: &str) -> Result<Url, PopcatError> {
    let mut base_url = Url::parse(base_url_str)?;
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    Ok(base_url)
}

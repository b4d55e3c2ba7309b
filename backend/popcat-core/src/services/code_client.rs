use crate::client::PopcatClient;
use crate::error::{InputFailure, PopcatError};
use crate::request::EndpointRequest;
use crate::services::to_body;
use crate::validation;

use common::RedactedApiKey;
use models::{Language, NewPaste, Theme};

use log::{debug, info};
use serde_json::Value;

const CODE_PATH: &str = "/code";

/// Creates syntax-highlighted pastes.
///
/// Holds a credential sent as `Authorization: Bearer <key>` on every paste.
/// The key is read-only after construction and never printed.
#[derive(Debug, Clone)]
pub struct CodeClient {
    client: PopcatClient,
    api_key: RedactedApiKey,
}

impl CodeClient {
    /// Client against the public service.
    pub fn new(api_key: impl Into<String>) -> Result<Self, PopcatError> {
        Self::with_client(PopcatClient::with_defaults()?, api_key)
    }

    /// Client sharing an existing dispatcher (and its base URL).
    pub fn with_client(
        client: PopcatClient,
        api_key: impl Into<String>,
    ) -> Result<Self, PopcatError> {
        let api_key = RedactedApiKey::new(api_key);
        if api_key.is_empty() {
            return Err(PopcatError::invalid_input("api_key", InputFailure::Empty));
        }
        debug!("Paste credential set ({} characters)", api_key.char_count());

        Ok(Self { client, api_key })
    }

    /// Create a paste.
    ///
    /// `theme` must match a [`Theme`] name exactly. `language` matches a
    /// [`Language`] name case-insensitively and is sent in its canonical
    /// spelling. All checks run before the request is built.
    pub async fn create_bin(
        &self,
        title: &str,
        description: &str,
        code: &str,
        theme: &str,
        language: &str,
    ) -> Result<Value, PopcatError> {
        validation::text("title", title)?;
        validation::text("description", description)?;
        validation::text("code", code)?;
        let theme = validation::theme("theme", theme)?;
        let language = validation::language("language", language)?;

        let paste = NewPaste::new(title, description, code)
            .with_theme(theme)
            .with_language(language);

        self.send(&paste).await
    }

    /// Create a paste from an already typed payload.
    ///
    /// Theme and language are valid by construction; the text fields are
    /// still checked.
    pub async fn create_bin_typed(&self, paste: &NewPaste) -> Result<Value, PopcatError> {
        validation::text("title", &paste.title)?;
        validation::text("description", &paste.description)?;
        validation::text("code", &paste.code)?;

        self.send(paste).await
    }

    pub fn available_themes() -> Vec<&'static str> {
        Theme::names()
    }

    pub fn available_languages() -> Vec<&'static str> {
        Language::names()
    }

    async fn send(&self, paste: &NewPaste) -> Result<Value, PopcatError> {
        info!(
            "Creating paste '{}' ({}, {})",
            paste.title, paste.language, paste.theme
        );

        let request = EndpointRequest::post(CODE_PATH, to_body(CODE_PATH, paste)?)
            .bearer(self.api_key.clone());

        self.client.fetch_json(request).await
    }
}

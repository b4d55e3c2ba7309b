//! JSON bodies for the two POST endpoints.

use crate::{Language, Theme};

use serde::Serialize;

/// Body of `POST /code`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPaste {
    pub title: String,
    pub description: String,
    pub code: String,
    pub theme: Theme,
    pub language: Language,
}

impl NewPaste {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            code: code.into(),
            theme: Theme::default(),
            language: Language::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Body of `POST /shorten`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    pub url: String,
    pub extension: String,
}

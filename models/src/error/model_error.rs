use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ModelError {
    #[error("Unknown Theme Error: '{value}' {location}")]
    UnknownTheme {
        value: String,
        location: ErrorLocation,
    },

    #[error("Unknown Language Error: '{value}' {location}")]
    UnknownLanguage {
        value: String,
        location: ErrorLocation,
    },
}

impl ModelError {
    #[track_caller]
    pub fn unknown_theme(value: impl Into<String>) -> Self {
        ModelError::UnknownTheme {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unknown_language(value: impl Into<String>) -> Self {
        ModelError::UnknownLanguage {
            value: value.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

//! Error type returned by every endpoint operation.
//!
//! Key design decisions:
//! - Local validation failures never reach the network and are their own variant
//! - HTTP status codes stored directly (not parsed from strings)
//! - "Not found" is a variant, not a message to match on
//! - All errors include ErrorLocation, captured with `#[track_caller]`

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Characters of a failed response body kept in the error message.
pub const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, ThisError)]
pub enum PopcatError {
    #[error("Invalid Input Error: '{field}' {reason} {location}")]
    InvalidInput {
        field: &'static str,
        reason: InputFailure,
        location: ErrorLocation,
    },

    #[error("Request Error: {endpoint}: {message} {location}")]
    Request {
        endpoint: String,
        message: String,
        status_code: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    #[error("Not Found Error: {resource} not found {location}")]
    NotFound {
        resource: String,
        status_code: HttpStatusCode,
        location: ErrorLocation,
    },

    #[error("Decode Error: {endpoint}: {message} {location}")]
    Decode {
        endpoint: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

/// Specific reasons an argument was rejected before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputFailure {
    Empty,
    TooLong { max: usize, actual: usize },
    TooShort { min: usize, actual: usize },
    UnsupportedScheme,
    MalformedUrl,
    NotAlphanumeric,
    NotBinary,
    NotPng,
    NotHttps,
    UnknownTheme(String),
    UnknownLanguage(String),
    UnknownEndpoint(String),
}

impl std::fmt::Display for InputFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "must be a non-empty string"),
            Self::TooLong { max, actual } => {
                write!(f, "must be {} characters or less (got {})", max, actual)
            }
            Self::TooShort { min, actual } => {
                write!(f, "must be at least {} characters (got {})", min, actual)
            }
            Self::UnsupportedScheme => write!(f, "must start with http:// or https://"),
            Self::MalformedUrl => write!(f, "must be a valid HTTP/HTTPS URL"),
            Self::NotAlphanumeric => write!(f, "must contain only alphanumeric characters"),
            Self::NotBinary => write!(f, "must contain only 0s, 1s and spaces"),
            Self::NotPng => write!(f, "must point to a PNG file"),
            Self::NotHttps => write!(f, "must use HTTPS"),
            Self::UnknownTheme(value) => write!(f, "unknown theme '{}'", value),
            Self::UnknownLanguage(value) => write!(f, "unknown language '{}'", value),
            Self::UnknownEndpoint(value) => write!(f, "unknown endpoint '{}'", value),
        }
    }
}

impl PopcatError {
    #[track_caller]
    pub fn invalid_input(field: &'static str, reason: InputFailure) -> Self {
        PopcatError::InvalidInput {
            field,
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(resource: impl Into<String>) -> Self {
        PopcatError::NotFound {
            resource: resource.into(),
            status_code: HttpStatusCode::NOT_FOUND,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        PopcatError::Decode {
            endpoint: endpoint.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create from reqwest error, keeping the status when the transport has one.
    #[track_caller]
    pub fn from_reqwest(endpoint: impl Into<String>, error: &reqwest::Error) -> Self {
        PopcatError::Request {
            endpoint: endpoint.into(),
            message: error.to_string(),
            status_code: error.status().map(|status| HttpStatusCode(status.as_u16())),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create from a non-success HTTP response.
    #[track_caller]
    pub fn from_http_response(
        endpoint: impl Into<String>,
        status_code: u16,
        body: impl AsRef<str>,
    ) -> Self {
        let body = body.as_ref().trim();
        let message = if body.is_empty() {
            format!("HTTP {}", status_code)
        } else {
            format!("HTTP {} - {}", status_code, excerpt(body))
        };

        PopcatError::Request {
            endpoint: endpoint.into(),
            message,
            status_code: Some(HttpStatusCode(status_code)),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Get HTTP status code if applicable.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            PopcatError::Request { status_code, .. } => status_code.map(|code| code.0),
            PopcatError::NotFound { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PopcatError::NotFound { .. })
    }

    /// True for errors raised before any network activity.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PopcatError::InvalidInput { .. })
    }

    /// Get error category for logs.
    pub fn error_category(&self) -> &'static str {
        match self {
            PopcatError::InvalidInput { .. } => "invalid_input",
            PopcatError::Request { status_code: Some(code), .. } if code.is_client_error() => {
                "client_error"
            }
            PopcatError::Request { status_code: Some(code), .. } if code.is_server_error() => {
                "server_error"
            }
            PopcatError::Request { .. } => "request",
            PopcatError::NotFound { .. } => "not_found",
            PopcatError::Decode { .. } => "decode",
            PopcatError::UrlParse { .. } => "url_parse",
        }
    }
}

impl From<url::ParseError> for PopcatError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        PopcatError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Error pages can be whole HTML documents; keep the head only.
fn excerpt(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

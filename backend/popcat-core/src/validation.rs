//! Argument checks run before any request is built.
//!
//! Every check returns `Err(PopcatError::InvalidInput)` naming the offending
//! field. Values are never trimmed or rewritten here; lengths count characters,
//! not bytes.

use crate::error::{InputFailure, PopcatError};

use models::{Language, Theme};

use url::Url;

/// Maximum characters the quote template renders.
pub const QUOTE_TEXT_MAX_LENGTH: usize = 125;

/// Inclusive character range for a custom short-link extension.
pub const EXTENSION_MIN_LENGTH: usize = 3;
pub const EXTENSION_MAX_LENGTH: usize = 20;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";
const PNG_SUFFIX: &str = ".png";
const SUBREDDIT_PREFIX: &str = "r/";

/// Non-empty free text.
#[track_caller]
pub fn text(field: &'static str, value: &str) -> Result<(), PopcatError> {
    bounded_text(field, value, None)
}

/// Non-empty free text, optionally capped at `max_length` characters.
#[track_caller]
pub fn bounded_text(
    field: &'static str,
    value: &str,
    max_length: Option<usize>,
) -> Result<(), PopcatError> {
    if value.is_empty() {
        return Err(PopcatError::invalid_input(field, InputFailure::Empty));
    }

    if let Some(max) = max_length {
        let actual = value.chars().count();
        if actual > max {
            return Err(PopcatError::invalid_input(
                field,
                InputFailure::TooLong { max, actual },
            ));
        }
    }

    Ok(())
}

/// Image and link targets: non-empty and starting with `http://` or `https://`.
///
/// The scheme comparison is case-sensitive.
#[track_caller]
pub fn http_url(field: &'static str, value: &str) -> Result<(), PopcatError> {
    text(field, value)?;

    if !(value.starts_with(HTTP_PREFIX) || value.starts_with(HTTPS_PREFIX)) {
        return Err(PopcatError::invalid_input(
            field,
            InputFailure::UnsupportedScheme,
        ));
    }

    Ok(())
}

/// Full URL parse: needs a host and an `http`/`https` scheme.
#[track_caller]
pub fn web_url(field: &'static str, value: &str) -> Result<(), PopcatError> {
    text(field, value)?;

    let parsed = match Url::parse(value) {
        Ok(parsed) => parsed,
        Err(_) => return Err(PopcatError::invalid_input(field, InputFailure::MalformedUrl)),
    };

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(PopcatError::invalid_input(field, InputFailure::MalformedUrl));
    }

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(PopcatError::invalid_input(
            field,
            InputFailure::UnsupportedScheme,
        )),
    }
}

/// Alphanumeric identifier with no length bound.
#[track_caller]
pub fn alphanumeric(field: &'static str, value: &str) -> Result<(), PopcatError> {
    text(field, value)?;

    if !value.chars().all(char::is_alphanumeric) {
        return Err(PopcatError::invalid_input(
            field,
            InputFailure::NotAlphanumeric,
        ));
    }

    Ok(())
}

/// Custom short-link extension: alphanumeric, 3 to 20 characters.
#[track_caller]
pub fn extension(field: &'static str, value: &str) -> Result<(), PopcatError> {
    alphanumeric(field, value)?;

    let actual = value.chars().count();
    if actual < EXTENSION_MIN_LENGTH {
        return Err(PopcatError::invalid_input(
            field,
            InputFailure::TooShort {
                min: EXTENSION_MIN_LENGTH,
                actual,
            },
        ));
    }
    if actual > EXTENSION_MAX_LENGTH {
        return Err(PopcatError::invalid_input(
            field,
            InputFailure::TooLong {
                max: EXTENSION_MAX_LENGTH,
                actual,
            },
        ));
    }

    Ok(())
}

/// Space-separated binary octets; only `0`, `1` and spaces.
#[track_caller]
pub fn binary(field: &'static str, value: &str) -> Result<(), PopcatError> {
    text(field, value)?;

    if !value.chars().all(|c| matches!(c, '0' | '1' | ' ')) {
        return Err(PopcatError::invalid_input(field, InputFailure::NotBinary));
    }

    Ok(())
}

/// Welcome-card background: a web URL that is HTTPS and ends in `.png`.
#[track_caller]
pub fn png_background(field: &'static str, value: &str) -> Result<(), PopcatError> {
    web_url(field, value)?;

    if !value.to_lowercase().ends_with(PNG_SUFFIX) {
        return Err(PopcatError::invalid_input(field, InputFailure::NotPng));
    }
    if !value.starts_with(HTTPS_PREFIX) {
        return Err(PopcatError::invalid_input(field, InputFailure::NotHttps));
    }

    Ok(())
}

/// Validate a subreddit name and drop a leading `r/`.
#[track_caller]
pub fn subreddit(field: &'static str, value: &str) -> Result<String, PopcatError> {
    text(field, value)?;

    Ok(value
        .strip_prefix(SUBREDDIT_PREFIX)
        .unwrap_or(value)
        .to_string())
}

/// Exact, case-sensitive theme lookup.
#[track_caller]
pub fn theme(field: &'static str, value: &str) -> Result<Theme, PopcatError> {
    text(field, value)?;

    value.parse::<Theme>().map_err(|_| {
        PopcatError::invalid_input(field, InputFailure::UnknownTheme(value.to_string()))
    })
}

/// Case-insensitive language lookup resolving to the canonical spelling.
#[track_caller]
pub fn language(field: &'static str, value: &str) -> Result<Language, PopcatError> {
    text(field, value)?;

    value.parse::<Language>().map_err(|_| {
        PopcatError::invalid_input(field, InputFailure::UnknownLanguage(value.to_string()))
    })
}

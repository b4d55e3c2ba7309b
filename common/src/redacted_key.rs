//! Paste-service credential.

use crate::{ErrorLocation, RedactError};

use std::fmt::{Debug, Display, Formatter, Result as FormatResult};
use std::panic::Location;

use serde::{Serialize, Serializer, ser::Error as _};
use zeroize::Zeroize;

const REDACTED: &str = "[REDACTED]";

/// Bearer credential for the code paste service.
///
/// Formatting never shows the value, serialization is refused and the buffer
/// is wiped on drop. The only way to read it back is [`Self::bearer_value`],
/// used when the `Authorization` header is built.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedApiKey {
    secret: String,
}

impl RedactedApiKey {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }

    /// Character count, safe to log.
    pub fn char_count(&self) -> usize {
        self.secret.chars().count()
    }

    /// `Authorization` header value: `Bearer <key>`.
    pub fn bearer_value(&self) -> String {
        format!("Bearer {}", self.secret)
    }
}

impl Debug for RedactedApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.debug_tuple("RedactedApiKey").field(&REDACTED).finish()
    }
}

impl Display for RedactedApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        f.write_str(REDACTED)
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

impl Serialize for RedactedApiKey {
    #[track_caller]
    fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
        Err(S::Error::custom(RedactError::RefusedSerialization {
            type_name: "RedactedApiKey",
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}

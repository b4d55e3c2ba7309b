//! Shared building blocks for the Popcat client workspace.
//!
//! Nothing in here knows about endpoints or the wire format. These types are
//! used by every other crate:
//!
//! - [`ErrorLocation`]: call-site capture attached to every error variant
//! - [`HttpStatusCode`]: status code kept as data so callers can branch on it
//! - [`RedactedApiKey`]: credential wrapper that never prints its value

pub mod error;
pub mod http_status;
pub mod redacted_key;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;

#[cfg(test)]
mod tests;

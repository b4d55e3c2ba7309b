//! Domain models for the Popcat client.
//!
//! Pure data: the closed sets the paste service accepts and the JSON payloads
//! the POST endpoints take. No I/O and no validation beyond closed-set
//! membership.
//!
//! ## Architecture
//!
//! - **common**: error location, status codes, redacted credentials
//! - **models** (this crate): closed sets and request payloads
//! - **popcat-core**: validation, dispatch and the endpoint catalogue
//! - **popcat** (CLI): logger, config discovery, argument parsing

#[macro_use]
mod closed_set;

pub mod error;
pub mod language;
pub mod payload;
pub mod theme;

pub use error::model_error::ModelError;
pub use language::Language;
pub use payload::{NewPaste, ShortenRequest};
pub use theme::Theme;

#[cfg(test)]
mod tests;

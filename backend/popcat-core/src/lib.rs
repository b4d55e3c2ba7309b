//! Async client for the Popcat API.
//!
//! Every remote capability is one method on [`PopcatClient`]. Each method
//! validates its arguments locally, builds an [`EndpointRequest`], performs one
//! request against the configured base URL and decodes the result into a
//! resolved [`url::Url`], a `serde_json::Value` or a `String`.
//!
//! [`CodeClient`] and [`Shortener`] wrap the two POST services.
//!
//! ```no_run
//! # async fn run() -> Result<(), popcat_core::PopcatError> {
//! let client = popcat_core::PopcatClient::with_defaults()?;
//! let meme = client.drake("Regular APIs", "Popcat API").await?;
//! println!("{meme}");
//! # Ok(()) }
//! ```

pub mod config;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod request;
pub mod services;
pub mod validation;

mod client;
#[cfg(test)]
mod tests;

pub use client::PopcatClient;
pub use config::ClientConfig;
pub use endpoints::{
    DataLookup, ImageFilter, PairMeme, RandomData, RandomText, TextMeme, TextTransform,
};
pub use error::{ConfigError, InputFailure, PopcatError};
pub use request::{EndpointRequest, HttpMethod};
pub use services::{CodeClient, Shortener};

pub use models::{Language, NewPaste, Theme};

pub const POPCAT_API_HOST: &str = "api.popcat.xyz";
pub const DEFAULT_BASE_URL: &str = const_format::concatcp!("https://", POPCAT_API_HOST);
pub const DEFAULT_USER_AGENT: &str =
    const_format::concatcp!("popcat-core/", env!("CARGO_PKG_VERSION"));

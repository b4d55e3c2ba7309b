//! The two POST services: code pastes and link shortening.

pub mod code_client;
pub mod shortener;

pub use code_client::CodeClient;
pub use shortener::Shortener;

use crate::error::PopcatError;

use serde::Serialize;
use serde_json::Value;

#[track_caller]
fn to_body(endpoint: &str, payload: &impl Serialize) -> Result<Value, PopcatError> {
    serde_json::to_value(payload).map_err(|error| {
        PopcatError::decode(endpoint, format!("could not encode request body: {error}"))
    })
}

use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a secret-bearing type is asked to leave the process in a
/// serialized form.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Redact Error: {type_name} refuses to be serialized {location}")]
    RefusedSerialization {
        type_name: &'static str,
        location: ErrorLocation,
    },
}

use common::ErrorLocation;

use popcat_core::{ConfigError, PopcatError};

use thiserror::Error;

/// Errors surfaced by the command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from this App
    #[error("Cli Error: {message} {location}")]
    Cli {
        message: String,
        location: ErrorLocation,
    },

    /// A command needs a credential that was not supplied
    #[error("Missing Credential Error: set {variable} or pass --api-key {location}")]
    MissingApiKey {
        variable: &'static str,
        location: ErrorLocation,
    },

    /// Error from popcat-core operations
    #[error(transparent)]
    Core(#[from] PopcatError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

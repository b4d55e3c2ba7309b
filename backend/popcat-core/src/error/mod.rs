pub mod config;
pub mod popcat;

pub use config::ConfigError;
pub use popcat::{InputFailure, PopcatError};

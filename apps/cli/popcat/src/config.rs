//! Config discovery for the CLI.
//!
//! Precedence, lowest first: built-in defaults, config file, `POPCAT_*`
//! environment variables, `--base-url`.

use crate::error::CliError;

use popcat_core::ClientConfig;

use std::path::{Path, PathBuf};

use log::debug;

const CONFIG_DIR_NAME: &str = "popcat";
const CONFIG_FILE_NAME: &str = "config.toml";

/// `<config dir>/popcat/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Build the client config for this run.
pub fn resolve(
    config_path: Option<&Path>,
    base_url: Option<&str>,
) -> Result<ClientConfig, CliError> {
    let mut config = match config_path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => ClientConfig::load(&path)?,
        None => {
            debug!("No config directory on this platform, using defaults");
            ClientConfig::default()
        }
    };

    config = config.apply_env_overrides()?;

    if let Some(base_url) = base_url {
        config.base_url = base_url.to_string();
        config.validate()?;
    }

    debug!("Using base URL {}", config.base_url);
    Ok(config)
}

use crate::config::{API_KEY_ENV, BASE_URL_ENV, ClientConfig, TIMEOUT_ENV, api_key_from_env};
use crate::error::ConfigError;
use crate::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

use serial_test::serial;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    path
}

fn clear_env() {
    // SAFETY: env-touching tests are serialized with #[serial].
    unsafe {
        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var(TIMEOUT_ENV);
        std::env::remove_var(API_KEY_ENV);
    }
}

// ============================================
// FILE LOADING
// ============================================

#[test]
fn given_missing_file_when_loaded_then_returns_defaults() {
    let dir = TempDir::new().unwrap();

    let config = ClientConfig::load(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(config.timeout_secs, None);
}

/// **VALUE**: Partial files fill the rest from defaults.
#[test]
fn given_partial_file_when_loaded_then_missing_fields_default() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "timeout_secs = 15\n");

    let config = ClientConfig::load(&path).unwrap();

    assert_eq!(config.timeout_secs, Some(15));
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

#[test]
fn given_full_file_when_loaded_then_all_fields_read() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
base_url = "http://localhost:3000"
timeout_secs = 5
user_agent = "my-bot/1.0"
"#,
    );

    let config = ClientConfig::load(&path).unwrap();

    assert_eq!(config.base_url, "http://localhost:3000");
    assert_eq!(config.timeout_secs, Some(5));
    assert_eq!(config.user_agent, "my-bot/1.0");
}

#[test]
fn given_malformed_toml_when_loaded_then_parse_error_names_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "base_url = [unterminated");

    let err = ClientConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

/// **VALUE**: Non-HTTP base URLs are rejected when the config is read.
///
/// **BUG THIS CATCHES**: A `ws://` or bare host origin would otherwise only
/// fail on the first request, far from the config that caused it.
#[test]
fn given_non_http_base_url_when_loaded_then_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "base_url = \"ftp://api.popcat.xyz\"\n");

    let err = ClientConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("ftp://api.popcat.xyz"));
}

#[test]
fn given_invalid_values_when_validated_then_each_rejected() {
    let zero_timeout = ClientConfig {
        timeout_secs: Some(0),
        ..ClientConfig::default()
    };
    let blank_agent = ClientConfig {
        user_agent: "  ".to_string(),
        ..ClientConfig::default()
    };
    let empty_base = ClientConfig {
        base_url: String::new(),
        ..ClientConfig::default()
    };

    assert!(zero_timeout.validate().is_err());
    assert!(blank_agent.validate().is_err());
    assert!(empty_base.validate().is_err());
    assert!(ClientConfig::default().validate().is_ok());
}

// ============================================
// ENVIRONMENT OVERRIDES
// ============================================

#[test]
#[serial]
fn given_env_overrides_when_applied_then_replace_file_values() {
    clear_env();
    // SAFETY: serialized with other env-touching tests.
    unsafe {
        std::env::set_var(BASE_URL_ENV, "http://127.0.0.1:4010");
        std::env::set_var(TIMEOUT_ENV, "30");
    }

    let config = ClientConfig::default().apply_env_overrides().unwrap();
    clear_env();

    assert_eq!(config.base_url, "http://127.0.0.1:4010");
    assert_eq!(config.timeout_secs, Some(30));
}

#[test]
#[serial]
fn given_non_numeric_timeout_env_when_applied_then_env_error() {
    clear_env();
    // SAFETY: serialized with other env-touching tests.
    unsafe {
        std::env::set_var(TIMEOUT_ENV, "soon");
    }

    let err = ClientConfig::default().apply_env_overrides().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::EnvError { variable, .. } if variable == TIMEOUT_ENV));
    assert!(err.to_string().contains("soon"));
}

#[test]
#[serial]
fn given_empty_env_values_when_read_then_treated_as_unset() {
    clear_env();
    // SAFETY: serialized with other env-touching tests.
    unsafe {
        std::env::set_var(BASE_URL_ENV, "");
        std::env::set_var(API_KEY_ENV, "");
    }

    let config = ClientConfig::default().apply_env_overrides().unwrap();
    let api_key = api_key_from_env();
    clear_env();

    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(api_key, None);
}

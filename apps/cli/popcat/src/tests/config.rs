use crate::config::{default_config_path, resolve};
use crate::error::CliError;

use popcat_core::config::{BASE_URL_ENV, TIMEOUT_ENV};
use popcat_core::{ConfigError, DEFAULT_BASE_URL};

use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    // SAFETY: env-touching tests are serialized with #[serial].
    unsafe {
        std::env::remove_var(BASE_URL_ENV);
        std::env::remove_var(TIMEOUT_ENV);
    }
}

#[test]
fn given_platform_config_dir_when_asked_then_path_ends_with_popcat_config() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("popcat/config.toml"));
    }
}

#[test]
#[serial]
fn given_missing_explicit_file_when_resolved_then_defaults() {
    clear_env();
    let dir = TempDir::new().unwrap();

    let config = resolve(Some(dir.path().join("none.toml").as_path()), None).unwrap();

    assert_eq!(config.base_url, DEFAULT_BASE_URL);
}

/// **VALUE**: `--base-url` beats both the file and the environment.
#[test]
#[serial]
fn given_file_env_and_flag_when_resolved_then_flag_wins() {
    clear_env();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "base_url = \"http://file.example\"\ntimeout_secs = 7\n").unwrap();
    // SAFETY: serialized with other env-touching tests.
    unsafe { std::env::set_var(BASE_URL_ENV, "http://env.example") };

    let from_env = resolve(Some(path.as_path()), None).unwrap();
    let from_flag = resolve(Some(path.as_path()), Some("http://flag.example")).unwrap();
    clear_env();

    assert_eq!(from_env.base_url, "http://env.example");
    assert_eq!(from_env.timeout_secs, Some(7));
    assert_eq!(from_flag.base_url, "http://flag.example");
}

#[test]
#[serial]
fn given_non_http_flag_when_resolved_then_config_error() {
    clear_env();
    let dir = TempDir::new().unwrap();

    let err = resolve(Some(dir.path().join("none.toml").as_path()), Some("ws://nope")).unwrap_err();

    assert!(matches!(
        err,
        CliError::Config(ConfigError::ValidationError { .. })
    ));
}

//! # Configuration Tests
//!
//! Tests for the layered configuration loader: YAML file, `${VAR}`
//! substitution and environment overrides.

use civic_intel::constants::{DEFAULT_GEMINI_MODEL, SERPER_API_URL};
use civic_intel_server::config::{get_config, ConfigError};
use std::env;
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

// Environment variables are process-global, so tests touching them run one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env_vars() {
    env::remove_var("PORT");
    env::remove_var("TEST_CIVIC_GEMINI_KEY");
    env::remove_var("CIVIC_INTEL_PROVIDERS__SEARCH__COUNTRY");
    env::remove_var("CIVIC_INTEL_PROVIDERS__FALLBACK__MODEL_NAME");
}

fn write_config(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("config.yml");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn test_defaults_and_substitution() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();
    env::set_var("TEST_CIVIC_GEMINI_KEY", "secret-gemini");

    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
providers:
  primary:
    api_key: "${TEST_CIVIC_GEMINI_KEY}"
  search:
    api_key: "${TEST_CIVIC_UNSET_KEY}"
"#,
    );

    let config = get_config(Some(&path)).expect("Configuration should load successfully");

    assert_eq!(config.port, 9090);
    assert_eq!(config.providers.primary.api_key, "secret-gemini");
    assert_eq!(config.providers.primary.model_name, DEFAULT_GEMINI_MODEL);
    // Unset variables substitute to an empty string.
    assert_eq!(config.providers.search.api_key, "");
    assert_eq!(config.providers.search.api_url, SERPER_API_URL);
    assert_eq!(config.providers.search.country, "in");
    assert_eq!(config.providers.fallback.model_name, "deepseek-chat");

    clear_env_vars();
}

#[test]
fn test_environment_overrides() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();
    env::set_var("PORT", "9999");
    env::set_var("CIVIC_INTEL_PROVIDERS__SEARCH__COUNTRY", "us");
    env::set_var("CIVIC_INTEL_PROVIDERS__FALLBACK__MODEL_NAME", "deepseek-reasoner");

    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
port: 8080
providers:
  search:
    country: "in"
"#,
    );

    let config = get_config(Some(&path)).expect("Configuration should load successfully");

    assert_eq!(config.port, 9999);
    assert_eq!(config.providers.search.country, "us");
    assert_eq!(config.providers.fallback.model_name, "deepseek-reasoner");

    clear_env_vars();
}

#[test]
fn test_missing_config_file() {
    let _lock = ENV_LOCK.lock().unwrap();
    clear_env_vars();

    let result = get_config(Some("/definitely/not/here/config.yml"));

    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
fn test_shipped_config_is_valid_yaml() {
    let content = fs::read_to_string(format!("{}/config.yml", env!("CARGO_MANIFEST_DIR"))).unwrap();
    let parsed: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
    assert!(parsed["providers"]["primary"]["api_key"].is_string());
}

//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold `ENV_MUTEX` to avoid
//! interference between tests.

use anonymizer::anonymization::AnonymizationEngine;
use anonymizer::config::{load_config, load_or_default, parse_config};
use anonymizer::domain::AnonymizerError;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("ANONYMIZER_APPLICATION_LOG_LEVEL");
    std::env::remove_var("ANONYMIZER_LIMITS_MAX_PAYLOAD_BYTES");
    std::env::remove_var("ANONYMIZER_ANONYMIZATION_REGION");
    std::env::remove_var("ANONYMIZER_ANONYMIZATION_PERSON_LABELS");
    std::env::remove_var("ANONYMIZER_ANONYMIZATION_DRY_RUN");
    std::env::remove_var("ANONYMIZER_LOGGING_LOCAL_ENABLED");
    std::env::remove_var("TEST_ANONYMIZER_LOG_DIR");
}

fn write_config(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(content.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[limits]
max_payload_bytes = 2048

[anonymization]
region = "FR"
person_labels = ["PER", "PERSON", "B-PER"]
dry_run = true

[logging]
local_enabled = true
local_path = "/tmp/anonymizer-logs"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.limits.max_payload_bytes, 2048);
    assert_eq!(config.anonymization.person_labels.len(), 3);
    assert!(config.anonymization.dry_run);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");

    let engine = AnonymizationEngine::new(config.anonymization).expect("Failed to create engine");
    assert!(engine.is_dry_run());
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_ANONYMIZER_LOG_DIR", "/var/log/anonymizer");

    let temp_file = write_config(
        r#"
[logging]
local_path = "${TEST_ANONYMIZER_LOG_DIR}"
"#,
    );

    let config = load_config(temp_file.path()).expect("Failed to load config");
    assert_eq!(config.logging.local_path, "/var/log/anonymizer");

    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config("[logging]\nlocal_path = \"${TEST_ANONYMIZER_LOG_DIR}\"\n");
    let result = load_config(temp_file.path());
    assert!(matches!(result, Err(AnonymizerError::Configuration(_))));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("ANONYMIZER_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("ANONYMIZER_LIMITS_MAX_PAYLOAD_BYTES", "100");
    std::env::set_var("ANONYMIZER_ANONYMIZATION_PERSON_LABELS", "PER, B-PER");
    std::env::set_var("ANONYMIZER_ANONYMIZATION_DRY_RUN", "true");

    let config = parse_config("[limits]\nmax_payload_bytes = 4096\n").expect("Failed to parse");
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.limits.max_payload_bytes, 100);
    assert_eq!(config.anonymization.person_labels, vec!["PER", "B-PER"]);
    assert!(config.anonymization.dry_run);

    cleanup_env_vars();
}

#[test]
fn test_invalid_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("ANONYMIZER_LIMITS_MAX_PAYLOAD_BYTES", "lots");

    let result = parse_config("");
    assert!(matches!(result, Err(AnonymizerError::Configuration(_))));

    cleanup_env_vars();
}

#[test]
fn test_invalid_region() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let result = parse_config("[anonymization]\nregion = \"France\"\n");
    assert!(matches!(result, Err(AnonymizerError::Configuration(_))));
}

#[test]
fn test_unknown_log_level() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let result = parse_config("[application]\nlog_level = \"verbose\"\n");
    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let result = load_or_default(Some("/nonexistent/anonymizer.toml"));
    assert!(matches!(result, Err(AnonymizerError::Configuration(_))));
}

#[test]
fn test_payload_limits_from_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let config = parse_config("[limits]\nmax_payload_bytes = 10\n").expect("Failed to parse");
    assert!(config.limits.check_single("0123456789").is_ok());

    let err = config.limits.check_single("0123456789a").unwrap_err();
    assert_eq!(err.exit_code(), 3);

    let err = config.limits.check_batch(&["012345", "6789a"]).unwrap_err();
    assert!(matches!(
        err,
        AnonymizerError::PayloadTooLarge { size: 11, limit: 10 }
    ));
}

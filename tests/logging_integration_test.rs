//! Integration tests for logging functionality

use anonymizer::config::LoggingConfig;
use anonymizer::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_path, "./logs");
    assert_eq!(config.local_rotation, "daily");
}

#[test]
fn test_invalid_rotation_is_rejected() {
    let config = LoggingConfig {
        local_enabled: true,
        local_path: "/tmp/anonymizer".to_string(),
        local_rotation: "weekly".to_string(),
    };

    let err = init_logging("info", &config).err().expect("rotation accepted");
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_invalid_level_is_rejected() {
    let err = init_logging("loud", &LoggingConfig::default())
        .err()
        .expect("level accepted");
    assert_eq!(err.exit_code(), 2);
}

// Only test in this binary that installs the global subscriber
#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    assert!(!log_path.exists());
    let guard = init_logging("debug", &config).expect("Failed to initialize logging");
    assert!(log_path.is_dir());

    tracing::info!(documents = 1, "test event");
    drop(guard);
}

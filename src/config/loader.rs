//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AnonymizerConfig;
use crate::domain::errors::AnonymizerError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Configuration file looked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "anonymizer.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AnonymizerConfig
/// 4. Applies environment variable overrides (ANONYMIZER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`AnonymizerError::Configuration`] if the file is missing or
/// unreadable, a referenced variable is unset, the TOML is malformed, or a
/// value is invalid.
///
/// # Examples
///
/// ```no_run
/// use anonymizer::config::loader::load_config;
///
/// let config = load_config("anonymizer.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AnonymizerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AnonymizerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AnonymizerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = parse_config(&contents)?;
    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Loads the configuration at `path`, or the default file when `path` is `None`
///
/// A missing default file yields the built-in defaults, still subject to
/// environment overrides. An explicit path must exist.
pub fn load_or_default(path: Option<&str>) -> Result<AnonymizerConfig> {
    match path {
        Some(path) => load_config(path),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH),
        None => {
            tracing::debug!("No configuration file, using defaults");
            finalize(AnonymizerConfig::default())
        }
    }
}

/// Parses configuration from TOML text, then applies overrides and validation
pub fn parse_config(contents: &str) -> Result<AnonymizerConfig> {
    let contents = substitute_env_vars(contents)?;
    let config: AnonymizerConfig = toml::from_str(&contents)?;
    finalize(config)
}

fn finalize(mut config: AnonymizerConfig) -> Result<AnonymizerConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        AnonymizerError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| AnonymizerError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|name| name == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AnonymizerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| AnonymizerError::Configuration(format!("Invalid value for {name}")))
}

/// Applies environment variable overrides using ANONYMIZER_* prefix
///
/// Environment variables follow the pattern: ANONYMIZER_<SECTION>_<KEY>
/// For example: ANONYMIZER_LIMITS_MAX_PAYLOAD_BYTES
fn apply_env_overrides(config: &mut AnonymizerConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("ANONYMIZER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Limits overrides
    if let Ok(val) = std::env::var("ANONYMIZER_LIMITS_MAX_PAYLOAD_BYTES") {
        config.limits.max_payload_bytes = parse_env("ANONYMIZER_LIMITS_MAX_PAYLOAD_BYTES", &val)?;
    }

    // Anonymization overrides
    config
        .anonymization
        .apply_env_overrides()
        .map_err(|e| AnonymizerError::Configuration(format!("{e:#}")))?;

    // Logging overrides
    if let Ok(val) = std::env::var("ANONYMIZER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = parse_env("ANONYMIZER_LOGGING_LOCAL_ENABLED", &val)?;
    }
    if let Ok(val) = std::env::var("ANONYMIZER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("ANONYMIZER_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}

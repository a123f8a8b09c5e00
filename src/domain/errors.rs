//! Domain error types
//!
//! Errors raised by the surfaces around the anonymization core: configuration
//! loading, input handling and output serialization. The core itself never
//! returns these for a detection problem; it degrades coverage instead.

use thiserror::Error;

/// Main anonymizer error type
#[derive(Debug, Error)]
pub enum AnonymizerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Input rejected before any detection ran
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input exceeds the configured payload limit
    #[error("Payload too large: {size} bytes exceeds the limit of {limit} bytes")]
    PayloadTooLarge { size: usize, limit: usize },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl AnonymizerError {
    /// Process exit code associated with this error
    ///
    /// - 2: configuration error
    /// - 3: rejected input
    /// - 5: fatal error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 2,
            Self::Validation(_) | Self::PayloadTooLarge { .. } => 3,
            Self::Serialization(_) | Self::Io(_) | Self::Other(_) => 5,
        }
    }
}

impl From<std::io::Error> for AnonymizerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AnonymizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for AnonymizerError {
    fn from(err: toml::de::Error) -> Self {
        Self::Configuration(format!("Failed to parse TOML: {err}"))
    }
}

//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output on stderr, keeping stdout for anonymized data
//! - Local JSON file logging with rotation
//!
//! Log events carry counts, kinds, offsets and document indices. They never
//! carry original or masked text.
//!
//! # Example
//!
//! ```no_run
//! use anonymizer::logging::init_logging;
//! use anonymizer::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a batch anonymization
///
/// # Example
///
/// ```no_run
/// use anonymizer::log_batch_start;
///
/// log_batch_start!(16);
/// ```
#[macro_export]
macro_rules! log_batch_start {
    ($documents:expr) => {
        tracing::info!(documents = $documents, "Starting batch anonymization");
    };
}

/// Log the completion of a batch anonymization
///
/// # Example
///
/// ```no_run
/// use anonymizer::log_batch_complete;
/// use std::time::Duration;
///
/// log_batch_complete!(16, 42, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_batch_complete {
    ($documents:expr, $detections:expr, $duration:expr) => {
        tracing::info!(
            documents = $documents,
            detections = $detections,
            duration_ms = $duration.as_millis(),
            "Batch anonymization completed"
        );
    };
}

/// Log a provider failure that was absorbed for one document
///
/// # Example
///
/// ```no_run
/// use anonymizer::log_provider_degraded;
/// use anonymizer::anonymization::ProviderError;
///
/// let error = ProviderError::Entity("model unavailable".to_string());
/// log_provider_degraded!("entity", 3, error);
/// ```
#[macro_export]
macro_rules! log_provider_degraded {
    ($provider:expr, $document:expr, $error:expr) => {
        tracing::warn!(
            provider = $provider,
            document = $document,
            error = %$error,
            "Provider failed, continuing without its spans"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use anonymizer::log_error_with_context;
/// use anonymizer::domain::AnonymizerError;
///
/// let error = AnonymizerError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

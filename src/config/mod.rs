//! Configuration management
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! The configuration file supports:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `ANONYMIZER_<SECTION>_<KEY>` overrides
//! - Default values for every setting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use anonymizer::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("anonymizer.toml")?;
//! println!("Region: {}", config.anonymization.region);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`LimitsConfig`] - Payload size limit
//! - [`AnonymizationConfig`] - Region, person labels, dry run
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [limits]
//! max_payload_bytes = 51200
//!
//! [anonymization]
//! region = "FR"
//! person_labels = ["PER", "PERSON"]
//!
//! [logging]
//! local_enabled = true
//! local_path = "${ANONYMIZER_LOG_DIR}"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use crate::anonymization::config::AnonymizationConfig;
pub use loader::{load_config, load_or_default, parse_config, DEFAULT_CONFIG_PATH};
pub use schema::{AnonymizerConfig, ApplicationConfig, LimitsConfig, LoggingConfig};

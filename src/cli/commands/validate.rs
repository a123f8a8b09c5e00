//! Validate config command implementation
//!
//! This module implements the `validate-config` command, which loads the
//! configuration and compiles the detection rules without reading any text.

use crate::anonymization::AnonymizationEngine;
use crate::config::{load_or_default, DEFAULT_CONFIG_PATH};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let shown_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
        tracing::info!(config_path = %shown_path, "Validating configuration");

        println!("🔍 Validating configuration file: {shown_path}");
        println!();

        let config = match load_or_default(config_path) {
            Ok(c) => {
                println!("✅ Configuration is valid");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(e.exit_code());
            }
        };

        let engine = match AnonymizationEngine::new(config.anonymization.clone()) {
            Ok(engine) => engine,
            Err(e) => {
                println!("❌ Failed to build the anonymization engine");
                println!("   Error: {e:#}");
                return Ok(2);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Max Payload: {} bytes", config.limits.max_payload_bytes);
        println!("  Region: {}", config.anonymization.region);
        println!("  Person Labels: {:?}", config.anonymization.person_labels);
        println!("  Dry Run: {}", config.anonymization.dry_run);
        println!("  Detection Rules: {}", engine.registry().len());
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!(
                    "{} ({})",
                    config.logging.local_path, config.logging.local_rotation
                )
            } else {
                "disabled".to_string()
            }
        );
        println!();

        Ok(0)
    }
}

//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing anonymizer configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match tokio::fs::write(&self.output, Self::generate_config()).await {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: anonymizer validate-config");
                println!("  3. Anonymize a file: anonymizer anonymize note.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Anonymizer Configuration File
# PII masking for French free-form text
#
# Every value below is the built-in default. Values may reference
# environment variables with ${VAR_NAME}, and any key can be overridden
# with ANONYMIZER_<SECTION>_<KEY> (e.g. ANONYMIZER_LIMITS_MAX_PAYLOAD_BYTES).

[application]
# Log level (trace, debug, info, warn, error)
log_level = "info"

[limits]
# Maximum size in bytes of a single text, or of a whole batch
max_payload_bytes = 51200

[anonymization]
# Region hint for phone number detection (two-letter country code)
region = "FR"

# Entity provider labels treated as person names
person_labels = ["PER", "PERSON"]

# Report detections instead of emitting masked text
dry_run = false

[logging]
# JSON log files in addition to stderr output
local_enabled = false
local_path = "./logs"

# Log rotation (daily, hourly, never)
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_generated_config_is_valid() {
        let config = parse_config(&InitArgs::generate_config()).unwrap();
        assert_eq!(config.limits.max_payload_bytes, 51_200);
        assert_eq!(config.anonymization.person_labels, vec!["PER", "PERSON"]);
    }

    #[tokio::test]
    async fn test_init_refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("anonymizer.toml");
        tokio::fs::write(&output, "keep me").await.unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            force: false,
        };
        assert_eq!(args.execute().await.unwrap(), 2);
        assert_eq!(tokio::fs::read_to_string(&output).await.unwrap(), "keep me");

        let args = InitArgs {
            force: true,
            ..args
        };
        assert_eq!(args.execute().await.unwrap(), 0);
        let written = tokio::fs::read_to_string(&output).await.unwrap();
        assert!(written.contains("[anonymization]"));
    }
}

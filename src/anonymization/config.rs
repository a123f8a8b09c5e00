//! Anonymization configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings of the anonymization core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizationConfig {
    /// Region hint handed to the phone provider (ISO 3166 alpha-2)
    #[serde(default = "default_region")]
    pub region: String,

    /// Entity provider labels treated as person names
    #[serde(default = "default_person_labels")]
    pub person_labels: Vec<String>,

    /// Report detections instead of emitting masked text
    #[serde(default)]
    pub dry_run: bool,
}

fn default_region() -> String {
    "FR".to_string()
}

fn default_person_labels() -> Vec<String> {
    vec!["PER".to_string(), "PERSON".to_string()]
}

impl Default for AnonymizationConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            person_labels: default_person_labels(),
            dry_run: false,
        }
    }
}

impl AnonymizationConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.region.len() != 2 || !self.region.bytes().all(|b| b.is_ascii_alphabetic()) {
            anyhow::bail!(
                "Invalid region '{}': expected a two-letter country code",
                self.region
            );
        }

        if self.person_labels.is_empty() {
            anyhow::bail!("person_labels must contain at least one label");
        }
        if self.person_labels.iter().any(|label| label.trim().is_empty()) {
            anyhow::bail!("person_labels must not contain empty labels");
        }

        Ok(())
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("ANONYMIZER_ANONYMIZATION_REGION") {
            self.region = val.to_uppercase();
        }

        if let Ok(val) = std::env::var("ANONYMIZER_ANONYMIZATION_PERSON_LABELS") {
            self.person_labels = val
                .split(',')
                .map(|label| label.trim().to_string())
                .filter(|label| !label.is_empty())
                .collect();
        }

        if let Ok(val) = std::env::var("ANONYMIZER_ANONYMIZATION_DRY_RUN") {
            self.dry_run = val
                .parse()
                .context("Invalid ANONYMIZER_ANONYMIZATION_DRY_RUN value")?;
        }

        Ok(())
    }
}

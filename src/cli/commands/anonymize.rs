//! Anonymize command implementation
//!
//! This module implements the `anonymize` command, which masks a single text
//! read from a file or stdin.

use super::{read_input, write_output, AnonymizeResponse};
use crate::anonymization::{AnonymizationEngine, BatchReport};
use crate::config::{load_or_default, AnonymizerConfig};
use crate::domain::{AnonymizerError, Result};
use crate::log_error_with_context;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Input file (stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit `{"anonymized_text": ...}` instead of raw text
    #[arg(long)]
    pub json: bool,

    /// Report detections instead of emitting masked text
    #[arg(long)]
    pub dry_run: bool,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub async fn execute(&self, config_path: Option<&str>) -> anyhow::Result<i32> {
        let mut config = match load_or_default(config_path) {
            Ok(config) => config,
            Err(e) => {
                log_error_with_context!(e, "Failed to load configuration");
                eprintln!("❌ {e}");
                return Ok(e.exit_code());
            }
        };
        if self.dry_run {
            config.anonymization.dry_run = true;
        }

        match self.run(config).await {
            Ok(()) => Ok(0),
            Err(e) => {
                log_error_with_context!(e, "Anonymization failed");
                eprintln!("❌ {e}");
                Ok(e.exit_code())
            }
        }
    }

    async fn run(&self, config: AnonymizerConfig) -> Result<()> {
        let text = read_input(self.input.as_deref()).await?;
        let rendered = self.render(config, text).await?;
        write_output(self.output.as_deref(), &rendered).await
    }

    /// Anonymize `text` and render the command output
    async fn render(&self, config: AnonymizerConfig, text: String) -> Result<String> {
        config.limits.check_single(&text)?;

        let engine = AnonymizationEngine::new(config.anonymization)
            .map_err(|e| AnonymizerError::Configuration(format!("{e:#}")))?;
        let dry_run = engine.is_dry_run();

        let (result, report) = tokio::task::spawn_blocking(move || {
            let start = Instant::now();
            let result = engine.anonymize_detailed(&text);
            let report = BatchReport::from_results(
                std::slice::from_ref(&result),
                start.elapsed().as_millis() as u64,
            );
            (result, report)
        })
        .await
        .map_err(|e| AnonymizerError::Other(format!("Anonymization task failed: {e}")))?;

        tracing::info!(
            detections = result.total_detections(),
            person_degraded = result.person_degraded,
            "Text anonymized"
        );

        if dry_run {
            return if self.json {
                Ok(report.format_json()?)
            } else {
                Ok(report.format_console())
            };
        }

        if self.json {
            let response = AnonymizeResponse {
                anonymized_text: result.text,
            };
            Ok(serde_json::to_string_pretty(&response)?)
        } else {
            Ok(result.text)
        }
    }
}

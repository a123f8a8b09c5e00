//! Batch command implementation
//!
//! Reads `{"texts": [..]}` and writes `{"anonymized_text": [..]}` with one
//! entry per input text, in input order.

use super::{read_input, write_output, BatchRequest, BatchResponse};
use crate::anonymization::{AnonymizationEngine, BatchReport};
use crate::config::{load_or_default, AnonymizerConfig};
use crate::domain::{AnonymizerError, Result};
use crate::log_error_with_context;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// JSON input file (stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit a detection report instead of masked texts
    #[arg(long)]
    pub dry_run: bool,

    /// Print the detection report to stderr after the batch
    #[arg(long)]
    pub report: bool,
}

impl BatchArgs {
    /// Execute the batch command
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
                log_error_with_context!(e, "Batch failed");
                eprintln!("❌ {e}");
                Ok(e.exit_code())
            }
        }
    }

    async fn run(&self, config: AnonymizerConfig) -> Result<()> {
        let raw = read_input(self.input.as_deref()).await?;
        let rendered = self.render(config, &raw).await?;
        write_output(self.output.as_deref(), &rendered).await
    }

    /// Parse the request, anonymize it and render the command output
    async fn render(&self, config: AnonymizerConfig, raw: &str) -> Result<String> {
        let request: BatchRequest = serde_json::from_str(raw)
            .map_err(|e| AnonymizerError::Validation(format!("Invalid batch request: {e}")))?;
        config.limits.check_batch(&request.texts)?;

        let engine = AnonymizationEngine::new(config.anonymization)
            .map_err(|e| AnonymizerError::Configuration(format!("{e:#}")))?;
        let dry_run = engine.is_dry_run();

        let texts = request.texts;
        let (results, report) =
            tokio::task::spawn_blocking(move || engine.anonymize_batch_with_report(&texts))
                .await
                .map_err(|e| AnonymizerError::Other(format!("Anonymization task failed: {e}")))?;

        tracing::info!(
            documents = report.total_documents,
            documents_with_pii = report.documents_with_pii,
            detections = report.total_detections,
            degraded = report.degraded_documents.len(),
            duration_ms = report.processing_time_ms,
            "Batch processed"
        );

        if let Some(summary) = self.console_report(&report) {
            eprint!("{summary}");
        }
        if dry_run {
            return Ok(report.format_json()?);
        }

        let response = BatchResponse {
            anonymized_text: results.into_iter().map(|result| result.text).collect(),
        };
        Ok(serde_json::to_string_pretty(&response)?)
    }

    /// Console summary printed to stderr with `--report`, in dry-run mode too
    fn console_report(&self, report: &BatchReport) -> Option<String> {
        self.report.then(|| report.format_console())
    }
}

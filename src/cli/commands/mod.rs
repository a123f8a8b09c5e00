//! CLI command implementations
//!
//! Anonymized payloads go to stdout or to the `--output` file. Progress and
//! error messages go to stderr.

pub mod anonymize;
pub mod batch;
pub mod init;
pub mod validate;

use crate::domain::{AnonymizerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};

/// JSON output of the `anonymize` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonymizeResponse {
    pub anonymized_text: String,
}

/// JSON input of the `batch` command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub texts: Vec<String>,
}

/// JSON output of the `batch` command, aligned with the request's `texts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub anonymized_text: Vec<String>,
}

/// Read the whole input file, or stdin when `path` is absent or `-`
pub(crate) async fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            tokio::fs::read_to_string(path).await.map_err(|e| {
                AnonymizerError::Io(format!("Failed to read input file {}: {e}", path.display()))
            })
        }
        _ => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            Ok(buffer)
        }
    }
}

/// Write to the output file, or stdout when `path` is absent
pub(crate) async fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => tokio::fs::write(path, content).await.map_err(|e| {
            AnonymizerError::Io(format!("Failed to write output file {}: {e}", path.display()))
        }),
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(content.as_bytes()).await?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n").await?;
            }
            stdout.flush().await?;
            Ok(())
        }
    }
}

//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Anonymizer - PII masking for French text
#[derive(Parser, Debug)]
#[command(name = "anonymizer")]
#[command(version, about, long_about = None)]
#[command(author = "Anonymizer Contributors")]
pub struct Cli {
    /// Path to configuration file (defaults to ./anonymizer.toml when present)
    #[arg(short, long, env = "ANONYMIZER_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ANONYMIZER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Anonymize a single text from a file or stdin
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Anonymize a JSON batch of texts
    Batch(commands::batch::BatchArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

// Anonymizer - PII masking for French text
// Copyright (c) 2025 Anonymizer Contributors
// Licensed under the MIT License

use anonymizer::cli::{Cli, Commands};
use anonymizer::config::{load_or_default, LoggingConfig};
use anonymizer::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the configuration when it loads; the command
    // itself reports configuration errors.
    let file_config = load_or_default(cli.config.as_deref()).ok();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| {
            file_config
                .as_ref()
                .map(|config| config.application.log_level.clone())
        })
        .unwrap_or_else(|| "info".to_string());
    let logging_config = file_config
        .map(|config| config.logging)
        .unwrap_or_else(LoggingConfig::default);

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(e.exit_code());
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Anonymizer starting");

    let exit_code = match execute_command(&cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5
        }
    };

    // Flush file logs before exiting
    drop(guard);
    process::exit(exit_code);
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    let config_path = cli.config.as_deref();
    match &cli.command {
        Commands::Anonymize(args) => args.execute(config_path).await,
        Commands::Batch(args) => args.execute(config_path).await,
        Commands::ValidateConfig(args) => args.execute(config_path).await,
        Commands::Init(args) => args.execute().await,
    }
}

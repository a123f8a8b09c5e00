// Anonymizer - PII masking for French text
// Copyright (c) 2025 Anonymizer Contributors
// Licensed under the MIT License

//! # Anonymizer - PII masking for French text
//!
//! Anonymizer detects personally identifiable information in free-form French
//! text and replaces every occurrence with a masked, mostly format-preserving
//! token, in a single linear pass over the text.
//!
//! ## Overview
//!
//! This library provides:
//! - **Detection** of addresses, IBAN/RIB, dates, passports, driving licenses,
//!   vehicle plates, payment cards, emails and national identification numbers
//!   with ordered regex rules and checksum validators
//! - **Provider boundaries** for phone numbers, person names and date parsing,
//!   with built-in defaults that need no external model
//! - **Resolution** of overlapping detections by position, then by rule priority
//! - **Batch processing** with per-document failure isolation
//!
//! ## Architecture
//!
//! - [`anonymization`] - Detection, masking and the anonymization engine
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration management
//! - [`domain`] - Error type and result alias
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust
//! use anonymizer::anonymization::{AnonymizationConfig, AnonymizationEngine};
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//!
//! let masked = engine.anonymize("Né le 12/03/1990, carte 4539 1488 0343 6467");
//! assert_eq!(masked, "Né le XX/XX/1990, carte ************6467");
//! # Ok(())
//! # }
//! ```
//!
//! ## Batches
//!
//! Output `i` of a batch equals the single-text result for input `i`. The
//! entity provider is called once per batch, and a provider failure for one
//! document only removes person detection from that document:
//!
//! ```rust
//! use anonymizer::anonymization::{AnonymizationConfig, AnonymizationEngine};
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let (results, report) = engine.anonymize_batch_with_report(&["jo@x.com", "rien"]);
//!
//! assert_eq!(results[0].text, "**@x.com");
//! assert_eq!(report.documents_with_pii, 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Anonymization itself never fails: provider errors degrade coverage and
//! are logged. The surrounding layers use [`domain::AnonymizerError`]:
//!
//! ```rust,no_run
//! use anonymizer::domain::AnonymizerError;
//!
//! fn example() -> Result<(), AnonymizerError> {
//!     let config = anonymizer::config::load_config("anonymizer.toml")?;
//!     config.limits.check_single("Bonjour")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Logging uses the `tracing` crate. Log records carry counts, kinds and
//! offsets, never document text.

pub mod anonymization;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;

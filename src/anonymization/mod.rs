//! PII anonymization for French free-form text
//!
//! This module detects personally identifiable information in text and
//! replaces every occurrence with a masked, mostly format-preserving token.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Detection**: ordered regex rules with checksum gates ([`detector`])
//! - **Providers**: phone, named-entity and date collaborators ([`providers`])
//! - **Collection**: one unordered candidate list per document ([`collector`])
//! - **Resolution**: position-first overlap policy and single-pass rewrite ([`resolver`])
//! - **Masking**: one transform per entity kind ([`anonymizer`])
//!
//! # Usage
//!
//! ```
//! use anonymizer::anonymization::{AnonymizationConfig, AnonymizationEngine};
//!
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let masked = engine.anonymize("Plaque AB-123-CD, tel 06 12 34 56 78");
//! assert_eq!(masked, "Plaque IMMATRICULATION, tel XXXXXXXX78");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod anonymizer;
pub mod collector;
pub mod config;
pub mod detector;
pub mod engine;
pub mod models;
pub mod providers;
pub mod report;
pub mod resolver;
pub mod validation;

// Re-export main types
pub use config::AnonymizationConfig;
pub use engine::{AnonymizationEngine, EngineBuilder};
pub use models::{AnonymizedText, Detection, EntityKind};
pub use providers::{
    DateNormalizer, EntityMention, EntitySpanProvider, PhoneSpanProvider, ProviderError,
};
pub use report::BatchReport;

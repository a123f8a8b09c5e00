//! Main anonymization engine
//!
//! This module provides the [`AnonymizationEngine`] that turns free-form text
//! into masked text in a single linear pass.
//!
//! # Architecture
//!
//! For every document the engine:
//! - collects candidate spans from the pattern rules, the phone provider and
//!   the entity provider ([`SpanCollector`])
//! - keeps the first span by position, ties going to the higher-priority rule
//! - rebuilds the text once with every accepted replacement
//!
//! # Examples
//!
//! ```
//! use anonymizer::anonymization::{AnonymizationConfig, AnonymizationEngine};
//!
//! let engine = AnonymizationEngine::new(AnonymizationConfig::default())?;
//! let masked = engine.anonymize("Écrire à john.doe@example.com");
//! assert_eq!(masked, "Écrire à j******e@example.com");
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::anonymization::{
    collector::SpanCollector,
    config::AnonymizationConfig,
    detector::{patterns::PatternRegistry, regex::RegexDetector},
    models::{AnonymizedText, TextIndex},
    providers::{
        DateNormalizer, EntityMention, EntitySpanProvider, LenientDateNormalizer,
        LibPhoneNumberProvider, NoopEntityProvider, PhoneSpanProvider, ProviderError,
    },
    report::BatchReport,
    resolver::apply_spans,
};
use crate::{log_batch_complete, log_batch_start};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Instant;

/// Builder for [`AnonymizationEngine`]
///
/// Providers that are not set fall back to the built-in ones: the regex phone
/// matcher, the lenient date parser and an entity provider that finds nothing.
pub struct EngineBuilder {
    config: AnonymizationConfig,
    registry: Option<Arc<PatternRegistry>>,
    phones: Option<Arc<dyn PhoneSpanProvider>>,
    entities: Option<Arc<dyn EntitySpanProvider>>,
    dates: Option<Arc<dyn DateNormalizer>>,
}

impl EngineBuilder {
    pub fn new(config: AnonymizationConfig) -> Self {
        Self {
            config,
            registry: None,
            phones: None,
            entities: None,
            dates: None,
        }
    }

    /// Share an already compiled registry
    pub fn registry(mut self, registry: Arc<PatternRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn phone_provider(mut self, provider: Arc<dyn PhoneSpanProvider>) -> Self {
        self.phones = Some(provider);
        self
    }

    pub fn entity_provider(mut self, provider: Arc<dyn EntitySpanProvider>) -> Self {
        self.entities = Some(provider);
        self
    }

    pub fn date_normalizer(mut self, normalizer: Arc<dyn DateNormalizer>) -> Self {
        self.dates = Some(normalizer);
        self
    }

    /// Validate the configuration and assemble the engine
    pub fn build(self) -> Result<AnonymizationEngine> {
        self.config
            .validate()
            .context("Invalid anonymization configuration")?;

        let registry = match self.registry {
            Some(registry) => registry,
            None => Arc::new(PatternRegistry::french().context("Failed to compile PII rules")?),
        };
        let phones: Arc<dyn PhoneSpanProvider> = match self.phones {
            Some(phones) => phones,
            None => Arc::new(LibPhoneNumberProvider::new()?),
        };
        let entities: Arc<dyn EntitySpanProvider> = match self.entities {
            Some(entities) => entities,
            None => Arc::new(NoopEntityProvider),
        };
        let dates: Arc<dyn DateNormalizer> = match self.dates {
            Some(dates) => dates,
            None => Arc::new(LenientDateNormalizer),
        };

        let rule_count = registry.len();
        let detector = Arc::new(RegexDetector::new(registry.clone(), dates.clone()));
        let collector = SpanCollector::new(
            detector,
            phones,
            dates,
            self.config.region.clone(),
            self.config.person_labels.clone(),
            rule_count,
        );

        tracing::debug!(
            rules = rule_count,
            region = %self.config.region,
            "Anonymization engine ready"
        );

        Ok(AnonymizationEngine {
            config: self.config,
            registry,
            entities,
            collector,
        })
    }
}

/// Main anonymization engine
///
/// # Thread Safety
///
/// The engine holds no mutable state. It can be shared between threads and
/// tasks behind an `Arc`, and concurrent calls on independent texts need no
/// locking.
///
/// # Failure policy
///
/// Anonymization never fails. A provider error removes that provider's
/// contribution for the affected document only; the document still receives
/// every other replacement. In a batch, an entity provider failure for one
/// document never affects its siblings.
pub struct AnonymizationEngine {
    config: AnonymizationConfig,
    registry: Arc<PatternRegistry>,
    entities: Arc<dyn EntitySpanProvider>,
    collector: SpanCollector,
}

impl AnonymizationEngine {
    /// Create an engine with the built-in providers
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a pattern fails to
    /// compile.
    pub fn new(config: AnonymizationConfig) -> Result<Self> {
        EngineBuilder::new(config).build()
    }

    /// Start building an engine with custom providers
    pub fn builder(config: AnonymizationConfig) -> EngineBuilder {
        EngineBuilder::new(config)
    }

    /// Anonymize a single text
    pub fn anonymize(&self, text: &str) -> String {
        self.anonymize_detailed(text).text
    }

    /// Anonymize a single text, keeping the list of applied replacements
    pub fn anonymize_detailed(&self, text: &str) -> AnonymizedText {
        if text.is_empty() {
            return AnonymizedText::new(String::new(), &[], false);
        }
        let entities = self.entities.find_entities(text);
        self.process(text, entities, 0)
    }

    /// Anonymize a batch of texts
    ///
    /// Output `i` equals `anonymize(texts[i])` given the same provider output.
    /// The entity provider is called once for the whole batch.
    pub fn anonymize_many<S: AsRef<str>>(&self, texts: &[S]) -> Vec<String> {
        self.anonymize_many_detailed(texts)
            .into_iter()
            .map(|result| result.text)
            .collect()
    }

    /// Anonymize a batch of texts, keeping the applied replacements
    pub fn anonymize_many_detailed<S: AsRef<str>>(&self, texts: &[S]) -> Vec<AnonymizedText> {
        let texts: Vec<&str> = texts.iter().map(AsRef::as_ref).collect();
        if texts.is_empty() {
            return Vec::new();
        }

        let start = Instant::now();
        log_batch_start!(texts.len());

        let mut entity_results = self.entities.find_entities_batch(&texts).into_iter();
        let received = entity_results.len();
        if received != texts.len() {
            tracing::warn!(
                expected = texts.len(),
                received,
                "Entity provider returned a mismatched batch"
            );
        }

        let results: Vec<AnonymizedText> = texts
            .iter()
            .enumerate()
            .map(|(document, text)| {
                let entities = entity_results.next().unwrap_or_else(|| {
                    Err(ProviderError::Entity("no result for document".to_string()))
                });
                if text.is_empty() {
                    return AnonymizedText::new(String::new(), &[], false);
                }
                self.process(text, entities, document)
            })
            .collect();

        let detections: usize = results.iter().map(AnonymizedText::total_detections).sum();
        log_batch_complete!(results.len(), detections, start.elapsed());

        results
    }

    /// Anonymize a batch and build its report
    pub fn anonymize_batch_with_report<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> (Vec<AnonymizedText>, BatchReport) {
        let start = Instant::now();
        let results = self.anonymize_many_detailed(texts);
        let report = BatchReport::from_results(&results, start.elapsed().as_millis() as u64);
        (results, report)
    }

    fn process(
        &self,
        text: &str,
        entities: Result<Vec<EntityMention>, ProviderError>,
        document: usize,
    ) -> AnonymizedText {
        let index = TextIndex::new(text);
        let collected = self.collector.collect(&index, entities, document);
        let candidates = collected.spans.len();
        let (masked, accepted) = apply_spans(&index, collected.spans);

        tracing::debug!(
            document,
            chars = index.char_len(),
            candidates,
            applied = accepted.len(),
            "Document anonymized"
        );

        AnonymizedText::new(masked, &accepted, collected.person_degraded)
    }

    /// Rules used by this engine, in priority order
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Engine configuration
    pub fn config(&self) -> &AnonymizationConfig {
        &self.config
    }

    /// Check if in dry-run mode
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::models::EntityKind;

    struct FixedEntities(Vec<EntityMention>);

    impl EntitySpanProvider for FixedEntities {
        fn find_entities(&self, _text: &str) -> Result<Vec<EntityMention>, ProviderError> {
            Ok(self.0.clone())
        }
    }

    fn engine() -> AnonymizationEngine {
        AnonymizationEngine::new(AnonymizationConfig::default()).unwrap()
    }

    #[test]
    fn test_engine_creation() {
        let engine = AnonymizationEngine::new(AnonymizationConfig::default());
        assert!(engine.is_ok());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = AnonymizationConfig {
            region: String::new(),
            ..Default::default()
        };
        assert!(AnonymizationEngine::new(config).is_err());
    }

    #[test]
    fn test_engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnonymizationEngine>();
    }

    #[test]
    fn test_anonymize_single() {
        let masked = engine().anonymize("Carte 4539148803436467, tel 06 12 34 56 78.");
        assert_eq!(masked, "Carte ************6467, tel XXXXXXXX78.");
    }

    #[test]
    fn test_person_from_entity_provider() {
        let engine = AnonymizationEngine::builder(AnonymizationConfig::default())
            .entity_provider(Arc::new(FixedEntities(vec![
                EntityMention::new(8, 12, "PER"),
                EntityMention::new(0, 3, "MISC"),
            ])))
            .build()
            .unwrap();

        let result = engine.anonymize_detailed("Bonjour Jean Dupont");
        assert_eq!(result.text, "Bonjour J*** Dupont");
        assert_eq!(result.stats_by_kind.get(&EntityKind::Person), Some(&1));
    }

    #[test]
    fn test_empty_text() {
        let result = engine().anonymize_detailed("");
        assert_eq!(result.text, "");
        assert!(!result.has_detections());
    }

    #[test]
    fn test_batch_matches_single() {
        let engine = engine();
        let texts = ["mail: jo@x.com", "", "aucune donnée", "12/03/1990"];
        let batch = engine.anonymize_many(&texts);
        let single: Vec<String> = texts.iter().map(|t| engine.anonymize(t)).collect();
        assert_eq!(batch, single);
        assert_eq!(batch[0], "mail: **@x.com");
        assert_eq!(batch[3], "XX/XX/1990");
    }

    #[test]
    fn test_empty_batch() {
        let texts: Vec<String> = Vec::new();
        assert!(engine().anonymize_many(&texts).is_empty());
    }

    #[test]
    fn test_batch_report() {
        let (results, report) =
            engine().anonymize_batch_with_report(&["jo@x.com", "rien", "AB-123-CD"]);
        assert_eq!(results.len(), 3);
        assert_eq!(report.total_documents, 3);
        assert_eq!(report.documents_with_pii, 2);
        assert_eq!(report.detections_by_kind.get(&EntityKind::VehiclePlate), Some(&1));
    }
}

//! Candidate span collection
//!
//! Fans a document out to the pattern detector, the phone provider and the
//! entity provider results, producing one unordered list of candidate spans.
//! Provider spans rank after every pattern rule: phones first, then persons.

use crate::anonymization::anonymizer::mask_entity;
use crate::anonymization::detector::SpanDetector;
use crate::anonymization::models::{EntityKind, Span, TextIndex};
use crate::anonymization::providers::{
    DateNormalizer, EntityMention, PhoneSpanProvider, ProviderError,
};
use crate::log_provider_degraded;
use std::ops::Range;
use std::sync::Arc;

/// Candidate spans of one document
#[derive(Debug, Default)]
pub struct CollectedSpans {
    /// Unordered, possibly overlapping candidates
    pub spans: Vec<Span>,
    /// True when the entity provider failed for this document
    pub person_degraded: bool,
}

/// Gathers candidate spans from every detector for one document at a time
pub struct SpanCollector {
    detector: Arc<dyn SpanDetector>,
    phones: Arc<dyn PhoneSpanProvider>,
    dates: Arc<dyn DateNormalizer>,
    region: String,
    person_labels: Vec<String>,
    phone_priority: usize,
    person_priority: usize,
}

impl SpanCollector {
    /// Create a collector
    ///
    /// `rule_count` is the number of pattern rules; provider spans are ranked
    /// right after them.
    pub fn new(
        detector: Arc<dyn SpanDetector>,
        phones: Arc<dyn PhoneSpanProvider>,
        dates: Arc<dyn DateNormalizer>,
        region: impl Into<String>,
        person_labels: Vec<String>,
        rule_count: usize,
    ) -> Self {
        Self {
            detector,
            phones,
            dates,
            region: region.into(),
            person_labels,
            phone_priority: rule_count,
            person_priority: rule_count + 1,
        }
    }

    /// Collect all candidate spans of a document
    ///
    /// `entities` is this document's share of the entity provider output. A
    /// provider failure only empties the affected contribution.
    pub fn collect(
        &self,
        index: &TextIndex<'_>,
        entities: Result<Vec<EntityMention>, ProviderError>,
        document: usize,
    ) -> CollectedSpans {
        let mut spans = self.detector.detect(index);
        spans.extend(self.phone_spans(index, document));

        let person_degraded = match entities {
            Ok(mentions) => {
                spans.extend(self.person_spans(index, &mentions));
                false
            }
            Err(error) => {
                log_provider_degraded!("entity", document, error);
                true
            }
        };

        CollectedSpans {
            spans,
            person_degraded,
        }
    }

    fn phone_spans(&self, index: &TextIndex<'_>, document: usize) -> Vec<Span> {
        match self.phones.find_phone_spans(index.text(), &self.region) {
            Ok(ranges) => ranges
                .into_iter()
                .filter_map(|range| self.provider_span(index, range, EntityKind::Phone))
                .collect(),
            Err(error) => {
                log_provider_degraded!("phone", document, error);
                Vec::new()
            }
        }
    }

    fn person_spans(&self, index: &TextIndex<'_>, mentions: &[EntityMention]) -> Vec<Span> {
        mentions
            .iter()
            .filter(|mention| self.person_labels.iter().any(|label| *label == mention.label))
            .filter_map(|mention| {
                self.provider_span(index, mention.start..mention.end, EntityKind::Person)
            })
            .collect()
    }

    /// Build a span from a provider range, dropping ranges outside the text
    fn provider_span(
        &self,
        index: &TextIndex<'_>,
        range: Range<usize>,
        kind: EntityKind,
    ) -> Option<Span> {
        let Some(matched) = index.slice(range.clone()) else {
            tracing::debug!(
                kind = %kind,
                start = range.start,
                end = range.end,
                text_len = index.char_len(),
                "Dropping out-of-bounds provider span"
            );
            return None;
        };

        let priority = match kind {
            EntityKind::Person => self.person_priority,
            _ => self.phone_priority,
        };
        let replacement = mask_entity(kind, matched, self.dates.as_ref());
        Span::new(range.start, range.end, replacement, kind, priority)
    }
}

//! Regex-based PII detector

use super::{patterns::PatternRegistry, SpanDetector};
use crate::anonymization::anonymizer::mask_entity;
use crate::anonymization::models::{Span, TextIndex};
use crate::anonymization::providers::DateNormalizer;
use std::sync::Arc;

/// Runs every rule of a [`PatternRegistry`] over a document
pub struct RegexDetector {
    pattern_registry: Arc<PatternRegistry>,
    dates: Arc<dyn DateNormalizer>,
}

impl RegexDetector {
    /// Create a detector over a shared registry
    pub fn new(pattern_registry: Arc<PatternRegistry>, dates: Arc<dyn DateNormalizer>) -> Self {
        Self {
            pattern_registry,
            dates,
        }
    }

    /// Registry driving this detector
    pub fn registry(&self) -> &PatternRegistry {
        &self.pattern_registry
    }

    /// Drop trailing separators a greedy pattern may have swallowed
    fn trim_match(matched: &str) -> &str {
        matched.trim_end_matches(|c: char| c.is_whitespace() || c == '-')
    }
}

impl SpanDetector for RegexDetector {
    fn detect(&self, index: &TextIndex<'_>) -> Vec<Span> {
        let text = index.text();
        let mut spans = Vec::new();

        for (priority, rule) in self.pattern_registry.rules().iter().enumerate() {
            let before = spans.len();
            let mut rejected = 0usize;

            for m in rule.regex.find_iter(text) {
                let matched = Self::trim_match(m.as_str());
                if matched.is_empty() {
                    continue;
                }
                if !rule.accepts(matched) {
                    rejected += 1;
                    continue;
                }

                let Some(range) = index.char_range(m.start()..m.start() + matched.len()) else {
                    continue;
                };
                let replacement = mask_entity(rule.kind, matched, self.dates.as_ref());
                if let Some(span) =
                    Span::new(range.start, range.end, replacement, rule.kind, priority)
                {
                    spans.push(span);
                }
            }

            let accepted = spans.len() - before;
            if accepted > 0 || rejected > 0 {
                tracing::trace!(
                    kind = %rule.kind,
                    priority,
                    accepted,
                    rejected,
                    "Rule evaluated"
                );
            }
        }

        spans
    }
}

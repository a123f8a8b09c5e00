//! External span providers
//!
//! Narrow interfaces to the collaborators the core does not implement itself:
//! a phone number matcher, a named-entity model and a free-text date parser.
//! Any conforming implementation can be plugged into the engine, including the
//! no-op ones used in tests.
//!
//! All offsets crossing these interfaces are char offsets (see
//! [`TextIndex`](crate::anonymization::models::TextIndex)).

pub mod date;
pub mod phone;

pub use date::LenientDateNormalizer;
pub use phone::LibPhoneNumberProvider;

use std::ops::Range;
use thiserror::Error;

/// Failure reported by an external provider
///
/// Messages must not embed document content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Phone provider failure
    #[error("Phone provider error: {0}")]
    Phone(String),

    /// Entity provider failure
    #[error("Entity provider error: {0}")]
    Entity(String),

    /// Date could not be parsed
    #[error("Unparseable date: {0}")]
    Date(String),

    /// Region hint not supported by the provider
    #[error("Unsupported region: {0}")]
    UnsupportedRegion(String),
}

/// Produces the char ranges of possible phone numbers in a text
pub trait PhoneSpanProvider: Send + Sync {
    /// Find phone numbers for the given region hint (e.g. `"FR"`)
    ///
    /// Every returned range must already be confirmed as a possible number for
    /// the region. Ordering is not required.
    fn find_phone_spans(&self, text: &str, region: &str)
        -> Result<Vec<Range<usize>>, ProviderError>;
}

/// Named entity reported by an entity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityMention {
    /// Start char offset
    pub start: usize,
    /// End char offset (exclusive)
    pub end: usize,
    /// Model label (e.g. `PER`, `LOC`)
    pub label: String,
}

impl EntityMention {
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }
}

/// Produces named-entity mentions, typically from an NER model
pub trait EntitySpanProvider: Send + Sync {
    /// Entity mentions for a single text
    fn find_entities(&self, text: &str) -> Result<Vec<EntityMention>, ProviderError>;

    /// Entity mentions for a batch of texts, one result per text in input order
    ///
    /// Model-backed providers should override this to run a single batched
    /// inference. The default calls [`find_entities`](Self::find_entities) per
    /// text.
    fn find_entities_batch(
        &self,
        texts: &[&str],
    ) -> Vec<Result<Vec<EntityMention>, ProviderError>> {
        texts.iter().map(|text| self.find_entities(text)).collect()
    }
}

/// Extracts the year of a date-like substring
pub trait DateNormalizer: Send + Sync {
    /// Parse `text` leniently and return its year
    ///
    /// `day_first` tells the parser that the day precedes the month in
    /// ambiguous numeric dates.
    fn parse_year(&self, text: &str, day_first: bool) -> Result<i32, ProviderError>;
}

/// Entity provider that never reports anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEntityProvider;

impl EntitySpanProvider for NoopEntityProvider {
    fn find_entities(&self, _text: &str) -> Result<Vec<EntityMention>, ProviderError> {
        Ok(Vec::new())
    }
}

/// Phone provider that never reports anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPhoneProvider;

impl PhoneSpanProvider for NoopPhoneProvider {
    fn find_phone_spans(
        &self,
        _text: &str,
        _region: &str,
    ) -> Result<Vec<Range<usize>>, ProviderError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoProvider;

    impl EntitySpanProvider for EchoProvider {
        fn find_entities(&self, text: &str) -> Result<Vec<EntityMention>, ProviderError> {
            if text.is_empty() {
                return Err(ProviderError::Entity("empty document".into()));
            }
            Ok(vec![EntityMention::new(0, 1, "PER")])
        }
    }

    #[test]
    fn test_default_batch_preserves_order_and_failures() {
        let results = EchoProvider.find_entities_batch(&["a", "", "b"]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_noop_providers() {
        assert!(NoopEntityProvider.find_entities("Jean").unwrap().is_empty());
        assert!(NoopPhoneProvider
            .find_phone_spans("06 12 34 56 78", "FR")
            .unwrap()
            .is_empty());
    }
}

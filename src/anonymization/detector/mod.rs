//! PII detection module
//!
//! Provides the trait-based detection interface and the pattern-based
//! implementation driven by the ordered [`patterns::PatternRegistry`].

pub mod patterns;
pub mod regex;

use crate::anonymization::models::{Span, TextIndex};

/// Trait for span detection implementations
pub trait SpanDetector: Send + Sync {
    /// Detect candidate spans in a document
    ///
    /// Returned spans are unordered, may overlap, and already carry their
    /// replacement text and priority.
    fn detect(&self, index: &TextIndex<'_>) -> Vec<Span>;
}

//! Entity kinds and detection spans

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Kind of personally identifiable information a span stands for
///
/// The set is closed: every kind maps to exactly one masking transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityKind {
    /// Postal address (house number, street, postal code, locality)
    Address,
    /// French IBAN
    Iban,
    /// Domestic bank account number (RIB)
    Rib,
    /// Day/month/year date with slash separators
    DateNumeric,
    /// Day + French month name + year
    DateAlpha,
    /// French passport number
    Passport,
    /// French driving license number
    DrivingLicense,
    /// French vehicle registration plate
    VehiclePlate,
    /// Payment card number
    Card,
    /// Email address
    Email,
    /// French national identification number (NIR)
    NationalId,
    /// Telephone number (phone provider)
    Phone,
    /// Person name (entity provider)
    Person,
}

impl EntityKind {
    /// Stable label used in reports and structured logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::Address => "ADDRESS",
            Self::Iban => "IBAN",
            Self::Rib => "RIB",
            Self::DateNumeric => "DATE_NUMERIC",
            Self::DateAlpha => "DATE_ALPHA",
            Self::Passport => "PASSPORT",
            Self::DrivingLicense => "DRIVING_LICENSE",
            Self::VehiclePlate => "VEHICLE_PLATE",
            Self::Card => "CARD",
            Self::Email => "EMAIL",
            Self::NationalId => "NATIONAL_ID",
            Self::Phone => "PHONE",
            Self::Person => "PERSON",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Candidate replacement over a half-open `[start, end)` char range
///
/// Offsets are Unicode scalar value offsets into the document. `priority` is
/// the rank of the producing detector: lower wins when two spans share a start.
/// Spans are immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    start: usize,
    end: usize,
    replacement: String,
    kind: EntityKind,
    priority: usize,
}

impl Span {
    /// Create a span, returning `None` when `start >= end`
    pub fn new(
        start: usize,
        end: usize,
        replacement: String,
        kind: EntityKind,
        priority: usize,
    ) -> Option<Self> {
        if start >= end {
            return None;
        }
        Some(Self {
            start,
            end,
            replacement,
            kind,
            priority,
        })
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn priority(&self) -> usize {
        self.priority
    }
}

/// Location and kind of an applied replacement, without any original content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    /// Entity kind
    pub kind: EntityKind,
    /// Start char offset in the original text
    pub start: usize,
    /// End char offset (exclusive) in the original text
    pub end: usize,
}

impl From<&Span> for Detection {
    fn from(span: &Span) -> Self {
        Self {
            kind: span.kind,
            start: span.start,
            end: span.end,
        }
    }
}

/// Result of anonymizing one document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizedText {
    /// Masked text
    pub text: String,
    /// Replacements that were applied, in text order
    pub detections: Vec<Detection>,
    /// Applied replacements per kind
    pub stats_by_kind: HashMap<EntityKind, usize>,
    /// True when the entity provider failed for this document
    pub person_degraded: bool,
}

impl AnonymizedText {
    /// Build a result from the masked text and the accepted spans
    pub fn new(text: String, accepted: &[Span], person_degraded: bool) -> Self {
        let detections: Vec<Detection> = accepted.iter().map(Detection::from).collect();
        let mut stats_by_kind = HashMap::new();
        for detection in &detections {
            *stats_by_kind.entry(detection.kind).or_insert(0) += 1;
        }

        Self {
            text,
            detections,
            stats_by_kind,
            person_degraded,
        }
    }

    /// Total number of applied replacements
    pub fn total_detections(&self) -> usize {
        self.detections.len()
    }

    /// Check if any PII was replaced
    pub fn has_detections(&self) -> bool {
        !self.detections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_rejects_empty_range() {
        assert!(Span::new(3, 3, "x".into(), EntityKind::Email, 0).is_none());
        assert!(Span::new(4, 3, "x".into(), EntityKind::Email, 0).is_none());
        assert!(Span::new(3, 4, "x".into(), EntityKind::Email, 0).is_some());
    }

    #[test]
    fn test_anonymized_text_stats() {
        let spans = vec![
            Span::new(0, 4, "a".into(), EntityKind::Email, 9).unwrap(),
            Span::new(5, 9, "b".into(), EntityKind::Email, 9).unwrap(),
            Span::new(10, 12, "c".into(), EntityKind::Phone, 11).unwrap(),
        ];
        let result = AnonymizedText::new("masked".into(), &spans, false);

        assert_eq!(result.total_detections(), 3);
        assert_eq!(result.stats_by_kind[&EntityKind::Email], 2);
        assert_eq!(result.stats_by_kind[&EntityKind::Phone], 1);
        assert_eq!(result.detections[2].start, 10);
    }

    #[test]
    fn test_kind_serializes_as_label() {
        let json = serde_json::to_string(&EntityKind::NationalId).unwrap();
        assert_eq!(json, "\"NATIONAL_ID\"");
        assert_eq!(EntityKind::VehiclePlate.to_string(), "VEHICLE_PLATE");
    }
}

//! Ordered detector rule registry
//!
//! The position of a rule in the registry is its priority: when two candidate
//! spans start at the same offset, the one produced by the earlier rule is kept.
//! Structural patterns (address, IBAN) come before narrower digit-run patterns
//! so a coincidental digit run never shadows a more specific identifier.

use crate::anonymization::models::EntityKind;
use crate::anonymization::validation::{is_valid_iban, is_valid_luhn, is_valid_nir};
use anyhow::{Context, Result};
use regex::Regex;

/// Checksum gate applied to a pattern match
pub type Validator = fn(&str) -> bool;

/// Rule descriptor: kind, pattern source and optional validator
struct RuleSpec {
    kind: EntityKind,
    pattern: &'static str,
    validator: Option<Validator>,
}

const MONTHS_FR: &str =
    "janvier|février|mars|avril|mai|juin|juillet|août|septembre|octobre|novembre|décembre";

/// French detector rules in priority order
fn french_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec {
            kind: EntityKind::Address,
            pattern: r"(?i)\b[0-9]{1,4}\s+[^,\n]{2,80},?\s+[0-9]{5}\s+[A-ZÉÈÀÂÊÎÔÛÇ][a-zà-ÿ\-\s]{2,50}\b",
            validator: None,
        },
        RuleSpec {
            kind: EntityKind::Iban,
            pattern: r"\bFR[0-9]{2}(?:\s?[0-9A-Za-z]{4}){5}\s?[0-9A-Za-z]{3}\b",
            validator: Some(is_valid_iban),
        },
        RuleSpec {
            kind: EntityKind::Rib,
            pattern: r"\b[0-9]{5}\s?[0-9]{5}\s?[0-9]{11}\s?[0-9]{2}\b",
            validator: None,
        },
        RuleSpec {
            kind: EntityKind::DateNumeric,
            pattern: r"\b[0-9]{1,2}/[0-9]{1,2}/[0-9]{4}\b",
            validator: None,
        },
        RuleSpec {
            kind: EntityKind::DateAlpha,
            // Month alternation is spliced in by `compile`
            pattern: r"(?i)\b[0-9]{1,2} (?:{months}) [0-9]{4}\b",
            validator: None,
        },
        RuleSpec {
            kind: EntityKind::Passport,
            pattern: r"(?i)\b[0-9]{2}[A-Z]{2}[0-9]{5}\b",
            validator: None,
        },
        RuleSpec {
            kind: EntityKind::DrivingLicense,
            pattern: r"\b[0-9]{12}\b",
            validator: None,
        },
        RuleSpec {
            kind: EntityKind::VehiclePlate,
            pattern: r"(?i)\b[A-Z]{2}-[0-9]{3}-[A-Z]{2}\b",
            validator: None,
        },
        RuleSpec {
            kind: EntityKind::Card,
            pattern: r"(?:[0-9][\s-]?){13,16}",
            validator: Some(is_valid_luhn),
        },
        RuleSpec {
            kind: EntityKind::Email,
            pattern: r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
            validator: None,
        },
        RuleSpec {
            kind: EntityKind::NationalId,
            pattern: r"\b[12][0-9]{2}[0-9]{2}[0-9]{2}[0-9]{3}[0-9]{3}[0-9]{2}\b",
            validator: Some(is_valid_nir),
        },
    ]
}

/// Compiled detector rule
#[derive(Debug, Clone)]
pub struct DetectorRule {
    /// Entity kind, which also selects the masking transform
    pub kind: EntityKind,
    /// Compiled pattern
    pub regex: Regex,
    /// Optional checksum gate
    pub validator: Option<Validator>,
}

impl DetectorRule {
    /// Whether a matched substring passes this rule's validator
    pub fn accepts(&self, matched: &str) -> bool {
        self.validator.map_or(true, |validate| validate(matched))
    }
}

/// Immutable, ordered set of detector rules
///
/// Built once and shared read-only between every anonymization call.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: Vec<DetectorRule>,
}

impl PatternRegistry {
    /// Registry with the French PII rules
    pub fn french() -> Result<Self> {
        let rules = french_rules()
            .into_iter()
            .map(Self::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    fn compile(spec: RuleSpec) -> Result<DetectorRule> {
        let source = spec.pattern.replace("{months}", MONTHS_FR);
        let regex = Regex::new(&source)
            .with_context(|| format!("Invalid regex for {} rule", spec.kind))?;
        Ok(DetectorRule {
            kind: spec.kind,
            regex,
            validator: spec.validator,
        })
    }

    /// All rules, highest priority first
    pub fn rules(&self) -> &[DetectorRule] {
        &self.rules
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Priority index of the rule for a kind (0 is highest)
    pub fn priority_of(&self, kind: EntityKind) -> Option<usize> {
        self.rules.iter().position(|rule| rule.kind == kind)
    }

    /// Rule for a kind
    pub fn rule_for(&self, kind: EntityKind) -> Option<&DetectorRule> {
        self.rules.iter().find(|rule| rule.kind == kind)
    }
}

//! Batch reporting
//!
//! Aggregated detection statistics for a batch of documents. Reports only
//! carry counts, kinds and document indices; never original or masked values.

use crate::anonymization::models::{AnonymizedText, EntityKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Detection statistics for a batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Total documents analyzed
    pub total_documents: usize,

    /// Documents with at least one replacement
    pub documents_with_pii: usize,

    /// Total replacements applied
    pub total_detections: usize,

    /// Replacements by kind
    pub detections_by_kind: BTreeMap<EntityKind, usize>,

    /// Indices of documents whose person detection degraded
    pub degraded_documents: Vec<usize>,

    /// Wall-clock time for the whole batch (ms)
    pub processing_time_ms: u64,
}

impl BatchReport {
    /// Create a new empty report
    pub fn new() -> Self {
        Self {
            total_documents: 0,
            documents_with_pii: 0,
            total_detections: 0,
            detections_by_kind: BTreeMap::new(),
            degraded_documents: Vec::new(),
            processing_time_ms: 0,
        }
    }

    /// Build a report from batch results
    pub fn from_results(results: &[AnonymizedText], processing_time_ms: u64) -> Self {
        let mut report = Self::new();
        for (document, result) in results.iter().enumerate() {
            report.add_document(document, result);
        }
        report.processing_time_ms = processing_time_ms;
        report
    }

    /// Add the result of one document
    pub fn add_document(&mut self, document: usize, result: &AnonymizedText) {
        self.total_documents += 1;

        if result.has_detections() {
            self.documents_with_pii += 1;
            self.total_detections += result.total_detections();
            for detection in &result.detections {
                *self.detections_by_kind.entry(detection.kind).or_insert(0) += 1;
            }
        }

        if result.person_degraded {
            self.degraded_documents.push(document);
        }
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                   ANONYMIZATION REPORT                        \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Documents Analyzed:          {}\n",
            self.total_documents
        ));
        output.push_str(&format!(
            "  Documents with PII:          {}\n",
            self.documents_with_pii
        ));
        output.push_str(&format!(
            "  Total Replacements:          {}\n",
            self.total_detections
        ));
        output.push_str(&format!(
            "  Processing Time:             {} ms\n",
            self.processing_time_ms
        ));
        output.push('\n');

        if !self.detections_by_kind.is_empty() {
            output.push_str("🔍 REPLACEMENTS BY KIND\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut kinds: Vec<_> = self.detections_by_kind.iter().collect();
            kinds.sort_by(|a, b| b.1.cmp(a.1));

            for (kind, count) in kinds {
                output.push_str(&format!("  {:30} {:>5}\n", kind.label(), count));
            }
            output.push('\n');
        }

        if !self.degraded_documents.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            output.push_str(&format!(
                "  • Person detection unavailable for documents {:?}\n",
                self.degraded_documents
            ));
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for BatchReport {
    fn default() -> Self {
        Self::new()
    }
}

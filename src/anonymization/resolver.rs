//! Overlap resolution and single-pass text reconstruction
//!
//! Candidates are sorted by start offset, ties going to the lower priority
//! index, then swept once with a cursor: a candidate starting before the
//! cursor overlaps an accepted span and is discarded. The longest match does
//! not win and spans are never merged.

use crate::anonymization::models::{Span, TextIndex};

/// Select the non-overlapping spans to apply, in text order
///
/// Spans ending past `text_len` (in chars) are dropped.
pub fn resolve_overlaps(mut spans: Vec<Span>, text_len: usize) -> Vec<Span> {
    let total = spans.len();
    spans.retain(|span| span.end() <= text_len);
    if spans.len() < total {
        tracing::debug!(
            dropped = total - spans.len(),
            text_len,
            "Dropped spans past end of text"
        );
    }

    // Stable sort keeps provider order for identical (start, priority) keys
    spans.sort_by_key(|span| (span.start(), span.priority()));

    let mut cursor = 0;
    let mut accepted = Vec::with_capacity(spans.len());
    for span in spans {
        if span.start() < cursor {
            continue;
        }
        cursor = span.end();
        accepted.push(span);
    }

    accepted
}

/// Rebuild the text with every accepted span replaced
///
/// `accepted` must be sorted and non-overlapping, as returned by
/// [`resolve_overlaps`]. Spans that cannot be mapped back onto the text are
/// skipped rather than read out of bounds.
pub fn reconstruct(index: &TextIndex<'_>, accepted: &[Span]) -> String {
    let text = index.text();
    if accepted.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for span in accepted {
        let (Some(start), Some(end)) = (
            index.char_to_byte(span.start()),
            index.char_to_byte(span.end()),
        ) else {
            continue;
        };
        if start < cursor {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push_str(span.replacement());
        cursor = end;
    }
    out.push_str(&text[cursor..]);

    out
}

/// Resolve overlaps and reconstruct in one call
///
/// Returns the masked text and the spans that were applied.
pub fn apply_spans(index: &TextIndex<'_>, spans: Vec<Span>) -> (String, Vec<Span>) {
    let accepted = resolve_overlaps(spans, index.char_len());
    let text = reconstruct(index, &accepted);
    (text, accepted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anonymization::models::EntityKind;

    fn span(start: usize, end: usize, replacement: &str, priority: usize) -> Span {
        Span::new(start, end, replacement.to_string(), EntityKind::Card, priority).unwrap()
    }

    #[test]
    fn test_first_starting_span_wins() {
        let spans = vec![span(5, 15, "B", 0), span(0, 10, "A", 5)];
        let accepted = resolve_overlaps(spans, 20);
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].replacement(), "A");
    }

    #[test]
    fn test_priority_breaks_ties_on_same_start() {
        let spans = vec![span(0, 4, "low", 8), span(0, 10, "high", 2)];
        let accepted = resolve_overlaps(spans, 20);
        assert_eq!(accepted.len(), 1);
        assert_eq!(accepted[0].replacement(), "high");
    }

    #[test]
    fn test_shorter_higher_priority_span_beats_longer() {
        let spans = vec![span(0, 12, "long", 9), span(0, 3, "short", 1)];
        let accepted = resolve_overlaps(spans, 20);
        assert_eq!(accepted[0].replacement(), "short");
        assert_eq!(accepted.len(), 1);
    }

    #[test]
    fn test_adjacent_spans_are_both_kept() {
        let spans = vec![span(4, 8, "B", 3), span(0, 4, "A", 3)];
        let accepted = resolve_overlaps(spans, 8);
        assert_eq!(accepted.len(), 2);
    }

    #[test]
    fn test_out_of_bounds_span_is_dropped() {
        let spans = vec![span(2, 30, "X", 0)];
        assert!(resolve_overlaps(spans, 10).is_empty());
    }

    #[test]
    fn test_reconstruct() {
        let index = TextIndex::new("abc 1234 def 5678");
        let (text, applied) =
            apply_spans(&index, vec![span(13, 17, "####", 0), span(4, 8, "****", 0)]);
        assert_eq!(text, "abc **** def ####");
        assert_eq!(applied.len(), 2);
    }

    #[test]
    fn test_reconstruct_with_multibyte_text() {
        let index = TextIndex::new("é 12 à");
        let (text, _) = apply_spans(&index, vec![span(2, 4, "XX", 0)]);
        assert_eq!(text, "é XX à");
    }

    #[test]
    fn test_no_spans_returns_text_unchanged() {
        let index = TextIndex::new("nothing here");
        assert_eq!(reconstruct(&index, &[]), "nothing here");
    }

    #[test]
    fn test_empty_text() {
        let index = TextIndex::new("");
        let (text, applied) = apply_spans(&index, Vec::new());
        assert_eq!(text, "");
        assert!(applied.is_empty());
    }
}

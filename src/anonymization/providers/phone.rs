//! Phone number provider backed by libphonenumber metadata

use super::{PhoneSpanProvider, ProviderError};
use crate::anonymization::models::TextIndex;
use anyhow::{Context, Result};
use phonenumber::country;
use regex::Regex;
use std::ops::Range;

/// Finds phone numbers in French national notation (`06 12 34 56 78`) and in
/// international notation with any country code (`+33 6 12 34 56 78`,
/// `+32 470 12 34 56`, `0041 79 ...`, `+33 (0)6 ...`)
///
/// The regex only proposes candidates. Each one is parsed with `FR` as the
/// default region and kept when the numbering plan of its country accepts it.
pub struct LibPhoneNumberProvider {
    candidates: Regex,
}

impl LibPhoneNumberProvider {
    pub fn new() -> Result<Self> {
        let candidates = Regex::new(concat!(
            r"0[1-9](?:[\s.\-]?\d{2}){4}",
            r"|(?:\+|00)[1-9]\d{0,2}(?:[\s.\-]?(?:\(0\)[\s.\-]?)?\d{1,4}){1,6}",
        ))
        .context("Invalid phone number pattern")?;
        Ok(Self { candidates })
    }

    /// A candidate must not be glued to other letters or digits
    fn is_isolated(text: &str, start: usize, end: usize) -> bool {
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    }

    /// Digits handed to the parser, with an explicit `+` for international
    /// candidates and the bracketed trunk prefix removed
    fn normalize(candidate: &str) -> String {
        let candidate = candidate.replace("(0)", "");
        let digits: String = candidate.chars().filter(char::is_ascii_digit).collect();
        if candidate.starts_with('+') {
            format!("+{digits}")
        } else if let Some(international) = digits.strip_prefix("00") {
            format!("+{international}")
        } else {
            digits
        }
    }

    fn is_phone_number(candidate: &str) -> bool {
        phonenumber::parse(Some(country::Id::FR), Self::normalize(candidate))
            .map(|number| phonenumber::is_valid(&number))
            .unwrap_or(false)
    }

    /// Byte length of the longest accepted number at the start of `candidate`
    ///
    /// Candidates are cut at digit group boundaries, so a year or a reference
    /// written right after a number does not hide the number itself.
    fn longest_number(candidate: &str) -> Option<usize> {
        let group_ends: Vec<usize> = candidate
            .char_indices()
            .filter(|&(i, c)| {
                c.is_ascii_digit() && !candidate[i + 1..].starts_with(|n: char| n.is_ascii_digit())
            })
            .map(|(i, _)| i + 1)
            .collect();

        group_ends
            .into_iter()
            .rev()
            .find(|&end| Self::is_phone_number(&candidate[..end]))
    }
}

impl PhoneSpanProvider for LibPhoneNumberProvider {
    fn find_phone_spans(
        &self,
        text: &str,
        region: &str,
    ) -> Result<Vec<Range<usize>>, ProviderError> {
        // National candidates follow the French numbering plan only
        if !region.eq_ignore_ascii_case("FR") {
            return Err(ProviderError::UnsupportedRegion(region.to_string()));
        }

        let index = TextIndex::new(text);
        let spans = self
            .candidates
            .find_iter(text)
            .filter_map(|m| {
                let end = m.start() + Self::longest_number(m.as_str())?;
                Self::is_isolated(text, m.start(), end).then_some(m.start()..end)
            })
            .filter_map(|range| index.char_range(range))
            .collect();

        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn provider() -> LibPhoneNumberProvider {
        LibPhoneNumberProvider::new().unwrap()
    }

    #[test_case("06 12 34 56 78" ; "spaced mobile")]
    #[test_case("0612345678" ; "compact mobile")]
    #[test_case("01.23.45.67.89" ; "dotted landline")]
    #[test_case("+33 6 12 34 56 78" ; "international")]
    #[test_case("+33612345678" ; "international compact")]
    #[test_case("0033 6 12 34 56 78" ; "double zero prefix")]
    #[test_case("+33 (0)6 12 34 56 78" ; "bracketed trunk prefix")]
    #[test_case("+32 470 12 34 56" ; "belgian mobile")]
    #[test_case("+41 79 123 45 67" ; "swiss mobile")]
    #[test_case("+44 20 7123 4567" ; "london landline")]
    #[test_case("0032 470 12 34 56" ; "belgian double zero prefix")]
    fn test_detects_whole_number(number: &str) {
        let text = format!("Tel: {number}.");
        let spans = provider().find_phone_spans(&text, "FR").unwrap();
        let expected_start = "Tel: ".chars().count();
        assert_eq!(spans, vec![expected_start..expected_start + number.chars().count()]);
    }

    #[test]
    fn test_trailing_digit_group_is_left_out() {
        let text = "Tel +32 470 12 34 56 2021";
        let spans = provider().find_phone_spans(text, "FR").unwrap();
        assert_eq!(spans, vec![4..20]);
    }

    #[test]
    fn test_char_offsets_after_multibyte_text() {
        let text = "Téléphone : 06 12 34 56 78";
        let spans = provider().find_phone_spans(text, "FR").unwrap();
        assert_eq!(spans, vec![12..26]);
    }

    #[test]
    fn test_rejects_numbers_inside_longer_digit_runs() {
        let spans = provider()
            .find_phone_spans("ref 1234061234567899", "FR")
            .unwrap();
        assert!(spans.is_empty());
    }

    #[test]
    fn test_rejects_short_numbers() {
        let spans = provider().find_phone_spans("code 06 12 34", "FR").unwrap();
        assert!(spans.is_empty());
    }

    #[test]
    fn test_unsupported_region() {
        let result = provider().find_phone_spans("06 12 34 56 78", "US");
        assert_eq!(result, Err(ProviderError::UnsupportedRegion("US".into())));
    }

    #[test]
    fn test_region_is_case_insensitive() {
        let spans = provider().find_phone_spans("0612345678", "fr").unwrap();
        assert_eq!(spans.len(), 1);
    }
}

//! Lenient date parsing for numeric and French alphabetic dates

use super::{DateNormalizer, ProviderError};
use chrono::NaiveDate;

/// French month names, accented and plain spellings, with their number
const FRENCH_MONTHS: &[(&str, u32)] = &[
    ("janvier", 1),
    ("janv", 1),
    ("février", 2),
    ("fevrier", 2),
    ("févr", 2),
    ("fevr", 2),
    ("mars", 3),
    ("avril", 4),
    ("avr", 4),
    ("mai", 5),
    ("juin", 6),
    ("juillet", 7),
    ("juil", 7),
    ("août", 8),
    ("aout", 8),
    ("septembre", 9),
    ("sept", 9),
    ("octobre", 10),
    ("oct", 10),
    ("novembre", 11),
    ("nov", 11),
    ("décembre", 12),
    ("decembre", 12),
    ("déc", 12),
    ("dec", 12),
];

/// Two-digit years below this pivot belong to the 2000s
const TWO_DIGIT_YEAR_PIVOT: i32 = 50;

/// Parses `12/03/1990`, `12-03-90`, `12.03.1990` and `12 mars 1990` style dates
///
/// Numeric dates are read day-first when asked to; if that reading is not a
/// real calendar date the month-first reading is tried before giving up.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientDateNormalizer;

impl LenientDateNormalizer {
    fn month_number(token: &str) -> Option<u32> {
        let lower = token.to_lowercase();
        let lower = lower.trim_end_matches('.');
        FRENCH_MONTHS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, number)| *number)
    }

    fn parse_year_token(token: &str) -> Option<i32> {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: i32 = token.parse().ok()?;
        match token.len() {
            4 => Some(value),
            2 if value < TWO_DIGIT_YEAR_PIVOT => Some(2000 + value),
            2 => Some(1900 + value),
            _ => None,
        }
    }

    fn parse_small(token: &str) -> Option<u32> {
        if token.is_empty() || token.len() > 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        token.parse().ok()
    }

    fn is_calendar_date(year: i32, month: u32, day: u32) -> bool {
        NaiveDate::from_ymd_opt(year, month, day).is_some()
    }
}

impl DateNormalizer for LenientDateNormalizer {
    fn parse_year(&self, text: &str, day_first: bool) -> Result<i32, ProviderError> {
        let tokens: Vec<&str> = text
            .split(|c: char| c.is_whitespace() || matches!(c, '/' | '-' | '.' | ','))
            .filter(|t| !t.is_empty())
            .collect();

        let [first, second, third] = tokens.as_slice() else {
            return Err(ProviderError::Date(format!(
                "expected 3 components, found {}",
                tokens.len()
            )));
        };

        let year = Self::parse_year_token(third)
            .ok_or_else(|| ProviderError::Date("invalid year component".into()))?;

        if let Some(month) = Self::month_number(second) {
            let day = Self::parse_small(first)
                .ok_or_else(|| ProviderError::Date("invalid day component".into()))?;
            if Self::is_calendar_date(year, month, day) {
                return Ok(year);
            }
            return Err(ProviderError::Date("day out of range for month".into()));
        }

        let (Some(a), Some(b)) = (Self::parse_small(first), Self::parse_small(second)) else {
            return Err(ProviderError::Date("unrecognised date layout".into()));
        };
        let (preferred, fallback) = if day_first {
            ((a, b), (b, a))
        } else {
            ((b, a), (a, b))
        };

        [preferred, fallback]
            .into_iter()
            .find(|&(day, month)| Self::is_calendar_date(year, month, day))
            .map(|_| year)
            .ok_or_else(|| ProviderError::Date("not a calendar date".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("12/03/1990", 1990 ; "numeric day first")]
    #[test_case("1/2/2024", 2024 ; "single digit components")]
    #[test_case("25/12/2020", 2020 ; "christmas")]
    #[test_case("12/25/2020", 2020 ; "month first fallback")]
    #[test_case("29/02/2024", 2024 ; "leap day")]
    #[test_case("12-03-90", 1990 ; "two digit year last century")]
    #[test_case("12.03.05", 2005 ; "two digit year this century")]
    #[test_case("12 mars 1990", 1990 ; "french month")]
    #[test_case("1 Août 2001", 2001 ; "accented capitalised month")]
    #[test_case("15 fevrier 1985", 1985 ; "unaccented month")]
    #[test_case("3 déc. 1999", 1999 ; "abbreviated month")]
    fn test_parses_year(text: &str, year: i32) {
        assert_eq!(LenientDateNormalizer.parse_year(text, true), Ok(year));
    }

    #[test_case("31/02/2020" ; "february 31st")]
    #[test_case("29/02/2023" ; "not a leap year")]
    #[test_case("40/40/2020" ; "nonsense components")]
    #[test_case("31 avril 2020" ; "april 31st")]
    #[test_case("12 foo 1990" ; "unknown month")]
    #[test_case("12/03" ; "missing year")]
    #[test_case("" ; "empty")]
    fn test_rejects(text: &str) {
        assert!(LenientDateNormalizer.parse_year(text, true).is_err());
    }

    #[test]
    fn test_month_first_hint() {
        // 02/03 is valid both ways; the hint only matters for the reading
        assert_eq!(LenientDateNormalizer.parse_year("02/03/2010", false), Ok(2010));
        assert_eq!(LenientDateNormalizer.parse_year("13/01/2010", false), Ok(2010));
    }

    #[test]
    fn test_error_does_not_echo_input() {
        let err = LenientDateNormalizer
            .parse_year("31/02/2020", true)
            .unwrap_err();
        assert!(!err.to_string().contains("2020"));
    }
}

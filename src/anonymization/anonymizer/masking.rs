//! Masking transforms, one per entity kind

use crate::anonymization::providers::DateNormalizer;
use crate::anonymization::validation::strip_separators;

/// Replacement for a postal address
pub const ADDRESS_TOKEN: &str = "ADRESSE";
/// Replacement for a vehicle registration plate
pub const PLATE_TOKEN: &str = "IMMATRICULATION";
/// Replacement for a driving license number
pub const LICENSE_TOKEN: &str = "PERMIS********";
/// Replacement for a date that could not be parsed
pub const UNPARSEABLE_DATE_TOKEN: &str = "DATE";

const IBAN_MASK_PREFIX: &str = "FR************";
const RIB_MASK_PREFIX: &str = "************";
const NIR_MASK_PREFIX: &str = "***********";

fn repeat(ch: char, count: usize) -> String {
    std::iter::repeat(ch).take(count).collect()
}

/// Last `n` chars of a string
fn tail(value: &str, n: usize) -> String {
    let len = value.chars().count();
    value.chars().skip(len.saturating_sub(n)).collect()
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Keep `keep` trailing chars of `value`, replace the rest with `mask`
fn mask_all_but_last(value: &str, keep: usize, mask: char) -> String {
    let len = value.chars().count();
    let hidden = len.saturating_sub(keep);
    let mut out = repeat(mask, hidden);
    out.extend(value.chars().skip(hidden));
    out
}

/// `john.doe@example.com` -> `j******e@example.com`, local parts of two chars
/// or fewer are fully masked
pub fn mask_email(value: &str) -> String {
    let Some((local, domain)) = value.split_once('@') else {
        return repeat('*', value.chars().count());
    };

    let len = local.chars().count();
    let masked_local = if len <= 2 {
        repeat('*', len)
    } else {
        let mut chars = local.chars();
        let first = chars.next().unwrap_or('*');
        let last = chars.next_back().unwrap_or('*');
        let mut out = String::with_capacity(local.len());
        out.push(first);
        out.push_str(&repeat('*', len - 2));
        out.push(last);
        out
    };

    format!("{masked_local}@{domain}")
}

/// Keep the last 4 digits of a card number
pub fn mask_card(value: &str) -> String {
    mask_all_but_last(&digits(value), 4, '*')
}

/// Keep the last 2 digits of a phone number
pub fn mask_phone(value: &str) -> String {
    mask_all_but_last(&digits(value), 2, 'X')
}

/// Fixed `FR` prefixed mask keeping the last 4 IBAN characters
pub fn mask_iban(value: &str) -> String {
    format!("{IBAN_MASK_PREFIX}{}", tail(&strip_separators(value), 4))
}

/// Fixed mask keeping the last 4 RIB digits
pub fn mask_rib(value: &str) -> String {
    format!("{RIB_MASK_PREFIX}{}", tail(&strip_separators(value), 4))
}

/// Keep only the year of a date, or emit [`UNPARSEABLE_DATE_TOKEN`]
pub fn mask_date(value: &str, dates: &dyn DateNormalizer) -> String {
    match dates.parse_year(value, true) {
        Ok(year) => format!("XX/XX/{year}"),
        Err(_) => UNPARSEABLE_DATE_TOKEN.to_string(),
    }
}

/// Keep the last 4 characters of a national identification number
pub fn mask_national_id(value: &str) -> String {
    format!("{NIR_MASK_PREFIX}{}", tail(&strip_separators(value), 4))
}

/// Keep the first 2 and last 2 characters of a passport number
pub fn mask_passport(value: &str) -> String {
    let len = value.chars().count();
    if len <= 4 {
        return repeat('*', len);
    }
    let head: String = value.chars().take(2).collect();
    format!("{head}{}{}", repeat('*', len - 4), tail(value, 2))
}

/// Keep the first character of a person name
pub fn mask_person(value: &str) -> String {
    let len = value.chars().count();
    match value.chars().next() {
        Some(first) if len > 1 => format!("{first}{}", repeat('*', len - 1)),
        _ => repeat('*', len),
    }
}

//! Checksum validators gating pattern matches
//!
//! Pure functions that decide whether a matched identifier is structurally
//! valid. They fail closed: malformed input (wrong length, unexpected
//! characters) is reported as invalid and never panics.

/// Remove whitespace and dashes from an identifier
///
/// # Examples
///
/// ```
/// use anonymizer::anonymization::validation::strip_separators;
///
/// assert_eq!(strip_separators("4539 1488-0343 6467"), "4539148803436467");
/// ```
pub fn strip_separators(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Validate a French IBAN with the ISO 7064 mod-97-10 scheme
///
/// The stripped value must start with `FR` and be exactly 27 characters long.
/// The first four characters are moved to the end, letters are expanded to
/// their two-digit value (A=10 .. Z=35) and the resulting number must be
/// congruent to 1 modulo 97.
///
/// # Examples
///
/// ```
/// use anonymizer::anonymization::validation::is_valid_iban;
///
/// assert!(is_valid_iban("FR76 3000 6000 0112 3456 7890 189"));
/// assert!(!is_valid_iban("FR76 3000 6000 0112 3456 7890 188"));
/// ```
pub fn is_valid_iban(iban: &str) -> bool {
    let raw = strip_separators(iban).to_ascii_uppercase();
    if !raw.starts_with("FR") || raw.len() != 27 || !raw.is_ascii() {
        return false;
    }

    let (head, tail) = raw.split_at(4);
    let mut remainder: u32 = 0;
    for ch in tail.chars().chain(head.chars()) {
        remainder = match ch {
            '0'..='9' => (remainder * 10 + (ch as u32 - '0' as u32)) % 97,
            'A'..='Z' => (remainder * 100 + (ch as u32 - 'A' as u32 + 10)) % 97,
            _ => return false,
        };
    }

    remainder == 1
}

/// Validate a payment card number with the Luhn algorithm
///
/// Only digits are considered; separators are ignored. A value without any
/// digit is invalid.
pub fn is_valid_luhn(number: &str) -> bool {
    let digits: Vec<u32> = number.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.is_empty() {
        return false;
    }

    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();

    sum % 10 == 0
}

/// Validate a French national identification number (NIR) key
///
/// The stripped value must be exactly 15 ASCII digits. The last two digits are
/// the declared key and must equal `97 - (n mod 97)` where `n` is the number
/// formed by the first 13 digits.
pub fn is_valid_nir(nir: &str) -> bool {
    let raw = strip_separators(nir);
    if raw.len() != 15 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let (body, key) = raw.split_at(13);
    let (Ok(n), Ok(key)) = (body.parse::<u64>(), key.parse::<u64>()) else {
        return false;
    };

    97 - (n % 97) == key
}

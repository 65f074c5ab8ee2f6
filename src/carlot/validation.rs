//! Format checks for plates, years and user ids.
//!
//! These are pure predicates and never normalize their input: callers
//! uppercase plates before checking them.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII classes only; `\d` would also accept non-Latin digits.
static PLATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{3}-[0-9]{3}$").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
static NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// `XXX-000`: three uppercase letters, a hyphen, three digits.
pub fn is_valid_plate(plate: &str) -> bool {
    PLATE_RE.is_match(plate)
}

/// Exactly four digits. Only the shape is checked, so "0000" passes.
pub fn is_valid_year(year: &str) -> bool {
    YEAR_RE.is_match(year)
}

pub fn is_numeric(s: &str) -> bool {
    NUMERIC_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_plates() {
        for plate in ["ABC-123", "ZZZ-000", "QWE-999"] {
            assert!(is_valid_plate(plate), "{plate}");
        }
    }

    #[test]
    fn rejects_malformed_plates() {
        for plate in [
            "abc-123", "AbC-123", "ABC123", "ABC_123", "AB-123", "ABCD-123", "ABC-12", "ABC-1234",
            " ABC-123", "ABC-123 ", "ÁBC-123", "ABC-١٢٣", "",
        ] {
            assert!(!is_valid_plate(plate), "{plate:?}");
        }
    }

    #[test]
    fn year_is_a_shape_check_only() {
        for year in ["0000", "1000", "2020", "9999"] {
            assert!(is_valid_year(year), "{year}");
        }
        for year in ["999", "10000", "20a0", "-202", " 2020", "", "２０２０"] {
            assert!(!is_valid_year(year), "{year:?}");
        }
    }

    #[test]
    fn numeric_requires_at_least_one_digit() {
        assert!(is_numeric("7"));
        assert!(is_numeric("000123"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("12a"));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric(" 1"));
    }
}

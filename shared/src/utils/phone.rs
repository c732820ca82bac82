//! Phone number utilities
//!
//! Normalization must be applied consistently on every path that derives a
//! lookup key (issuance, verification, stats), or the paths silently diverge
//! on key format.

use once_cell::sync::Lazy;
use regex::Regex;

// E.164-ish shape: leading +, 7 to 15 digits
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+[0-9]{7,15}$").unwrap());

/// Normalize a phone number: trim whitespace and prepend `+` if absent
pub fn normalize_phone(phone: &str) -> String {
    let trimmed = phone.trim();
    if trimmed.starts_with('+') {
        trimmed.to_string()
    } else {
        format!("+{}", trimmed)
    }
}

/// Check whether a normalized phone number has a plausible E.164 shape
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

/// Mask a phone number for logging (e.g. `+14155552671` -> `***2671`)
pub fn mask_phone(phone: &str) -> String {
    // counted in chars, not bytes, so arbitrary input never splits a
    // multibyte character
    let chars = phone.chars().count();
    if chars <= 4 {
        "****".to_string()
    } else {
        let tail: String = phone.chars().skip(chars - 4).collect();
        format!("***{}", tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_prepends_plus() {
        assert_eq!(normalize_phone("14155552671"), "+14155552671");
        assert_eq!(normalize_phone("+14155552671"), "+14155552671");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(normalize_phone("  14155552671 "), "+14155552671");
        assert_eq!(normalize_phone("\t+4420718387 "), "+4420718387");
    }

    #[test]
    fn test_is_valid_phone() {
        assert!(is_valid_phone("+14155552671"));
        assert!(is_valid_phone("+442071838750"));
        assert!(!is_valid_phone("14155552671")); // missing +
        assert!(!is_valid_phone("+1415")); // too short
        assert!(!is_valid_phone("+1415555abcd")); // non-digits
        assert!(!is_valid_phone("+"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("+14155552671"), "***2671");
        assert_eq!(mask_phone("+123"), "****");
    }

    #[test]
    fn test_mask_phone_multibyte_input_does_not_panic() {
        // unvalidated input can reach masking before any shape check
        assert_eq!(mask_phone(&normalize_phone("日本語テスト")), "***語テスト");
        assert_eq!(mask_phone("日本語"), "****");
        assert_eq!(mask_phone("+1415日本語テスト"), "***語テスト");
    }
}

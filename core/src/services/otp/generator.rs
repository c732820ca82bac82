//! Cryptographically secure numeric code generation.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::errors::{AuthError, DomainResult};

/// Generate a fixed-length numeric code from the OS CSPRNG.
///
/// Each digit is drawn independently and uniformly over 0-9. Bytes >= 250 are
/// rejected and redrawn so the modulo step introduces no bias.
pub fn generate_code(length: usize) -> DomainResult<String> {
    let mut code = String::with_capacity(length);
    let mut buf = [0u8; 32];

    while code.len() < length {
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|_| AuthError::GenerationFailure)?;
        for byte in buf {
            if code.len() == length {
                break;
            }
            if byte < 250 {
                code.push(char::from(b'0' + byte % 10));
            }
        }
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_has_requested_length() {
        for length in [4, 6, 8] {
            let code = generate_code(length).unwrap();
            assert_eq!(code.len(), length);
        }
    }

    #[test]
    fn test_code_is_all_digits() {
        let code = generate_code(6).unwrap();
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_codes_are_not_constant() {
        // Collision of two independent 6-digit codes happens once in a
        // million draws; three identical draws in a row means a broken RNG.
        let a = generate_code(6).unwrap();
        let b = generate_code(6).unwrap();
        let c = generate_code(6).unwrap();
        assert!(!(a == b && b == c));
    }

    #[test]
    fn test_every_digit_appears_eventually() {
        let mut seen = [false; 10];
        for _ in 0..100 {
            for c in generate_code(6).unwrap().chars() {
                seen[c as usize - '0' as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s), "some digit never generated: {seen:?}");
    }
}

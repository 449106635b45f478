//! Reverse cipher
//!
//! Reverses the character sequence; encryption and decryption are the same
//! operation and the transform is its own inverse. Reversal is by Unicode
//! scalar value, not grapheme cluster: sequences that render as one glyph
//! (combining accents, some emoji) may visually corrupt. That is a known
//! limitation of the scheme, kept as-is.

use super::EncryptionResult;

/// Reverses the character order of `text`. Always succeeds.
pub fn encrypt(text: &str) -> EncryptionResult {
    EncryptionResult::ok(text.chars().rev().collect::<String>())
}

/// Identical to [`encrypt`]; the cipher is self-inverse.
pub fn decrypt(text: &str) -> EncryptionResult {
    encrypt(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vector() {
        assert_eq!(encrypt("SECRET").output, "TERCES");
    }

    #[test]
    fn test_self_inverse() {
        let text = "palindrome? not quite";
        assert_eq!(encrypt(&encrypt(text).output).output, text);
    }

    #[test]
    fn test_empty_input() {
        let result = encrypt("");
        assert!(result.success);
        assert_eq!(result.output, "");
    }

    #[test]
    fn test_multibyte_scalars() {
        assert_eq!(encrypt("aéz").output, "zéa");
    }
}

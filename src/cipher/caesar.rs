//! Caesar substitution cipher
//!
//! Rotates each ASCII letter within its own case's 26-letter alphabet by a
//! fixed shift; every other character (digits, punctuation, whitespace,
//! non-ASCII) passes through unchanged. Decryption is encryption with the
//! complementary shift, so `decrypt(encrypt(t, s), s) == t` for any integer
//! shift, not just the conventional 1-25 range.

use super::EncryptionResult;

fn rotate(ch: char, shift: u32) -> char {
    let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
    let offset = (ch as u8 - base) as u32;
    (base + ((offset + shift) % 26) as u8) as char
}

/// Encrypts `text` by rotating letters `shift` positions forward
///
/// Any integer shift is accepted; it is normalized modulo 26. Never fails.
pub fn encrypt(text: &str, shift: i64) -> EncryptionResult {
    let shift = shift.rem_euclid(26) as u32;
    let output: String = text
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphabetic() {
                rotate(ch, shift)
            } else {
                ch
            }
        })
        .collect();
    EncryptionResult::ok(output)
}

/// Decrypts by applying the complementary shift
pub fn decrypt(text: &str, shift: i64) -> EncryptionResult {
    encrypt(text, 26 - shift.rem_euclid(26))
}

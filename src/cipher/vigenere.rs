//! Vigenère polyalphabetic cipher
//!
//! Each letter of the text is shifted by the alphabet position of the next
//! key letter ('a' = 0 .. 'z' = 25). The key index advances only on
//! alphabetic text characters, so punctuation and whitespace do not consume
//! a key position, and it wraps modulo the key length for texts longer than
//! the key.

use super::EncryptionResult;

/// Lowercases the key and strips every non-letter character
///
/// Returns `None` when nothing usable remains.
fn normalize_key(key: &str) -> Option<Vec<u32>> {
    let shifts: Vec<u32> = key
        .chars()
        .filter(|ch| ch.is_ascii_alphabetic())
        .map(|ch| ch.to_ascii_lowercase() as u32 - 'a' as u32)
        .collect();
    if shifts.is_empty() { None } else { Some(shifts) }
}

// Missing key and unusable key are distinct failures: the original surfaces
// "Key is required" for an absent key and "Invalid key" for one that
// normalizes to nothing, and callers rely on both messages.
fn apply(text: &str, key: &str, decrypt: bool) -> EncryptionResult {
    if key.is_empty() {
        return EncryptionResult::fail("Key is required");
    }
    let Some(shifts) = normalize_key(key) else {
        return EncryptionResult::fail("Invalid key");
    };

    let mut output = String::with_capacity(text.len());
    let mut key_index = 0usize;

    for ch in text.chars() {
        if ch.is_ascii_alphabetic() {
            let base = if ch.is_ascii_uppercase() { b'A' } else { b'a' };
            let offset = (ch as u8 - base) as u32;
            let shift = shifts[key_index % shifts.len()];
            let shifted = if decrypt {
                (offset + 26 - shift) % 26
            } else {
                (offset + shift) % 26
            };
            output.push((base + shifted as u8) as char);
            key_index += 1;
        } else {
            output.push(ch);
        }
    }
    EncryptionResult::ok(output)
}

/// Encrypts `text` with the alphabetic keyword `key`
pub fn encrypt(text: &str, key: &str) -> EncryptionResult {
    apply(text, key, false)
}

/// Decrypts by applying the complementary per-letter shift
pub fn decrypt(text: &str, key: &str) -> EncryptionResult {
    apply(text, key, true)
}

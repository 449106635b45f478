//! Repeating-key XOR cipher
//!
//! Each byte of the text's UTF-8 encoding is XORed with the corresponding
//! key byte, cycling the key index modulo the key length. Raw XOR output can
//! contain control bytes unsafe to display or copy, so the encrypt direction
//! wraps the result in Base64; decrypt unwraps the Base64 first and re-applies
//! the same pass (XOR is self-inverse under a fixed key).

use super::EncryptionResult;
use base64::{Engine as _, engine::general_purpose::STANDARD};

fn xor_bytes(data: &[u8], key: &[u8]) -> Vec<u8> {
    let key_len = key.len();
    data.iter()
        .enumerate()
        .map(|(i, byte)| byte ^ key[i % key_len])
        .collect()
}

/// XORs `text` with the cycled `key` and Base64-encodes the result
pub fn encrypt(text: &str, key: &str) -> EncryptionResult {
    if key.is_empty() {
        return EncryptionResult::fail("Key is required");
    }
    let mixed = xor_bytes(text.as_bytes(), key.as_bytes());
    EncryptionResult::ok(STANDARD.encode(mixed))
}

/// Base64-decodes `text` and re-applies the XOR pass
///
/// Any structural failure — non-Base64 input or a payload that does not
/// XOR back to valid UTF-8 — reports `"XOR decryption failed"` rather than
/// propagating the underlying error.
pub fn decrypt(text: &str, key: &str) -> EncryptionResult {
    if key.is_empty() {
        return EncryptionResult::fail("Key is required");
    }
    match unwrap_and_xor(text, key.as_bytes()) {
        Ok(output) => EncryptionResult::ok(output),
        Err(_) => EncryptionResult::fail("XOR decryption failed"),
    }
}

fn unwrap_and_xor(text: &str, key: &[u8]) -> crate::Result<String> {
    let decoded = STANDARD.decode(text)?;
    let plain = xor_bytes(&decoded, key);
    Ok(String::from_utf8(plain)?)
}

//! Base64 codec
//!
//! Not a cipher in any security sense, but it shares the uniform call
//! contract: standard-alphabet Base64 over the text's UTF-8 bytes, with
//! structural decode failures reported through the result instead of raised.

use super::EncryptionResult;
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Encodes `text` as standard Base64
pub fn encrypt(text: &str) -> EncryptionResult {
    EncryptionResult::ok(STANDARD.encode(text.as_bytes()))
}

/// Decodes standard Base64 back to text
///
/// Wrong padding, invalid characters or a non-UTF-8 payload all surface as
/// `"Base64 decoding failed"`.
pub fn decrypt(text: &str) -> EncryptionResult {
    match decode(text) {
        Ok(output) => EncryptionResult::ok(output),
        Err(_) => EncryptionResult::fail("Base64 decoding failed"),
    }
}

fn decode(text: &str) -> crate::Result<String> {
    let bytes = STANDARD.decode(text)?;
    Ok(String::from_utf8(bytes)?)
}

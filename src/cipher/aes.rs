//! Passphrase-based symmetric cipher
//!
//! AES-256-GCM with a key derived from the passphrase via PBKDF2-HMAC-SHA256.
//! The encrypted output is self-contained: a fresh random salt and nonce are
//! generated per call and prepended to the ciphertext, and the whole blob is
//! Base64-encoded so the same passphrase alone is enough to decrypt.
//!
//! Output format: `base64( salt(16) || nonce(12) || ciphertext+tag )`
//!
//! The GCM authentication tag doubles as the wrong-passphrase detector:
//! a structurally valid blob that fails authentication reports
//! `"Invalid key or corrupted data"`, distinct from the `"AES decryption
//! failed"` reported for input that is not a ciphertext blob at all.

use super::EncryptionResult;
use aes_gcm::{
    Aes256Gcm, Nonce,
    aead::{Aead, KeyInit, OsRng, rand_core::RngCore},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

const SALT_LEN: usize = 16;
const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;
const PBKDF2_ROUNDS: u32 = 100_000;

fn derive_key(passphrase: &str, salt: &[u8]) -> [u8; 32] {
    let mut key = [0u8; 32];
    pbkdf2_hmac::<Sha256>(passphrase.as_bytes(), salt, PBKDF2_ROUNDS, &mut key);
    key
}

/// Encrypts `text` under a key derived from `passphrase`
pub fn encrypt(text: &str, passphrase: &str) -> EncryptionResult {
    if passphrase.is_empty() {
        return EncryptionResult::fail("Key is required");
    }
    match seal(text, passphrase) {
        Ok(output) => EncryptionResult::ok(output),
        Err(error) => {
            tracing::warn!("symmetric encryption failed: {}", error);
            EncryptionResult::fail("AES encryption failed")
        }
    }
}

fn seal(text: &str, passphrase: &str) -> crate::Result<String> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(passphrase, &salt);
    let cipher = Aes256Gcm::new(&key.into());
    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce_bytes), text.as_bytes())
        .map_err(|e| format!("AES-GCM encryption failed: {}", e))?;

    let mut blob = Vec::with_capacity(SALT_LEN + NONCE_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce_bytes);
    blob.extend_from_slice(&ciphertext);
    Ok(STANDARD.encode(blob))
}

/// Decrypts a blob produced by [`encrypt`] with the same passphrase
///
/// # Returns
/// * `"AES decryption failed"` when the input is not a well-formed blob
///   (bad Base64, or too short to hold salt + nonce + tag)
/// * `"Invalid key or corrupted data"` when the blob parses but the wrong
///   passphrase or tampered ciphertext fails authentication
pub fn decrypt(text: &str, passphrase: &str) -> EncryptionResult {
    if passphrase.is_empty() {
        return EncryptionResult::fail("Key is required");
    }

    let blob = match STANDARD.decode(text) {
        Ok(blob) if blob.len() >= SALT_LEN + NONCE_LEN + TAG_LEN => blob,
        _ => return EncryptionResult::fail("AES decryption failed"),
    };

    let (salt, rest) = blob.split_at(SALT_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

    let key = derive_key(passphrase, salt);
    let cipher = Aes256Gcm::new(&key.into());
    match cipher.decrypt(Nonce::from_slice(nonce_bytes), ciphertext) {
        Ok(plain) => match String::from_utf8(plain) {
            Ok(output) => EncryptionResult::ok(output),
            Err(_) => EncryptionResult::fail("Invalid key or corrupted data"),
        },
        Err(_) => EncryptionResult::fail("Invalid key or corrupted data"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let encrypted = encrypt("the cake is a lie", "portal");
        assert!(encrypted.success);
        let decrypted = decrypt(&encrypted.output, "portal");
        assert!(decrypted.success);
        assert_eq!(decrypted.output, "the cake is a lie");
    }

    #[test]
    fn test_fresh_salt_per_call() {
        // Same plaintext and passphrase must still produce distinct blobs.
        let first = encrypt("same input", "same key").output;
        let second = encrypt("same input", "same key").output;
        assert_ne!(first, second);
    }

    #[test]
    fn test_empty_passphrase_fails() {
        assert_eq!(encrypt("text", "").error.as_deref(), Some("Key is required"));
        assert_eq!(decrypt("text", "").error.as_deref(), Some("Key is required"));
    }

    #[test]
    fn test_wrong_passphrase_is_detected() {
        let encrypted = encrypt("classified", "right horse").output;
        let result = decrypt(&encrypted, "wrong horse");
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Invalid key or corrupted data"));
    }

    #[test]
    fn test_tampered_ciphertext_is_detected() {
        let encrypted = encrypt("classified", "key").output;
        let mut blob = STANDARD.decode(&encrypted).unwrap();
        let last = blob.len() - 1;
        blob[last] ^= 0xFF;
        let result = decrypt(&STANDARD.encode(blob), "key");
        assert_eq!(result.error.as_deref(), Some("Invalid key or corrupted data"));
    }

    #[test]
    fn test_malformed_input_is_distinct() {
        // Not Base64 at all.
        let result = decrypt("*** not a blob ***", "key");
        assert_eq!(result.error.as_deref(), Some("AES decryption failed"));
        // Valid Base64, but far too short to hold salt + nonce + tag.
        let result = decrypt(&STANDARD.encode(b"short"), "key");
        assert_eq!(result.error.as_deref(), Some("AES decryption failed"));
    }

    #[test]
    fn test_empty_plaintext_round_trips() {
        let encrypted = encrypt("", "key");
        assert!(encrypted.success);
        assert_eq!(decrypt(&encrypted.output, "key").output, "");
    }
}

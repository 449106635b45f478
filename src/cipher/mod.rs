//! Cipher engine providing text encryption/decryption transforms
//!
//! This module supports multiple cipher algorithms including:
//! - Caesar: fixed-shift substitution cipher
//! - Vigenère: keyword-based polyalphabetic cipher
//! - Reverse: character-order reversal
//! - XOR: repeating-key byte XOR, Base64-wrapped
//! - Base64: plain Base64 encoding (not encryption)
//! - Symmetric: passphrase-based AES-256-GCM
//! - Toy asymmetric: fixed-key modular exponentiation (educational only)
//!
//! Every operation is a pure function over in-memory text and returns an
//! [`EncryptionResult`] instead of an error: callers can drive all seven
//! algorithms through one contract without per-algorithm error handling.

pub mod aes;
pub mod base64;
pub mod caesar;
pub mod reverse;
pub mod rsa;
pub mod vigenere;
pub mod xor;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

/// Supported cipher algorithms
///
/// A closed enumeration: dispatch matches exhaustively, so adding or
/// removing an algorithm is a compile-time-checked change.
/// Serialized to kebab-case names for JSON/CLI compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Caesar substitution cipher (shift in 1-25, default 3)
    Caesar,
    /// Vigenère polyalphabetic cipher (alphabetic keyword)
    Vigenere,
    /// Character-order reversal (self-inverse, keyless)
    Reverse,
    /// Repeating-key XOR over UTF-8 bytes, Base64-wrapped
    Xor,
    /// Base64 codec (keyless, reversible encoding)
    Base64,
    /// Passphrase-based AES-256-GCM
    Symmetric,
    /// Toy RSA-like modular exponentiation with fixed small primes
    ToyAsymmetric,
}

impl Algorithm {
    /// All algorithms, in registry order
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Caesar,
        Algorithm::Vigenere,
        Algorithm::Reverse,
        Algorithm::Xor,
        Algorithm::Base64,
        Algorithm::Symmetric,
        Algorithm::ToyAsymmetric,
    ];

    /// Stable wire name, matching the serde representation
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Caesar => "caesar",
            Algorithm::Vigenere => "vigenere",
            Algorithm::Reverse => "reverse",
            Algorithm::Xor => "xor",
            Algorithm::Base64 => "base64",
            Algorithm::Symmetric => "symmetric",
            Algorithm::ToyAsymmetric => "toy-asymmetric",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name().fmt(f)
    }
}

impl FromStr for Algorithm {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "caesar" => Ok(Algorithm::Caesar),
            "vigenere" => Ok(Algorithm::Vigenere),
            "reverse" => Ok(Algorithm::Reverse),
            "xor" => Ok(Algorithm::Xor),
            "base64" => Ok(Algorithm::Base64),
            "symmetric" => Ok(Algorithm::Symmetric),
            "toy-asymmetric" => Ok(Algorithm::ToyAsymmetric),
            other => Err(format!("unknown algorithm: {}", other).into()),
        }
    }
}

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encrypt,
    Decrypt,
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Encrypt => "encrypt".fmt(f),
            Mode::Decrypt => "decrypt".fmt(f),
        }
    }
}

/// Uniform result of every cipher operation
///
/// Invariants:
/// - `success == true`: `error` is `None` and `output` holds the transform
///   result (empty only if the input was empty)
/// - `success == false`: `output` is empty and `error` holds a non-empty
///   human-readable reason
///
/// This is the only type crossing the cipher boundary; no operation panics
/// or propagates a raw error past it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionResult {
    pub output: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EncryptionResult {
    /// Successful result wrapping the transform output
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
            error: None,
        }
    }

    /// Failed result carrying a human-readable reason
    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Default Caesar shift when no key material is supplied
pub const DEFAULT_CAESAR_SHIFT: i64 = 3;

// Caesar key material arrives as a string through the uniform signature;
// unparsable or missing shifts fall back to the default rather than erroring.
fn parse_shift(key: Option<&str>) -> i64 {
    key.and_then(|k| k.trim().parse().ok())
        .unwrap_or(DEFAULT_CAESAR_SHIFT)
}

/// Runs the encrypt direction of `algorithm` over `text`
///
/// # Arguments
/// * `algorithm` - Cipher to apply
/// * `text` - Plaintext input
/// * `key` - Optional key material; meaning is algorithm-dependent
///   (shift integer for Caesar, keyword for Vigenère, arbitrary string for
///   XOR and the symmetric cipher, ignored by the rest)
pub fn encrypt(algorithm: Algorithm, text: &str, key: Option<&str>) -> EncryptionResult {
    transform(algorithm, Mode::Encrypt, text, key)
}

/// Runs the decrypt direction of `algorithm` over `text`
pub fn decrypt(algorithm: Algorithm, text: &str, key: Option<&str>) -> EncryptionResult {
    transform(algorithm, Mode::Decrypt, text, key)
}

/// Dispatches one transform call to its cipher implementation
pub fn transform(algorithm: Algorithm, mode: Mode, text: &str, key: Option<&str>) -> EncryptionResult {
    tracing::debug!("dispatch {} {} ({} chars)", algorithm, mode, text.chars().count());
    match (algorithm, mode) {
        (Algorithm::Caesar, Mode::Encrypt) => caesar::encrypt(text, parse_shift(key)),
        (Algorithm::Caesar, Mode::Decrypt) => caesar::decrypt(text, parse_shift(key)),
        (Algorithm::Vigenere, Mode::Encrypt) => vigenere::encrypt(text, key.unwrap_or("")),
        (Algorithm::Vigenere, Mode::Decrypt) => vigenere::decrypt(text, key.unwrap_or("")),
        (Algorithm::Reverse, Mode::Encrypt) => reverse::encrypt(text),
        (Algorithm::Reverse, Mode::Decrypt) => reverse::decrypt(text),
        (Algorithm::Xor, Mode::Encrypt) => xor::encrypt(text, key.unwrap_or("")),
        (Algorithm::Xor, Mode::Decrypt) => xor::decrypt(text, key.unwrap_or("")),
        (Algorithm::Base64, Mode::Encrypt) => base64::encrypt(text),
        (Algorithm::Base64, Mode::Decrypt) => base64::decrypt(text),
        (Algorithm::Symmetric, Mode::Encrypt) => aes::encrypt(text, key.unwrap_or("")),
        (Algorithm::Symmetric, Mode::Decrypt) => aes::decrypt(text, key.unwrap_or("")),
        (Algorithm::ToyAsymmetric, Mode::Encrypt) => rsa::encrypt(text),
        (Algorithm::ToyAsymmetric, Mode::Decrypt) => rsa::decrypt(text),
    }
}

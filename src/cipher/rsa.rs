//! Toy modular-exponentiation cipher
//!
//! An RSA-shaped demonstration scheme, NOT real cryptography: the key pair
//! is regenerated on every call from two fixed, publicly known small primes
//! (p = 61, q = 53), so anyone can derive the private exponent. It exists to
//! make the textbook math observable — per-character `c = m^e mod n` — while
//! staying self-contained, with no key exchange or key parameter at all.
//!
//! Ciphertext format: one zero-padded 4-digit decimal token per character,
//! joined with `-`. Character codes above the modulus (most of Unicode)
//! cannot be represented and pass through as their raw code, zero-padded the
//! same way. That is a documented lossy edge of the demo, not an error.

use super::EncryptionResult;

const P: u64 = 61;
const Q: u64 = 53;
const PUBLIC_EXPONENT: u64 = 17;

struct KeyPair {
    n: u64,
    e: u64,
    d: u64,
}

/// Derives the fixed key pair from the module constants
///
/// The private exponent is found by linear search for the smallest d with
/// `(d * e) mod phi == 1`. phi is 3120, so the search is trivially cheap;
/// it is rerun on every call on purpose to keep the demo stateless.
fn generate_keys() -> KeyPair {
    let n = P * Q; // 3233
    let phi = (P - 1) * (Q - 1); // 3120

    let mut d = 1;
    while (d * PUBLIC_EXPONENT) % phi != 1 {
        d += 1;
    }

    KeyPair { n, e: PUBLIC_EXPONENT, d }
}

/// Binary exponentiation: `base^exponent mod modulus` in O(log exponent)
fn mod_pow(mut base: u64, mut exponent: u64, modulus: u64) -> u64 {
    if modulus == 1 {
        return 0;
    }
    let mut result = 1;
    base %= modulus;
    while exponent > 0 {
        if exponent % 2 == 1 {
            result = (result * base) % modulus;
        }
        exponent /= 2;
        base = (base * base) % modulus;
    }
    result
}

/// Encrypts `text` character-by-character with the fixed public key
pub fn encrypt(text: &str) -> EncryptionResult {
    let keys = generate_keys();
    let tokens: Vec<String> = text
        .chars()
        .map(|ch| {
            let code = ch as u64;
            if code > keys.n {
                // Out of range for the modulus: raw code, not encrypted.
                format!("{:04}", code)
            } else {
                format!("{:04}", mod_pow(code, keys.e, keys.n))
            }
        })
        .collect();
    EncryptionResult::ok(tokens.join("-"))
}

/// Decrypts a `-`-joined token string with the fixed private key
pub fn decrypt(text: &str) -> EncryptionResult {
    if text.is_empty() {
        return EncryptionResult::ok("");
    }
    let keys = generate_keys();
    let mut output = String::new();
    for token in text.split('-') {
        let Ok(code) = token.parse::<u64>() else {
            return EncryptionResult::fail("RSA decryption failed");
        };
        let plain = if code > keys.n {
            code
        } else {
            mod_pow(code, keys.d, keys.n)
        };
        match u32::try_from(plain).ok().and_then(char::from_u32) {
            Some(ch) => output.push(ch),
            None => return EncryptionResult::fail("RSA decryption failed"),
        }
    }
    EncryptionResult::ok(output)
}

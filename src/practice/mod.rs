//! Built-in practice content: decryption challenges and a scripted helper
//!
//! Both features drive the encrypt direction of the cipher engine only,
//! using fixed plaintext/algorithm/key combinations, and leave all
//! presentation (timers, scoring UI, chat rendering) to the caller.

use crate::cipher::{self, Algorithm, EncryptionResult};

/// One decryption puzzle with a known answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub id: u32,
    pub plaintext: &'static str,
    pub algorithm: Algorithm,
    /// Key material fed to the encrypt call, where the algorithm takes any
    pub key: Option<&'static str>,
    pub hint: &'static str,
    pub points: u32,
}

/// The fixed challenge set, in play order
pub const CHALLENGES: [Challenge; 5] = [
    Challenge {
        id: 1,
        plaintext: "CRYPTO",
        algorithm: Algorithm::Caesar,
        key: Some("3"),
        hint: "Caesar Cipher with shift 3",
        points: 10,
    },
    Challenge {
        id: 2,
        plaintext: "SECRET",
        algorithm: Algorithm::Reverse,
        key: None,
        hint: "Just backwards!",
        points: 5,
    },
    Challenge {
        id: 3,
        plaintext: "HELLO",
        algorithm: Algorithm::Vigenere,
        key: Some("KEY"),
        hint: "Vigenère with key \"KEY\"",
        points: 15,
    },
    Challenge {
        id: 4,
        plaintext: "CHALLENGE",
        algorithm: Algorithm::Caesar,
        key: Some("5"),
        hint: "Caesar Cipher with shift 5",
        points: 10,
    },
    Challenge {
        id: 5,
        plaintext: "VICTORY",
        algorithm: Algorithm::Base64,
        key: None,
        hint: "Base64 encoding",
        points: 20,
    },
];

impl Challenge {
    /// The puzzle text shown to the player
    pub fn encrypted(&self) -> EncryptionResult {
        cipher::encrypt(self.algorithm, self.plaintext, self.key)
    }

    /// Checks a submitted guess against the known plaintext,
    /// case-insensitively and ignoring surrounding whitespace
    pub fn check(&self, guess: &str) -> bool {
        guess.trim().eq_ignore_ascii_case(self.plaintext)
    }
}

/// Keyword-matched canned replies, checked in order; first match wins
const RESPONSES: [(&str, &str); 7] = [
    (
        "caesar",
        "Caesar Cipher is perfect for beginners! It shifts each letter by a fixed number. \
         Try it with shift value 3 for the classic Caesar cipher.",
    ),
    (
        "vigenere",
        "Vigenère Cipher is more secure than Caesar! It uses a keyword where each letter \
         determines a different shift. Great for protecting sensitive text.",
    ),
    (
        "aes",
        "AES is military-grade encryption! It's the gold standard used by governments \
         worldwide. Perfect for securing highly sensitive data.",
    ),
    (
        "best",
        "For maximum security, use AES encryption with a strong key. For learning, start \
         with Caesar or Vigenère ciphers.",
    ),
    (
        "secure",
        "The most secure algorithm here is AES. It uses 256-bit encryption and is \
         virtually unbreakable with current technology.",
    ),
    (
        "hello",
        "Hello! I'm your cryptography assistant. Ask me about any encryption algorithm \
         or how to secure your messages!",
    ),
    (
        "help",
        "I can help you understand different encryption methods, suggest the best \
         algorithm for your needs, or explain how cryptography works. Just ask!",
    ),
];

const DEFAULT_RESPONSE: &str =
    "Interesting question! Each encryption method has its strengths. Caesar is simple, \
     Vigenère is classic, XOR is fast, and AES is ultra-secure. What would you like to know?";

/// Picks the scripted reply for a free-form question
pub fn respond(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    RESPONSES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_RESPONSE)
}

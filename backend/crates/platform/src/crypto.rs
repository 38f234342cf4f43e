//! Cryptographic Utilities

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

/// Alphabet for generated passwords (unambiguous to relay over a log line)
const PASSWORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate a random alphanumeric password of `len` characters.
///
/// Sourced from the OS CSPRNG; used for bootstrap credentials that are
/// surfaced once and never stored in clear.
pub fn generate_password(len: usize) -> String {
    (0..len)
        .map(|_| {
            let idx = OsRng.gen_range(0..PASSWORD_ALPHABET.len());
            PASSWORD_ALPHABET[idx] as char
        })
        .collect()
}

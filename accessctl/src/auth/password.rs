//! Password hashing and verification.
//!
//! Stored credentials are a single unsalted SHA-256 pass over the UTF-8 bytes of the secret,
//! hex encoded in lowercase. Keeping exactly this format lets existing rows in `usuarios`
//! verify without migration.

use sha2::{Digest, Sha256};

/// Hash a string with SHA-256, returning 64 lowercase hex characters.
pub fn hash_string(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    format!("{digest:x}")
}

/// Verify a string against a stored hex digest.
pub fn verify_string(input: &str, hash: &str) -> bool {
    hash_string(input) == hash
}

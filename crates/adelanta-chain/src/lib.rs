//! Simulated external rails.
//!
//! Nothing in this crate touches the network. Soroban submissions are
//! logged and answered with fabricated transaction hashes; wallet keys and
//! local collection accounts are derived deterministically so repeated runs
//! produce stable identifiers.

pub mod accounts;
pub mod soroban;

use sha2::{Digest, Sha256};

/// Lowercase hex of a SHA-256 digest over the given parts.
pub(crate) fn digest_hex(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Decimal digits derived from the same digest, for account numbers.
pub(crate) fn digest_digits(parts: &[&str], len: usize) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update([0u8]);
    }
    hasher
        .finalize()
        .iter()
        .cycle()
        .take(len)
        .map(|byte| char::from(b'0' + byte % 10))
        .collect()
}

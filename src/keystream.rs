//! Keystream derivation.
//!
//! Expands a short key into a symbol stream of any required length by
//! repeated digest extension: each round absorbs everything derived so far
//! plus a key-length prefix, and squeezes the digest bytes out as symbols
//! (one per byte, reduced mod 4). Deterministic, and aperiodic because the
//! absorbed material grows every round.

use crate::symbol::{Symbol, SymbolString};
use digest::Digest;
use sha2::Sha256;

/// Digest the canonical ASCII rendering of one or more symbol slices.
pub fn digest_ascii<D: Digest>(parts: &[&[Symbol]]) -> Vec<u8> {
    let mut hasher = D::new();
    for part in parts {
        let rendered: Vec<u8> = part.iter().map(|s| s.to_char() as u8).collect();
        hasher.update(&rendered);
    }
    hasher.finalize().to_vec()
}

/// Digest symbol slices and map each output byte back to a symbol by
/// reduction mod 4.
pub fn digest_symbols<D: Digest>(parts: &[&[Symbol]]) -> Vec<Symbol> {
    digest_ascii::<D>(parts)
        .into_iter()
        .map(|b| Symbol::from_index(b % 4))
        .collect()
}

/// Derive `required_len` symbols of keystream from `key`.
///
/// A key at least as long as the requirement is returned as a prefix,
/// untouched. Shorter keys are extended with SHA-256 blocks until the
/// length is reached. Total: always succeeds, `required_len == 0` yields
/// the empty stream, and identical arguments always yield identical output.
pub fn derive(key: &SymbolString, required_len: usize) -> SymbolString {
    let mut material: Vec<Symbol> = key.as_slice().to_vec();
    let prefix_len = key.len();
    while material.len() < required_len {
        let block = digest_symbols::<Sha256>(&[&material[..], &material[..prefix_len]]);
        material.extend_from_slice(&block);
    }
    material.truncate(required_len);
    material.into_iter().collect()
}

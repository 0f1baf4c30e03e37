//! Single-shot stream cipher with integrity tagging.
//!
//! Encryption codec-encodes the plaintext, appends a delimiter marker and a
//! truncated-digest tag, then combines the whole sequence position-wise with
//! a derived keystream using addition mod 4 over symbol indices (the ℤ₄
//! analogue of XOR). Decryption inverts the combination, verifies the marker
//! and the tag, and decodes the payload.
//!
//! Stateless: every call recomputes all derived material from its inputs.

use crate::codec;
use crate::error::{HelixError, Result};
use crate::keystream::{self, digest_ascii};
use crate::symbol::{Symbol, SymbolString};
use sha2::Sha256;

/// Integrity tag length in bytes before codec expansion (128 bits)
pub const TAG_BYTES: usize = 16;

/// Integrity tag length in symbols (4 symbols per byte)
pub const TAG_SYMBOLS: usize = TAG_BYTES * 4;

/// Fixed marker separating payload from tag inside the combined sequence.
/// The tag length is fixed, so the marker sits at a length-determined
/// position and is verified there rather than searched for; payloads that
/// happen to contain the same motif are unaffected.
pub const DELIMITER: [Symbol; 7] = [
    Symbol::G,
    Symbol::A,
    Symbol::T,
    Symbol::T,
    Symbol::A,
    Symbol::C,
    Symbol::A,
];

/// Minimum ciphertext length: empty payload still carries marker and tag
const MIN_CIPHERTEXT: usize = DELIMITER.len() + TAG_SYMBOLS;

/// Encrypt a plaintext against a key.
///
/// The key is any non-empty byte string; it is codec-encoded and expanded
/// into a keystream covering payload, marker, and tag.
pub fn encrypt(plaintext: &[u8], key: &[u8]) -> Result<SymbolString> {
    if key.is_empty() {
        return Err(HelixError::KeyRequired);
    }

    let payload = codec::encode(plaintext);
    let tag = compute_tag(&payload);

    let mut combined = SymbolString::with_capacity(payload.len() + MIN_CIPHERTEXT);
    combined.extend_from_slice(payload.as_slice());
    combined.extend_from_slice(&DELIMITER);
    combined.extend_from_slice(tag.as_slice());

    let stream = keystream::derive(&codec::encode(key), combined.len());

    Ok(combined
        .iter()
        .zip(stream.iter())
        .map(|(&c, &k)| Symbol::from_index(c.index() + k.index()))
        .collect())
}

/// Decrypt a ciphertext with a key, verifying the embedded tag.
///
/// Fails with `MalformedCiphertext` when the sequence is too short to hold
/// the marker and tag, and with `IntegrityViolation` when the marker or tag
/// does not verify (wrong key or tampering). No partial plaintext is
/// returned on failure.
pub fn decrypt(ciphertext: &SymbolString, key: &[u8]) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(HelixError::KeyRequired);
    }
    if ciphertext.len() < MIN_CIPHERTEXT {
        return Err(HelixError::MalformedCiphertext);
    }

    let stream = keystream::derive(&codec::encode(key), ciphertext.len());

    let combined: SymbolString = ciphertext
        .iter()
        .zip(stream.iter())
        .map(|(&c, &k)| Symbol::from_index(c.index() + 4 - k.index()))
        .collect();

    let payload_len = combined.len() - MIN_CIPHERTEXT;
    let marker = &combined.as_slice()[payload_len..payload_len + DELIMITER.len()];
    let payload: SymbolString = combined.as_slice()[..payload_len].to_vec().into();
    let tag = &combined.as_slice()[payload_len + DELIMITER.len()..];

    // A garbled marker is indistinguishable from a garbled tag: both mean
    // the keystream did not match the one used to encrypt, or the sequence
    // was modified in transit.
    let marker_ok = constant_time_eq(marker, &DELIMITER);
    let expected_tag = compute_tag(&payload);
    let tag_ok = constant_time_eq(tag, expected_tag.as_slice());
    if !(marker_ok && tag_ok) {
        return Err(HelixError::IntegrityViolation);
    }

    Ok(codec::decode(&payload))
}

/// Tag: SHA-256 over the payload rendering, truncated, codec-encoded
fn compute_tag(payload: &SymbolString) -> SymbolString {
    let digest = digest_ascii::<Sha256>(&[payload.as_slice()]);
    codec::encode(&digest[..TAG_BYTES])
}

/// Constant-time symbol comparison
fn constant_time_eq(a: &[Symbol], b: &[Symbol]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= x.index() ^ y.index();
    }
    acc == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let ciphertext = encrypt(b"test", b"key").unwrap();
        assert_eq!(decrypt(&ciphertext, b"key").unwrap(), b"test");
    }

    #[test]
    fn test_roundtrip_various_payloads() {
        let messages: [&[u8]; 5] = [
            b"",
            b"a",
            b"The quick brown fox jumps over the lazy dog",
            &[0x00, 0xFF, 0x7F, 0x80],
            &[0xAB; 300],
        ];
        for msg in messages {
            let ciphertext = encrypt(msg, b"correct horse battery staple").unwrap();
            assert_eq!(decrypt(&ciphertext, b"correct horse battery staple").unwrap(), msg);
        }
    }

    #[test]
    fn test_empty_plaintext() {
        let ciphertext = encrypt(b"", b"key").unwrap();
        assert_eq!(ciphertext.len(), DELIMITER.len() + TAG_SYMBOLS);
        assert_eq!(decrypt(&ciphertext, b"key").unwrap(), b"");
    }

    #[test]
    fn test_wrong_key_fails_integrity() {
        let ciphertext = encrypt(b"test", b"key1").unwrap();
        let err = decrypt(&ciphertext, b"key2").unwrap_err();
        assert!(matches!(err, HelixError::IntegrityViolation));
    }

    #[test]
    fn test_tamper_detection_every_position() {
        let ciphertext = encrypt(b"tamper me", b"key").unwrap();
        for pos in 0..ciphertext.len() {
            let mut symbols = ciphertext.as_slice().to_vec();
            symbols[pos] = Symbol::from_index(symbols[pos].index() + 1);
            let tampered: SymbolString = symbols.into();
            let err = decrypt(&tampered, b"key").unwrap_err();
            assert!(
                matches!(err, HelixError::IntegrityViolation),
                "flip at {} must be detected",
                pos
            );
        }
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            encrypt(b"data", b"").unwrap_err(),
            HelixError::KeyRequired
        ));
        let ciphertext = encrypt(b"data", b"key").unwrap();
        assert!(matches!(
            decrypt(&ciphertext, b"").unwrap_err(),
            HelixError::KeyRequired
        ));
    }

    #[test]
    fn test_truncated_ciphertext_malformed() {
        let short: SymbolString = "ACGTACGT".parse().unwrap();
        assert!(matches!(
            decrypt(&short, b"key").unwrap_err(),
            HelixError::MalformedCiphertext
        ));
        assert!(matches!(
            decrypt(&SymbolString::new(), b"key").unwrap_err(),
            HelixError::MalformedCiphertext
        ));
    }

    #[test]
    fn test_payload_containing_marker_motif_roundtrips() {
        // "GATTACA" as payload symbols corresponds to these bytes; the
        // marker is position-verified, so the motif inside the payload
        // must not confuse the split
        let motif_bytes = codec::decode(&"GATTACAGATTACAGA".parse().unwrap());
        let ciphertext = encrypt(&motif_bytes, b"key").unwrap();
        assert_eq!(decrypt(&ciphertext, b"key").unwrap(), motif_bytes);
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let a = encrypt(b"same input", b"same key").unwrap();
        let b = encrypt(b"same input", b"same key").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_ciphertext_differs_from_payload_encoding() {
        let plaintext = b"plaintext material";
        let ciphertext = encrypt(plaintext, b"key").unwrap();
        let encoded = codec::encode(plaintext);
        assert_ne!(
            &ciphertext.as_slice()[..encoded.len()],
            encoded.as_slice()
        );
    }

    #[test]
    fn test_constant_time_eq() {
        let a: SymbolString = "ACGT".parse().unwrap();
        let b: SymbolString = "ACGA".parse().unwrap();
        assert!(constant_time_eq(a.as_slice(), a.as_slice()));
        assert!(!constant_time_eq(a.as_slice(), b.as_slice()));
        assert!(!constant_time_eq(a.as_slice(), &a.as_slice()[..3]));
    }
}

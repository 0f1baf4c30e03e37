//! Lossless conversion between byte strings and symbol strings.
//!
//! Bytes expand to 8-bit big-endian groups, the combined bit string is
//! partitioned into 2-bit groups, and each group maps to one symbol
//! (`00` → A, `01` → C, `10` → G, `11` → T). Pure functions, no state.

use crate::symbol::{Symbol, SymbolString};

/// Encode bytes as symbols. Each byte yields exactly 4 symbols,
/// most-significant bit pair first.
pub fn encode(bytes: &[u8]) -> SymbolString {
    let mut out = SymbolString::with_capacity(bytes.len() * 4);
    for &byte in bytes {
        for shift in [6u8, 4, 2, 0] {
            out.push(Symbol::from_index((byte >> shift) & 0b11));
        }
    }
    out
}

/// Encode a bit sequence (one bit per element, values 0/1) as symbols.
///
/// If the bit count is odd, a single `0` bit is appended so the final
/// 2-bit group is complete. Used by the entropy path, where material
/// arrives as bits rather than bytes.
pub fn encode_bits(bits: &[u8]) -> SymbolString {
    let mut out = SymbolString::with_capacity(bits.len().div_ceil(2));
    for pair in bits.chunks(2) {
        let hi = pair[0] & 1;
        let lo = if pair.len() == 2 { pair[1] & 1 } else { 0 };
        out.push(Symbol::from_index((hi << 1) | lo));
    }
    out
}

/// Decode symbols back to bytes. Each symbol contributes 2 bits; any
/// trailing group shorter than 8 bits is discarded.
///
/// The discard recovers the padding `encode_bits` may have added, but it
/// also means a bit-level input of odd length cannot be restored
/// unambiguously from the symbol string alone. Byte-aligned inputs
/// (everything `encode` produces) always decode exactly: 4 symbols per
/// byte, no remainder.
pub fn decode(symbols: &SymbolString) -> Vec<u8> {
    let mut out = Vec::with_capacity(symbols.len() / 4);
    for group in symbols.as_slice().chunks_exact(4) {
        let mut byte = 0u8;
        for symbol in group {
            byte = (byte << 2) | symbol.index();
        }
        out.push(byte);
    }
    out
}

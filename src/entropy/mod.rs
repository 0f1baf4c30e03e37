//! Entropy providers for key material.
//!
//! A provider supplies a bit string believed to be high-entropy; the cipher
//! assumes no further structure. Two implementations: the operating system
//! RNG, and a simulated quantum circuit whose measured register seeds a
//! SHA3-256 conditioning stream.

pub mod circuit;

use crate::codec;
use crate::error::Result;
use crate::symbol::SymbolString;
use self::circuit::{keygen_circuit, Register};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use sha3::{Digest, Sha3_256};

/// Default register width for the quantum provider
pub const DEFAULT_QUBITS: usize = 16;

/// A source of key-material bits. `generate_bits` returns `n_bits`
/// elements, each 0 or 1.
pub trait EntropyProvider {
    fn generate_bits(&mut self, n_bits: usize) -> Vec<u8>;
}

/// Operating-system randomness, unpacked to bits
#[derive(Debug, Default)]
pub struct OsEntropy;

impl EntropyProvider for OsEntropy {
    fn generate_bits(&mut self, n_bits: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; n_bits.div_ceil(8)];
        OsRng.fill_bytes(&mut bytes);
        unpack_bits(&bytes, n_bits)
    }
}

/// Entropy from a simulated quantum register.
///
/// Each request runs the key-generation circuit (uniform superposition plus
/// an entangling chain) on a fresh register, measures it, and expands the
/// measured bits through a domain-separated SHA3-256 counter stream to the
/// requested length. Measurement sampling draws from the supplied RNG, so a
/// seeded RNG makes the provider fully deterministic.
#[derive(Debug)]
pub struct QuantumEntropy<R: Rng> {
    qubits: usize,
    rng: R,
}

impl QuantumEntropy<StdRng> {
    /// Provider with OS-seeded measurement sampling
    pub fn new(qubits: usize) -> Result<Self> {
        // Validate the width up front so generate_bits stays infallible
        Register::new(qubits)?;
        Ok(Self {
            qubits,
            rng: StdRng::from_entropy(),
        })
    }
}

impl<R: Rng> QuantumEntropy<R> {
    /// Provider with caller-supplied measurement sampling
    pub fn with_rng(qubits: usize, rng: R) -> Result<Self> {
        Register::new(qubits)?;
        Ok(Self { qubits, rng })
    }

    fn measure_seed(&mut self) -> Vec<u8> {
        let mut register =
            Register::new(self.qubits).expect("width validated at construction");
        register.run(&keygen_circuit(self.qubits));
        let bits = register.measure(&mut self.rng);
        pack_bits(&bits)
    }
}

impl<R: Rng> EntropyProvider for QuantumEntropy<R> {
    fn generate_bits(&mut self, n_bits: usize) -> Vec<u8> {
        let seed = self.measure_seed();
        let bytes = conditioning_stream(&seed, n_bits.div_ceil(8));
        unpack_bits(&bytes, n_bits)
    }
}

/// Expand a seed to `length` bytes with a SHA3-256 counter stream
fn conditioning_stream(seed: &[u8], length: usize) -> Vec<u8> {
    let mut stream = Vec::with_capacity(length);
    let mut counter = 0u64;

    while stream.len() < length {
        let mut hasher = Sha3_256::new();
        hasher.update(b"helixcrypt_entropy_v1");
        hasher.update(seed);
        hasher.update(counter.to_le_bytes());
        let hash = hasher.finalize();

        for &byte in hash.iter() {
            if stream.len() >= length {
                break;
            }
            stream.push(byte);
        }
        counter += 1;
    }

    stream
}

/// Generate a random symbol-string key of `length` symbols (2 bits each)
pub fn generate_key<P: EntropyProvider + ?Sized>(
    provider: &mut P,
    length: usize,
) -> SymbolString {
    codec::encode_bits(&provider.generate_bits(length * 2))
}

fn pack_bits(bits: &[u8]) -> Vec<u8> {
    let mut bytes = vec![0u8; bits.len().div_ceil(8)];
    for (i, &bit) in bits.iter().enumerate() {
        bytes[i / 8] |= (bit & 1) << (7 - i % 8);
    }
    bytes
}

fn unpack_bits(bytes: &[u8], n_bits: usize) -> Vec<u8> {
    (0..n_bits)
        .map(|i| (bytes[i / 8] >> (7 - i % 8)) & 1)
        .collect()
}

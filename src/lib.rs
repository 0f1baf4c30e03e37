//! Helixcrypt - Nucleotide-Alphabet Stream Cipher and Codec
//!
//! A reversible mapping between arbitrary byte strings and the four-symbol
//! alphabet {A, C, G, T}, combined with a hash-derived keystream and a
//! truncated-digest integrity tag.
//!
//! ## Transform Pipeline
//!
//! ```text
//! Plaintext → Encode → Tag append → ℤ₄ keystream add → Ciphertext
//! Ciphertext → ℤ₄ keystream subtract → Tag verify → Decode → Plaintext
//! ```
//!
//! - **Encode**: 8-bit big-endian expansion, 2-bit groups, `00→A 01→C 10→G 11→T`
//! - **Tag**: truncated SHA-256 of the payload, codec-encoded, appended
//!   behind a fixed `GATTACA` marker
//! - **Keystream**: SHA-256 chain extension of the codec-encoded key
//! - **Combine**: position-wise addition mod 4 over symbol indices
//!
//! Every operation is a pure, single-shot function: no session state, no
//! construction-time side effects, each call recomputes its derived
//! material.
//!
//! This is a teaching codec. The additive construction over a 4-symbol
//! alphabet falls to frequency and known-plaintext analysis; do not use it
//! to protect real data.
//!
//! ## Example
//!
//! ```
//! use helixcrypt::{cipher, entropy};
//!
//! let key = b"correct horse battery staple";
//! let ciphertext = cipher::encrypt(b"hello", key).unwrap();
//! assert_eq!(cipher::decrypt(&ciphertext, key).unwrap(), b"hello");
//!
//! // Or generate a symbol-string key from an entropy provider
//! let mut provider = entropy::OsEntropy;
//! let dna_key = entropy::generate_key(&mut provider, 32).to_string();
//! let ct = cipher::encrypt(b"hello", dna_key.as_bytes()).unwrap();
//! assert_eq!(cipher::decrypt(&ct, dna_key.as_bytes()).unwrap(), b"hello");
//! ```

pub mod analysis;
pub mod audit;
pub mod cipher;
pub mod cli;
pub mod codec;
pub mod entropy;
pub mod error;
pub mod keystream;
pub mod symbol;

pub use cipher::{decrypt, encrypt};
pub use error::{HelixError, Result};
pub use symbol::{Symbol, SymbolString};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelixError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid symbol {0:?}. Alphabet is A, C, G, T (case-insensitive)")]
    InvalidSymbol(char),

    #[error("Malformed ciphertext: delimiter marker not found")]
    MalformedCiphertext,

    #[error("Integrity violation: tag mismatch (wrong key or tampered data)")]
    IntegrityViolation,

    #[error("Key required: an empty key cannot be used")]
    KeyRequired,

    #[error("Invalid qubit count: {0}. Must be between 2 and 20")]
    InvalidQubitCount(usize),

    #[error("Unsupported entropy source: {0}. Use 'quantum' or 'os'")]
    UnsupportedSource(String),
}

pub type Result<T> = std::result::Result<T, HelixError>;

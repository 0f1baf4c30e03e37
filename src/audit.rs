//! Operation event records.
//!
//! Call sites may emit one record per cipher operation to an `EventSink`.
//! The cipher itself never touches this module; everything here is driven
//! by the caller, and every operation works with no sink configured.

use crate::error::Result;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Which operation a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Encrypt,
    Decrypt,
    Keygen,
}

/// Metadata for one cipher operation. Holds lengths and a key fingerprint,
/// never key or payload material.
#[derive(Debug, Clone, Serialize)]
pub struct OperationRecord {
    pub kind: OperationKind,
    pub input_len: usize,
    pub output_len: usize,
    /// Truncated blake3 hash of the key, hex (empty for keygen)
    pub key_fingerprint: String,
    /// "ok" or the error description
    pub outcome: String,
    pub unix_time_secs: u64,
}

/// Fingerprint length in bytes before hex rendering
const FINGERPRINT_BYTES: usize = 8;

impl OperationRecord {
    pub fn new(kind: OperationKind, input_len: usize, output_len: usize) -> Self {
        Self {
            kind,
            input_len,
            output_len,
            key_fingerprint: String::new(),
            outcome: "ok".to_string(),
            unix_time_secs: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0),
        }
    }

    pub fn with_key(mut self, key: &[u8]) -> Self {
        self.key_fingerprint = key_fingerprint(key);
        self
    }

    pub fn with_outcome(mut self, outcome: impl Into<String>) -> Self {
        self.outcome = outcome.into();
        self
    }
}

/// Truncated blake3 fingerprint of key material, hex-rendered
pub fn key_fingerprint(key: &[u8]) -> String {
    let hash = blake3::hash(key);
    hex::encode(&hash.as_bytes()[..FINGERPRINT_BYTES])
}

/// Destination for operation records
pub trait EventSink {
    fn record(&mut self, record: &OperationRecord) -> Result<()>;
}

/// Discards every record
#[derive(Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _record: &OperationRecord) -> Result<()> {
        Ok(())
    }
}

/// Appends one JSON object per line to a file
pub struct JsonlSink {
    writer: BufWriter<File>,
}

impl JsonlSink {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl EventSink for JsonlSink {
    fn record(&mut self, record: &OperationRecord) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

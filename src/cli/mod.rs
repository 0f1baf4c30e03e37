pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod stats;

pub use decrypt::*;
pub use encrypt::*;
pub use keygen::*;
pub use stats::*;

use crate::audit::{EventSink, JsonlSink, NullSink, OperationRecord};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// How a command obtains its key: inline text or a file.
/// A key file holding symbol text is used as the bytes of its canonical
/// uppercase rendering, so keygen output plugs in directly.
#[derive(Debug, Clone)]
pub enum KeySource {
    Text(String),
    File(PathBuf),
}

impl KeySource {
    pub fn load(&self) -> Result<Vec<u8>> {
        match self {
            KeySource::Text(text) => Ok(text.as_bytes().to_vec()),
            KeySource::File(path) => {
                let raw = std::fs::read(path)?;
                if let Ok(text) = std::str::from_utf8(&raw) {
                    let stripped: String =
                        text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
                    if let Ok(symbols) = stripped.parse::<crate::symbol::SymbolString>() {
                        return Ok(symbols.to_string().into_bytes());
                    }
                }
                // Not symbol text: use the file contents as raw key bytes
                Ok(raw)
            }
        }
    }
}

/// Open the audit sink for an optional `--audit-log` path
pub(crate) fn open_sink(path: Option<&Path>) -> Result<Box<dyn EventSink>> {
    match path {
        Some(path) => Ok(Box::new(JsonlSink::open(path)?)),
        None => Ok(Box::new(NullSink)),
    }
}

/// Record an operation, ignoring sink failures: auditing must never mask
/// the result of the operation itself.
pub(crate) fn emit(sink: &mut dyn EventSink, record: OperationRecord) {
    let _ = sink.record(&record);
}

use crate::audit::{OperationKind, OperationRecord};
use crate::cli::{emit, open_sink};
use crate::entropy::{generate_key, EntropyProvider, OsEntropy, QuantumEntropy};
use crate::error::{HelixError, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which entropy source backs key generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeySourceKind {
    #[default]
    Quantum,
    Os,
}

impl FromStr for KeySourceKind {
    type Err = HelixError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "quantum" => Ok(Self::Quantum),
            "os" => Ok(Self::Os),
            other => Err(HelixError::UnsupportedSource(other.to_string())),
        }
    }
}

/// Options for the keygen command
#[derive(Debug, Clone)]
pub struct KeygenOptions {
    /// Key length in symbols
    pub length: usize,
    /// Register width for the quantum source
    pub qubits: usize,
    pub source: KeySourceKind,
    pub audit_log: Option<PathBuf>,
}

impl Default for KeygenOptions {
    fn default() -> Self {
        Self {
            length: 64,
            qubits: crate::entropy::DEFAULT_QUBITS,
            source: KeySourceKind::default(),
            audit_log: None,
        }
    }
}

/// Generate a symbol-string key and write it to a file.
/// Returns the key length in symbols.
pub fn keygen_file(output_path: &Path, options: &KeygenOptions) -> Result<usize> {
    let mut provider: Box<dyn EntropyProvider> = match options.source {
        KeySourceKind::Quantum => Box::new(QuantumEntropy::new(options.qubits)?),
        KeySourceKind::Os => Box::new(OsEntropy),
    };

    let key = generate_key(provider.as_mut(), options.length);
    std::fs::write(output_path, format!("{}\n", key))?;

    let mut sink = open_sink(options.audit_log.as_deref())?;
    emit(
        &mut *sink,
        OperationRecord::new(OperationKind::Keygen, 0, key.len()),
    );

    Ok(key.len())
}

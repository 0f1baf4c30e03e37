use crate::audit::{OperationKind, OperationRecord};
use crate::cipher;
use crate::cli::{emit, open_sink, KeySource};
use crate::error::Result;
use crate::symbol::SymbolString;
use std::path::{Path, PathBuf};

/// Options for the decrypt command
#[derive(Debug, Clone)]
pub struct DecryptOptions {
    pub key: KeySource,
    pub audit_log: Option<PathBuf>,
}

/// Parse a ciphertext symbol file and write the recovered plaintext bytes.
/// Returns the plaintext length.
///
/// ASCII whitespace is stripped before parsing (files carry newlines);
/// anything else outside the alphabet is an `InvalidSymbol` error.
pub fn decrypt_file(
    input_path: &Path,
    output_path: &Path,
    options: &DecryptOptions,
) -> Result<usize> {
    let text = std::fs::read_to_string(input_path)?;
    let stripped: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let ciphertext: SymbolString = stripped.parse()?;

    let key = options.key.load()?;
    let mut sink = open_sink(options.audit_log.as_deref())?;

    let record = OperationRecord::new(OperationKind::Decrypt, ciphertext.len(), 0).with_key(&key);

    match cipher::decrypt(&ciphertext, &key) {
        Ok(plaintext) => {
            std::fs::write(output_path, &plaintext)?;
            emit(
                &mut *sink,
                OperationRecord {
                    output_len: plaintext.len(),
                    ..record
                },
            );
            Ok(plaintext.len())
        }
        Err(e) => {
            emit(&mut *sink, record.with_outcome(e.to_string()));
            Err(e)
        }
    }
}

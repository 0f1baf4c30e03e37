use crate::audit::{OperationKind, OperationRecord};
use crate::cipher;
use crate::cli::{emit, open_sink, KeySource};
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Options for the encrypt command
#[derive(Debug, Clone)]
pub struct EncryptOptions {
    pub key: KeySource,
    pub audit_log: Option<PathBuf>,
}

/// Encrypt a file's bytes and write the ciphertext symbol text.
/// Returns the ciphertext length in symbols.
pub fn encrypt_file(
    input_path: &Path,
    output_path: &Path,
    options: &EncryptOptions,
) -> Result<usize> {
    let plaintext = std::fs::read(input_path)?;
    let key = options.key.load()?;
    let mut sink = open_sink(options.audit_log.as_deref())?;

    let record = OperationRecord::new(OperationKind::Encrypt, plaintext.len(), 0).with_key(&key);

    match cipher::encrypt(&plaintext, &key) {
        Ok(ciphertext) => {
            std::fs::write(output_path, format!("{}\n", ciphertext))?;
            emit(
                &mut *sink,
                OperationRecord {
                    output_len: ciphertext.len(),
                    ..record
                },
            );
            Ok(ciphertext.len())
        }
        Err(e) => {
            emit(&mut *sink, record.with_outcome(e.to_string()));
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_encrypt_file_writes_symbol_text() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.dna");
        std::fs::write(&input, b"hello").unwrap();

        let options = EncryptOptions {
            key: KeySource::Text("key".into()),
            audit_log: None,
        };
        let len = encrypt_file(&input, &output, &options).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let body = text.trim_end();
        assert_eq!(body.len(), len);
        assert!(body.chars().all(|c| "ACGT".contains(c)));
    }

    #[test]
    fn test_encrypt_empty_key_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.dna");
        std::fs::write(&input, b"hello").unwrap();

        let options = EncryptOptions {
            key: KeySource::Text(String::new()),
            audit_log: None,
        };
        assert!(encrypt_file(&input, &output, &options).is_err());
    }

    #[test]
    fn test_encrypt_writes_audit_record() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("input.txt");
        let output = dir.path().join("output.dna");
        let log = dir.path().join("audit.jsonl");
        std::fs::write(&input, b"data").unwrap();

        let options = EncryptOptions {
            key: KeySource::Text("key".into()),
            audit_log: Some(log.clone()),
        };
        encrypt_file(&input, &output, &options).unwrap();

        let contents = std::fs::read_to_string(&log).unwrap();
        let record: serde_json::Value =
            serde_json::from_str(contents.lines().next().unwrap()).unwrap();
        assert_eq!(record["kind"], "encrypt");
        assert_eq!(record["outcome"], "ok");
    }
}

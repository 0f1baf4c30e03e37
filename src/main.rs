use clap::{Parser, Subcommand};
use helixcrypt::cli::{
    decrypt_file, encrypt_file, keygen_file, show_stats, DecryptOptions, EncryptOptions,
    KeySource, KeySourceKind, KeygenOptions,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("HELIXCRYPT_VERSION");
const BUILD: &str = env!("HELIXCRYPT_BUILD");
const PROFILE: &str = env!("HELIXCRYPT_PROFILE");
const GIT_HASH: &str = env!("HELIXCRYPT_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING
        .get_or_init(|| format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "helixcrypt")]
#[command(author, about = "Nucleotide-alphabet stream cipher and codec", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file into a symbol sequence
    #[command(alias = "e")]
    Encrypt {
        /// Key text
        #[arg(long, conflicts_with = "key_file")]
        key: Option<String>,

        /// Read the key from a file (symbol text or raw bytes)
        #[arg(long)]
        key_file: Option<PathBuf>,

        /// Append operation records to this JSON-lines file
        #[arg(long)]
        audit_log: Option<PathBuf>,

        /// Input file (plaintext bytes)
        input: PathBuf,

        /// Output file (symbol text)
        output: PathBuf,
    },

    /// Decrypt a symbol sequence back into bytes
    #[command(alias = "d")]
    Decrypt {
        /// Key text
        #[arg(long, conflicts_with = "key_file")]
        key: Option<String>,

        /// Read the key from a file (symbol text or raw bytes)
        #[arg(long)]
        key_file: Option<PathBuf>,

        /// Append operation records to this JSON-lines file
        #[arg(long)]
        audit_log: Option<PathBuf>,

        /// Input file (symbol text)
        input: PathBuf,

        /// Output file (plaintext bytes)
        output: PathBuf,
    },

    /// Generate a random symbol-string key
    #[command(alias = "k")]
    Keygen {
        /// Key length in symbols
        #[arg(long, default_value = "64")]
        length: usize,

        /// Simulated register width for the quantum source
        #[arg(long, default_value = "16")]
        qubits: usize,

        /// Entropy source
        #[arg(long, default_value = "quantum", value_parser = parse_source)]
        source: KeySourceKind,

        /// Append operation records to this JSON-lines file
        #[arg(long)]
        audit_log: Option<PathBuf>,

        /// Output key file
        output: PathBuf,
    },

    /// Analyze a symbol-sequence file
    #[command(alias = "s")]
    Stats {
        /// Symbol file to analyze
        file: PathBuf,
    },
}

fn parse_source(s: &str) -> Result<KeySourceKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn key_source(key: Option<String>, key_file: Option<PathBuf>) -> Result<KeySource, String> {
    match (key, key_file) {
        (Some(text), None) => Ok(KeySource::Text(text)),
        (None, Some(path)) => Ok(KeySource::File(path)),
        (None, None) => Err("one of --key or --key-file is required".to_string()),
        (Some(_), Some(_)) => Err("--key and --key-file are mutually exclusive".to_string()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("helixcrypt {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            key,
            key_file,
            audit_log,
            input,
            output,
        } => match key_source(key, key_file) {
            Ok(source) => {
                let options = EncryptOptions {
                    key: source,
                    audit_log,
                };
                match encrypt_file(&input, &output, &options) {
                    Ok(symbols) => {
                        println!("Encrypted {} symbols to {}", symbols, output.display());
                        Ok(())
                    }
                    Err(e) => Err(e.to_string()),
                }
            }
            Err(e) => Err(e),
        },

        Commands::Decrypt {
            key,
            key_file,
            audit_log,
            input,
            output,
        } => match key_source(key, key_file) {
            Ok(source) => {
                let options = DecryptOptions {
                    key: source,
                    audit_log,
                };
                match decrypt_file(&input, &output, &options) {
                    Ok(bytes) => {
                        println!("Decrypted {} bytes to {}", bytes, output.display());
                        Ok(())
                    }
                    Err(e) => Err(e.to_string()),
                }
            }
            Err(e) => Err(e),
        },

        Commands::Keygen {
            length,
            qubits,
            source,
            audit_log,
            output,
        } => {
            let options = KeygenOptions {
                length,
                qubits,
                source,
                audit_log,
            };
            match keygen_file(&output, &options) {
                Ok(symbols) => {
                    println!("Wrote {}-symbol key to {}", symbols, output.display());
                    Ok(())
                }
                Err(e) => Err(e.to_string()),
            }
        }

        Commands::Stats { file } => match show_stats(&file) {
            Ok(report) => {
                print!("{}", report);
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

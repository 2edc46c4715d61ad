use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Terminal,
    /// Machine-readable JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "kasiski")]
#[command(about = "Statistical cryptanalysis of Vigenère-family ciphers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a ciphertext file: rank likely key lengths and, given one,
    /// recover the key and plaintext
    Analyze {
        /// Path to the ciphertext file (uppercase A-Z, line breaks ignored)
        path: PathBuf,

        /// Key length to recover with; omit to print the coincidence
        /// profile only
        #[arg(short = 'k', long = "key-length")]
        key_length: Option<usize>,

        /// Largest shift checked for coincidences
        #[arg(long = "shift-max", default_value = "16")]
        shift_max: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod core;
pub mod io;

// Re-export commonly used types
pub use crate::core::{
    AnalysisReport, Bucket, Ciphertext, CoincidenceEntry, CoincidenceProfile, Key, Plaintext,
};

pub use crate::core::errors::{Error, Result};

pub use crate::analysis::{
    alphabet::{correlation_matrix, ENGLISH_FREQUENCIES},
    buckets::bucketize,
    coincidence::coincidence_profile,
    decode::decode,
    normalize::normalize,
    recover::{empirical_frequencies, recover_key},
};

pub use crate::io::output::{create_writer, OutputWriter};

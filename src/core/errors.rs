//! Shared error types for the application

use thiserror::Error;

/// Main error type for kasiski operations
#[derive(Debug, Error)]
pub enum Error {
    /// Ciphertext contains a character outside A-Z after line breaks are
    /// stripped. Reported at the normalization boundary so no out-of-range
    /// letter code ever reaches the statistics.
    #[error("invalid ciphertext character {character:?} at position {position} (expected A-Z)")]
    InvalidInput { position: usize, character: char },

    /// A key position received no ciphertext letters, so its letter
    /// frequencies would divide by zero.
    #[error("key position {position} has no ciphertext letters; choose a key length no larger than the ciphertext")]
    EmptyBucket { position: usize },

    /// Zero-length key passed to the decoder.
    #[error("cannot decode with an empty key")]
    InvalidKey,

    /// Zero key length passed to the bucketizer.
    #[error("key length must be at least 1")]
    InvalidKeyLength,

    /// A letter code outside [0, 25] was supplied directly.
    #[error("letter code {code} at position {position} is outside 0..=25")]
    InvalidLetterCode { position: usize, code: u8 },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

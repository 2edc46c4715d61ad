pub mod errors;

use serde::{Deserialize, Serialize};
use std::fmt;

use self::errors::{Error, Result};

/// Number of letters in the cipher alphabet.
pub const ALPHABET_LEN: usize = 26;

fn validate_codes(codes: &[u8]) -> Result<()> {
    match codes.iter().position(|&c| c >= ALPHABET_LEN as u8) {
        Some(position) => Err(Error::InvalidLetterCode {
            position,
            code: codes[position],
        }),
        None => Ok(()),
    }
}

fn render_lowercase(codes: &[u8]) -> String {
    codes.iter().map(|&c| (b'a' + c) as char).collect()
}

/// An immutable sequence of letter codes in [0, 25], A=0.
///
/// Constructed through [`crate::analysis::normalize::normalize`] or the
/// validating [`Ciphertext::from_codes`]; both reject anything outside the
/// 26-letter alphabet, so downstream statistics never index out of range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    pub fn from_codes(codes: Vec<u8>) -> Result<Self> {
        validate_codes(&codes)?;
        Ok(Self(codes))
    }

    pub fn codes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The ciphertext letters encrypted under one key position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bucket {
    /// Key position this bucket belongs to, in [0, key length).
    pub position: usize,
    codes: Vec<u8>,
}

impl Bucket {
    pub(crate) fn new(position: usize, codes: Vec<u8>) -> Self {
        Self { position, codes }
    }

    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// A recovered key: one Caesar shift per key position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Key(Vec<u8>);

impl Key {
    pub fn from_codes(codes: Vec<u8>) -> Result<Self> {
        if codes.is_empty() {
            return Err(Error::InvalidKey);
        }
        validate_codes(&codes)?;
        Ok(Self(codes))
    }

    pub fn shifts(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_lowercase(&self.0))
    }
}

/// Decoded plaintext, same length as the ciphertext it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plaintext(Vec<u8>);

impl Plaintext {
    pub(crate) fn new(codes: Vec<u8>) -> Self {
        Self(codes)
    }

    pub fn from_codes(codes: Vec<u8>) -> Result<Self> {
        validate_codes(&codes)?;
        Ok(Self(codes))
    }

    pub fn codes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Plaintext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_lowercase(&self.0))
    }
}

/// One row of the coincidence profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoincidenceEntry {
    pub shift: usize,
    pub count: usize,
}

/// Coincidence counts per shift, sorted by descending count with ties
/// broken by smaller shift. Advisory only; the key length is chosen by
/// the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoincidenceProfile {
    pub entries: Vec<CoincidenceEntry>,
}

impl CoincidenceProfile {
    pub fn new(mut entries: Vec<CoincidenceEntry>) -> Self {
        entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.shift.cmp(&b.shift)));
        Self { entries }
    }
}

/// Everything one analysis run produces, in the shape the output writers
/// consume.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ciphertext_len: usize,
    pub shift_max: usize,
    pub profile: CoincidenceProfile,
    pub key_length: Option<usize>,
    pub key: Option<String>,
    pub plaintext: Option<String>,
}

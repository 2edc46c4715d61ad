//! Modular decoding of the ciphertext under a recovered key.

use crate::core::errors::{Error, Result};
use crate::core::{Ciphertext, Key, Plaintext, ALPHABET_LEN};

/// Applies the per-position shifts: `pt[i] = (ct[i] - key[i mod L]) mod 26`.
pub fn decode(ciphertext: &Ciphertext, key: &Key) -> Result<Plaintext> {
    if key.is_empty() {
        return Err(Error::InvalidKey);
    }

    let shifts = key.shifts();
    let codes = ciphertext
        .codes()
        .iter()
        .enumerate()
        .map(|(i, &code)| {
            let shift = shifts[i % shifts.len()];
            (code + ALPHABET_LEN as u8 - shift) % ALPHABET_LEN as u8
        })
        .collect();

    Ok(Plaintext::new(codes))
}

/// Encrypts plaintext codes under a key. The inverse of [`decode`], used
/// by tests and by anyone producing fixtures.
pub fn encode(plaintext: &Plaintext, key: &Key) -> Result<Ciphertext> {
    if key.is_empty() {
        return Err(Error::InvalidKey);
    }

    let shifts = key.shifts();
    let codes = plaintext
        .codes()
        .iter()
        .enumerate()
        .map(|(i, &code)| (code + shifts[i % shifts.len()]) % ALPHABET_LEN as u8)
        .collect();

    Ciphertext::from_codes(codes)
}

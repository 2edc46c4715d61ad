//! Key recovery via frequency-shift correlation.
//!
//! Each bucket was encrypted under a single Caesar shift, so its letter
//! distribution is the English distribution rotated by that shift.
//! Multiplying the bucket's empirical frequency row vector by the
//! shift-correlation matrix yields, for every candidate shift at once, the
//! dot product between the bucket and that rotation of English; the argmax
//! is the recovered shift. Closed form, O(26*26) per bucket.

use log::debug;
use rayon::prelude::*;

use crate::analysis::alphabet::correlation_matrix;
use crate::core::errors::{Error, Result};
use crate::core::{Bucket, Key, ALPHABET_LEN};

/// Computes a bucket's empirical letter-frequency vector (count / length).
///
/// An empty bucket has no defined frequencies and is rejected before any
/// division happens.
pub fn empirical_frequencies(bucket: &Bucket) -> Result<[f64; ALPHABET_LEN]> {
    if bucket.is_empty() {
        return Err(Error::EmptyBucket {
            position: bucket.position,
        });
    }

    let mut counts = [0usize; ALPHABET_LEN];
    for &code in bucket.codes() {
        counts[code as usize] += 1;
    }

    let len = bucket.len() as f64;
    let mut frequencies = [0.0; ALPHABET_LEN];
    for (slot, &count) in frequencies.iter_mut().zip(counts.iter()) {
        *slot = count as f64 / len;
    }
    Ok(frequencies)
}

fn best_shift(frequencies: &[f64; ALPHABET_LEN]) -> u8 {
    let matrix = correlation_matrix();
    let mut best = 0usize;
    let mut best_score = f64::MIN;
    for candidate in 0..ALPHABET_LEN {
        let score: f64 = (0..ALPHABET_LEN)
            .map(|row| frequencies[row] * matrix[row][candidate])
            .sum();
        // Strict comparison keeps the lowest shift on ties.
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }
    best as u8
}

/// Recovers one Caesar shift per bucket.
///
/// Buckets are mutually independent, so they are scored in parallel. Any
/// empty bucket aborts the recovery with [`Error::EmptyBucket`].
pub fn recover_key(buckets: &[Bucket]) -> Result<Key> {
    let shifts = buckets
        .par_iter()
        .map(|bucket| {
            let frequencies = empirical_frequencies(bucket)?;
            let shift = best_shift(&frequencies);
            debug!("bucket {}: {} letters, shift {}", bucket.position, bucket.len(), shift);
            Ok(shift)
        })
        .collect::<Result<Vec<u8>>>()?;

    Key::from_codes(shifts)
}

//! Interleaved partition of the ciphertext by key position.

use crate::core::errors::{Error, Result};
use crate::core::{Bucket, Ciphertext};

/// Splits the ciphertext into `key_length` buckets, where bucket `p` holds
/// the letters at indices congruent to `p` modulo the key length.
///
/// The buckets partition the ciphertext exactly. A key length larger than
/// the text produces empty trailing buckets; those surface as
/// [`Error::EmptyBucket`] in the key recoverer, not here, so callers can
/// still inspect the partition.
pub fn bucketize(ciphertext: &Ciphertext, key_length: usize) -> Result<Vec<Bucket>> {
    if key_length == 0 {
        return Err(Error::InvalidKeyLength);
    }

    let codes = ciphertext.codes();
    Ok((0..key_length)
        .map(|position| {
            let slice: Vec<u8> = codes.iter().skip(position).step_by(key_length).copied().collect();
            Bucket::new(position, slice)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::normalize::normalize;
    use pretty_assertions::assert_eq;

    #[test]
    fn buckets_interleave_by_position() {
        let ct = normalize("ABCDEFG").unwrap();
        let buckets = bucketize(&ct, 3).unwrap();
        assert_eq!(buckets[0].codes(), &[0, 3, 6]);
        assert_eq!(buckets[1].codes(), &[1, 4]);
        assert_eq!(buckets[2].codes(), &[2, 5]);
    }

    #[test]
    fn partition_is_exact() {
        let ct = normalize("THEQUICKBROWNFOX").unwrap();
        let n = ct.len();
        for key_length in 1..=n {
            let buckets = bucketize(&ct, key_length).unwrap();
            let total: usize = buckets.iter().map(Bucket::len).sum();
            assert_eq!(total, n);

            // Re-interleave and compare with the original.
            let mut rebuilt = vec![0u8; n];
            for bucket in &buckets {
                for (k, &code) in bucket.codes().iter().enumerate() {
                    rebuilt[bucket.position + k * key_length] = code;
                }
            }
            assert_eq!(rebuilt, ct.codes());
        }
    }

    #[test]
    fn zero_key_length_is_rejected() {
        let ct = normalize("ABC").unwrap();
        assert!(matches!(bucketize(&ct, 0), Err(Error::InvalidKeyLength)));
    }

    #[test]
    fn oversized_key_length_yields_empty_buckets() {
        let ct = normalize("ABC").unwrap();
        let buckets = bucketize(&ct, 5).unwrap();
        assert_eq!(buckets.len(), 5);
        assert!(buckets[3].is_empty());
        assert!(buckets[4].is_empty());
    }
}

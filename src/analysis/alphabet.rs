//! Reference English letter frequencies and the derived shift-correlation
//! matrix.

use once_cell::sync::Lazy;

use crate::core::ALPHABET_LEN;

/// Standard English unigram frequencies, indexed A=0 through Z=25.
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

static CORRELATION_MATRIX: Lazy<[[f64; ALPHABET_LEN]; ALPHABET_LEN]> = Lazy::new(|| {
    let mut matrix = [[0.0; ALPHABET_LEN]; ALPHABET_LEN];
    for column in 0..ALPHABET_LEN {
        for row in 0..ALPHABET_LEN {
            matrix[row][column] =
                ENGLISH_FREQUENCIES[(row + ALPHABET_LEN - column) % ALPHABET_LEN];
        }
    }
    matrix
});

/// The 26x26 matrix whose column `i` is the reference distribution rotated
/// right by `i`. Multiplying an empirical frequency row vector by this
/// matrix scores every candidate Caesar shift in one pass.
pub fn correlation_matrix() -> &'static [[f64; ALPHABET_LEN]; ALPHABET_LEN] {
    &CORRELATION_MATRIX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_distribution_sums_to_one() {
        // The published table is rounded to five decimal places, so the
        // sum lands within rounding error of 1.
        let total: f64 = ENGLISH_FREQUENCIES.iter().sum();
        assert!((total - 1.0).abs() < 1e-3, "sum was {total}");
    }

    #[test]
    fn column_rotated_back_equals_reference() {
        let matrix = correlation_matrix();
        for column in 0..ALPHABET_LEN {
            for row in 0..ALPHABET_LEN {
                let unrotated = (row + ALPHABET_LEN - column) % ALPHABET_LEN;
                assert_eq!(matrix[row][column], ENGLISH_FREQUENCIES[unrotated]);
            }
        }
    }

    #[test]
    fn column_zero_is_the_reference_distribution() {
        let matrix = correlation_matrix();
        for row in 0..ALPHABET_LEN {
            assert_eq!(matrix[row][0], ENGLISH_FREQUENCIES[row]);
        }
    }
}

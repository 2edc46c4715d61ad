//! Kasiski-style key-length estimation via cyclic self-coincidence.

use log::warn;

use crate::core::{Ciphertext, CoincidenceEntry, CoincidenceProfile};

/// Counts, for each shift in 1..=shift_max, the positions where the
/// ciphertext matches itself rotated by that shift.
///
/// When the true key length L divides the shift, the compared letters were
/// encrypted under the same Caesar shift, so their coincidence rate
/// approaches plain English (~6.7%) instead of the random-alphabet rate
/// (~3.8%); peaks in the profile point at multiples of L. The ranking is
/// advisory output only. A `shift_max` of N or more is clamped to N-1
/// since a full rotation compares the text with itself.
pub fn coincidence_profile(ciphertext: &Ciphertext, shift_max: usize) -> CoincidenceProfile {
    let n = ciphertext.len();
    let effective_max = if n > 0 && shift_max >= n {
        warn!(
            "shift_max {} is not below the ciphertext length {}; clamping to {}",
            shift_max,
            n,
            n - 1
        );
        n - 1
    } else {
        shift_max
    };

    let codes = ciphertext.codes();
    let entries = (1..=effective_max)
        .map(|shift| CoincidenceEntry {
            shift,
            count: (0..n).filter(|&i| codes[i] == codes[(i + shift) % n]).count(),
        })
        .collect();

    CoincidenceProfile::new(entries)
}

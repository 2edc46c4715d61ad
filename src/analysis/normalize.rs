//! The normalization boundary between raw text and letter codes.

use crate::core::errors::{Error, Result};
use crate::core::Ciphertext;

/// Converts raw ciphertext into letter codes 0-25.
///
/// Line breaks (`\n`, `\r`) are stripped, not treated as content. Every
/// remaining character must be an uppercase A-Z; the first violation is
/// reported with its position in the stripped stream, so malformed input
/// never reaches the statistics.
pub fn normalize(raw: &str) -> Result<Ciphertext> {
    let mut codes = Vec::with_capacity(raw.len());
    for character in raw.chars().filter(|c| *c != '\n' && *c != '\r') {
        if !character.is_ascii_uppercase() {
            return Err(Error::InvalidInput {
                position: codes.len(),
                character,
            });
        }
        codes.push(character as u8 - b'A');
    }
    Ciphertext::from_codes(codes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn maps_uppercase_letters_to_codes() {
        let ct = normalize("ABCZ").unwrap();
        assert_eq!(ct.codes(), &[0, 1, 2, 25]);
    }

    #[test]
    fn strips_line_breaks() {
        let ct = normalize("AB\nCD\r\nEF\n").unwrap();
        assert_eq!(ct.codes(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn rejects_lowercase() {
        let err = normalize("ABcD").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput {
                position: 2,
                character: 'c'
            }
        ));
    }

    #[test]
    fn rejects_digits() {
        let err = normalize("AB3D").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidInput {
                position: 2,
                character: '3'
            }
        ));
    }

    #[test]
    fn position_counts_stripped_stream_not_raw_offset() {
        // The '\n' before the bad character does not advance the position.
        let err = normalize("AB\n!").unwrap_err();
        assert!(matches!(err, Error::InvalidInput { position: 2, .. }));
    }

    #[test]
    fn empty_input_yields_empty_ciphertext() {
        let ct = normalize("\n\n").unwrap();
        assert!(ct.is_empty());
    }
}

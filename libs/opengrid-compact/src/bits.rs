//! # Bit Packing
//!
//! MSB-first bit packing and the base64url engine shared by all payload
//! fields.

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use config::constants::packed_len;

use crate::error::CompactError;

/// URL-safe alphabet. Never emits `=`, accepts it when present, and ignores
/// non-zero bits left over in the final symbol.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Packs bits row-major, MSB first; the last byte is zero-padded.
pub fn pack_bits<I>(bits: I) -> Vec<u8>
where
    I: IntoIterator<Item = bool>,
{
    let mut bytes = Vec::new();
    for (index, bit) in bits.into_iter().enumerate() {
        if index % 8 == 0 {
            bytes.push(0);
        }
        if bit {
            if let Some(last) = bytes.last_mut() {
                *last |= 0x80 >> (index % 8);
            }
        }
    }
    bytes
}

/// Reads the first `count` bits of `bytes`, MSB first.
///
/// Returns `None` if `bytes` holds fewer than `count` bits. Trailing bytes
/// and padding bits are ignored.
pub fn unpack_bits(bytes: &[u8], count: usize) -> Option<Vec<bool>> {
    if bytes.len() < packed_len(count) {
        return None;
    }
    Some(
        (0..count)
            .map(|index| bytes[index / 8] & (0x80 >> (index % 8)) != 0)
            .collect(),
    )
}

pub fn encode_payload(bytes: &[u8]) -> String {
    PAYLOAD_ENGINE.encode(bytes)
}

pub fn decode_payload(field: &'static str, text: &str) -> Result<Vec<u8>, CompactError> {
    PAYLOAD_ENGINE
        .decode(text)
        .map_err(|err| CompactError::base64(field, err))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_msb_first() {
        assert_eq!(pack_bits([true, true, true, true]), vec![0xF0]);
        assert_eq!(pack_bits([true; 9]), vec![0xFF, 0x80]);
        assert_eq!(pack_bits([false, true]), vec![0x40]);
        assert!(pack_bits(std::iter::empty()).is_empty());
    }

    #[test]
    fn test_unpack_ignores_padding_bits() {
        assert_eq!(unpack_bits(&[0xFF], 3), Some(vec![true, true, true]));
        let bits = unpack_bits(&[0x80, 0x00, 0x01], 9).unwrap();
        assert_eq!(bits.iter().filter(|&&b| b).count(), 1);
        assert!(bits[0]);
        assert_eq!(unpack_bits(&[0xFF], 9), None);
    }

    #[test]
    fn test_payload_alphabet() {
        assert_eq!(encode_payload(&[0x2A, 0x50, 0x0A]), "KlAK");
        assert_eq!(encode_payload(&[0xF0]), "8A");
        assert_eq!(encode_payload(&[0xFF, 0x80]), "_4A");
        assert_eq!(encode_payload(&[0xFB, 0xF0]), "-_A");
    }

    #[test]
    fn test_payload_padding_tolerated() {
        assert_eq!(decode_payload("tiles", "8A").unwrap(), vec![0xF0]);
        assert_eq!(decode_payload("tiles", "8A==").unwrap(), vec![0xF0]);
        assert_eq!(decode_payload("tiles", "").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_payload_rejects_standard_alphabet() {
        let err = decode_payload("summits", "/4A").unwrap_err();
        assert!(matches!(err, CompactError::InvalidBase64 { field: "summits", .. }));
    }
}

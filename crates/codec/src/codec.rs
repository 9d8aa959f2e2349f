//! Text → key and key → text conversion pipelines.
//!
//! Both directions are a single linear pass: one length gate at entry, one
//! hex-validity gate while packing digits. Field offsets are fixed per text
//! format; the permutation itself lives in [`UuidFields`].

use crate::fields::UuidFields;
use crate::hex;
use crate::{CodecError, CodecResult, KEY_LEN, TEXT_LEN_HYPHENATED, TEXT_LEN_SIMPLE};

/// Whether UUID text carries dash separators.
///
/// Hyphenated text is 36 characters with dashes at indices 8, 13, 18, 23;
/// simple text is the same 32 hex digits with the dashes omitted. The
/// default is hyphenated, matching what UUID generators print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextFormat {
    #[default]
    Hyphenated,
    Simple,
}

/// Character index of each separator in hyphenated text.
const SEPARATOR_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Character offset of each field's first hex digit, per format.
struct FieldOffsets {
    time_low: usize,
    time_mid: usize,
    time_hi_and_version: usize,
    clock_seq: usize,
    node: usize,
}

impl TextFormat {
    /// Expected text length for this format.
    pub const fn text_len(self) -> usize {
        match self {
            TextFormat::Hyphenated => TEXT_LEN_HYPHENATED,
            TextFormat::Simple => TEXT_LEN_SIMPLE,
        }
    }

    const fn field_offsets(self) -> FieldOffsets {
        match self {
            TextFormat::Hyphenated => FieldOffsets {
                time_low: 0,
                time_mid: 9,
                time_hi_and_version: 14,
                clock_seq: 19,
                node: 24,
            },
            TextFormat::Simple => FieldOffsets {
                time_low: 0,
                time_mid: 8,
                time_hi_and_version: 12,
                clock_seq: 16,
                node: 20,
            },
        }
    }
}

/// Converts UUID text to the 16-byte optimized binary key.
///
/// Input hex is accepted in either case. Hyphenated input must carry literal
/// dashes at the separator positions.
///
/// # Errors
///
/// - [`CodecError::InvalidLength`] if `text` is not exactly 36
///   (`Hyphenated`) or 32 (`Simple`) bytes.
/// - [`CodecError::InvalidSeparator`] if a separator position in hyphenated
///   input holds anything other than `-`.
/// - [`CodecError::InvalidHexDigit`] if any digit position holds a non-hex
///   character; the reported position is the index in `text`.
pub fn encode(text: &str, format: TextFormat) -> CodecResult<[u8; KEY_LEN]> {
    let bytes = text.as_bytes();
    if bytes.len() != format.text_len() {
        return Err(CodecError::InvalidLength {
            expected: format.text_len(),
            actual: bytes.len(),
        });
    }

    if format == TextFormat::Hyphenated {
        for position in SEPARATOR_POSITIONS {
            if bytes[position] != b'-' {
                return Err(CodecError::InvalidSeparator {
                    byte: bytes[position] as char,
                    position,
                });
            }
        }
    }

    let offsets = format.field_offsets();
    let fields = UuidFields {
        time_low: decode_field(bytes, offsets.time_low)?,
        time_mid: decode_field(bytes, offsets.time_mid)?,
        time_hi_and_version: decode_field(bytes, offsets.time_hi_and_version)?,
        clock_seq: decode_field(bytes, offsets.clock_seq)?,
        node: decode_field(bytes, offsets.node)?,
    };

    Ok(fields.to_key_bytes())
}

/// Converts a 16-byte optimized binary key back to UUID text.
///
/// Output is always lowercase, 36 characters for `Hyphenated` and 32 for
/// `Simple`.
///
/// # Errors
///
/// Returns [`CodecError::InvalidLength`] if `binary` is not exactly 16
/// bytes. Raw key bytes need no further validation.
pub fn decode(binary: &[u8], format: TextFormat) -> CodecResult<String> {
    let key: &[u8; KEY_LEN] = binary
        .try_into()
        .map_err(|_| CodecError::InvalidLength {
            expected: KEY_LEN,
            actual: binary.len(),
        })?;
    Ok(format_key(key, format))
}

/// Null-propagating [`encode`]: an absent input is an absent output, not an
/// error.
pub fn encode_opt(text: Option<&str>, format: TextFormat) -> CodecResult<Option<[u8; KEY_LEN]>> {
    text.map(|t| encode(t, format)).transpose()
}

/// Null-propagating [`decode`].
pub fn decode_opt(binary: Option<&[u8]>, format: TextFormat) -> CodecResult<Option<String>> {
    binary.map(|b| decode(b, format)).transpose()
}

/// Renders a key whose length is already known to be 16 bytes.
pub(crate) fn format_key(key: &[u8; KEY_LEN], format: TextFormat) -> String {
    let fields = UuidFields::from_key_bytes(key);
    let mut out = String::with_capacity(format.text_len());
    for byte in fields.to_rfc_bytes() {
        let [hi, lo] = hex::byte_to_hex_pair(byte);
        out.push(hi as char);
        out.push(lo as char);
        if format == TextFormat::Hyphenated && matches!(out.len(), 8 | 13 | 18 | 23) {
            out.push('-');
        }
    }
    out
}

/// Packs `N * 2` hex digits starting at `offset` into `N` bytes, reporting
/// the absolute input position of the first invalid digit.
fn decode_field<const N: usize>(text: &[u8], offset: usize) -> CodecResult<[u8; N]> {
    let mut out = [0u8; N];
    for (index, byte) in out.iter_mut().enumerate() {
        let position = offset + index * 2;
        *byte = hex::hex_pair_to_byte(text[position], text[position + 1]).ok_or_else(|| {
            let bad = if hex::hex_digit_to_value(text[position]).is_none() {
                position
            } else {
                position + 1
            };
            CodecError::InvalidHexDigit {
                byte: text[bad] as char,
                position: bad,
            }
        })?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HYPHENATED: &str = "01234567-89ab-cdef-0123-456789abcdef";
    const SAMPLE_SIMPLE: &str = "0123456789abcdef0123456789abcdef";
    const SAMPLE_KEY: [u8; 16] = [
        0xcd, 0xef, 0x89, 0xab, 0x01, 0x23, 0x45, 0x67, 0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd,
        0xef,
    ];

    #[test]
    fn test_encode_permutes_fields() {
        let key = encode(SAMPLE_HYPHENATED, TextFormat::Hyphenated).unwrap();
        assert_eq!(key, SAMPLE_KEY);
    }

    #[test]
    fn test_encode_simple_matches_hyphenated() {
        let dashed = encode(SAMPLE_HYPHENATED, TextFormat::Hyphenated).unwrap();
        let undashed = encode(SAMPLE_SIMPLE, TextFormat::Simple).unwrap();
        assert_eq!(dashed, undashed);
    }

    #[test]
    fn test_decode_restores_text() {
        let text = decode(&SAMPLE_KEY, TextFormat::Hyphenated).unwrap();
        assert_eq!(text, SAMPLE_HYPHENATED);

        let text = decode(&SAMPLE_KEY, TextFormat::Simple).unwrap();
        assert_eq!(text, SAMPLE_SIMPLE);
    }

    #[test]
    fn test_round_trip_hyphenated() {
        let key = encode(SAMPLE_HYPHENATED, TextFormat::Hyphenated).unwrap();
        let text = decode(&key, TextFormat::Hyphenated).unwrap();
        assert_eq!(text, SAMPLE_HYPHENATED);
    }

    #[test]
    fn test_round_trip_simple() {
        let key = encode(SAMPLE_SIMPLE, TextFormat::Simple).unwrap();
        let text = decode(&key, TextFormat::Simple).unwrap();
        assert_eq!(text, SAMPLE_SIMPLE);
    }

    #[test]
    fn test_encode_normalizes_uppercase_input() {
        let upper = "01234567-89AB-CDEF-0123-456789ABCDEF";
        let key = encode(upper, TextFormat::Hyphenated).unwrap();
        assert_eq!(key, SAMPLE_KEY);

        // Output is always lowercase
        assert_eq!(
            decode(&key, TextFormat::Hyphenated).unwrap(),
            SAMPLE_HYPHENATED
        );
    }

    #[test]
    fn test_encode_rejects_wrong_length() {
        for input in ["", "0123", SAMPLE_SIMPLE, "01234567-89ab-cdef-0123-456789abcdef0"] {
            let result = encode(input, TextFormat::Hyphenated);
            match result {
                Err(CodecError::InvalidLength { expected, actual }) => {
                    assert_eq!(expected, 36);
                    assert_eq!(actual, input.len());
                }
                other => panic!("expected InvalidLength, got {:?}", other),
            }
        }

        // The same text is the wrong length for the other mode
        let result = encode(SAMPLE_HYPHENATED, TextFormat::Simple);
        assert!(matches!(
            result,
            Err(CodecError::InvalidLength {
                expected: 32,
                actual: 36
            })
        ));
    }

    #[test]
    fn test_encode_rejects_non_hex_digit() {
        let result = encode("zzzzzzzz-1234-1234-1234-123456789abc", TextFormat::Hyphenated);
        match result {
            Err(CodecError::InvalidHexDigit { byte, position }) => {
                assert_eq!(byte, 'z');
                assert_eq!(position, 0);
            }
            other => panic!("expected InvalidHexDigit, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_reports_position_in_original_input() {
        // Bad digit in the node field: the position refers to the input
        // text, not the reordered hex stream.
        let result = encode("01234567-89ab-cdef-0123-45678*abcdef", TextFormat::Hyphenated);
        match result {
            Err(CodecError::InvalidHexDigit { byte, position }) => {
                assert_eq!(byte, '*');
                assert_eq!(position, 29);
            }
            other => panic!("expected InvalidHexDigit, got {:?}", other),
        }

        // Second digit of a pair is attributed correctly
        let result = encode("0x234567-89ab-cdef-0123-456789abcdef", TextFormat::Hyphenated);
        match result {
            Err(CodecError::InvalidHexDigit { byte, position }) => {
                assert_eq!(byte, 'x');
                assert_eq!(position, 1);
            }
            other => panic!("expected InvalidHexDigit, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_rejects_misplaced_separator() {
        // Hex digit where a dash belongs
        let result = encode("01234567089ab-cdef-0123-456789abcdef", TextFormat::Hyphenated);
        match result {
            Err(CodecError::InvalidSeparator { byte, position }) => {
                assert_eq!(byte, '0');
                assert_eq!(position, 8);
            }
            other => panic!("expected InvalidSeparator, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_rejects_non_ascii() {
        // Multi-byte UTF-8 lands in a digit position as a non-hex byte
        let input = "é1234567-89ab-cdef-0123-456789abcde";
        assert_eq!(input.len(), 36);
        assert!(encode(input, TextFormat::Hyphenated).is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        for len in [0, 1, 15, 17, 32] {
            let bytes = vec![0u8; len];
            let result = decode(&bytes, TextFormat::Hyphenated);
            match result {
                Err(CodecError::InvalidLength { expected, actual }) => {
                    assert_eq!(expected, 16);
                    assert_eq!(actual, len);
                }
                other => panic!("expected InvalidLength, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_decode_all_zero_and_all_ff() {
        assert_eq!(
            decode(&[0u8; 16], TextFormat::Hyphenated).unwrap(),
            "00000000-0000-0000-0000-000000000000"
        );
        assert_eq!(
            decode(&[0xffu8; 16], TextFormat::Simple).unwrap(),
            "ffffffffffffffffffffffffffffffff"
        );
    }

    #[test]
    fn test_time_ordered_uuids_share_key_prefix() {
        // Two v1-style UUIDs an instant apart differ only in time_low; their
        // keys agree on the leading timestamp-high bytes.
        let a = encode("11111111-2222-1333-8444-555555555555", TextFormat::Hyphenated).unwrap();
        let b = encode("99999999-2222-1333-8444-555555555555", TextFormat::Hyphenated).unwrap();
        assert_eq!(a[0..4], b[0..4]);
        assert_ne!(a[4..8], b[4..8]);
        assert!(a < b);
    }

    #[test]
    fn test_encode_opt_propagates_none() {
        assert!(encode_opt(None, TextFormat::Hyphenated).unwrap().is_none());
        assert!(decode_opt(None, TextFormat::Simple).unwrap().is_none());
    }

    #[test]
    fn test_encode_opt_converts_some() {
        let key = encode_opt(Some(SAMPLE_HYPHENATED), TextFormat::Hyphenated)
            .unwrap()
            .unwrap();
        assert_eq!(key, SAMPLE_KEY);

        let text = decode_opt(Some(&SAMPLE_KEY[..]), TextFormat::Hyphenated)
            .unwrap()
            .unwrap();
        assert_eq!(text, SAMPLE_HYPHENATED);
    }

    #[test]
    fn test_encode_opt_still_fails_on_malformed_some() {
        let result = encode_opt(Some("not-a-uuid"), TextFormat::Hyphenated);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_format_is_hyphenated() {
        assert_eq!(TextFormat::default(), TextFormat::Hyphenated);
        assert_eq!(TextFormat::default().text_len(), 36);
    }
}

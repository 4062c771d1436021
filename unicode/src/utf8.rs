//! Stateless UTF-8 transcoder.

use textcore::{
    DecodeResult, DecodeResultOf, EmptyState, EncodeResult, EncodeResultOf, Encoding, ErrorCode,
    ErrorHandler,
};

/// Longest UTF-8 sequence for one scalar.
pub const UTF8_MAX_LEN: usize = 4;

/// Outcome of scanning the front of a byte slice for one UTF-8 sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf8Scan {
    /// A complete, well-formed sequence of `len` bytes.
    Scalar { scalar: char, len: usize },
    /// A well-formed prefix that needs more bytes.
    Incomplete { len: usize },
    /// An ill-formed sequence; `len` is the maximal invalid subpart (at least 1).
    Invalid { len: usize },
}

/// Returns the full sequence length implied by a lead byte, or 0 if the byte
/// can never start a sequence.
#[must_use]
pub const fn sequence_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}

/// Valid range of the byte after `lead`, excluding overlongs, surrogates and
/// values above U+10FFFF.
const fn second_byte_range(lead: u8) -> (u8, u8) {
    match lead {
        0xE0 => (0xA0, 0xBF),
        0xED => (0x80, 0x9F),
        0xF0 => (0x90, 0xBF),
        0xF4 => (0x80, 0x8F),
        _ => (0x80, 0xBF),
    }
}

/// Scans one sequence at the front of `bytes`.
///
/// `bytes` must not be empty. Bytes past the first sequence are ignored.
#[must_use]
pub fn scan_utf8(bytes: &[u8]) -> Utf8Scan {
    let lead = bytes[0];
    let width = sequence_width(lead);
    if width == 0 {
        return Utf8Scan::Invalid { len: 1 };
    }
    if width == 1 {
        return Utf8Scan::Scalar {
            scalar: char::from(lead),
            len: 1,
        };
    }

    let mut value = u32::from(lead & (0x7F >> width));
    for idx in 1..width {
        let Some(&byte) = bytes.get(idx) else {
            return Utf8Scan::Incomplete { len: idx };
        };
        let (low, high) = if idx == 1 {
            second_byte_range(lead)
        } else {
            (0x80, 0xBF)
        };
        if !(low..=high).contains(&byte) {
            return Utf8Scan::Invalid { len: idx };
        }
        value = (value << 6) | u32::from(byte & 0x3F);
    }

    match char::from_u32(value) {
        Some(scalar) => Utf8Scan::Scalar { scalar, len: width },
        None => Utf8Scan::Invalid { len: width },
    }
}

/// The UTF-8 encoding over `u8` code units.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Encoding for Utf8 {
    type CodeUnit = u8;
    type DecodeState = EmptyState;
    type EncodeState = EmptyState;

    const MAX_CODE_POINTS: usize = 1;
    const MAX_CODE_UNITS: usize = UTF8_MAX_LEN;
    const IS_DECODE_INJECTIVE: bool = true;
    const IS_ENCODE_INJECTIVE: bool = true;

    fn name(&self) -> &str {
        "UTF-8"
    }

    fn decode_one<'i, 'o, 's, H>(
        &self,
        input: &'i [u8],
        output: &'o mut [char],
        handler: &mut H,
        state: &'s mut EmptyState,
    ) -> DecodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        if input.is_empty() {
            return DecodeResult::new(input, output, state, ErrorCode::Ok);
        }
        let strict = handler.kind().is_strict();
        if output.is_empty() {
            let result = DecodeResult::new(input, output, state, ErrorCode::InsufficientOutputSpace);
            return if strict {
                handler.handle_decode(self, result, &[])
            } else {
                result
            };
        }

        let (code, len) = match scan_utf8(input) {
            Utf8Scan::Scalar { scalar, len } => {
                output[0] = scalar;
                return DecodeResult::new(&input[len..], &mut output[1..], state, ErrorCode::Ok);
            }
            Utf8Scan::Incomplete { len } => (ErrorCode::IncompleteSequence, len),
            Utf8Scan::Invalid { len } => (ErrorCode::InvalidSequence, len),
        };
        let result = DecodeResult::new(input, output, state, code);
        if strict {
            handler.handle_decode(self, result, &input[..len])
        } else {
            result
        }
    }

    fn encode_one<'i, 'o, 's, H>(
        &self,
        input: &'i [char],
        output: &'o mut [u8],
        handler: &mut H,
        state: &'s mut EmptyState,
    ) -> EncodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        let Some(&scalar) = input.first() else {
            return EncodeResult::new(input, output, state, ErrorCode::Ok);
        };
        let mut buf = [0u8; UTF8_MAX_LEN];
        let len = scalar.encode_utf8(&mut buf).len();
        if output.len() < len {
            let result = EncodeResult::new(input, output, state, ErrorCode::InsufficientOutputSpace);
            return if handler.kind().is_strict() {
                handler.handle_encode(self, result, &input[..1])
            } else {
                result
            };
        }
        output[..len].copy_from_slice(&buf[..len]);
        EncodeResult::new(&input[1..], &mut output[len..], state, ErrorCode::Ok)
    }
}

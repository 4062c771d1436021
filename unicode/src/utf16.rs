//! Stateless UTF-16 transcoder, in native `u16` units.

use textcore::{
    DecodeResult, DecodeResultOf, EmptyState, EncodeResult, EncodeResultOf, Encoding, ErrorCode,
    ErrorHandler,
};

const HIGH_SURROGATES: std::ops::RangeInclusive<u16> = 0xD800..=0xDBFF;
const LOW_SURROGATES: std::ops::RangeInclusive<u16> = 0xDC00..=0xDFFF;

/// The UTF-16 encoding over `u16` code units.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16;

impl Encoding for Utf16 {
    type CodeUnit = u16;
    type DecodeState = EmptyState;
    type EncodeState = EmptyState;

    const MAX_CODE_POINTS: usize = 1;
    const MAX_CODE_UNITS: usize = 2;
    const IS_DECODE_INJECTIVE: bool = true;
    const IS_ENCODE_INJECTIVE: bool = true;

    fn name(&self) -> &str {
        "UTF-16"
    }

    fn decode_one<'i, 'o, 's, H>(
        &self,
        input: &'i [u16],
        output: &'o mut [char],
        handler: &mut H,
        state: &'s mut EmptyState,
    ) -> DecodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        let Some(&lead) = input.first() else {
            return DecodeResult::new(input, output, state, ErrorCode::Ok);
        };
        let strict = handler.kind().is_strict();
        if output.is_empty() {
            let result = DecodeResult::new(input, output, state, ErrorCode::InsufficientOutputSpace);
            return if strict {
                handler.handle_decode(self, result, &[])
            } else {
                result
            };
        }

        let (scalar, len) = if HIGH_SURROGATES.contains(&lead) {
            match input.get(1) {
                Some(&trail) if LOW_SURROGATES.contains(&trail) => {
                    let value = 0x1_0000
                        + ((u32::from(lead) - 0xD800) << 10)
                        + (u32::from(trail) - 0xDC00);
                    (char::from_u32(value), 2)
                }
                Some(_) => (None, 1),
                None => {
                    let result =
                        DecodeResult::new(input, output, state, ErrorCode::IncompleteSequence);
                    return if strict {
                        handler.handle_decode(self, result, &input[..1])
                    } else {
                        result
                    };
                }
            }
        } else {
            (char::from_u32(u32::from(lead)), 1)
        };

        match scalar {
            Some(scalar) => {
                output[0] = scalar;
                DecodeResult::new(&input[len..], &mut output[1..], state, ErrorCode::Ok)
            }
            None => {
                let result = DecodeResult::new(input, output, state, ErrorCode::InvalidSequence);
                if strict {
                    handler.handle_decode(self, result, &input[..1])
                } else {
                    result
                }
            }
        }
    }

    fn encode_one<'i, 'o, 's, H>(
        &self,
        input: &'i [char],
        output: &'o mut [u16],
        handler: &mut H,
        state: &'s mut EmptyState,
    ) -> EncodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        let Some(&scalar) = input.first() else {
            return EncodeResult::new(input, output, state, ErrorCode::Ok);
        };
        let mut buf = [0u16; 2];
        let len = scalar.encode_utf16(&mut buf).len();
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

#[cfg(test)]
mod tests {
    use super::*;
    use textcore::{IgnoreHandler, PropagateHandler};

    fn decode(units: &[u16]) -> (ErrorCode, usize, char) {
        let mut out = ['\0'; 1];
        let mut state = EmptyState;
        let result = Utf16.decode_one(units, &mut out, &mut PropagateHandler, &mut state);
        (result.error_code, units.len() - result.input.len(), out[0])
    }

    #[test]
    fn decode_bmp_scalar() {
        assert_eq!(decode(&[0x00E9]), (ErrorCode::Ok, 1, 'é'));
    }

    #[test]
    fn decode_surrogate_pair() {
        assert_eq!(decode(&[0xD83D, 0xDE00]), (ErrorCode::Ok, 2, '😀'));
    }

    #[test]
    fn decode_lone_low_surrogate_is_invalid() {
        assert_eq!(decode(&[0xDC00]), (ErrorCode::InvalidSequence, 0, '\0'));
    }

    #[test]
    fn decode_unpaired_high_surrogate_is_invalid() {
        assert_eq!(
            decode(&[0xD83D, 0x0041]),
            (ErrorCode::InvalidSequence, 0, '\0')
        );
    }

    #[test]
    fn decode_trailing_high_surrogate_is_incomplete() {
        assert_eq!(decode(&[0xD83D]), (ErrorCode::IncompleteSequence, 0, '\0'));
    }

    #[test]
    fn ignoring_handler_still_gets_error_code() {
        let mut out = ['\0'; 1];
        let mut state = EmptyState;
        let result = Utf16.decode_one(&[0xDC00], &mut out, &mut IgnoreHandler, &mut state);
        assert_eq!(result.error_code, ErrorCode::InvalidSequence);
    }

    #[test]
    fn encode_supplementary_scalar() {
        let mut out = [0u16; 2];
        let mut state = EmptyState;
        let result = Utf16.encode_one(&['😀'], &mut out, &mut PropagateHandler, &mut state);
        assert!(result.is_ok());
        assert!(result.output.is_empty());
        assert_eq!(out, [0xD83D, 0xDE00]);
    }

    #[test]
    fn encode_needs_room_for_pair() {
        let mut out = [0u16; 1];
        let mut state = EmptyState;
        let result = Utf16.encode_one(&['😀'], &mut out, &mut PropagateHandler, &mut state);
        assert_eq!(result.error_code, ErrorCode::InsufficientOutputSpace);
        assert_eq!(result.input.len(), 1);
    }
}

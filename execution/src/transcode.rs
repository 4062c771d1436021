//! Whole-buffer conversions built on the one-unit operations.

use locale::MB_LEN_MAX;
use textcore::{Encoding, ErrorHandler};

use crate::error::{TranscodeError, TranscodeResult};
use crate::execution::{Execution, MAX_CODE_POINTS};

/// Decodes all of `input` with one state, draining buffered output at the end.
pub fn decode_to_string<H>(
    encoding: &Execution,
    input: &[u8],
    handler: &mut H,
) -> TranscodeResult<String>
where
    H: ErrorHandler<Execution>,
{
    let mut state = encoding.decode_state();
    let mut text = String::with_capacity(input.len());
    let mut buf = ['\0'; MAX_CODE_POINTS];
    let mut rest = input;

    while !rest.is_empty() || state.has_pending() {
        let offset = input.len() - rest.len();
        let result = if rest.is_empty() {
            encoding.drain_one(&mut buf, handler, &mut state)
        } else {
            encoding.decode_one(rest, &mut buf, handler, &mut state)
        };
        let code = result.error_code;
        let written = MAX_CODE_POINTS - result.output.len();
        let next = result.input;
        if !code.is_ok() {
            return Err(TranscodeError::Failed { code, offset });
        }
        if written == 0 && next.len() == rest.len() {
            return Err(TranscodeError::Stalled { offset });
        }
        text.extend(&buf[..written]);
        rest = next;
    }
    Ok(text)
}

/// Encodes all of `text` with one state, ending in the initial shift state.
pub fn encode_to_vec<H>(
    encoding: &Execution,
    text: &str,
    handler: &mut H,
) -> TranscodeResult<Vec<u8>>
where
    H: ErrorHandler<Execution>,
{
    let scalars: Vec<char> = text.chars().collect();
    let mut state = encoding.encode_state();
    let mut bytes = Vec::with_capacity(text.len());
    let mut buf = [0u8; MB_LEN_MAX];
    let mut rest = scalars.as_slice();

    while !rest.is_empty() {
        let offset = text.len() - rest.iter().map(|c| c.len_utf8()).sum::<usize>();
        let result = encoding.encode_one(rest, &mut buf, handler, &mut state);
        let code = result.error_code;
        let written = MB_LEN_MAX - result.output.len();
        let next = result.input;
        if !code.is_ok() {
            return Err(TranscodeError::Failed { code, offset });
        }
        if written == 0 && next.len() == rest.len() {
            return Err(TranscodeError::Stalled { offset });
        }
        bytes.extend_from_slice(&buf[..written]);
        rest = next;
    }

    let written = encoding.unshift(&mut state, &mut buf);
    bytes.extend_from_slice(&buf[..written]);
    Ok(bytes)
}

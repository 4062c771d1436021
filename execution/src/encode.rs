//! Encode engines: one scalar value to narrow bytes per call.
//!
//! Callers have already handled empty input and zero output capacity.

use locale::{wide_to_multi_byte, MB_LEN_MAX};
use textcore::{
    advance_mut, EmptyState, EncodeResult, EncodeResultOf, Encoding, ErrorCode, ErrorHandler,
    ProgressHandler, PropagateHandler,
};
use unicode::{Utf16, Utf8};

use crate::call::{native_error_code, Call};
use crate::execution::Execution;
use crate::state::EncodeState;

/// Delegates to the stateless UTF-8 transcoder, re-reporting its failures
/// against the execution encoding.
pub(crate) fn fast_utf8<'i, 'o, 's, H>(
    call: &mut Call<'_, H>,
    input: &'i [char],
    output: &'o mut [u8],
    state: &'s mut EncodeState,
) -> EncodeResultOf<'i, 'o, 's, Execution>
where
    H: ErrorHandler<Execution>,
{
    let mut progress = ProgressHandler::<u8>::new(call.kind);
    let mut inner = EmptyState;
    let EncodeResult {
        input,
        output,
        error_code,
        ..
    } = Utf8.encode_one(input, output, &mut progress, &mut inner);
    let result = EncodeResult::new(input, output, state, error_code);
    if error_code.is_ok() {
        result
    } else {
        call.encode_failed(result, progress.points())
    }
}

/// Converts one scalar through the locale's narrow primitive.
pub(crate) fn direct_narrow<'i, 'o, 's, H>(
    call: &mut Call<'_, H>,
    input: &'i [char],
    output: &'o mut [u8],
    state: &'s mut EncodeState,
) -> EncodeResultOf<'i, 'o, 's, Execution>
where
    H: ErrorHandler<Execution>,
{
    let mut probe = state.shift.clone();
    let mut buf = [0u8; MB_LEN_MAX];
    let Some(len) = call.charset.encode(input[0], &mut probe, &mut buf) else {
        let result = EncodeResult::new(input, output, state, ErrorCode::InvalidSequence);
        return call.encode_failed(result, &input[..1]);
    };
    state.shift = probe;
    write_unit(call, &buf[..len.min(MB_LEN_MAX)], input, output, state)
}

/// Converts one scalar to UTF-16, then to narrow bytes with the native wide
/// primitive.
pub(crate) fn wide_bridge<'i, 'o, 's, H>(
    call: &mut Call<'_, H>,
    input: &'i [char],
    output: &'o mut [u8],
    state: &'s mut EncodeState,
) -> EncodeResultOf<'i, 'o, 's, Execution>
where
    H: ErrorHandler<Execution>,
{
    let mut wide = [0u16; 2];
    let mut inner = EmptyState;
    let step = Utf16.encode_one(&input[..1], &mut wide, &mut PropagateHandler, &mut inner);
    let code = step.error_code;
    let wide_len = 2 - step.output.len();
    if !code.is_ok() {
        let result = EncodeResult::new(input, output, state, code);
        return call.encode_failed(result, &input[..1]);
    }

    let mut buf = [0u8; MB_LEN_MAX];
    match wide_to_multi_byte(call.charset, &wide[..wide_len], &mut buf) {
        Ok(len) => write_unit(call, &buf[..len], input, output, state),
        Err(err) => {
            let result = EncodeResult::new(input, output, state, native_error_code(err));
            call.encode_failed(result, &input[..1])
        }
    }
}

/// Copies one converted unit into `output` byte by byte.
///
/// The scalar counts as consumed even when the output runs out part way:
/// the partial write stays visible and the shift state already reflects it.
fn write_unit<'i, 'o, 's, H>(
    call: &mut Call<'_, H>,
    bytes: &[u8],
    input: &'i [char],
    output: &'o mut [u8],
    state: &'s mut EncodeState,
) -> EncodeResultOf<'i, 'o, 's, Execution>
where
    H: ErrorHandler<Execution>,
{
    let fit = bytes.len().min(output.len());
    output[..fit].copy_from_slice(&bytes[..fit]);
    if fit < bytes.len() {
        let result = EncodeResult::new(
            &input[1..],
            advance_mut(output, fit),
            state,
            ErrorCode::InsufficientOutputSpace,
        );
        return call.encode_failed(result, &input[..1]);
    }
    EncodeResult::new(&input[1..], advance_mut(output, fit), state, ErrorCode::Ok)
}

//! Decode engines: narrow bytes to scalar values, one unit per call.
//!
//! Callers have already handled empty input, zero output capacity and
//! pending output, so every engine here sees non-empty input and at least
//! one free output slot.

use locale::{multi_byte_to_wide, DecodeStep, DrainStep, NativeError, WIDE_UNIT_MAX};
use textcore::{
    advance_mut, DecodeResult, DecodeResultOf, EmptyState, Encoding, ErrorCode, ErrorHandler,
    ProgressHandler, PropagateHandler,
};
use unicode::{Utf16, Utf8};

use crate::call::{native_error_code, Call};
use crate::execution::{Execution, MAX_CODE_POINTS};
use crate::state::DecodeState;

/// Emits one scalar buffered by an earlier call without consuming input.
pub(crate) fn drain_pending<'i, 'o, 's, H>(
    call: &mut Call<'_, H>,
    input: &'i [u8],
    output: &'o mut [char],
    state: &'s mut DecodeState,
) -> DecodeResultOf<'i, 'o, 's, Execution>
where
    H: ErrorHandler<Execution>,
{
    if let Some(scalar) = state.take_stashed() {
        output[0] = scalar;
        return DecodeResult::new(input, advance_mut(output, 1), state, ErrorCode::Ok);
    }

    let mut probe = state.shift.clone();
    let scalar = match call.charset.drain(&mut probe) {
        DrainStep::Last(scalar) => {
            state.pending_output = false;
            scalar
        }
        DrainStep::More(scalar) => scalar,
        DrainStep::Invalid => {
            state.pending_output = false;
            let result = DecodeResult::new(input, output, state, ErrorCode::InvalidSequence);
            return call.decode_failed(result, &[]);
        }
    };
    state.shift = probe;
    output[0] = scalar;
    DecodeResult::new(input, advance_mut(output, 1), state, ErrorCode::Ok)
}

/// Delegates to the stateless UTF-8 transcoder, re-reporting its failures
/// against the execution encoding.
pub(crate) fn fast_utf8<'i, 'o, 's, H>(
    call: &mut Call<'_, H>,
    input: &'i [u8],
    output: &'o mut [char],
    state: &'s mut DecodeState,
) -> DecodeResultOf<'i, 'o, 's, Execution>
where
    H: ErrorHandler<Execution>,
{
    let mut progress = ProgressHandler::<u8>::new(call.kind);
    let mut inner = EmptyState;
    let DecodeResult {
        input,
        output,
        error_code,
        ..
    } = Utf8.decode_one(input, output, &mut progress, &mut inner);
    let result = DecodeResult::new(input, output, state, error_code);
    if error_code.is_ok() {
        result
    } else {
        call.decode_failed(result, progress.units())
    }
}

/// Grows a candidate unit one byte at a time through the locale's narrow
/// primitive, committing shift state only on success.
pub(crate) fn direct_narrow<'i, 'o, 's, H>(
    call: &mut Call<'_, H>,
    input: &'i [u8],
    output: &'o mut [char],
    state: &'s mut DecodeState,
) -> DecodeResultOf<'i, 'o, 's, Execution>
where
    H: ErrorHandler<Execution>,
{
    let mut len = 0;
    loop {
        len += 1;
        let mut probe = state.shift.clone();
        let scalar = match call.charset.decode(&input[..len], &mut probe) {
            DecodeStep::Incomplete if len < input.len() && len < call.limit => continue,
            DecodeStep::Incomplete => {
                let result =
                    DecodeResult::new(input, output, state, ErrorCode::IncompleteSequence);
                return call.decode_failed(result, &input[..len]);
            }
            DecodeStep::Invalid => {
                let result = DecodeResult::new(input, output, state, ErrorCode::InvalidSequence);
                return call.decode_failed(result, &input[..len]);
            }
            DecodeStep::Terminator | DecodeStep::ShiftOnly => {
                state.shift = probe;
                return DecodeResult::new(&input[len..], output, state, ErrorCode::Ok);
            }
            DecodeStep::Scalar(scalar) => scalar,
            DecodeStep::MultiResult(scalar) => {
                state.pending_output = true;
                scalar
            }
        };
        state.shift = probe;
        output[0] = scalar;
        return DecodeResult::new(&input[len..], advance_mut(output, 1), state, ErrorCode::Ok);
    }
}

/// Converts the candidate unit to UTF-16 with the native wide primitive,
/// then decodes the UTF-16. Scalars past the first are stashed in the state.
pub(crate) fn wide_bridge<'i, 'o, 's, H>(
    call: &mut Call<'_, H>,
    input: &'i [u8],
    output: &'o mut [char],
    state: &'s mut DecodeState,
) -> DecodeResultOf<'i, 'o, 's, Execution>
where
    H: ErrorHandler<Execution>,
{
    let mut wide = [0u16; WIDE_UNIT_MAX];
    let mut len = 0;
    let wide_len = loop {
        len += 1;
        match multi_byte_to_wide(call.charset, &input[..len], &mut wide) {
            Ok(wide_len) => break wide_len,
            Err(NativeError::Truncated) if len < input.len() && len < call.limit => {}
            Err(err) => {
                let result = DecodeResult::new(input, output, state, native_error_code(err));
                return call.decode_failed(result, &input[..len]);
            }
        }
    };

    let mut scalars = ['\0'; MAX_CODE_POINTS];
    let mut count = 0;
    let mut units = &wide[..wide_len];
    let mut inner = EmptyState;
    while !units.is_empty() {
        let step = Utf16.decode_one(units, &mut scalars[count..], &mut PropagateHandler, &mut inner);
        if !step.is_ok() {
            let result = DecodeResult::new(input, output, state, ErrorCode::InvalidSequence);
            return call.decode_failed(result, &input[..len]);
        }
        units = step.input;
        count += 1;
    }

    let (first, rest) = match &scalars[..count] {
        [] => return DecodeResult::new(&input[len..], output, state, ErrorCode::Ok),
        [first, rest @ ..] => (*first, rest),
    };
    if !state.stash(rest) {
        let result = DecodeResult::new(input, output, state, ErrorCode::InvalidSequence);
        return call.decode_failed(result, &input[..len]);
    }
    output[0] = first;
    DecodeResult::new(&input[len..], advance_mut(output, 1), state, ErrorCode::Ok)
}

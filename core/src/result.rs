//! Results returned by one-unit transcoding operations.
//!
//! Views are slices: `input` is the unconsumed suffix of the caller's input
//! and `output` is the unwritten suffix of the caller's output. On failure
//! both are positioned at the failure point.

use crate::error::ErrorCode;

/// Result of decoding one unit of `U` code units into scalar values.
#[derive(Debug)]
pub struct DecodeResult<'i, 'o, 's, U, S> {
    /// Input not yet consumed.
    pub input: &'i [U],
    /// Output not yet written.
    pub output: &'o mut [char],
    /// The state the call used.
    pub state: &'s mut S,
    /// Outcome of the call.
    pub error_code: ErrorCode,
}

impl<'i, 'o, 's, U, S> DecodeResult<'i, 'o, 's, U, S> {
    /// Creates a result from its parts.
    pub fn new(
        input: &'i [U],
        output: &'o mut [char],
        state: &'s mut S,
        error_code: ErrorCode,
    ) -> Self {
        Self {
            input,
            output,
            state,
            error_code,
        }
    }

    /// Returns `true` if the call succeeded.
    pub const fn is_ok(&self) -> bool {
        self.error_code.is_ok()
    }
}

/// Result of encoding one scalar value into `U` code units.
#[derive(Debug)]
pub struct EncodeResult<'i, 'o, 's, U, S> {
    /// Scalars not yet consumed.
    pub input: &'i [char],
    /// Output not yet written.
    pub output: &'o mut [U],
    /// The state the call used.
    pub state: &'s mut S,
    /// Outcome of the call.
    pub error_code: ErrorCode,
}

impl<'i, 'o, 's, U, S> EncodeResult<'i, 'o, 's, U, S> {
    /// Creates a result from its parts.
    pub fn new(
        input: &'i [char],
        output: &'o mut [U],
        state: &'s mut S,
        error_code: ErrorCode,
    ) -> Self {
        Self {
            input,
            output,
            state,
            error_code,
        }
    }

    /// Returns `true` if the call succeeded.
    pub const fn is_ok(&self) -> bool {
        self.error_code.is_ok()
    }
}

/// Splits off the first `n` elements of a mutable view, keeping the
/// original lifetime for both halves.
pub fn split_view<T>(view: &mut [T], n: usize) -> (&mut [T], &mut [T]) {
    view.split_at_mut(n.min(view.len()))
}

/// Advances a mutable view by `n` elements.
pub fn advance_mut<T>(view: &mut [T], n: usize) -> &mut [T] {
    let n = n.min(view.len());
    &mut view[n..]
}

//! Error-handler protocol and the canonical policies.
//!
//! A handler receives the encoding, the result positioned at the failure and
//! a view of the offending code units (decode) or scalars (encode). It returns
//! a result of the same shape, so it can substitute output, skip input, or
//! pass the failure through unchanged.

use crate::encoding::{DecodeResultOf, EncodeResultOf, Encoding};
use crate::error::ErrorCode;
use crate::result::{split_view, DecodeResult, EncodeResult};

const REPLACEMENT_SCALARS: &[char] = &[char::REPLACEMENT_CHARACTER];

/// Number of diagnostic elements a [`ProgressHandler`] retains.
pub const PROGRESS_CAPACITY: usize = 16;

/// How engines treat a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlerKind {
    /// The handler is invoked on every failure, with full diagnostics.
    #[default]
    Strict,
    /// The handler ignores errors. Engines return the error result directly
    /// and skip building diagnostics.
    Ignoring,
}

impl HandlerKind {
    /// Returns `true` for [`HandlerKind::Strict`].
    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Policy invoked by an encoding whenever a call cannot complete normally.
pub trait ErrorHandler<E: Encoding> {
    /// Fixed when the handler is constructed. Engines read it once per call.
    fn kind(&self) -> HandlerKind {
        HandlerKind::Strict
    }

    /// Handles a decode failure. `units` are the offending code units.
    fn handle_decode<'i, 'o, 's>(
        &mut self,
        encoding: &E,
        result: DecodeResultOf<'i, 'o, 's, E>,
        units: &[E::CodeUnit],
    ) -> DecodeResultOf<'i, 'o, 's, E>;

    /// Handles an encode failure. `points` are the offending scalars.
    fn handle_encode<'i, 'o, 's>(
        &mut self,
        encoding: &E,
        result: EncodeResultOf<'i, 'o, 's, E>,
        points: &[char],
    ) -> EncodeResultOf<'i, 'o, 's, E>;
}

/// Propagate-and-stop: surfaces every failure unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropagateHandler;

impl<E: Encoding> ErrorHandler<E> for PropagateHandler {
    fn handle_decode<'i, 'o, 's>(
        &mut self,
        _encoding: &E,
        result: DecodeResultOf<'i, 'o, 's, E>,
        _units: &[E::CodeUnit],
    ) -> DecodeResultOf<'i, 'o, 's, E> {
        result
    }

    fn handle_encode<'i, 'o, 's>(
        &mut self,
        _encoding: &E,
        result: EncodeResultOf<'i, 'o, 's, E>,
        _points: &[char],
    ) -> EncodeResultOf<'i, 'o, 's, E> {
        result
    }
}

/// Ignores errors. Engines never call into it.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreHandler;

impl<E: Encoding> ErrorHandler<E> for IgnoreHandler {
    fn kind(&self) -> HandlerKind {
        HandlerKind::Ignoring
    }

    fn handle_decode<'i, 'o, 's>(
        &mut self,
        _encoding: &E,
        result: DecodeResultOf<'i, 'o, 's, E>,
        _units: &[E::CodeUnit],
    ) -> DecodeResultOf<'i, 'o, 's, E> {
        result
    }

    fn handle_encode<'i, 'o, 's>(
        &mut self,
        _encoding: &E,
        result: EncodeResultOf<'i, 'o, 's, E>,
        _points: &[char],
    ) -> EncodeResultOf<'i, 'o, 's, E> {
        result
    }
}

/// Substitute-and-continue.
///
/// Invalid and incomplete input is replaced (decode: the encoding's
/// replacement scalars or U+FFFD; encode: its replacement units, or U+FFFD
/// encoded by the encoding itself) and the offending elements are skipped.
/// `InsufficientOutputSpace` passes through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplacementHandler;

impl<E: Encoding> ErrorHandler<E> for ReplacementHandler {
    fn handle_decode<'i, 'o, 's>(
        &mut self,
        encoding: &E,
        result: DecodeResultOf<'i, 'o, 's, E>,
        units: &[E::CodeUnit],
    ) -> DecodeResultOf<'i, 'o, 's, E> {
        if !matches!(
            result.error_code,
            ErrorCode::InvalidSequence | ErrorCode::IncompleteSequence
        ) {
            return result;
        }
        let DecodeResult {
            input,
            output,
            state,
            ..
        } = result;
        let replacement = encoding
            .replacement_code_points()
            .unwrap_or(REPLACEMENT_SCALARS);
        if output.len() < replacement.len() {
            return DecodeResult::new(input, output, state, ErrorCode::InsufficientOutputSpace);
        }
        let (written, rest) = split_view(output, replacement.len());
        written.copy_from_slice(replacement);
        let skip = units.len().min(input.len());
        DecodeResult::new(&input[skip..], rest, state, ErrorCode::Ok)
    }

    fn handle_encode<'i, 'o, 's>(
        &mut self,
        encoding: &E,
        result: EncodeResultOf<'i, 'o, 's, E>,
        points: &[char],
    ) -> EncodeResultOf<'i, 'o, 's, E> {
        if result.error_code != ErrorCode::InvalidSequence {
            return result;
        }
        let EncodeResult {
            input,
            output,
            state,
            ..
        } = result;
        let skip = points.len().min(input.len());
        if let Some(units) = encoding.replacement_code_units() {
            if output.len() < units.len() {
                return EncodeResult::new(input, output, state, ErrorCode::InsufficientOutputSpace);
            }
            let (written, rest) = split_view(output, units.len());
            written.copy_from_slice(units);
            return EncodeResult::new(&input[skip..], rest, state, ErrorCode::Ok);
        }
        let fallback = encoding.encode_one(REPLACEMENT_SCALARS, output, &mut PropagateHandler, state);
        let remaining = if fallback.is_ok() {
            &input[skip..]
        } else {
            input
        };
        EncodeResult::new(remaining, fallback.output, fallback.state, fallback.error_code)
    }
}

/// Pass-through handler that records the diagnostics it was shown.
///
/// Used when one encoding delegates to another: the inner failure is captured
/// here, then re-reported to the caller's handler against the outer encoding.
#[derive(Debug, Clone)]
pub struct ProgressHandler<U> {
    kind: HandlerKind,
    units: [U; PROGRESS_CAPACITY],
    units_len: usize,
    points: [char; PROGRESS_CAPACITY],
    points_len: usize,
}

impl<U: Copy + Default> ProgressHandler<U> {
    /// Creates a recorder that reports `kind` to the inner encoding.
    #[must_use]
    pub fn new(kind: HandlerKind) -> Self {
        Self {
            kind,
            units: [U::default(); PROGRESS_CAPACITY],
            units_len: 0,
            points: ['\0'; PROGRESS_CAPACITY],
            points_len: 0,
        }
    }

    /// Code units seen by the last decode failure.
    pub fn units(&self) -> &[U] {
        &self.units[..self.units_len]
    }

    /// Scalars seen by the last encode failure.
    pub fn points(&self) -> &[char] {
        &self.points[..self.points_len]
    }
}

impl<U: Copy + Default> Default for ProgressHandler<U> {
    fn default() -> Self {
        Self::new(HandlerKind::Strict)
    }
}

impl<E: Encoding> ErrorHandler<E> for ProgressHandler<E::CodeUnit> {
    fn kind(&self) -> HandlerKind {
        self.kind
    }

    fn handle_decode<'i, 'o, 's>(
        &mut self,
        _encoding: &E,
        result: DecodeResultOf<'i, 'o, 's, E>,
        units: &[E::CodeUnit],
    ) -> DecodeResultOf<'i, 'o, 's, E> {
        self.units_len = units.len().min(PROGRESS_CAPACITY);
        self.units[..self.units_len].copy_from_slice(&units[..self.units_len]);
        result
    }

    fn handle_encode<'i, 'o, 's>(
        &mut self,
        _encoding: &E,
        result: EncodeResultOf<'i, 'o, 's, E>,
        points: &[char],
    ) -> EncodeResultOf<'i, 'o, 's, E> {
        self.points_len = points.len().min(PROGRESS_CAPACITY);
        self.points[..self.points_len].copy_from_slice(&points[..self.points_len]);
        result
    }
}

//! The encoding trait every transcoder implements.

use std::fmt;

use crate::handler::ErrorHandler;
use crate::result::{DecodeResult, EncodeResult};

/// Decode result type for encoding `E`.
pub type DecodeResultOf<'i, 'o, 's, E> =
    DecodeResult<'i, 'o, 's, <E as Encoding>::CodeUnit, <E as Encoding>::DecodeState>;

/// Encode result type for encoding `E`.
pub type EncodeResultOf<'i, 'o, 's, E> =
    EncodeResult<'i, 'o, 's, <E as Encoding>::CodeUnit, <E as Encoding>::EncodeState>;

/// State for encodings that carry nothing between calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyState;

/// A text encoding that converts one complete unit per call.
///
/// Implementations never panic on malformed input. Every abnormal condition
/// is offered to the supplied [`ErrorHandler`] unless its kind is
/// [`HandlerKind::Ignoring`](crate::HandlerKind::Ignoring), in which case the
/// error result is returned as-is.
pub trait Encoding: Sized {
    /// One element of the encoded form.
    type CodeUnit: Copy + Default + PartialEq + fmt::Debug + 'static;
    /// State threaded through decode calls.
    type DecodeState;
    /// State threaded through encode calls.
    type EncodeState;

    /// Most scalars one decode step can produce.
    const MAX_CODE_POINTS: usize;
    /// Most code units one encode step can produce.
    const MAX_CODE_UNITS: usize;
    /// Whether every input decodes to a distinct output.
    const IS_DECODE_INJECTIVE: bool;
    /// Whether every scalar encodes to a distinct output.
    const IS_ENCODE_INJECTIVE: bool;

    /// Human-readable encoding name.
    fn name(&self) -> &str;

    /// Code units written in place of unencodable scalars, if the encoding
    /// prefers something other than an encoded U+FFFD.
    fn replacement_code_units(&self) -> Option<&[Self::CodeUnit]> {
        None
    }

    /// Scalars written in place of undecodable input, if not U+FFFD.
    fn replacement_code_points(&self) -> Option<&[char]> {
        None
    }

    /// Decodes one complete unit from `input` into `output`.
    fn decode_one<'i, 'o, 's, H>(
        &self,
        input: &'i [Self::CodeUnit],
        output: &'o mut [char],
        handler: &mut H,
        state: &'s mut Self::DecodeState,
    ) -> DecodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>;

    /// Encodes one scalar from `input` into `output`.
    fn encode_one<'i, 'o, 's, H>(
        &self,
        input: &'i [char],
        output: &'o mut [Self::CodeUnit],
        handler: &mut H,
        state: &'s mut Self::EncodeState,
    ) -> EncodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>;
}

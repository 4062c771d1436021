//! Error types for whole-buffer transcoding.

use textcore::ErrorCode;
use thiserror::Error;

/// Result type for the transcode helpers.
pub type TranscodeResult<T> = Result<T, TranscodeError>;

/// Errors surfaced by [`decode_to_string`](crate::decode_to_string) and
/// [`encode_to_vec`](crate::encode_to_vec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TranscodeError {
    /// The handler returned an error; `offset` is the input position of the
    /// unit that failed, in bytes.
    #[error("{code} at input offset {offset}")]
    Failed { code: ErrorCode, offset: usize },

    /// The handler reported success without consuming input or producing output.
    #[error("handler made no progress at input offset {offset}")]
    Stalled { offset: usize },
}

impl TranscodeError {
    /// Input offset, in bytes, where transcoding stopped.
    pub const fn offset(&self) -> usize {
        match self {
            Self::Failed { offset, .. } | Self::Stalled { offset } => *offset,
        }
    }
}

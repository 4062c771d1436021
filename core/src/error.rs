//! Error codes reported by one-unit transcoding operations.

use std::fmt;

/// Outcome of a single `decode_one` / `encode_one` call.
///
/// Unlike a Rust error type this includes [`ErrorCode::Ok`]: every result
/// carries one, and error handlers may rewrite a failure into success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCode {
    /// The unit was transcoded (or the input was already exhausted).
    #[default]
    Ok,

    /// Malformed input, or a value the target form cannot represent.
    InvalidSequence,

    /// Input ended in the middle of a unit. More input may complete it.
    IncompleteSequence,

    /// The output view has no room for the produced unit.
    InsufficientOutputSpace,
}

impl ErrorCode {
    /// Returns `true` for [`ErrorCode::Ok`].
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Stable lowercase name, matching the taxonomy names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::InvalidSequence => "invalid_sequence",
            Self::IncompleteSequence => "incomplete_sequence",
            Self::InsufficientOutputSpace => "insufficient_output_space",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Error types for the host locale subsystem.

use thiserror::Error;

/// Result type for locale configuration.
pub type LocaleResult<T> = Result<T, LocaleError>;

/// Errors raised while selecting the active locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LocaleError {
    /// The locale name cannot be parsed.
    #[error("malformed locale name {name:?}")]
    Malformed { name: String },

    /// The locale names a codeset with no registered charset.
    #[error("locale {name:?} uses unsupported codeset {codeset:?}")]
    UnsupportedCodeset { name: String, codeset: String },
}

/// Failure signals of the native wide-character primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NativeError {
    /// The bytes end inside a multi-byte character.
    #[error("input ends inside a multi-byte character")]
    Truncated,

    /// A character has no translation in the target form.
    #[error("no translation for a character in the target code page")]
    NoUnicodeTranslation,

    /// The destination buffer is too small.
    #[error("destination buffer too small")]
    InsufficientBuffer,
}

//! The narrow charset contract implemented by every locale codeset.

use std::fmt;

use crate::shift::ShiftRegister;

/// Static capacity of a one-character narrow buffer, the platform's
/// `MB_LEN_MAX`. No charset produces a longer unit.
pub const MB_LEN_MAX: usize = 16;

/// Outcome of converting a candidate narrow unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStep {
    /// The bytes form one complete character.
    Scalar(char),
    /// The bytes form the NUL character. Nothing is produced.
    Terminator,
    /// The bytes only change the shift state. Nothing is produced.
    ShiftOnly,
    /// The bytes are a proper prefix of a valid unit.
    Incomplete,
    /// The bytes cannot begin any valid unit under the current shift state.
    Invalid,
    /// The bytes complete a unit that yields more than one scalar. The first
    /// is returned; the rest are held in the shift register for [`NarrowCharset::drain`].
    MultiResult(char),
}

/// Outcome of draining a scalar held in the shift register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainStep {
    /// The final held scalar.
    Last(char),
    /// A held scalar; more remain.
    More(char),
    /// Nothing valid is held.
    Invalid,
}

/// A locale codeset: the narrow primitives of the host's locale subsystem.
///
/// `decode` is handed a candidate unit grown one byte at a time by the caller
/// and must resolve it as soon as it is complete. It works on a scratch copy
/// of the caller's register; the caller commits the copy only on success.
pub trait NarrowCharset: fmt::Debug + Send + Sync {
    /// Canonical codeset name, e.g. `"ISO-8859-1"`.
    fn codeset(&self) -> &str;

    /// Longest unit this charset produces (`MB_CUR_MAX`).
    fn max_unit_len(&self) -> usize;

    /// Whether this charset is UTF-8.
    fn is_utf8(&self) -> bool {
        codeset_matches(self.codeset(), "utf8")
    }

    /// Converts the candidate unit `bytes` under `shift`.
    fn decode(&self, bytes: &[u8], shift: &mut ShiftRegister) -> DecodeStep;

    /// Produces the next scalar held after a [`DecodeStep::MultiResult`].
    fn drain(&self, shift: &mut ShiftRegister) -> DrainStep {
        let _ = shift;
        DrainStep::Invalid
    }

    /// Converts one scalar into `out`, returning the bytes written, or `None`
    /// if the scalar has no representation.
    fn encode(
        &self,
        scalar: char,
        shift: &mut ShiftRegister,
        out: &mut [u8; MB_LEN_MAX],
    ) -> Option<usize>;

    /// Writes the sequence returning `shift` to the initial state.
    fn unshift(&self, shift: &mut ShiftRegister, out: &mut [u8; MB_LEN_MAX]) -> usize {
        let _ = out;
        shift.reset();
        0
    }
}

/// Normalizes a codeset name: ASCII-lowercased, non-alphanumerics removed.
///
/// `"UTF-8"`, `"utf8"` and `"Utf_8"` all normalize to `"utf8"`.
#[must_use]
pub fn normalize_codeset(codeset: &str) -> String {
    codeset
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| char::from(b.to_ascii_lowercase()))
        .collect()
}

/// Compares a codeset name against an already-normalized one without
/// allocating.
#[must_use]
pub fn codeset_matches(codeset: &str, normalized: &str) -> bool {
    codeset
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| b.to_ascii_lowercase())
        .eq(normalized.bytes())
}

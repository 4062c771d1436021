//! UTF-8 as a locale codeset.

use unicode::{scan_utf8, Utf8Scan, UTF8_MAX_LEN};

use crate::charset::{DecodeStep, NarrowCharset, MB_LEN_MAX};
use crate::shift::ShiftRegister;

/// The narrow primitives of a UTF-8 locale. Stateless.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Charset;

impl NarrowCharset for Utf8Charset {
    fn codeset(&self) -> &str {
        "UTF-8"
    }

    fn max_unit_len(&self) -> usize {
        UTF8_MAX_LEN
    }

    fn decode(&self, bytes: &[u8], _shift: &mut ShiftRegister) -> DecodeStep {
        if bytes.is_empty() {
            return DecodeStep::Incomplete;
        }
        match scan_utf8(bytes) {
            Utf8Scan::Scalar { scalar: '\0', .. } => DecodeStep::Terminator,
            Utf8Scan::Scalar { scalar, .. } => DecodeStep::Scalar(scalar),
            Utf8Scan::Incomplete { .. } => DecodeStep::Incomplete,
            Utf8Scan::Invalid { .. } => DecodeStep::Invalid,
        }
    }

    fn encode(
        &self,
        scalar: char,
        _shift: &mut ShiftRegister,
        out: &mut [u8; MB_LEN_MAX],
    ) -> Option<usize> {
        Some(scalar.encode_utf8(&mut out[..]).len())
    }
}

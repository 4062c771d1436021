//! Native wide-character primitives of a Win32-style host.
//!
//! These convert whole buffers between narrow bytes and UTF-16 with no
//! carried state, like `MultiByteToWideChar` / `WideCharToMultiByte` called
//! with their strict-validation flags.

use crate::charset::{DecodeStep, DrainStep, NarrowCharset, MB_LEN_MAX};
use crate::error::NativeError;
use crate::shift::ShiftRegister;

/// Room for the UTF-16 form of one narrow unit's scalars.
pub const WIDE_UNIT_MAX: usize = 16;

/// Converts narrow `bytes` to UTF-16 in `out`, returning the units written.
pub fn multi_byte_to_wide(
    charset: &dyn NarrowCharset,
    bytes: &[u8],
    out: &mut [u16],
) -> Result<usize, NativeError> {
    let mut shift = ShiftRegister::new();
    let mut pos = 0;
    let mut written = 0;

    while pos < bytes.len() {
        let mut len = 1;
        let step = loop {
            let mut probe = shift.clone();
            match charset.decode(&bytes[pos..pos + len], &mut probe) {
                DecodeStep::Incomplete if pos + len < bytes.len() && len < MB_LEN_MAX => {
                    len += 1;
                }
                step => {
                    shift = probe;
                    break step;
                }
            }
        };
        pos += len;

        match step {
            DecodeStep::Incomplete => return Err(NativeError::Truncated),
            DecodeStep::Invalid => return Err(NativeError::NoUnicodeTranslation),
            DecodeStep::ShiftOnly => {}
            DecodeStep::Terminator => written = push_wide('\0', out, written)?,
            DecodeStep::Scalar(scalar) => written = push_wide(scalar, out, written)?,
            DecodeStep::MultiResult(scalar) => {
                written = push_wide(scalar, out, written)?;
                written = drain_wide(charset, &mut shift, out, written)?;
            }
        }
    }
    Ok(written)
}

fn drain_wide(
    charset: &dyn NarrowCharset,
    shift: &mut ShiftRegister,
    out: &mut [u16],
    mut written: usize,
) -> Result<usize, NativeError> {
    for _ in 0..WIDE_UNIT_MAX {
        match charset.drain(shift) {
            DrainStep::Last(scalar) => return push_wide(scalar, out, written),
            DrainStep::More(scalar) => written = push_wide(scalar, out, written)?,
            DrainStep::Invalid => break,
        }
    }
    Err(NativeError::NoUnicodeTranslation)
}

fn push_wide(scalar: char, out: &mut [u16], at: usize) -> Result<usize, NativeError> {
    let mut buf = [0u16; 2];
    let units = scalar.encode_utf16(&mut buf);
    let end = at + units.len();
    let dst = out
        .get_mut(at..end)
        .ok_or(NativeError::InsufficientBuffer)?;
    dst.copy_from_slice(units);
    Ok(end)
}

/// Converts UTF-16 `wide` to narrow bytes in `out`, returning the bytes
/// written. The output always ends in the initial shift state.
pub fn wide_to_multi_byte(
    charset: &dyn NarrowCharset,
    wide: &[u16],
    out: &mut [u8],
) -> Result<usize, NativeError> {
    let mut shift = ShiftRegister::new();
    let mut buf = [0u8; MB_LEN_MAX];
    let mut written = 0;

    for unit in char::decode_utf16(wide.iter().copied()) {
        let scalar = unit.map_err(|_| NativeError::NoUnicodeTranslation)?;
        let len = charset
            .encode(scalar, &mut shift, &mut buf)
            .ok_or(NativeError::NoUnicodeTranslation)?;
        written = push_narrow(&buf[..len], out, written)?;
    }
    if !shift.is_initial() {
        let len = charset.unshift(&mut shift, &mut buf);
        written = push_narrow(&buf[..len], out, written)?;
    }
    Ok(written)
}

fn push_narrow(bytes: &[u8], out: &mut [u8], at: usize) -> Result<usize, NativeError> {
    let end = at + bytes.len();
    let dst = out
        .get_mut(at..end)
        .ok_or(NativeError::InsufficientBuffer)?;
    dst.copy_from_slice(bytes);
    Ok(end)
}

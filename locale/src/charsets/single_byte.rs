//! Table-driven single-byte codesets.

use crate::charset::{DecodeStep, NarrowCharset, MB_LEN_MAX};
use crate::shift::ShiftRegister;

type HighTable = [Option<char>; 128];

const fn latin1_high() -> HighTable {
    let mut table = [None; 128];
    let mut idx = 0;
    while idx < 128 {
        table[idx] = char::from_u32(0x80 + idx as u32);
        idx += 1;
    }
    table
}

/// Windows-1252 in 0x80..=0x9F; the rest of the high half matches ISO-8859-1.
const CP1252_C1: [Option<char>; 32] = [
    Some('\u{20AC}'),
    None,
    Some('\u{201A}'),
    Some('\u{0192}'),
    Some('\u{201E}'),
    Some('\u{2026}'),
    Some('\u{2020}'),
    Some('\u{2021}'),
    Some('\u{02C6}'),
    Some('\u{2030}'),
    Some('\u{0160}'),
    Some('\u{2039}'),
    Some('\u{0152}'),
    None,
    Some('\u{017D}'),
    None,
    None,
    Some('\u{2018}'),
    Some('\u{2019}'),
    Some('\u{201C}'),
    Some('\u{201D}'),
    Some('\u{2022}'),
    Some('\u{2013}'),
    Some('\u{2014}'),
    Some('\u{02DC}'),
    Some('\u{2122}'),
    Some('\u{0161}'),
    Some('\u{203A}'),
    Some('\u{0153}'),
    None,
    Some('\u{017E}'),
    Some('\u{0178}'),
];

const fn cp1252_high() -> HighTable {
    let mut table = latin1_high();
    let mut idx = 0;
    while idx < CP1252_C1.len() {
        table[idx] = CP1252_C1[idx];
        idx += 1;
    }
    table
}

static ASCII_HIGH: HighTable = [None; 128];
static LATIN1_HIGH: HighTable = latin1_high();
static CP1252_HIGH: HighTable = cp1252_high();

/// A stateless codeset mapping each byte to at most one scalar.
///
/// Bytes below 0x80 are ASCII. The high half comes from a table; `None`
/// entries are invalid in both directions.
#[derive(Debug, Clone, Copy)]
pub struct SingleByte {
    codeset: &'static str,
    high: &'static HighTable,
}

impl SingleByte {
    /// The "C"/"POSIX" codeset: ASCII, high bytes invalid.
    #[must_use]
    pub fn ascii() -> Self {
        Self {
            codeset: "ANSI_X3.4-1968",
            high: &ASCII_HIGH,
        }
    }

    /// ISO-8859-1: every byte is the scalar of the same value.
    #[must_use]
    pub fn latin1() -> Self {
        Self {
            codeset: "ISO-8859-1",
            high: &LATIN1_HIGH,
        }
    }

    /// Windows-1252, with five undefined bytes.
    #[must_use]
    pub fn windows_1252() -> Self {
        Self {
            codeset: "CP1252",
            high: &CP1252_HIGH,
        }
    }

    fn lookup(&self, byte: u8) -> Option<char> {
        if byte < 0x80 {
            Some(char::from(byte))
        } else {
            self.high[usize::from(byte - 0x80)]
        }
    }

    fn reverse(&self, scalar: char) -> Option<u8> {
        if scalar.is_ascii() {
            return u8::try_from(u32::from(scalar)).ok();
        }
        let idx = self.high.iter().position(|&c| c == Some(scalar))?;
        u8::try_from(0x80 + idx).ok()
    }
}

impl NarrowCharset for SingleByte {
    fn codeset(&self) -> &str {
        self.codeset
    }

    fn max_unit_len(&self) -> usize {
        1
    }

    fn decode(&self, bytes: &[u8], _shift: &mut ShiftRegister) -> DecodeStep {
        match bytes.first() {
            None => DecodeStep::Incomplete,
            Some(0) => DecodeStep::Terminator,
            Some(&byte) => self
                .lookup(byte)
                .map_or(DecodeStep::Invalid, DecodeStep::Scalar),
        }
    }

    fn encode(
        &self,
        scalar: char,
        _shift: &mut ShiftRegister,
        out: &mut [u8; MB_LEN_MAX],
    ) -> Option<usize> {
        out[0] = self.reverse(scalar)?;
        Some(1)
    }
}

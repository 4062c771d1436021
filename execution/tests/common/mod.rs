//! Shared fixtures for the execution integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use execution::Execution;
use locale::{DecodeStep, DrainStep, Host, NarrowCharset, PlatformProfile, ShiftRegister, MB_LEN_MAX};

pub const SO: u8 = 0x0E;
pub const SI: u8 = 0x0F;
pub const COMBINING_BYTE: u8 = 0xA0;

const GREEK_WORD: usize = 0;
const HELD_WORD: usize = 1;
const GREEK_BASE: u32 = 0x03B1;
const GREEK_LETTERS: u32 = 25;
const CJK_BASE: u32 = 0x4E00;
const CJK_TRAILS: u32 = 189;

/// A stateful test codeset in the ISO-2022 style.
///
/// - `SO` / `SI` switch letters `a..=y` to and from Greek `α..=ω`.
/// - Lead bytes `0x81..=0x9F` start two-byte ideographs (trail `0x40..=0xFC`).
/// - [`COMBINING_BYTE`] decodes to `e` followed by U+0301.
#[derive(Debug, Default)]
pub struct Shifty;

impl Shifty {
    fn greek(shift: &ShiftRegister) -> bool {
        shift.word(GREEK_WORD) != 0
    }
}

impl NarrowCharset for Shifty {
    fn codeset(&self) -> &str {
        "X-SHIFTY"
    }

    fn max_unit_len(&self) -> usize {
        2
    }

    fn decode(&self, bytes: &[u8], shift: &mut ShiftRegister) -> DecodeStep {
        match *bytes {
            [] => DecodeStep::Incomplete,
            [0] => {
                shift.reset();
                DecodeStep::Terminator
            }
            [SO] => {
                shift.set_word(GREEK_WORD, 1);
                DecodeStep::ShiftOnly
            }
            [SI] => {
                shift.set_word(GREEK_WORD, 0);
                DecodeStep::ShiftOnly
            }
            [COMBINING_BYTE] => {
                shift.set_word(HELD_WORD, 0x0301);
                DecodeStep::MultiResult('e')
            }
            [byte @ b'a'..=b'y'] if Self::greek(shift) => {
                char::from_u32(GREEK_BASE + u32::from(byte - b'a'))
                    .map_or(DecodeStep::Invalid, DecodeStep::Scalar)
            }
            [byte @ 0x01..=0x7F] => DecodeStep::Scalar(char::from(byte)),
            [0x81..=0x9F] => DecodeStep::Incomplete,
            [lead @ 0x81..=0x9F, trail @ 0x40..=0xFC, ..] => {
                let offset = u32::from(lead - 0x81) * CJK_TRAILS + u32::from(trail - 0x40);
                char::from_u32(CJK_BASE + offset).map_or(DecodeStep::Invalid, DecodeStep::Scalar)
            }
            _ => DecodeStep::Invalid,
        }
    }

    fn drain(&self, shift: &mut ShiftRegister) -> DrainStep {
        let held = shift.word(HELD_WORD);
        shift.set_word(HELD_WORD, 0);
        char::from_u32(held)
            .filter(|&c| c != '\0')
            .map_or(DrainStep::Invalid, DrainStep::Last)
    }

    fn encode(
        &self,
        scalar: char,
        shift: &mut ShiftRegister,
        out: &mut [u8; MB_LEN_MAX],
    ) -> Option<usize> {
        let code = u32::from(scalar);
        let greek = Self::greek(shift);
        let mut len = 0;
        let mut push = |byte: u8| {
            out[len] = byte;
            len += 1;
        };

        if (GREEK_BASE..GREEK_BASE + GREEK_LETTERS).contains(&code) {
            if !greek {
                push(SO);
                shift.set_word(GREEK_WORD, 1);
            }
            push(b'a' + u8::try_from(code - GREEK_BASE).ok()?);
        } else if scalar.is_ascii() {
            let byte = u8::try_from(code).ok()?;
            if greek && (scalar == '\0' || (b'a'..=b'y').contains(&byte)) {
                push(SI);
                shift.set_word(GREEK_WORD, 0);
            }
            push(byte);
        } else if (CJK_BASE..CJK_BASE + 31 * CJK_TRAILS).contains(&code) {
            let offset = code - CJK_BASE;
            push(0x81 + u8::try_from(offset / CJK_TRAILS).ok()?);
            push(0x40 + u8::try_from(offset % CJK_TRAILS).ok()?);
        } else {
            return None;
        }
        Some(len)
    }

    fn unshift(&self, shift: &mut ShiftRegister, out: &mut [u8; MB_LEN_MAX]) -> usize {
        let greek = Self::greek(shift);
        shift.reset();
        if greek {
            out[0] = SI;
            1
        } else {
            0
        }
    }
}

/// A fresh host with [`Shifty`] registered, in the given locale.
pub fn host(profile: PlatformProfile, locale: &str) -> Arc<Host> {
    let host = Host::new(profile);
    host.register_charset("X-SHIFTY", Arc::new(Shifty));
    host.set_locale(locale).unwrap();
    Arc::new(host)
}

pub fn execution(profile: PlatformProfile, locale: &str) -> Execution {
    Execution::with_host(host(profile, locale))
}

/// Every built-in locale on both platform profiles.
pub fn builtin_executions() -> Vec<Execution> {
    let mut all = Vec::new();
    for profile in [PlatformProfile::posix(), PlatformProfile::windows()] {
        for locale in ["C", "POSIX", "de_DE", "English_United States.1252", "en_US.UTF-8"] {
            all.push(execution(profile.clone(), locale));
        }
    }
    all
}

//! Host locale subsystem for the lctext execution encoding.
//!
//! This crate models what a C runtime provides behind `setlocale` and
//! `mbrtoc32`: a process-wide active configuration, the narrow charsets it can
//! select, the shift state those charsets thread between calls, and the
//! UTF-16 native primitives of a Win32-style platform. It does not know about
//! result views or error handlers, only about one narrow unit at a time.
//!
//! # Design Principles
//!
//! - **Snapshot reads** - Conversions load the active locale once and keep it
//!   for the whole call.
//! - **Explicit shift state** - Charsets never hide state; it lives in a
//!   [`ShiftRegister`] owned by the caller.
//! - **Open registry** - Codesets beyond the built-ins are added at runtime.

mod charset;
mod charsets;
mod error;
mod host;
mod name;
mod profile;
mod registry;
mod shift;
mod wide;

pub use charset::{
    codeset_matches, normalize_codeset, DecodeStep, DrainStep, NarrowCharset, MB_LEN_MAX,
};
pub use charsets::{SingleByte, Utf8Charset};
pub use error::{LocaleError, LocaleResult, NativeError};
pub use host::{ActiveLocale, Host};
pub use name::{locale_name_from_env, LocaleName, DEFAULT_CODESET, PORTABLE_CODESET};
pub use profile::{NativeInterface, PlatformProfile};
pub use registry::CharsetRegistry;
pub use shift::{ShiftRegister, SHIFT_WORDS};
pub use wide::{multi_byte_to_wide, wide_to_multi_byte, WIDE_UNIT_MAX};

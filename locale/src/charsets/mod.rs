//! Built-in locale codesets.

mod single_byte;
mod utf8;

pub use single_byte::SingleByte;
pub use utf8::Utf8Charset;

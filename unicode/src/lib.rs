//! Stateless Unicode transcoders for lctext.
//!
//! [`Utf8`] and [`Utf16`] implement [`textcore::Encoding`] with fixed,
//! build-time mappings. The execution encoding uses them as building blocks:
//! the UTF-8 form as its fast path, the UTF-16 form as the intermediate of the
//! wide bridge.
//!
//! # Example
//!
//! ```
//! use textcore::{EmptyState, Encoding, PropagateHandler};
//! use unicode::Utf8;
//!
//! let mut out = ['\0'; 1];
//! let mut state = EmptyState;
//! let result = Utf8.decode_one("é".as_bytes(), &mut out, &mut PropagateHandler, &mut state);
//! assert!(result.is_ok());
//! assert_eq!(out[0], 'é');
//! ```

mod utf16;
mod utf8;

pub use utf16::Utf16;
pub use utf8::{scan_utf8, sequence_width, Utf8, Utf8Scan, UTF8_MAX_LEN};

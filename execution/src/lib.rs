//! The locale-dependent execution encoding.
//!
//! [`Execution`] converts between the host's narrow multi-byte text and
//! Unicode scalar values one complete unit at a time. Which bytes map to which
//! scalars is decided by the host's active locale, which may change between
//! calls, so every call resolves a fresh [`Strategy`]:
//!
//! - [`Strategy::FastUtf8`] when the locale is UTF-8;
//! - [`Strategy::WideBridge`] on platforms that only convert through UTF-16;
//! - [`Strategy::DirectNarrow`] otherwise, threading shift state.
//!
//! Failures are offered to the caller's [`ErrorHandler`](textcore::ErrorHandler)
//! with the offending bytes or scalar.
//!
//! ```
//! use std::sync::Arc;
//! use execution::Execution;
//! use locale::{Host, PlatformProfile};
//! use textcore::{Encoding, PropagateHandler};
//!
//! let host = Arc::new(Host::new(PlatformProfile::posix()));
//! host.set_locale("fr_FR.ISO-8859-1").unwrap();
//! let exec = Execution::with_host(host);
//!
//! let mut state = exec.decode_state();
//! let mut out = ['\0'; 1];
//! let result = exec.decode_one(&[0xE9], &mut out, &mut PropagateHandler, &mut state);
//! assert!(result.is_ok());
//! assert_eq!(out[0], 'é');
//! ```
//!
//! # Design Principles
//!
//! - **Snapshot per call** - The locale is loaded once when a call starts.
//! - **Input stays put on failure** - Decode errors leave input at the start
//!   of the offending unit.
//! - **Handlers decide** - The engine never substitutes or skips by itself.

mod call;
mod decode;
mod encode;
mod error;
mod execution;
mod state;
mod strategy;
mod transcode;

pub use error::{TranscodeError, TranscodeResult};
pub use execution::{Execution, MAX_CODE_POINTS, REPLACEMENT_UNIT};
pub use locale::MB_LEN_MAX;
pub use state::{DecodeState, EncodeState};
pub use strategy::{detect_strategy, Strategy};
pub use transcode::{decode_to_string, encode_to_vec};

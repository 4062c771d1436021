//! Shared transcoding protocol for the lctext encodings.
//!
//! Every encoding in the workspace converts one complete unit per call and
//! reports through the same types:
//!
//! - [`ErrorCode`] - `ok` or one of three failure kinds.
//! - [`DecodeResult`] / [`EncodeResult`] - remaining input, remaining output,
//!   the state used, and the error code.
//! - [`Encoding`] - the one-unit `decode_one` / `encode_one` contract.
//! - [`ErrorHandler`] - the policy consulted on every failure, with the
//!   canonical [`ReplacementHandler`], [`PropagateHandler`] and
//!   [`IgnoreHandler`].
//!
//! # Design Principles
//!
//! - **No unsafe code** - Views are plain slices.
//! - **Caller-owned buffers** - Nothing here allocates.
//! - **Policy outside the engine** - Encodings report, handlers decide.

mod encoding;
mod error;
mod handler;
mod result;

pub use encoding::{DecodeResultOf, EmptyState, EncodeResultOf, Encoding};
pub use error::ErrorCode;
pub use handler::{
    ErrorHandler, HandlerKind, IgnoreHandler, ProgressHandler, PropagateHandler,
    ReplacementHandler, PROGRESS_CAPACITY,
};
pub use result::{advance_mut, split_view, DecodeResult, EncodeResult};

//! Context shared by the strategy engines for the duration of one call.

use locale::{NarrowCharset, NativeError};
use textcore::{DecodeResultOf, EncodeResultOf, Encoding, ErrorCode, ErrorHandler, HandlerKind};

use crate::execution::Execution;

/// One call's view of the encoding, the locale snapshot and the handler.
pub(crate) struct Call<'c, H> {
    pub(crate) exec: &'c Execution,
    pub(crate) charset: &'c dyn NarrowCharset,
    /// Accumulation bound for one narrow unit.
    pub(crate) limit: usize,
    pub(crate) kind: HandlerKind,
    pub(crate) handler: &'c mut H,
}

impl<H: ErrorHandler<Execution>> Call<'_, H> {
    /// Offers a decode failure to the handler. Ignoring handlers are skipped.
    pub(crate) fn decode_failed<'i, 'o, 's>(
        &mut self,
        result: DecodeResultOf<'i, 'o, 's, Execution>,
        units: &[u8],
    ) -> DecodeResultOf<'i, 'o, 's, Execution> {
        if !self.kind.is_strict() {
            return result;
        }
        tracing::debug!(
            encoding = self.exec.name(),
            codeset = self.charset.codeset(),
            code = %result.error_code,
            units = ?units,
            "decode failure"
        );
        self.handler.handle_decode(self.exec, result, units)
    }

    /// Offers an encode failure to the handler. Ignoring handlers are skipped.
    pub(crate) fn encode_failed<'i, 'o, 's>(
        &mut self,
        result: EncodeResultOf<'i, 'o, 's, Execution>,
        points: &[char],
    ) -> EncodeResultOf<'i, 'o, 's, Execution> {
        if !self.kind.is_strict() {
            return result;
        }
        tracing::debug!(
            encoding = self.exec.name(),
            codeset = self.charset.codeset(),
            code = %result.error_code,
            points = ?points,
            "encode failure"
        );
        self.handler.handle_encode(self.exec, result, points)
    }
}

/// Maps a native wide-primitive failure onto the shared error codes.
pub(crate) const fn native_error_code(err: NativeError) -> ErrorCode {
    match err {
        NativeError::Truncated => ErrorCode::IncompleteSequence,
        NativeError::NoUnicodeTranslation => ErrorCode::InvalidSequence,
        NativeError::InsufficientBuffer => ErrorCode::InsufficientOutputSpace,
    }
}

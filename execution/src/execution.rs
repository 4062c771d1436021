//! The execution encoding.

use std::sync::Arc;

use locale::{ActiveLocale, Host, MB_LEN_MAX};
use textcore::{
    DecodeResult, DecodeResultOf, EncodeResult, EncodeResultOf, Encoding, ErrorCode, ErrorHandler,
};

use crate::call::Call;
use crate::state::{DecodeState, EncodeState};
use crate::strategy::{detect_strategy, Strategy};
use crate::{decode, encode};

/// Most scalars one decode step can produce.
pub const MAX_CODE_POINTS: usize = 7;

/// Byte written in place of unencodable scalars.
pub const REPLACEMENT_UNIT: u8 = b'?';

const REPLACEMENT_UNITS: &[u8] = &[REPLACEMENT_UNIT];

/// The narrow encoding selected by the host's active locale.
///
/// The mapping is resolved afresh on every call from a snapshot of the host
/// configuration, so a locale change is observed from the next call on and
/// never part way through one.
#[derive(Debug, Clone)]
pub struct Execution {
    host: Arc<Host>,
}

impl Execution {
    /// The execution encoding of the process-wide host.
    #[must_use]
    pub fn new() -> Self {
        Self::with_host(Host::global())
    }

    /// The execution encoding of a specific host.
    #[must_use]
    pub const fn with_host(host: Arc<Host>) -> Self {
        Self { host }
    }

    /// The host this encoding reads its configuration from.
    pub fn host(&self) -> &Host {
        &self.host
    }

    /// A verified shift-neutral decode state for this host.
    #[must_use]
    pub fn decode_state(&self) -> DecodeState {
        DecodeState::for_host(&self.host)
    }

    /// A verified shift-neutral encode state for this host.
    #[must_use]
    pub fn encode_state(&self) -> EncodeState {
        EncodeState::for_host(&self.host)
    }

    /// The platform's bound on one narrow unit, `MB_LEN_MAX`-style.
    pub fn max_code_units(&self) -> usize {
        self.host.profile().unit_limit()
    }

    /// Longest unit of the active locale, `MB_CUR_MAX`-style.
    pub fn current_max_unit_len(&self) -> usize {
        self.host.active().charset().max_unit_len()
    }

    /// The strategy the next call would use.
    pub fn strategy(&self) -> Strategy {
        detect_strategy(&self.host.active(), self.host.profile())
    }

    /// Decodes one unit with a fixed strategy instead of the detected one.
    pub fn decode_one_with<'i, 'o, 's, H>(
        &self,
        strategy: Strategy,
        input: &'i [u8],
        output: &'o mut [char],
        handler: &mut H,
        state: &'s mut DecodeState,
    ) -> DecodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        let active = self.host.active();
        self.decode_in(&active, strategy, input, output, handler, state)
    }

    /// Encodes one scalar with a fixed strategy instead of the detected one.
    pub fn encode_one_with<'i, 'o, 's, H>(
        &self,
        strategy: Strategy,
        input: &'i [char],
        output: &'o mut [u8],
        handler: &mut H,
        state: &'s mut EncodeState,
    ) -> EncodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        let active = self.host.active();
        self.encode_in(&active, strategy, input, output, handler, state)
    }

    /// Emits one scalar buffered by an earlier decode, for use once the input
    /// is exhausted. Returns ok with nothing written if nothing is pending.
    pub fn drain_one<'i, 'o, 's, H>(
        &self,
        output: &'o mut [char],
        handler: &mut H,
        state: &'s mut DecodeState,
    ) -> DecodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        let active = self.host.active();
        let mut call = self.call(&active, handler);
        if !state.pending_output {
            return DecodeResult::new(&[], output, state, ErrorCode::Ok);
        }
        if output.is_empty() {
            let result = DecodeResult::new(&[], output, state, ErrorCode::InsufficientOutputSpace);
            return call.decode_failed(result, &[]);
        }
        decode::drain_pending(&mut call, &[], output, state)
    }

    /// Writes the bytes returning `state` to the initial shift state and
    /// resets it. Returns the number of bytes written to `output`.
    pub fn unshift(&self, state: &mut EncodeState, output: &mut [u8; MB_LEN_MAX]) -> usize {
        if state.shift.is_initial() {
            return 0;
        }
        self.host
            .active()
            .charset()
            .unshift(&mut state.shift, output)
    }

    fn call<'c, H>(&'c self, active: &'c ActiveLocale, handler: &'c mut H) -> Call<'c, H>
    where
        H: ErrorHandler<Self>,
    {
        Call {
            exec: self,
            charset: active.charset(),
            limit: self.max_code_units(),
            kind: handler.kind(),
            handler,
        }
    }

    fn decode_in<'i, 'o, 's, H>(
        &self,
        active: &ActiveLocale,
        strategy: Strategy,
        input: &'i [u8],
        output: &'o mut [char],
        handler: &mut H,
        state: &'s mut DecodeState,
    ) -> DecodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        if input.is_empty() {
            return DecodeResult::new(input, output, state, ErrorCode::Ok);
        }
        let mut call = self.call(active, handler);
        if output.is_empty() {
            let result =
                DecodeResult::new(input, output, state, ErrorCode::InsufficientOutputSpace);
            return call.decode_failed(result, &[]);
        }
        if state.pending_output {
            return decode::drain_pending(&mut call, input, output, state);
        }
        match strategy {
            Strategy::FastUtf8 => decode::fast_utf8(&mut call, input, output, state),
            Strategy::WideBridge => decode::wide_bridge(&mut call, input, output, state),
            Strategy::DirectNarrow => decode::direct_narrow(&mut call, input, output, state),
        }
    }

    fn encode_in<'i, 'o, 's, H>(
        &self,
        active: &ActiveLocale,
        strategy: Strategy,
        input: &'i [char],
        output: &'o mut [u8],
        handler: &mut H,
        state: &'s mut EncodeState,
    ) -> EncodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        if input.is_empty() {
            return EncodeResult::new(input, output, state, ErrorCode::Ok);
        }
        let mut call = self.call(active, handler);
        if output.is_empty() {
            let result =
                EncodeResult::new(input, output, state, ErrorCode::InsufficientOutputSpace);
            return call.encode_failed(result, &[]);
        }
        match strategy {
            Strategy::FastUtf8 => encode::fast_utf8(&mut call, input, output, state),
            Strategy::WideBridge => encode::wide_bridge(&mut call, input, output, state),
            Strategy::DirectNarrow => encode::direct_narrow(&mut call, input, output, state),
        }
    }
}

impl Default for Execution {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoding for Execution {
    type CodeUnit = u8;
    type DecodeState = DecodeState;
    type EncodeState = EncodeState;

    const MAX_CODE_POINTS: usize = MAX_CODE_POINTS;
    const MAX_CODE_UNITS: usize = MB_LEN_MAX;
    const IS_DECODE_INJECTIVE: bool = false;
    const IS_ENCODE_INJECTIVE: bool = false;

    fn name(&self) -> &str {
        "execution"
    }

    fn replacement_code_units(&self) -> Option<&[u8]> {
        Some(REPLACEMENT_UNITS)
    }

    fn decode_one<'i, 'o, 's, H>(
        &self,
        input: &'i [u8],
        output: &'o mut [char],
        handler: &mut H,
        state: &'s mut DecodeState,
    ) -> DecodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        let active = self.host.active();
        let strategy = detect_strategy(&active, self.host.profile());
        tracing::trace!(locale = active.name(), %strategy, "execution decode");
        self.decode_in(&active, strategy, input, output, handler, state)
    }

    fn encode_one<'i, 'o, 's, H>(
        &self,
        input: &'i [char],
        output: &'o mut [u8],
        handler: &mut H,
        state: &'s mut EncodeState,
    ) -> EncodeResultOf<'i, 'o, 's, Self>
    where
        H: ErrorHandler<Self>,
    {
        let active = self.host.active();
        let strategy = detect_strategy(&active, self.host.profile());
        tracing::trace!(locale = active.name(), %strategy, "execution encode");
        self.encode_in(&active, strategy, input, output, handler, state)
    }
}

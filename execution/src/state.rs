//! Per-session conversion state.
//!
//! States are created shift-neutral and verified against the live locale.
//! They are `Clone` but deliberately not `Copy`: a state is threaded through
//! calls by `&mut` and silently duplicating one would fork its shift state.

use locale::{DecodeStep, Host, ShiftRegister, MB_LEN_MAX};

use crate::MAX_CODE_POINTS;

const STASH_CAPACITY: usize = MAX_CODE_POINTS - 1;

/// State threaded through [`Execution`](crate::Execution) decode calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeState {
    pub(crate) shift: ShiftRegister,
    pub(crate) pending_output: bool,
    stash: [char; STASH_CAPACITY],
    stash_head: usize,
    stash_len: usize,
}

impl DecodeState {
    /// Creates a state for the global host.
    ///
    /// # Panics
    ///
    /// Panics if the active locale fails the shift-neutral self-check.
    #[must_use]
    pub fn new() -> Self {
        Self::for_host(&Host::global())
    }

    /// Creates a state for `host`, verifying that NUL decodes as the
    /// terminator and leaves the shift register initial.
    ///
    /// # Panics
    ///
    /// Panics if the active locale fails that check.
    #[must_use]
    pub fn for_host(host: &Host) -> Self {
        let active = host.active();
        let mut shift = ShiftRegister::new();
        let step = active.charset().decode(&[0], &mut shift);
        assert!(
            step == DecodeStep::Terminator && shift.is_initial(),
            "locale {:?} failed the decode self-check: NUL gave {step:?}",
            active.name()
        );
        Self {
            shift,
            pending_output: false,
            stash: ['\0'; STASH_CAPACITY],
            stash_head: 0,
            stash_len: 0,
        }
    }

    /// The shift register as of the last successful call.
    pub const fn shift(&self) -> &ShiftRegister {
        &self.shift
    }

    /// Returns `true` if a previous call buffered output not yet emitted.
    pub const fn has_pending(&self) -> bool {
        self.pending_output
    }

    /// Returns `true` if nothing is buffered and the shift state is initial.
    pub fn is_neutral(&self) -> bool {
        !self.pending_output && self.shift.is_initial()
    }

    /// Buffers extra scalars produced by one unit. Returns `false`, keeping
    /// nothing, if they do not fit.
    pub(crate) fn stash(&mut self, scalars: &[char]) -> bool {
        if scalars.len() > STASH_CAPACITY {
            return false;
        }
        self.stash[..scalars.len()].copy_from_slice(scalars);
        self.stash_head = 0;
        self.stash_len = scalars.len();
        self.pending_output = !scalars.is_empty();
        true
    }

    pub(crate) const fn has_stash(&self) -> bool {
        self.stash_len > self.stash_head
    }

    /// Takes the next stashed scalar, clearing the pending flag after the last.
    pub(crate) fn take_stashed(&mut self) -> Option<char> {
        if !self.has_stash() {
            return None;
        }
        let scalar = self.stash[self.stash_head];
        self.stash_head += 1;
        if !self.has_stash() {
            self.stash_head = 0;
            self.stash_len = 0;
            self.pending_output = false;
        }
        Some(scalar)
    }
}

impl Default for DecodeState {
    fn default() -> Self {
        Self::new()
    }
}

/// State threaded through [`Execution`](crate::Execution) encode calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeState {
    pub(crate) shift: ShiftRegister,
    pub(crate) pending_output: bool,
}

impl EncodeState {
    /// Creates a state for the global host.
    ///
    /// # Panics
    ///
    /// Panics if the active locale fails the shift-neutral self-check.
    #[must_use]
    pub fn new() -> Self {
        Self::for_host(&Host::global())
    }

    /// Creates a state for `host`, verifying that U+0000 encodes to exactly
    /// one NUL byte and leaves the shift register initial.
    ///
    /// # Panics
    ///
    /// Panics if the active locale fails that check.
    #[must_use]
    pub fn for_host(host: &Host) -> Self {
        let active = host.active();
        let mut shift = ShiftRegister::new();
        let mut buf = [0xFF; MB_LEN_MAX];
        let written = active.charset().encode('\0', &mut shift, &mut buf);
        assert!(
            written == Some(1) && buf[0] == 0 && shift.is_initial(),
            "locale {:?} failed the encode self-check: U+0000 gave {written:?}",
            active.name()
        );
        Self {
            shift,
            pending_output: false,
        }
    }

    /// The shift register as of the last successful call.
    pub const fn shift(&self) -> &ShiftRegister {
        &self.shift
    }

    /// Returns `true` if a previous call buffered output not yet emitted.
    pub const fn has_pending(&self) -> bool {
        self.pending_output
    }

    /// Returns `true` if nothing is buffered and the shift state is initial.
    pub fn is_neutral(&self) -> bool {
        !self.pending_output && self.shift.is_initial()
    }
}

impl Default for EncodeState {
    fn default() -> Self {
        Self::new()
    }
}

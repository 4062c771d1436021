//! Opaque shift-state carried between narrow conversion calls.

/// Number of words a [`ShiftRegister`] holds.
pub const SHIFT_WORDS: usize = 4;

/// Carry-state of a stateful charset, the analogue of C's `mbstate_t`.
///
/// The all-zero value is the initial (shift-neutral) state. Only the charset
/// that produced a register knows what its words mean.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ShiftRegister {
    words: [u32; SHIFT_WORDS],
}

impl ShiftRegister {
    /// Creates a register in the initial state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            words: [0; SHIFT_WORDS],
        }
    }

    /// Returns `true` if the register is in the initial state.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Returns the register to the initial state.
    pub fn reset(&mut self) {
        self.words = [0; SHIFT_WORDS];
    }

    /// Reads word `idx`. Panics if `idx >= SHIFT_WORDS`.
    #[must_use]
    pub const fn word(&self, idx: usize) -> u32 {
        self.words[idx]
    }

    /// Writes word `idx`. Panics if `idx >= SHIFT_WORDS`.
    pub fn set_word(&mut self, idx: usize, value: u32) {
        self.words[idx] = value;
    }
}

//! Platform capability profile.

use crate::charset::MB_LEN_MAX;

/// How the platform exposes its locale conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NativeInterface {
    /// Locale-aware narrow primitives that thread shift state (C `mbrtoc32`).
    Narrow,
    /// Conversions only through a 16-bit intermediate (Win32 `MultiByteToWideChar`).
    Wide,
}

/// Fixed properties of the host platform.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlatformProfile {
    /// Native conversion interface.
    pub native: NativeInterface,

    /// Maximum narrow-unit length for one character on this platform.
    /// Bounds the decode accumulation loop.
    pub mb_len_max: usize,
}

impl Default for PlatformProfile {
    fn default() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::posix()
        }
    }
}

impl PlatformProfile {
    /// A C library with locale-aware narrow conversions (glibc limits).
    #[must_use]
    pub const fn posix() -> Self {
        Self {
            native: NativeInterface::Narrow,
            mb_len_max: 16,
        }
    }

    /// A Win32-style platform converting through UTF-16 (MSVC limits).
    #[must_use]
    pub const fn windows() -> Self {
        Self {
            native: NativeInterface::Wide,
            mb_len_max: 5,
        }
    }

    /// The accumulation bound, clamped to `1..=MB_LEN_MAX`.
    #[must_use]
    pub const fn unit_limit(&self) -> usize {
        if self.mb_len_max == 0 {
            1
        } else if self.mb_len_max > MB_LEN_MAX {
            MB_LEN_MAX
        } else {
            self.mb_len_max
        }
    }
}

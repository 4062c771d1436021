//! Per-call conversion strategy selection.

use std::fmt;

use locale::{ActiveLocale, NativeInterface, PlatformProfile};

/// How one call reaches the host's conversion primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The locale is UTF-8: delegate to the stateless UTF-8 transcoder.
    FastUtf8,
    /// Go through UTF-16 with the platform's wide primitives.
    WideBridge,
    /// Call the locale's narrow primitives, threading shift state.
    DirectNarrow,
}

impl Strategy {
    /// Stable lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FastUtf8 => "fast_utf8",
            Self::WideBridge => "wide_bridge",
            Self::DirectNarrow => "direct_narrow",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Picks the strategy for one call from a snapshot of the active locale.
pub fn detect_strategy(active: &ActiveLocale, profile: &PlatformProfile) -> Strategy {
    if active.is_utf8() {
        Strategy::FastUtf8
    } else if profile.native == NativeInterface::Wide {
        Strategy::WideBridge
    } else {
        Strategy::DirectNarrow
    }
}

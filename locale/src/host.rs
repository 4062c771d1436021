//! The host locale subsystem: platform profile, charset registry and the
//! process-wide active configuration.
//!
//! The active configuration is read far more often than it changes, so it is
//! held in an [`ArcSwap`]: every conversion takes a lock-free snapshot and
//! `set_locale` publishes a new one atomically. A conversion that already
//! holds a snapshot keeps using it even if the locale changes meanwhile.

use std::fmt;
use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;
use parking_lot::RwLock;

use crate::charset::NarrowCharset;
use crate::charsets::SingleByte;
use crate::error::{LocaleError, LocaleResult};
use crate::name::{locale_name_from_env, LocaleName};
use crate::profile::PlatformProfile;
use crate::registry::CharsetRegistry;

/// One published locale configuration.
#[derive(Debug, Clone)]
pub struct ActiveLocale {
    name: LocaleName,
    charset: Arc<dyn NarrowCharset>,
}

impl ActiveLocale {
    /// Pairs a parsed name with the charset it resolved to.
    pub fn new(name: LocaleName, charset: Arc<dyn NarrowCharset>) -> Self {
        Self { name, charset }
    }

    /// The locale name as given to `set_locale`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The parsed locale name.
    pub const fn locale(&self) -> &LocaleName {
        &self.name
    }

    /// The narrow charset of this locale.
    pub fn charset(&self) -> &dyn NarrowCharset {
        self.charset.as_ref()
    }

    /// Returns `true` if the charset is UTF-8.
    pub fn is_utf8(&self) -> bool {
        self.charset.is_utf8()
    }
}

/// A host locale subsystem.
///
/// Most programs use [`Host::global`]. Tests and embedders that need
/// isolation construct their own.
pub struct Host {
    profile: PlatformProfile,
    registry: RwLock<CharsetRegistry>,
    active: ArcSwap<ActiveLocale>,
}

impl Host {
    /// Creates a host in the "C" locale with the built-in charsets.
    #[must_use]
    pub fn new(profile: PlatformProfile) -> Self {
        let portable = ActiveLocale::new(LocaleName::c(), Arc::new(SingleByte::ascii()));
        Self {
            profile,
            registry: RwLock::new(CharsetRegistry::with_builtins()),
            active: ArcSwap::from_pointee(portable),
        }
    }

    /// The process-wide host, created on first use with the build target's
    /// default profile.
    pub fn global() -> Arc<Self> {
        static GLOBAL: OnceLock<Arc<Host>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Self::new(PlatformProfile::default()))))
    }

    /// Platform capabilities.
    pub const fn profile(&self) -> &PlatformProfile {
        &self.profile
    }

    /// Snapshot of the active configuration.
    pub fn active(&self) -> Arc<ActiveLocale> {
        self.active.load_full()
    }

    /// Selects the active locale, like `setlocale(LC_CTYPE, name)`.
    pub fn set_locale(&self, name: &str) -> LocaleResult<Arc<ActiveLocale>> {
        let parsed = LocaleName::parse(name)?;
        let codeset = parsed.codeset().to_string();
        let charset = self
            .registry
            .read()
            .lookup(&codeset)
            .ok_or_else(|| LocaleError::UnsupportedCodeset {
                name: name.to_string(),
                codeset: codeset.clone(),
            })?;
        let next = Arc::new(ActiveLocale::new(parsed, charset));
        self.active.store(Arc::clone(&next));
        tracing::debug!(
            locale = name,
            codeset = next.charset().codeset(),
            "active locale changed"
        );
        Ok(next)
    }

    /// Selects the locale named by the environment, like
    /// `setlocale(LC_ALL, "")`.
    pub fn set_locale_from_env(&self) -> LocaleResult<Arc<ActiveLocale>> {
        let name = locale_name_from_env(|key| std::env::var(key).ok());
        self.set_locale(&name)
    }

    /// Registers a custom charset under a codeset alias, returning any
    /// charset it replaces. Already active locales are not affected.
    pub fn register_charset(
        &self,
        alias: &str,
        charset: Arc<dyn NarrowCharset>,
    ) -> Option<Arc<dyn NarrowCharset>> {
        tracing::debug!(alias, codeset = charset.codeset(), "charset registered");
        self.registry.write().register(alias, charset)
    }

    /// Resolves a codeset alias against the registry.
    pub fn lookup_charset(&self, codeset: &str) -> Option<Arc<dyn NarrowCharset>> {
        self.registry.read().lookup(codeset)
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new(PlatformProfile::default())
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.active.load();
        f.debug_struct("Host")
            .field("profile", &self.profile)
            .field("locale", &active.name())
            .field("codeset", &active.charset().codeset())
            .field("registered", &self.registry.read().len())
            .finish()
    }
}

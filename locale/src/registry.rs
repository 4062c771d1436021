//! Codeset name to charset lookup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::charset::{normalize_codeset, NarrowCharset};
use crate::charsets::{SingleByte, Utf8Charset};

const ASCII_ALIASES: &[&str] = &["ANSI_X3.4-1968", "ASCII", "US-ASCII", "646", "ISO646-US"];
const LATIN1_ALIASES: &[&str] = &["ISO-8859-1", "ISO_8859-1:1987", "LATIN1", "L1", "28591"];
const CP1252_ALIASES: &[&str] = &["CP1252", "WINDOWS-1252", "1252"];
const UTF8_ALIASES: &[&str] = &["UTF-8", "CP65001", "65001"];

/// Maps normalized codeset names to charsets.
#[derive(Debug, Clone)]
pub struct CharsetRegistry {
    entries: HashMap<String, Arc<dyn NarrowCharset>>,
}

impl CharsetRegistry {
    /// Creates a registry with no charsets.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates a registry holding the built-in codesets under their usual
    /// aliases.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        let builtins: [(&[&str], Arc<dyn NarrowCharset>); 4] = [
            (ASCII_ALIASES, Arc::new(SingleByte::ascii())),
            (LATIN1_ALIASES, Arc::new(SingleByte::latin1())),
            (CP1252_ALIASES, Arc::new(SingleByte::windows_1252())),
            (UTF8_ALIASES, Arc::new(Utf8Charset)),
        ];
        for (aliases, charset) in builtins {
            for alias in aliases {
                registry.register(alias, Arc::clone(&charset));
            }
        }
        registry
    }

    /// Registers `charset` under `alias`, returning any charset it replaces.
    pub fn register(
        &mut self,
        alias: &str,
        charset: Arc<dyn NarrowCharset>,
    ) -> Option<Arc<dyn NarrowCharset>> {
        self.entries.insert(normalize_codeset(alias), charset)
    }

    /// Looks up a codeset by any spelling of its name.
    #[must_use]
    pub fn lookup(&self, codeset: &str) -> Option<Arc<dyn NarrowCharset>> {
        self.entries.get(&normalize_codeset(codeset)).cloned()
    }

    /// Number of registered aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no aliases are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CharsetRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

//! Locale name parsing.
//!
//! Names follow `language[_territory][.codeset][@modifier]`, plus the
//! portable names `C` and `POSIX`. Windows-style names such as
//! `English_United States.1252` parse the same way.

use crate::error::{LocaleError, LocaleResult};

/// Codeset of the portable "C" locale.
pub const PORTABLE_CODESET: &str = "ANSI_X3.4-1968";

/// Codeset assumed when a non-portable name gives none.
pub const DEFAULT_CODESET: &str = "ISO-8859-1";

/// A parsed locale name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleName {
    raw: String,
    language: String,
    territory: Option<String>,
    codeset: Option<String>,
    modifier: Option<String>,
}

impl LocaleName {
    /// The portable "C" locale.
    #[must_use]
    pub fn c() -> Self {
        Self {
            raw: "C".to_string(),
            language: "C".to_string(),
            territory: None,
            codeset: None,
            modifier: None,
        }
    }

    /// Parses a locale name.
    pub fn parse(name: &str) -> LocaleResult<Self> {
        let malformed = || LocaleError::Malformed {
            name: name.to_string(),
        };
        if name.is_empty() || name.contains('/') || name.chars().any(char::is_control) {
            return Err(malformed());
        }

        let (base, modifier) = match name.split_once('@') {
            Some((base, modifier)) => (base, Some(modifier)),
            None => (name, None),
        };
        let (head, codeset) = match base.split_once('.') {
            Some((head, codeset)) => (head, Some(codeset)),
            None => (base, None),
        };
        let (language, territory) = match head.split_once('_') {
            Some((language, territory)) => (language, Some(territory)),
            None => (head, None),
        };

        let empty = |part: Option<&str>| part.is_some_and(str::is_empty);
        if language.is_empty() || empty(territory) || empty(codeset) || empty(modifier) {
            return Err(malformed());
        }

        Ok(Self {
            raw: name.to_string(),
            language: language.to_string(),
            territory: territory.map(str::to_string),
            codeset: codeset.map(str::to_string),
            modifier: modifier.map(str::to_string),
        })
    }

    /// The name as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Language part (`"C"` for the portable locale).
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Territory part, if any.
    pub fn territory(&self) -> Option<&str> {
        self.territory.as_deref()
    }

    /// Codeset part as written, if any.
    pub fn explicit_codeset(&self) -> Option<&str> {
        self.codeset.as_deref()
    }

    /// Modifier part, if any.
    pub fn modifier(&self) -> Option<&str> {
        self.modifier.as_deref()
    }

    /// Returns `true` for `C` and `POSIX` (with or without a codeset).
    pub fn is_portable(&self) -> bool {
        self.language == "C" || self.language == "POSIX"
    }

    /// The codeset this locale selects.
    pub fn codeset(&self) -> &str {
        match (&self.codeset, self.is_portable()) {
            (Some(codeset), _) => codeset,
            (None, true) => PORTABLE_CODESET,
            (None, false) => DEFAULT_CODESET,
        }
    }
}

/// Picks the locale name the environment selects for `LC_CTYPE`: the first
/// non-empty of `LC_ALL`, `LC_CTYPE`, `LANG`, else `"C"`.
pub fn locale_name_from_env<F>(lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .into_iter()
        .find_map(|key| lookup(key).filter(|value| !value.is_empty()))
        .unwrap_or_else(|| "C".to_string())
}

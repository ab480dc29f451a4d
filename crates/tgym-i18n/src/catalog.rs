//! Locale catalogs: flat JSON key → template maps.
//!
//! A catalog file is a single JSON object of string values:
//!
//! ```json
//! { "rep_counter": "Rep: {}", "tip_exit": "  - Press Ctrl+C to finish" }
//! ```
//!
//! English and Chinese catalogs are compiled into the binary; a directory of
//! `<lang>.json` files can be used instead. Resolution never fails: an
//! unknown or broken locale degrades to the default locale with a warning,
//! and if even that is unusable the catalog is empty and every lookup echoes
//! its key.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::provider::TextProvider;

/// Locale used when the requested one cannot be loaded.
pub const DEFAULT_LOCALE: &str = "en";

const EMBEDDED: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.json")),
    ("zh", include_str!("../locales/zh.json")),
];

/// Errors loading a single catalog.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to read translation file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translations for {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

/// Where catalogs come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocaleSource {
    /// The catalogs compiled into the binary.
    #[default]
    Embedded,
    /// `<dir>/<lang>.json` on disk.
    Directory(PathBuf),
}

/// Locales compiled into the binary.
#[must_use]
pub fn embedded_locales() -> Vec<&'static str> {
    EMBEDDED.iter().map(|(code, _)| *code).collect()
}

/// A loaded translation table for one language.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    language: String,
    strings: HashMap<String, String>,
}

impl Localizer {
    /// Parse a catalog from JSON text.
    pub fn from_json(language: &str, json: &str) -> Result<Self, I18nError> {
        let strings: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| I18nError::Parse {
                origin: language.to_string(),
                source,
            })?;
        Ok(Self {
            language: language.to_string(),
            strings,
        })
    }

    /// Load a compiled-in catalog.
    pub fn embedded(language: &str) -> Result<Self, I18nError> {
        let (_, json) = EMBEDDED
            .iter()
            .find(|(code, _)| *code == language)
            .ok_or_else(|| I18nError::UnknownLocale(language.to_string()))?;
        Self::from_json(language, json)
    }

    /// Load `<dir>/<language>.json`.
    pub fn from_dir(dir: &Path, language: &str) -> Result<Self, I18nError> {
        if !is_locale_code(language) {
            return Err(I18nError::UnknownLocale(language.to_string()));
        }
        let path = dir.join(format!("{language}.json"));
        if !path.is_file() {
            return Err(I18nError::UnknownLocale(language.to_string()));
        }
        let json = fs::read_to_string(&path).map_err(|source| I18nError::Io {
            path: path.clone(),
            source,
        })?;
        Self::from_json(language, &json).map_err(|err| match err {
            I18nError::Parse { source, .. } => I18nError::Parse {
                origin: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    /// Load `language` from `source`, falling back to [`DEFAULT_LOCALE`].
    ///
    /// Fallbacks are logged at `warn`; this never fails.
    #[must_use]
    pub fn resolve(source: &LocaleSource, language: &str) -> Self {
        let load = |lang: &str| match source {
            LocaleSource::Embedded => Self::embedded(lang),
            LocaleSource::Directory(dir) => Self::from_dir(dir, lang),
        };

        match load(language) {
            Ok(localizer) => return localizer,
            Err(err) => {
                tracing::warn!(language, error = %err, "falling back to {DEFAULT_LOCALE}");
            }
        }

        if language != DEFAULT_LOCALE {
            match load(DEFAULT_LOCALE) {
                Ok(localizer) => return localizer,
                Err(err) => {
                    tracing::warn!(error = %err, "default locale unavailable, using built-in texts");
                }
            }
        }

        match Self::embedded(DEFAULT_LOCALE) {
            Ok(localizer) => localizer,
            Err(err) => {
                tracing::error!(error = %err, "built-in texts unusable, showing raw keys");
                Self {
                    language: DEFAULT_LOCALE.to_string(),
                    strings: HashMap::new(),
                }
            }
        }
    }

    /// Language code actually in use (after any fallback).
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Keys present in `reference` but absent here.
    #[must_use]
    pub fn missing_keys(&self, reference: &Localizer) -> Vec<String> {
        let mut missing: Vec<String> = reference
            .strings
            .keys()
            .filter(|key| !self.strings.contains_key(*key))
            .cloned()
            .collect();
        missing.sort();
        missing
    }
}

impl TextProvider for Localizer {
    fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map_or(key, String::as_str)
    }
}

/// Locale codes are plain identifiers such as `en`, `zh`, `pt-BR`.
fn is_locale_code(code: &str) -> bool {
    !code.is_empty()
        && code
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

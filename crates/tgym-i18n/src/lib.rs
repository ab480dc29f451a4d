#![forbid(unsafe_code)]

//! Internationalization (i18n) for Terminal Gym.
//!
//! Provides key-based string lookup with identity fallback, positional
//! `{}` interpolation, and JSON locale catalogs with a default-locale
//! fallback chain.
//!
//! # Role in Terminal Gym
//! `tgym-i18n` isolates localization so the exercises only ever talk to the
//! narrow [`TextProvider`] seam. It does not depend on the animation core or
//! the runtime.

pub mod catalog;
pub mod provider;

pub use catalog::{DEFAULT_LOCALE, I18nError, LocaleSource, Localizer, embedded_locales};
pub use provider::{KeyEcho, TextProvider, interpolate};

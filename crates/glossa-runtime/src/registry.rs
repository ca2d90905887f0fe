//! Locale registry: per-locale dictionaries and the active translator.
//!
//! # Invariants
//!
//! 1. **Always resolvable**: a built registry always holds a working
//!    translator; construction fails rather than producing a registry
//!    that cannot translate.
//!
//! 2. **Errors leave state untouched**: a failed `set_locale` keeps the
//!    previous locale and translator active.
//!
//! 3. **Explicit ownership**: the registry is plain data owned by one
//!    long-lived component; there is no process-wide singleton.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown locale | Tag has no dictionary, no fallback set | `RegistryError::MissingLocale` |
//! | No starting tag | Builder used without `default_locale` | `RegistryError::NoDefaultLocale` |
//! | Unknown locale, fallback set | Tag has no dictionary | Fallback dictionary activates |

use std::collections::HashMap;

use glossa_core::{Dictionary, Payload, Translator};
use tracing::debug;

/// Opaque locale identifier. Not validated against any real-world
/// language-code scheme; any key the application likes.
pub type LocaleTag = String;

/// Errors from locale-state operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The requested locale has no dictionary and no fallback was set.
    MissingLocale(String),
    /// The builder was finished without a starting locale.
    NoDefaultLocale,
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingLocale(tag) => {
                write!(f, "translation dictionary for locale \"{tag}\" not provided")
            }
            Self::NoDefaultLocale => write!(f, "no default locale configured"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Builder for [`LocaleRegistry`].
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistryBuilder {
    dictionaries: HashMap<LocaleTag, Dictionary>,
    fallback: Option<Dictionary>,
    default_locale: Option<String>,
}

impl LocaleRegistryBuilder {
    /// Register a dictionary under a locale tag.
    #[must_use]
    pub fn add_locale(mut self, tag: impl Into<String>, dictionary: Dictionary) -> Self {
        self.dictionaries.insert(tag.into(), dictionary);
        self
    }

    /// Dictionary used when a requested tag has no registered entry.
    #[must_use]
    pub fn fallback(mut self, dictionary: Dictionary) -> Self {
        self.fallback = Some(dictionary);
        self
    }

    /// The locale active when the registry is built.
    #[must_use]
    pub fn default_locale(mut self, tag: impl Into<String>) -> Self {
        self.default_locale = Some(tag.into());
        self
    }

    /// Finish the builder.
    ///
    /// Fails when no starting locale was given, or when the starting
    /// locale has no dictionary and no fallback was supplied.
    pub fn build(self) -> Result<LocaleRegistry, RegistryError> {
        let locale = self.default_locale.ok_or(RegistryError::NoDefaultLocale)?;
        let dictionary = dictionary_for(&self.dictionaries, self.fallback.as_ref(), &locale)?;
        debug!(locale = locale.as_str(), "locale activated");
        Ok(LocaleRegistry {
            dictionaries: self.dictionaries,
            fallback: self.fallback,
            translator: Translator::new(dictionary),
            locale,
        })
    }
}

/// Owns per-locale dictionaries and the active [`Translator`].
///
/// Models process-wide locale state as explicit data: one long-lived
/// owner, an explicit [`set_locale`](Self::set_locale) operation that
/// swaps in a freshly built translator, and plain references for
/// consumers.
///
/// ```
/// use glossa_core::Dictionary;
/// use glossa_runtime::LocaleRegistry;
///
/// let mut en = Dictionary::new();
/// en.insert("greeting", "Hello");
/// let mut es = Dictionary::new();
/// es.insert("greeting", "Hola");
///
/// let mut registry = LocaleRegistry::builder()
///     .add_locale("en", en)
///     .add_locale("es", es)
///     .default_locale("en")
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.translate("greeting"), "Hello");
/// registry.set_locale("es").unwrap();
/// assert_eq!(registry.locale(), "es");
/// assert_eq!(registry.translate("greeting"), "Hola");
/// ```
#[derive(Debug, Clone)]
pub struct LocaleRegistry {
    dictionaries: HashMap<LocaleTag, Dictionary>,
    fallback: Option<Dictionary>,
    locale: String,
    translator: Translator,
}

impl LocaleRegistry {
    /// Start building a registry.
    #[must_use]
    pub fn builder() -> LocaleRegistryBuilder {
        LocaleRegistryBuilder::default()
    }

    /// Switch the active locale, rebuilding the active translator from
    /// the tag's dictionary (or the fallback).
    ///
    /// On error the previously active locale stays in effect.
    pub fn set_locale(&mut self, tag: impl Into<String>) -> Result<(), RegistryError> {
        let tag = tag.into();
        let dictionary = dictionary_for(&self.dictionaries, self.fallback.as_ref(), &tag)?;
        debug!(locale = tag.as_str(), "locale activated");
        self.translator = Translator::new(dictionary);
        self.locale = tag;
        Ok(())
    }

    /// Register a dictionary after construction.
    ///
    /// Re-registering the active tag rebuilds the active translator
    /// immediately.
    pub fn add_locale(&mut self, tag: impl Into<String>, dictionary: Dictionary) {
        let tag = tag.into();
        if tag == self.locale {
            self.translator = Translator::new(dictionary.clone());
        }
        self.dictionaries.insert(tag, dictionary);
    }

    /// The currently active locale tag.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// The translator for the active locale.
    #[must_use]
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// All registered locale tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.dictionaries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// Resolve a key in the active locale.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.translator.translate(key)
    }

    /// Resolve a key in the active locale with a data payload.
    #[must_use]
    pub fn translate_with(&self, key: &str, data: &Payload) -> String {
        self.translator.translate_with(key, data)
    }
}

fn dictionary_for(
    dictionaries: &HashMap<LocaleTag, Dictionary>,
    fallback: Option<&Dictionary>,
    tag: &str,
) -> Result<Dictionary, RegistryError> {
    dictionaries
        .get(tag)
        .or(fallback)
        .cloned()
        .ok_or_else(|| RegistryError::MissingLocale(tag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn en() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert("greeting", "Hello");
        dict.insert("mail", "a letter for {name}");
        dict
    }

    fn es() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert("greeting", "Hola");
        dict
    }

    fn registry() -> LocaleRegistry {
        LocaleRegistry::builder()
            .add_locale("en", en())
            .add_locale("es", es())
            .default_locale("en")
            .build()
            .expect("default locale is registered")
    }

    #[test]
    fn build_activates_default_locale() {
        let registry = registry();
        assert_eq!(registry.locale(), "en");
        assert_eq!(registry.translate("greeting"), "Hello");
    }

    #[test]
    fn build_without_default_locale_fails() {
        let err = LocaleRegistry::builder()
            .add_locale("en", en())
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::NoDefaultLocale);
    }

    #[test]
    fn build_with_unknown_default_fails_without_fallback() {
        let err = LocaleRegistry::builder()
            .add_locale("en", en())
            .default_locale("fr")
            .build()
            .unwrap_err();
        assert_eq!(err, RegistryError::MissingLocale("fr".into()));
    }

    #[test]
    fn build_with_unknown_default_uses_fallback() {
        let registry = LocaleRegistry::builder()
            .fallback(en())
            .default_locale("fr")
            .build()
            .unwrap();
        assert_eq!(registry.locale(), "fr");
        assert_eq!(registry.translate("greeting"), "Hello");
    }

    #[test]
    fn set_locale_switches_translator() {
        let mut registry = registry();
        registry.set_locale("es").unwrap();
        assert_eq!(registry.locale(), "es");
        assert_eq!(registry.translate("greeting"), "Hola");
    }

    #[test]
    fn failed_set_locale_keeps_previous_state() {
        let mut registry = registry();
        let err = registry.set_locale("de").unwrap_err();
        assert_eq!(err, RegistryError::MissingLocale("de".into()));
        assert_eq!(registry.locale(), "en");
        assert_eq!(registry.translate("greeting"), "Hello");
    }

    #[test]
    fn set_locale_uses_fallback_for_unknown_tags() {
        let mut registry = LocaleRegistry::builder()
            .add_locale("en", en())
            .fallback(en())
            .default_locale("en")
            .build()
            .unwrap();
        registry.set_locale("de").unwrap();
        assert_eq!(registry.locale(), "de");
        assert_eq!(registry.translate("greeting"), "Hello");
    }

    #[test]
    fn add_locale_after_build() {
        let mut registry = registry();
        let mut fr = Dictionary::new();
        fr.insert("greeting", "Bonjour");
        registry.add_locale("fr", fr);
        registry.set_locale("fr").unwrap();
        assert_eq!(registry.translate("greeting"), "Bonjour");
    }

    #[test]
    fn re_registering_active_locale_rebuilds_translator() {
        let mut registry = registry();
        let mut en2 = Dictionary::new();
        en2.insert("greeting", "Hi there");
        registry.add_locale("en", en2);
        assert_eq!(registry.translate("greeting"), "Hi there");
    }

    #[test]
    fn locales_are_sorted() {
        let registry = registry();
        assert_eq!(registry.locales(), vec!["en", "es"]);
    }

    #[test]
    fn translate_with_passes_payload_through() {
        let registry = registry();
        let data = Payload::new().with("name", "Ada");
        assert_eq!(registry.translate_with("mail", &data), "a letter for Ada");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            RegistryError::MissingLocale("fr".into()).to_string(),
            "translation dictionary for locale \"fr\" not provided"
        );
        assert_eq!(
            RegistryError::NoDefaultLocale.to_string(),
            "no default locale configured"
        );
    }
}

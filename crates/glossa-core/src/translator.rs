//! End-to-end translation: path lookup, variant selection, interpolation.

use tracing::debug;

use crate::dictionary::Dictionary;
use crate::template::{self, Payload};

/// Resolves lookup keys against one locale's dictionary.
///
/// A translator closes over an immutable [`Dictionary`]; constructing
/// one is the whole factory. Lookups never fail: an unresolved key is
/// echoed back so untranslated strings surface visibly instead of
/// crashing, and missing data fields interpolate as the empty string.
///
/// ```
/// use glossa_core::{Dictionary, Payload, Translator};
///
/// let mut dict = Dictionary::new();
/// dict.insert("foo", "bar");
/// dict.insert("template", "{word} value");
/// dict.insert("template_plural", "{word} values");
/// dict.insert("nested.key", "this is a nested value");
///
/// let translator = Translator::new(dict);
/// assert_eq!(translator.translate("foo"), "bar");
/// assert_eq!(
///     translator.translate_with("template", &Payload::new().with("word", "unique")),
///     "unique value"
/// );
/// assert_eq!(
///     translator.translate_with("template", &Payload::new().with("word", "multiple").with("n", 2)),
///     "multiple values"
/// );
/// assert_eq!(translator.translate("nested.key"), "this is a nested value");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    dictionary: Dictionary,
}

impl Translator {
    /// Build a translator over one locale's dictionary.
    #[must_use]
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    /// Resolve a key with no data payload.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.render(key, None)
    }

    /// Resolve a key, select a variant from `data.n`, and interpolate
    /// placeholder tokens from `data`.
    #[must_use]
    pub fn translate_with(&self, key: &str, data: &Payload) -> String {
        self.render(key, Some(data))
    }

    fn render(&self, key: &str, data: Option<&Payload>) -> String {
        let path = self.dictionary.resolve(key);
        if !path.exists() {
            debug!(key, "no translation for key, echoing key");
        }
        let template = template::select_variant(&path, key, data);
        template::interpolate(template, data)
    }

    /// The dictionary this translator resolves against.
    #[must_use]
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}

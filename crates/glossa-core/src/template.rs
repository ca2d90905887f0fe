//! Variant selection and placeholder interpolation.
//!
//! # Invariants
//!
//! 1. **Zero before plural**: when `n` is exactly zero and both a
//!    `_zero` and a `_plural` sibling exist, the `_zero` sibling wins.
//!
//! 2. **Interpolation is single-pass**: substituted values are never
//!    re-scanned, so a value containing `{x}` does not expand again.
//!
//! 3. **Presence, not truthiness**: a data value of `0` or `""`
//!    substitutes as `"0"` / `""`; only absent keys and JSON `null`
//!    render as the empty string.
//!
//! 4. **No data, no scan**: interpolation with no payload returns the
//!    template untouched, brace-like text included.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unresolved key | Key not in dictionary | Key used as template |
//! | Missing data field | `{x}` but no `x` in payload | Empty string |
//! | Non-numeric `n` | `n` is a string, bool, or null | No variant selection |
//! | Stray braces | Token fails the grammar | Left as-is |

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::{Captures, Regex};
use serde_json::Value;
use tracing::trace;

use crate::dictionary::ResolutionPath;

/// Payload field that drives zero/plural variant selection.
pub const QUANTITY_FIELD: &str = "n";

/// Sibling suffix selected when `n` is exactly zero.
pub const ZERO_SUFFIX: &str = "_zero";

/// Sibling suffix selected when `n` is anything but exactly one.
pub const PLURAL_SUFFIX: &str = "_plural";

/// Data payload for a single lookup: placeholder names mapped to values.
///
/// Values are [`serde_json::Value`]s, so numbers, strings, bools, and
/// anything else JSON-shaped can be supplied and will be stringified at
/// substitution time. The special field [`n`](QUANTITY_FIELD) must be a
/// genuine number to drive variant selection; see [`Payload::quantity`].
///
/// ```
/// use glossa_core::Payload;
///
/// let data = Payload::new().with("name", "Alice").with("n", 2);
/// assert_eq!(data.quantity(), Some(2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    values: HashMap<String, Value>,
}

impl Payload {
    /// Create an empty payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value under a placeholder name.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Look up a value by the literal placeholder name (flat, no dot
    /// traversal).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// The numeric quantity `n`, if present and actually a number.
    ///
    /// Non-numeric `n` values (strings, bools, null) are rejected here
    /// rather than coerced, which skips variant selection for the
    /// lookup.
    #[must_use]
    pub fn quantity(&self) -> Option<f64> {
        self.get(QUANTITY_FIELD).and_then(Value::as_f64)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the payload has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Payload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Pick the string to interpolate: the resolved value, one of its
/// variant siblings, or the key itself as a visible fallback.
///
/// The selection policy, in order:
/// - unresolved path: the lookup key verbatim;
/// - no payload, or no numeric `n` in it: the resolved value;
/// - `n == 0` and a `{name}_zero` leaf sibling exists: that sibling;
/// - `n` not exactly one (covers zero, negatives, and fractions) and a
///   `{name}_plural` leaf sibling exists: that sibling;
/// - otherwise: the resolved value.
#[must_use]
pub fn select_variant<'a>(
    path: &ResolutionPath<'a>,
    key: &'a str,
    data: Option<&Payload>,
) -> &'a str {
    let Some(value) = path.value() else {
        return key;
    };
    let Some(n) = data.and_then(Payload::quantity) else {
        return value;
    };
    if n == 0.0 {
        if let Some(zero) = path.sibling(ZERO_SUFFIX) {
            trace!(key = path.name(), "selected zero variant");
            return zero;
        }
    }
    if n > 1.0 || n < 1.0 {
        if let Some(plural) = path.sibling(PLURAL_SUFFIX) {
            trace!(key = path.name(), "selected plural variant");
            return plural;
        }
    }
    value
}

// Token grammar: a decimal integer, or a `$`/`_`/letter-led identifier
// with `.`-separated (possibly empty) trailing segments. Matched
// case-insensitively, wrapped in one or two brace pairs. The doubled
// form is tried first so `{{x}}` never half-matches as `{x}`.
fn placeholder_pattern() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| {
        Regex::new(
            r"(?i)\{\{(?P<double>\d+|[a-z$_][a-z\d$_]*(?:\.[a-z\d$_]*)*)\}\}|\{(?P<single>\d+|[a-z$_][a-z\d$_]*(?:\.[a-z\d$_]*)*)\}",
        )
        .expect("placeholder pattern is valid")
    })
}

/// Replace placeholder tokens in `template` with payload values.
///
/// Both `{name}` and `{{name}}` delimiter forms are recognized and
/// treated identically. The captured token indexes the payload as a
/// flat literal key, dots included: `{a.b}` reads the payload entry
/// named `"a.b"`. Tokens with no matching payload entry substitute the
/// empty string. With no payload at all the template passes through
/// without being scanned.
#[must_use]
pub fn interpolate(template: &str, data: Option<&Payload>) -> String {
    let Some(data) = data else {
        return template.to_string();
    };
    placeholder_pattern()
        .replace_all(template, |caps: &Captures<'_>| {
            let token = caps
                .name("double")
                .or_else(|| caps.name("single"))
                .map_or("", |m| m.as_str());
            data.get(token).map_or_else(String::new, render_value)
        })
        .into_owned()
}

// JSON null counts as absent; strings render bare, everything else via
// its JSON display form.
fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

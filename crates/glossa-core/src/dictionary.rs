//! Translation dictionary tree and dotted-path resolution.
//!
//! # Invariants
//!
//! 1. **Plain tree**: a [`Node`] owns its subtree, so the dictionary can
//!    never contain a cycle.
//!
//! 2. **Resolution is total**: [`Dictionary::resolve`] succeeds for every
//!    input key, including malformed ones (empty string, leading,
//!    trailing, or doubled dots). A key that does not lead to a string
//!    leaf simply produces a path with no value.
//!
//! 3. **Parent tracking**: even a failed resolution reports the deepest
//!    branch reached and the final requested segment, so variant-sibling
//!    probes always have a branch to test against.
//!
//! 4. **Read-only lookups**: `resolve` borrows, allocates nothing, and
//!    has no side effects.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing segment | Key names an absent entry | Path without value |
//! | Leaf mid-path | Intermediate segment is a string | Path without value |
//! | Branch at leaf | Full key names a nested table | Path without value |
//! | Malformed key | Empty or doubled segments | Path without value |

use std::collections::HashMap;

/// A single dictionary entry: a translated string or a nested table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Node {
    /// A translated leaf string (possibly containing placeholder tokens).
    Leaf(String),
    /// A nested table of entries.
    Branch(Dictionary),
}

/// Nested mapping from string keys to leaf strings or nested tables.
///
/// One dictionary is constructed per locale, supplied whole to
/// [`Translator::new`](crate::Translator::new), and never mutated by the
/// resolution core afterwards.
///
/// With the `serde` feature enabled, a dictionary deserializes from any
/// in-memory JSON-shaped value whose leaves are strings:
///
/// ```ignore
/// let dict: Dictionary = serde_json::from_value(serde_json::json!({
///     "greeting": "Hello",
///     "nested": { "values": "am I right?" }
/// }))?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Dictionary {
    entries: HashMap<String, Node>,
}

impl Dictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a leaf string at a dotted path, creating intermediate
    /// branches as needed.
    ///
    /// Last write wins: inserting `"a.b"` after `"a"` replaces the leaf
    /// `"a"` with a branch, and vice versa.
    pub fn insert(&mut self, path: impl AsRef<str>, value: impl Into<String>) {
        self.insert_node(path.as_ref(), value.into());
    }

    fn insert_node(&mut self, path: &str, value: String) {
        match path.split_once('.') {
            None => {
                self.entries.insert(path.to_string(), Node::Leaf(value));
            }
            Some((head, rest)) => {
                let entry = self
                    .entries
                    .entry(head.to_string())
                    .or_insert_with(|| Node::Branch(Dictionary::new()));
                if !matches!(entry, Node::Branch(_)) {
                    *entry = Node::Branch(Dictionary::new());
                }
                if let Node::Branch(child) = entry {
                    child.insert_node(rest, value);
                }
            }
        }
    }

    /// Look up a direct child by its unqualified name (no dot traversal).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.entries.get(name)
    }

    /// Look up a direct child and return it only if it is a leaf string.
    #[must_use]
    pub fn leaf(&self, name: &str) -> Option<&str> {
        match self.entries.get(name) {
            Some(Node::Leaf(value)) => Some(value),
            _ => None,
        }
    }

    /// Number of direct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the direct entry names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Resolve a dotted key to a leaf string, tracking the deepest branch
    /// reached and the final segment name.
    ///
    /// Walks the tree one segment at a time. The walk stops at the first
    /// segment that is missing or not a branch; the path then has no
    /// value, but still reports the deepest branch and the requested
    /// name so sibling probes can run (and miss). A full path ending on
    /// a branch also has no value: only string leaves resolve.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &'a str) -> ResolutionPath<'a> {
        let (prefix, name) = match key.rsplit_once('.') {
            Some((prefix, name)) => (Some(prefix), name),
            None => (None, key),
        };

        let mut parent = self;
        let mut reached = true;
        if let Some(prefix) = prefix {
            for segment in prefix.split('.') {
                match parent.get(segment) {
                    Some(Node::Branch(next)) => parent = next,
                    _ => {
                        reached = false;
                        break;
                    }
                }
            }
        }

        let value = if reached { parent.leaf(name) } else { None };
        ResolutionPath {
            value,
            name,
            parent,
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (path, value) in iter {
            dictionary.insert(path.as_ref(), value);
        }
        dictionary
    }
}

/// Per-lookup record produced by [`Dictionary::resolve`].
///
/// Borrows from the dictionary and the key; lives only as long as a
/// single resolution.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionPath<'a> {
    value: Option<&'a str>,
    name: &'a str,
    parent: &'a Dictionary,
}

impl<'a> ResolutionPath<'a> {
    /// Whether the key resolved to a leaf string.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    /// The leaf string, if the key resolved to one.
    #[must_use]
    pub fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// The final unqualified segment of the key.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The deepest branch reached during the walk. When the key fully
    /// resolves this is the branch that directly contains [`name`](Self::name).
    #[must_use]
    pub fn parent(&self) -> &'a Dictionary {
        self.parent
    }

    /// Probe the parent branch for the leaf named `{name}{suffix}`.
    ///
    /// This is how variant siblings (`_zero`, `_plural`) are located:
    /// an ordinary containment check against the parent table, keyed by
    /// string concatenation.
    #[must_use]
    pub fn sibling(&self, suffix: &str) -> Option<&'a str> {
        self.parent.leaf(&format!("{}{}", self.name, suffix))
    }
}

#![forbid(unsafe_code)]

//! Localization string resolution for Glossa.
//!
//! Resolves a dotted lookup key against a nested translation dictionary,
//! picks a singular/plural/zero variant based on the numeric payload
//! field `n`, and substitutes `{name}` / `{{name}}` placeholder tokens
//! with values from a data payload.
//!
//! # Role in Glossa
//! `glossa-core` is the resolution engine. It owns the dictionary tree,
//! path lookup, variant selection, and interpolation. It holds no locale
//! state; `glossa-runtime` layers locale switching on top.
//!
//! # Primary responsibilities
//! - **Dictionary**: immutable nested mapping from string keys to leaf
//!   strings or nested dictionaries, one per locale.
//! - **ResolutionPath**: dotted-path lookup that also tracks the deepest
//!   parent branch and the final segment name, so variant siblings
//!   (`<name>_zero`, `<name>_plural`) can be probed.
//! - **Payload and interpolation**: placeholder substitution with
//!   graceful degradation. Unresolved keys echo the key, missing data
//!   fields render as the empty string, and nothing here panics or
//!   returns an error.
//!
//! # How it fits in the system
//! `glossa-runtime` builds one [`Translator`] per active locale and
//! hands it by reference to consumers. Every call is a bounded,
//! synchronous, side-effect-free computation over the input string; a
//! `Translator` is `Send + Sync` and safe to share across threads.

pub mod dictionary;
pub mod template;
pub mod translator;

pub use dictionary::{Dictionary, Node, ResolutionPath};
pub use template::{
    interpolate, select_variant, Payload, PLURAL_SUFFIX, QUANTITY_FIELD, ZERO_SUFFIX,
};
pub use translator::Translator;

#![forbid(unsafe_code)]

//! Locale state for Glossa applications.
//!
//! # Role in Glossa
//! `glossa-runtime` owns the mutable part of localization: which locale
//! is active, which dictionary backs it, and the currently active
//! [`Translator`](glossa_core::Translator). The resolution engine
//! itself lives in `glossa-core` and stays pure.
//!
//! # Primary responsibilities
//! - **LocaleRegistry**: per-locale dictionaries, an optional fallback
//!   dictionary, and an explicit `set_locale` operation that rebuilds
//!   the active translator.
//! - **RegistryError**: the adapter-level failures (unknown locale with
//!   no fallback, no starting locale). The core never errors; this
//!   layer is where a missing dictionary becomes a real error.
//!
//! # How it fits in the system
//! A long-lived component (an app state struct, a service) owns one
//! registry and passes `registry.translator()` by reference to whatever
//! needs strings. No global singleton is involved; switching locale is
//! an ordinary `&mut` call on the owner.

pub mod registry;

pub use registry::{LocaleRegistry, LocaleRegistryBuilder, LocaleTag, RegistryError};

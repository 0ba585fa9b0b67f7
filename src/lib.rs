//! Lingo - module-scoped localization with placeholder interpolation
//!
//! This library resolves language keys from per-language INI files into
//! translated strings, substituting `{name[:hint]}` placeholders with
//! caller-supplied values and mirroring resolved strings into a client-side
//! key/value store.
//!
//! # Example
//!
//! ```rust
//! use lingo::{interpolate, Values};
//!
//! let greeting = interpolate("Hello, {0}!", &Values::positional(["World"]));
//! assert_eq!(greeting, "Hello, World!");
//! ```

pub mod bridge;
pub mod catalog;
pub mod config;
pub mod error;
pub mod interp;
pub mod loader;
pub mod localizer;

pub use bridge::ClientTransfer;
pub use catalog::{missing_key_message, scoped_key, Catalog, SCOPE_PREFIX};
pub use config::{ConfigError, ModuleConfig};
pub use error::CatalogError;
pub use interp::{interpolate, interpolate_opt, Values};
pub use loader::{available_languages, load_catalog, parse_language_file};
pub use localizer::{CatalogLocalizer, Localizer, TableLocalizer};

/// Translate a module-scoped key against a catalog.
///
/// This is the main entry point for call sites holding a loaded [`Catalog`]:
/// it resolves the scoped template and interpolates `values` into it, falling
/// back to the deterministic missing-key diagnostic.
///
/// # Example
///
/// ```rust
/// use lingo::{scoped_key, translate, Catalog, Values};
///
/// let mut catalog = Catalog::new();
/// catalog.insert(scoped_key(Some("demo"), "greeting"), "Hello, {0}!");
///
/// let out = translate(&catalog, "demo", "greeting", &Values::positional(["World"]));
/// assert_eq!(out, "Hello, World!");
/// ```
pub fn translate(catalog: &Catalog, module: &str, key: &str, values: &Values) -> String {
    catalog.translate(Some(module), key, values)
}

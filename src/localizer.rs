//! Localization capability with catalog-backed and table-backed variants
//!
//! Hosts hold a `dyn Localizer` chosen once at construction instead of
//! probing for language support on every call: [`CatalogLocalizer`] when
//! this crate owns the language data, [`TableLocalizer`] when the host
//! resolves and scopes strings itself (or in tests).

use std::collections::HashMap;
use std::path::Path;

use crate::catalog::{missing_key_message, scoped_key, Catalog};
use crate::error::CatalogError;
use crate::interp::{interpolate, Values};
use crate::loader::load_catalog;

/// Resolves language keys to translated, interpolated strings.
///
/// Lookup never fails: a missing key produces the deterministic diagnostic
/// message from [`missing_key_message`].
pub trait Localizer {
    /// The raw template for `key`, if one is defined
    fn template(&self, key: &str) -> Option<&str>;

    /// All keys this localizer can resolve, sorted
    fn keys(&self) -> Vec<String>;

    /// The module namespace this localizer serves, if any
    fn module(&self) -> Option<&str> {
        None
    }

    /// Translate `key`, interpolating `values` into its template
    fn tt(&self, key: &str, values: &Values) -> String {
        match self.template(key) {
            Some(template) => interpolate(template, values),
            None => missing_key_message(key, self.module()),
        }
    }

    /// Like [`Localizer::tt`], but an absent key yields `None`
    fn tt_opt(&self, key: &str, values: &Values) -> Option<String> {
        self.template(key).map(|template| interpolate(template, values))
    }
}

/// Full engine: module prefix plus an owned, read-only [`Catalog`].
#[derive(Debug, Clone)]
pub struct CatalogLocalizer {
    module: String,
    catalog: Catalog,
}

impl CatalogLocalizer {
    /// Wrap an already-built catalog
    pub fn new(module: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            module: module.into(),
            catalog,
        }
    }

    /// Load language files and build the localizer in one step
    pub fn from_language_dir(
        dir: &Path,
        module: &str,
        default_language: &str,
        language: &str,
    ) -> Result<Self, CatalogError> {
        let catalog = load_catalog(dir, module, default_language, language)?;
        Ok(Self::new(module, catalog))
    }

    /// The backing catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Localizer for CatalogLocalizer {
    fn template(&self, key: &str) -> Option<&str> {
        self.catalog.template(&scoped_key(Some(&self.module), key))
    }

    fn keys(&self) -> Vec<String> {
        self.catalog.keys_for_module(&self.module, true)
    }

    fn module(&self) -> Option<&str> {
        Some(&self.module)
    }

    fn tt(&self, key: &str, values: &Values) -> String {
        self.catalog.translate(Some(&self.module), key, values)
    }
}

/// Plain in-memory table without scoping.
///
/// For hosts that already resolved their strings elsewhere, and for tests.
#[derive(Debug, Clone, Default)]
pub struct TableLocalizer {
    strings: HashMap<String, String>,
}

impl TableLocalizer {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a template, builder style
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.strings.insert(key.into(), template.into());
        self
    }

    /// Add or replace a template
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.strings.insert(key.into(), template.into());
    }
}

impl FromIterator<(String, String)> for TableLocalizer {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            strings: iter.into_iter().collect(),
        }
    }
}

impl Localizer for TableLocalizer {
    fn template(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(|s| s.as_str())
    }

    fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.strings.keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog_localizer() -> CatalogLocalizer {
        let mut catalog = Catalog::new();
        catalog.insert(scoped_key(Some("demo"), "greeting"), "Hello, {0}!");
        CatalogLocalizer::new("demo", catalog)
    }

    #[test]
    fn test_catalog_variant_scopes_keys() {
        let localizer = catalog_localizer();
        assert_eq!(localizer.template("greeting"), Some("Hello, {0}!"));
        assert_eq!(
            localizer.tt("greeting", &Values::positional(["Ada"])),
            "Hello, Ada!"
        );
        assert_eq!(localizer.keys(), vec!["greeting".to_string()]);
    }

    #[test]
    fn test_variants_agree_on_missing_key_contract() {
        let catalog = catalog_localizer();
        let table = TableLocalizer::new();
        assert_eq!(
            catalog.tt("foo", &Values::new()),
            "Language key 'foo' is not defined for module 'demo'."
        );
        assert_eq!(
            table.tt("foo", &Values::new()),
            "Language key 'foo' is not defined."
        );
        assert_eq!(catalog.tt_opt("foo", &Values::new()), None);
        assert_eq!(table.tt_opt("foo", &Values::new()), None);
    }

    #[test]
    fn test_table_variant_is_unscoped() {
        let mut localizer = TableLocalizer::new().with("title", "{0:page} title");
        localizer.insert("subtitle", "by {author}");
        assert_eq!(
            localizer.tt("title", &Values::positional(["Demo"])),
            "Demo title"
        );
        assert_eq!(
            localizer.tt("subtitle", &Values::named([("author", "Ada")])),
            "by Ada"
        );
        assert_eq!(
            localizer.keys(),
            vec!["subtitle".to_string(), "title".to_string()]
        );
    }

    #[test]
    fn test_catalog_accessor_exposes_scoped_store() {
        let localizer = catalog_localizer();
        assert_eq!(
            localizer.catalog().template("emlang_demo_greeting"),
            Some("Hello, {0}!")
        );
    }

    #[test]
    fn test_object_safety() {
        let localizers: Vec<Box<dyn Localizer>> = vec![
            Box::new(catalog_localizer()),
            Box::new(TableLocalizer::new()),
        ];
        assert_eq!(localizers.len(), 2);
    }
}

//! Flat scoped-key catalog and the translation lookup tier
//!
//! All modules share one flat store of language strings. Collisions are
//! avoided by prefixing every key with a namespace derived from the module
//! prefix before insertion. The catalog is built once by the loader and is
//! read-only afterwards; translation never mutates it.

use std::collections::HashMap;

use crate::interp::{interpolate, Values};

/// Namespace marker in front of every module-scoped key in the flat store.
pub const SCOPE_PREFIX: &str = "emlang_";

/// Build the flat-store key for a module-scoped language key.
///
/// Without a module the key is used as-is (host-global strings).
pub fn scoped_key(module: Option<&str>, key: &str) -> String {
    match module {
        None => key.to_string(),
        Some(module) => format!("{}{}_{}", SCOPE_PREFIX, module, key),
    }
}

/// Diagnostic string produced when a language key has no template.
///
/// Deterministic and human-readable; lookup failure is a content gap, not a
/// fault, so this is returned in place of the translation rather than raised.
pub fn missing_key_message(key: &str, module: Option<&str>) -> String {
    match module {
        None => format!("Language key '{}' is not defined.", key),
        Some(module) => format!(
            "Language key '{}' is not defined for module '{}'.",
            key, module
        ),
    }
}

/// Read-only store of scoped key -> template string for the active language.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    strings: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a template under an already-scoped key
    pub fn insert(&mut self, scoped_key: impl Into<String>, template: impl Into<String>) {
        self.strings.insert(scoped_key.into(), template.into());
    }

    /// The raw template stored under `scoped_key`, if any
    pub fn template(&self, scoped_key: &str) -> Option<&str> {
        self.strings.get(scoped_key).map(|s| s.as_str())
    }

    /// Number of stored templates
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when nothing has been loaded
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Keys belonging to `module`, sorted.
    ///
    /// With `strip_scope` the namespace prefix is removed, yielding the keys
    /// as call sites use them; otherwise the flat-store form is returned.
    pub fn keys_for_module(&self, module: &str, strip_scope: bool) -> Vec<String> {
        let prefix = scoped_key(Some(module), "");
        let mut keys: Vec<String> = self
            .strings
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .map(|stripped| {
                if strip_scope {
                    stripped.to_string()
                } else {
                    format!("{}{}", prefix, stripped)
                }
            })
            .collect();
        keys.sort();
        keys
    }

    /// Resolve and interpolate a module-scoped key.
    ///
    /// An absent key yields [`missing_key_message`] with the caller's values
    /// discarded; this never fails.
    pub fn translate(&self, module: Option<&str>, key: &str, values: &Values) -> String {
        match self.template(&scoped_key(module, key)) {
            Some(template) => interpolate(template, values),
            None => {
                log::warn!("language key '{}' has no template", key);
                missing_key_message(key, module)
            }
        }
    }
}

impl FromIterator<(String, String)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            strings: iter.into_iter().collect(),
        }
    }
}

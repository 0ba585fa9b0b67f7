//! Substitution values for template interpolation

use std::collections::HashMap;
use std::fmt::Display;

/// Named substitution values for [`interpolate`](super::interpolate).
///
/// Positional values are stored under their index rendered as a string
/// (`"0"`, `"1"`, ...), matching the placeholder names they substitute, so
/// `{0}` and `{name}` placeholders draw from the same map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: HashMap<String, String>,
}

impl Values {
    /// Create an empty value set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an ordered list; item `i` substitutes the placeholder `{i}`
    pub fn positional<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Display,
    {
        let entries = items
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value.to_string()))
            .collect();
        Self { entries }
    }

    /// Build from explicit name/value pairs
    pub fn named<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        let entries = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.to_string()))
            .collect();
        Self { entries }
    }

    /// Add a value, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.set(name, value);
        self
    }

    /// Add or replace a value
    pub fn set(&mut self, name: impl Into<String>, value: impl Display) {
        self.entries.insert(name.into(), value.to_string());
    }

    /// Look up the substitution for a placeholder name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|s| s.as_str())
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no values are present
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

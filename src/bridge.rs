//! Client-side transfer of resolved language strings
//!
//! Translated strings (and arbitrary JSON values) are queued under their
//! scoped keys, then rendered either as a JSON object or as a script block
//! feeding a client-side key/value store. The hand-off is one-way and
//! opaque: nothing here knows what the client does with the strings.
//!
//! Single-key transfers are interpolated server-side; bulk transfers ship
//! the raw templates so the client can interpolate with its own values.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::catalog::{missing_key_message, scoped_key};
use crate::interp::Values;
use crate::localizer::Localizer;

/// Name of the client-side store receiving transferred strings
const CLIENT_STORE: &str = "lang";

/// Accumulates scoped key/value pairs for hand-off to a client page.
///
/// Entries are kept sorted by key so rendered output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct ClientTransfer {
    entries: BTreeMap<String, Value>,
}

impl ClientTransfer {
    /// Create an empty transfer
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of queued entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is queued
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Queue an arbitrary JSON value under a module-scoped key.
    ///
    /// Values are not limited to strings; arrays and objects pass through
    /// unchanged.
    pub fn add_value(&mut self, module: Option<&str>, key: &str, value: impl Into<Value>) {
        self.entries.insert(scoped_key(module, key), value.into());
    }

    /// Queue a single translation, interpolated with `values`
    pub fn add_translation(&mut self, localizer: &dyn Localizer, key: &str, values: &Values) {
        self.entries.insert(
            scoped_key(localizer.module(), key),
            Value::String(localizer.tt(key, values)),
        );
    }

    /// Queue several keys without interpolation.
    ///
    /// The raw templates are shipped so the client can substitute its own
    /// values later; a missing key ships its diagnostic message instead.
    pub fn add_keys<'a>(
        &mut self,
        localizer: &dyn Localizer,
        keys: impl IntoIterator<Item = &'a str>,
    ) {
        for key in keys {
            let template = match localizer.template(key) {
                Some(template) => template.to_string(),
                None => missing_key_message(key, localizer.module()),
            };
            self.entries
                .insert(scoped_key(localizer.module(), key), Value::String(template));
        }
    }

    /// Queue every key the localizer can resolve, without interpolation
    pub fn add_all(&mut self, localizer: &dyn Localizer) {
        let keys = localizer.keys();
        self.add_keys(localizer, keys.iter().map(|k| k.as_str()));
    }

    /// Render the queued entries as a JSON object
    pub fn to_json(&self) -> String {
        let object: serde_json::Map<String, Value> = self
            .entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        encode(&Value::Object(object))
    }

    /// Render the queued entries as an embeddable script block.
    ///
    /// One store-add call per entry; a single entry stays on one line. An
    /// empty transfer renders as an empty string so call sites can emit the
    /// result unconditionally.
    pub fn to_script(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let multi = self.entries.len() > 1;
        let (lf, tab) = if multi { ("\n", "\t") } else { ("", "") };
        let mut out = String::new();
        out.push_str("<script>");
        out.push_str(lf);
        for (key, value) in &self.entries {
            out.push_str(tab);
            out.push_str(CLIENT_STORE);
            out.push_str(".add(");
            out.push_str(&encode(&Value::String(key.clone())));
            out.push_str(", ");
            out.push_str(&encode(value));
            out.push(')');
            out.push_str(lf);
        }
        out.push_str("</script>");
        out.push_str(lf);
        out
    }
}

fn encode(value: &Value) -> String {
    serde_json::to_string(value).expect("JSON values serialize")
}

//! Polymorphic name field extraction
//!
//! Upstream payloads encode display names either as a plain string or as a
//! localized-name object (`{"en": "Rage Vial", ...}`). Both forms appear in
//! the wild for the same field, so parsing accepts either.

use serde::Deserialize;
use serde_json::Value;

/// A name field that may be a bare string or a string-keyed mapping.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NameField {
    Plain(String),
    Localized(serde_json::Map<String, Value>),
}

impl NameField {
    /// Resolve the display name.
    ///
    /// Plain strings are used trimmed. For mappings, the `en` key wins,
    /// then a generic `name` key, then the first string-valued entry.
    /// The last fallback is a best-effort compatibility shim for
    /// malformed upstream data, not a contract. Returns an empty string
    /// when nothing resolves.
    pub fn resolve(&self) -> String {
        match self {
            NameField::Plain(s) => s.trim().to_string(),
            NameField::Localized(map) => {
                for key in ["en", "name"] {
                    if let Some(Value::String(s)) = map.get(key) {
                        return s.trim().to_string();
                    }
                }
                for value in map.values() {
                    if let Value::String(s) = value {
                        if !s.is_empty() {
                            return s.trim().to_string();
                        }
                    }
                }
                String::new()
            }
        }
    }
}

/// Extract a display name from a raw JSON value holding a [`NameField`].
///
/// Anything that is neither a string nor a mapping yields an empty name.
pub fn extract_name(raw: &Value) -> String {
    match serde_json::from_value::<NameField>(raw.clone()) {
        Ok(field) => field.resolve(),
        Err(_) => String::new(),
    }
}

//! Typed builder for rich-query selectors.
//!
//! The state database accepts a JSON selector document of the form
//! `{"selector":{...}}` (empty inner object = match every document). This
//! builder replaces ad-hoc JSON literals so additional filters can be added
//! without risking malformed selectors.

use serde_json::{Map, Value};

use crate::error::LedgerError;

/// A rich-query selector.
///
/// ```
/// use assetledger_core::Selector;
///
/// let all = Selector::all();
/// assert_eq!(all.to_query_string().unwrap(), r#"{"selector":{}}"#);
///
/// let mine = Selector::all().field_eq("owner", "owner1");
/// assert_eq!(
///     mine.to_query_string().unwrap(),
///     r#"{"selector":{"owner":"owner1"}}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    fields: Map<String, Value>,
}

impl Selector {
    /// A selector matching every stored document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Add an equality condition on a field.
    pub fn field_eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns `true` if no conditions have been added.
    pub fn is_match_all(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render the wire-format selector JSON sent to the state database.
    pub fn to_query_string(&self) -> Result<String, LedgerError> {
        let doc = serde_json::json!({ "selector": Value::Object(self.fields.clone()) });
        serde_json::to_string(&doc).map_err(|e| LedgerError::serialization("selector", e))
    }

    /// Evaluate this selector against a stored document.
    ///
    /// Used by standalone state backends to emulate the state database's
    /// matching: an empty selector matches everything, otherwise every
    /// listed field must be present and equal.
    pub fn matches(&self, doc: &Value) -> bool {
        if self.fields.is_empty() {
            return true;
        }
        let Some(obj) = doc.as_object() else {
            return false;
        };
        self.fields
            .iter()
            .all(|(field, expected)| obj.get(field) == Some(expected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn match_all_wire_format_is_exact() {
        // Existing ledgers were queried with this exact byte sequence.
        assert_eq!(
            Selector::all().to_query_string().unwrap(),
            r#"{"selector":{}}"#
        );
    }

    #[test]
    fn field_eq_wire_format() {
        let s = Selector::all().field_eq("status", "available");
        assert_eq!(
            s.to_query_string().unwrap(),
            r#"{"selector":{"status":"available"}}"#
        );
    }

    #[test]
    fn empty_selector_matches_anything() {
        let s = Selector::all();
        assert!(s.is_match_all());
        assert!(s.matches(&json!({"id": "a1"})));
        assert!(s.matches(&json!(42)));
    }

    #[test]
    fn field_eq_filters_documents() {
        let s = Selector::all().field_eq("owner", "owner1");
        assert!(s.matches(&json!({"id": "a1", "owner": "owner1"})));
        assert!(!s.matches(&json!({"id": "a2", "owner": "owner2"})));
        assert!(!s.matches(&json!({"id": "a3"}))); // field absent
        assert!(!s.matches(&json!("not an object")));
    }

    #[test]
    fn multiple_conditions_are_conjunctive() {
        let s = Selector::all()
            .field_eq("owner", "owner1")
            .field_eq("status", "available");
        assert!(s.matches(&json!({"owner": "owner1", "status": "available"})));
        assert!(!s.matches(&json!({"owner": "owner1", "status": "checked out"})));
    }
}

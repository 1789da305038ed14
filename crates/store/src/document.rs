use crate::collection::Collection;
use crate::error::{Result, StoreError};
use nexora_protocol::ObjectId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One stored record, schemaless at the store boundary.
///
/// Handlers decode into the typed record structs in [`crate::records`];
/// the similarity corpus serializes documents back to text verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Document(Value);

impl Document {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// The record's `_id`, when present and well-formed.
    #[must_use]
    pub fn id(&self) -> Option<ObjectId> {
        self.0
            .get("_id")
            .and_then(Value::as_str)
            .and_then(|raw| ObjectId::parse(raw).ok())
    }

    /// String value of a top-level field.
    #[must_use]
    pub fn str_field(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }

    pub fn decode<T: DeserializeOwned>(&self, collection: Collection) -> Result<T> {
        serde_json::from_value(self.0.clone()).map_err(|err| StoreError::MalformedRecord {
            collection,
            message: err.to_string(),
        })
    }

    /// Single-line JSON, the form fed to the similarity corpus and used for
    /// whole-record answers.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.0.to_string()
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_requires_well_formed_hex() {
        let doc = Document::new(json!({"_id": "65a1b2c3d4e5f60718293a4b", "name": "מכירות"}));
        assert_eq!(
            doc.id().unwrap().to_string(),
            "65a1b2c3d4e5f60718293a4b"
        );

        let bad = Document::new(json!({"_id": "not-hex"}));
        assert!(bad.id().is_none());
        assert!(Document::new(json!({"name": "x"})).id().is_none());
    }

    #[test]
    fn decode_surfaces_collection_in_error() {
        let doc = Document::new(json!({"quantity": "not a number"}));
        let err = doc
            .decode::<crate::records::Inventory>(Collection::Inventories)
            .unwrap_err();
        assert!(err.to_string().contains("inventories"));
    }
}

//! Document wrapper returned by the store

use crate::error::{UniverseError, UniverseResult};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A stored document: its id plus the field map
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, data: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    /// Decode the document into a typed entity
    ///
    /// The id is injected into the field map under `"id"` so entity structs
    /// carry their own document id after decoding.
    pub fn decode<T: DeserializeOwned>(&self) -> UniverseResult<T> {
        let mut fields = self.data.clone();
        fields.insert("id".to_string(), Value::String(self.id.clone()));
        serde_json::from_value(Value::Object(fields)).map_err(UniverseError::from)
    }

    /// Borrow a field value by name
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.data.get(name)
    }

    /// Borrow a string field, treating non-strings as absent
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.data.get(name).and_then(Value::as_str)
    }
}

/// Coerce a JSON value into the object map a document requires
pub(crate) fn into_object(data: Value) -> UniverseResult<Map<String, Value>> {
    match data {
        Value::Object(map) => Ok(map),
        other => Err(UniverseError::store(format!(
            "document data must be a JSON object, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

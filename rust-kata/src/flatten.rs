//! Flatten nested JSON objects into a single-level record.
//!
//! `{"person": {"gender": {"content": "f"}}}` flattened with `"_"` becomes
//! `person_gender_content = "f"`. Key order follows the source document.

use serde_json::{Map, Value};

use crate::error::{KataError, Result};

/// Flat key/value pairs in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatRecord {
    fields: Vec<(String, String)>,
}

impl FlatRecord {
    /// Value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Add or replace a field.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Values in `columns` order; missing columns become `""`.
    pub fn project<S: AsRef<str>>(&self, columns: &[S]) -> Vec<&str> {
        columns
            .iter()
            .map(|c| self.get(c.as_ref()).unwrap_or(""))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Flatten a JSON object. Anything other than an object at the top level is
/// an `InvalidArgument`.
pub fn flatten_json(value: &Value, delimiter: &str) -> Result<FlatRecord> {
    let Value::Object(map) = value else {
        return Err(KataError::invalid_argument(
            "only JSON objects can be flattened",
        ));
    };
    let mut record = FlatRecord::default();
    flatten_into(map, "", delimiter, &mut record);
    Ok(record)
}

/// Parse `text` as JSON, then [`flatten_json`] it.
pub fn flatten_json_str(text: &str, delimiter: &str) -> Result<FlatRecord> {
    let value: Value = serde_json::from_str(text)?;
    flatten_json(&value, delimiter)
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, delimiter: &str, out: &mut FlatRecord) {
    for (key, value) in map {
        let full = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{delimiter}{key}")
        };
        match value {
            Value::Object(inner) => flatten_into(inner, &full, delimiter, out),
            Value::String(s) => out.insert(full, s.as_str()),
            other => out.insert(full, other.to_string()),
        }
    }
}

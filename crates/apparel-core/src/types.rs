//! The apparel attributes returned by a describe call.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{ApparelSchema, Category, Pattern};

/// Apparel attributes as returned by the model.
///
/// The mapping is kept exactly as the model produced it. It is expected to
/// follow [`ApparelSchema`], but nothing enforces that: fields may be missing,
/// extra, or hold values outside the schema's enums.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApparelResult(Map<String, Value>);

impl ApparelResult {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw value of a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Read a field as a typed value, `None` if absent or of another shape.
    pub fn field<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.0
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn category(&self) -> Option<Category> {
        self.field("category")
    }

    pub fn pattern(&self) -> Option<Pattern> {
        self.field("pattern")
    }

    pub fn description(&self) -> Option<String> {
        self.field("description")
    }

    /// Required schema fields the model left out.
    pub fn missing_required(&self) -> Vec<&'static str> {
        ApparelSchema::REQUIRED
            .iter()
            .copied()
            .filter(|key| !self.0.contains_key(*key))
            .collect()
    }
}

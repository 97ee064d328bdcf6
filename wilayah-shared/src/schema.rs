//! Collection schema types.

use serde::{Deserialize, Serialize};

/// Type of a collection field as understood by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Int64,
    /// Any type this crate does not declare itself.
    #[serde(other)]
    Other,
}

/// A single named, typed field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// A collection definition: name, fields and the default sort field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSchema {
    pub name: String,
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sorting_field: Option<String>,
}

impl CollectionSchema {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_schema() {
        let schema = CollectionSchema {
            name: "villages".to_string(),
            fields: vec![
                Field::new("id", FieldType::String),
                Field::new("created_at", FieldType::Int64),
            ],
            default_sorting_field: Some("created_at".to_string()),
        };

        let value = serde_json::to_value(&schema).unwrap();

        assert_eq!(value["name"], "villages");
        assert_eq!(value["fields"][0]["type"], "string");
        assert_eq!(value["fields"][1]["type"], "int64");
        assert_eq!(value["default_sorting_field"], "created_at");
    }

    #[test]
    fn test_deserialize_engine_response() {
        // Engines report extra per-field attributes and types we don't model.
        let value = serde_json::json!({
            "name": "villages",
            "num_documents": 83_000,
            "fields": [
                { "name": "full_name", "type": "string", "facet": false, "optional": false },
                { "name": "location", "type": "geopoint", "facet": false }
            ],
            "default_sorting_field": "created_at"
        });

        let schema: CollectionSchema = serde_json::from_value(value).unwrap();

        assert_eq!(schema.fields.len(), 2);
        assert_eq!(schema.field("full_name").unwrap().field_type, FieldType::String);
        assert_eq!(schema.field("location").unwrap().field_type, FieldType::Other);
        assert!(schema.field("missing").is_none());
    }
}

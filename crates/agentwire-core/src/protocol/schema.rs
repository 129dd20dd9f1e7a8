//! Tool schemas exchanged so the Agent can request client-local tools.
//!
//! Modeled on a JSON-Schema object subset. Property schemas are kept as opaque
//! JSON values; only the Agent engine interprets them.

use serde::Serialize;
use serde_json::{Map, Value};

/// Callable tool description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSchema {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub input_schema: InputSchema,
}

/// Literal `"object"`, the only schema type a tool input may have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum SchemaType {
    #[default]
    #[serde(rename = "object")]
    Object,
}

/// Tool argument schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputSchema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl ToolSchema {
    /// Tool taking no declared arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_schema: InputSchema::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare an argument; `required` also lists it under `required`.
    pub fn with_property(mut self, name: impl Into<String>, schema: Value, required: bool) -> Self {
        let name = name.into();
        if required {
            self.input_schema
                .required
                .get_or_insert_with(Vec::new)
                .push(name.clone());
        }
        self.input_schema
            .properties
            .get_or_insert_with(Map::new)
            .insert(name, schema);
        self
    }

    /// Names listed in `required` that `properties` does not declare.
    ///
    /// Advisory only: a non-empty result does not make the message malformed.
    pub fn undeclared_required(&self) -> Vec<&str> {
        let Some(required) = &self.input_schema.required else {
            return Vec::new();
        };
        required
            .iter()
            .filter(|name| {
                !self
                    .input_schema
                    .properties
                    .as_ref()
                    .is_some_and(|props| props.contains_key(name.as_str()))
            })
            .map(String::as_str)
            .collect()
    }
}

//! Schema resolution - converts payload types to AsyncAPI schemas.

use crate::error::{Error, Result};
use crate::payload::TypeInfo;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// AsyncAPI Schema definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// The type of the schema (string, integer, object, array, etc.)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Properties for object types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, Property>>,
    /// Required field names for object types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
    /// Items schema for array types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Enum values for enum types
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,
    /// Reference to another schema
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Format for primitive types (e.g., "int32", "int64", "float", "double")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Schema {
    /// Schema for a primitive type
    pub fn primitive(schema_type: &str, format: Option<&str>) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            format: format.map(|s| s.to_string()),
            ..Default::default()
        }
    }

    /// Object schema with properties
    pub fn object(properties: HashMap<String, Property>, required: Vec<String>) -> Self {
        Self {
            schema_type: Some("object".to_string()),
            properties: Some(properties),
            required: if required.is_empty() { None } else { Some(required) },
            ..Default::default()
        }
    }

    /// Object schema with no documented properties
    pub fn empty_object() -> Self {
        Self {
            schema_type: Some("object".to_string()),
            ..Default::default()
        }
    }

    /// Array schema over an item schema
    pub fn array(items: Schema) -> Self {
        Self {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }
}

/// Property definition for object schemas
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// The type of the property
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    /// Reference to another schema
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Items schema for array properties
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Format for primitive types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Property {
    /// Property of a primitive type
    pub fn primitive(property_type: &str, format: Option<&str>) -> Self {
        Self {
            property_type: Some(property_type.to_string()),
            format: format.map(|s| s.to_string()),
            ..Default::default()
        }
    }

    /// Property referencing a named schema
    pub fn reference(schema_name: &str) -> Self {
        Self {
            reference: Some(format!("#/components/schemas/{}", schema_name)),
            ..Default::default()
        }
    }
}

/// Resolves a payload type into a schema body.
pub trait SchemaResolver: Send + Sync {
    /// Resolve the schema for a type.
    ///
    /// Fails with [`Error::SchemaResolution`] when the type cannot be
    /// introspected into a schema.
    fn resolve(&self, type_info: &TypeInfo) -> Result<Schema>;
}

/// Default resolver backed by an explicit catalog of named-type definitions.
///
/// Built-in primitives resolve without registration; `Option<T>` unwraps to
/// the inner schema and `Vec<T>` becomes an array. Named types must be
/// registered up front or resolution fails.
#[derive(Default)]
pub struct TypeCatalog {
    /// Registered named-type schemas, keyed by simple name
    definitions: HashMap<String, Schema>,
}

impl TypeCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        debug!("Initializing TypeCatalog");
        Self::default()
    }

    /// Register a named-type schema
    pub fn with_type(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.definitions.insert(name.into(), schema);
        self
    }

    /// Map a primitive type name to its schema
    fn primitive_schema(name: &str) -> Option<Schema> {
        let (schema_type, format) = match name {
            "String" | "str" | "char" => ("string", None),
            "i8" | "i16" | "i32" | "u8" | "u16" | "u32" => ("integer", Some("int32")),
            "i64" | "i128" | "u64" | "u128" | "isize" | "usize" => ("integer", Some("int64")),
            "f32" => ("number", Some("float")),
            "f64" => ("number", Some("double")),
            "bool" => ("boolean", None),
            _ => return None,
        };
        Some(Schema::primitive(schema_type, format))
    }
}

impl SchemaResolver for TypeCatalog {
    fn resolve(&self, type_info: &TypeInfo) -> Result<Schema> {
        debug!("Resolving schema for type: {}", type_info.name);

        // Option<T> unwraps to the inner type's schema
        if type_info.is_option {
            if let Some(inner) = type_info.generic_args.first() {
                return self.resolve(inner);
            }
        }

        // Vec<T> becomes an array schema
        if type_info.is_vec {
            if let Some(inner) = type_info.generic_args.first() {
                return Ok(Schema::array(self.resolve(inner)?));
            }
        }

        if let Some(schema) = Self::primitive_schema(&type_info.name) {
            return Ok(schema);
        }

        self.definitions
            .get(type_info.simple_name())
            .or_else(|| self.definitions.get(&type_info.name))
            .cloned()
            .ok_or_else(|| Error::SchemaResolution {
                type_name: type_info.name.clone(),
                message: "type is not registered in the catalog".to_string(),
            })
    }
}

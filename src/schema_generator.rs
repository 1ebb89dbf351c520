use crate::extractor::Definition;
use crate::type_mapper::{is_simple_type, swagger_format, swagger_type};
use indexmap::IndexMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Prefix of every schema reference in a Swagger 2.0 document
pub const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Schema generator - converts extracted models to Swagger schemas
pub struct SchemaGenerator;

/// Swagger Schema object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Reference to a schema in the definitions section
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// The type of the schema (object, array, string, ...)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    /// Items schema for array types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Properties for object types, in field declaration order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, Property>,
}

/// Property definition for object schemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl Schema {
    /// A `$ref` to the definition named `name`
    pub fn reference(name: &str) -> Self {
        Schema {
            reference: Some(format!("{}{}", DEFINITIONS_PREFIX, name)),
            ..Default::default()
        }
    }

    pub fn array_of(items: Schema) -> Self {
        Schema {
            schema_type: Some("array".to_string()),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }
}

impl SchemaGenerator {
    /// Key of a model in the definitions section; every `$ref` to the model uses it.
    pub fn definition_key(definition: &Definition) -> String {
        definition.name.camel_singular()
    }

    /// Reference schema pointing at the model's definition
    pub fn reference_to(definition: &Definition) -> Schema {
        Schema::reference(&Self::definition_key(definition))
    }

    /// Generate the object schema for a model.
    ///
    /// Only fields with a simple type become properties. Other fields (nested
    /// models, collections, options) are left out and logged.
    pub fn generate_definition(definition: &Definition) -> Schema {
        debug!("Generating schema for model: {}", definition.name);

        let mut properties = IndexMap::new();
        for prop in &definition.properties {
            if !is_simple_type(&prop.ty) {
                info!(
                    "Skipping {}.{}: type {} is not supported yet",
                    definition.name, prop.name, prop.ty
                );
                continue;
            }
            properties.insert(
                prop.name.var_name_underscore(),
                Property {
                    property_type: swagger_type(&prop.ty).into_owned(),
                    format: swagger_format(&prop.ty).map(|f| f.into_owned()),
                },
            );
        }

        Schema {
            schema_type: Some("object".to_string()),
            properties,
            ..Default::default()
        }
    }
}

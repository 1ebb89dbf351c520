use crate::extractor::Definition;
use crate::schema_generator::{Schema, SchemaGenerator};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

pub const SWAGGER_VERSION: &str = "2.0";
pub const APPLICATION_JSON: &str = "application/json";

/// Swagger document builder
pub struct SwaggerBuilder {
    info: Info,
    host: Option<String>,
    base_path: Option<String>,
    /// Paths collection (URL path -> PathItem)
    paths: IndexMap<String, PathItem>,
    /// Model schemas keyed by definition name
    definitions: IndexMap<String, Schema>,
}

/// Swagger Info object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Info {
    pub title: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Swagger PathItem object - the operations available on a single path
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,
}

/// Swagger Operation object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub produces: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    /// Responses keyed by status code
    pub responses: IndexMap<String, Response>,
}

/// Swagger Parameter object. Body parameters carry a `schema`, the others a `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Parameter location (path, body)
    #[serde(rename = "in")]
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub required: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// Swagger Response object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Schema>,
}

/// Complete Swagger 2.0 document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    pub swagger: String,
    pub info: Info,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
    pub schemes: Vec<String>,
    pub paths: IndexMap<String, PathItem>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub definitions: IndexMap<String, Schema>,
}

impl Parameter {
    /// The required integer `id` path parameter of item endpoints
    fn id() -> Self {
        Parameter {
            name: "id".to_string(),
            location: "path".to_string(),
            description: None,
            required: true,
            param_type: Some("integer".to_string()),
            schema: None,
        }
    }

    fn body(schema: Schema, description: Option<String>) -> Self {
        Parameter {
            name: "body".to_string(),
            location: "body".to_string(),
            description,
            required: true,
            param_type: None,
            schema: Some(schema),
        }
    }
}

impl Response {
    fn with_schema(description: String, schema: Schema) -> Self {
        Response {
            description,
            schema: Some(schema),
        }
    }

    fn plain(description: &str) -> Self {
        Response {
            description: description.to_string(),
            schema: None,
        }
    }
}

impl SwaggerBuilder {
    /// Create a new SwaggerBuilder with default info
    pub fn new() -> Self {
        debug!("Initializing SwaggerBuilder");
        Self {
            info: Info {
                title: "Generated API".to_string(),
                version: "1.0.0".to_string(),
                description: None,
            },
            host: None,
            base_path: None,
            paths: IndexMap::new(),
            definitions: IndexMap::new(),
        }
    }

    /// Set custom info for the API
    pub fn with_info(mut self, title: String, version: String, description: Option<String>) -> Self {
        self.info = Info {
            title,
            version,
            description,
        };
        self
    }

    pub fn with_host(mut self, host: Option<String>) -> Self {
        self.host = host;
        self
    }

    pub fn with_base_path(mut self, base_path: Option<String>) -> Self {
        self.base_path = base_path;
        self
    }

    /// Add the CRUD paths and the schema of one model.
    ///
    /// The schema is registered together with the paths that reference it, so
    /// every `$ref` in the document resolves. A model whose resource or schema
    /// key was already taken replaces the earlier one; this returns `true` and
    /// logs a warning in that case.
    pub fn add_definition(&mut self, definition: &Definition) -> bool {
        let resource = definition.name.plural_under();
        let key = SchemaGenerator::definition_key(definition);
        debug!("Adding model {} at /{}", definition.name, resource);

        let collection = self
            .paths
            .insert(format!("/{}", resource), collection_path(definition));
        let item = self
            .paths
            .insert(format!("/{}/{{id}}", resource), item_path(definition));
        let schema = self
            .definitions
            .insert(key.clone(), SchemaGenerator::generate_definition(definition));

        let replaced = collection.is_some() || item.is_some() || schema.is_some();
        if replaced {
            warn!(
                "Model {} replaces an earlier model at /{} (schema {})",
                definition.name, resource, key
            );
        }
        replaced
    }

    /// Build the final Swagger document
    pub fn build(self) -> SwaggerDocument {
        debug!(
            "Building Swagger document with {} paths and {} definitions",
            self.paths.len(),
            self.definitions.len()
        );
        SwaggerDocument {
            swagger: SWAGGER_VERSION.to_string(),
            info: self.info,
            host: self.host,
            base_path: self.base_path,
            schemes: vec!["http".to_string(), "https".to_string()],
            paths: self.paths,
            definitions: self.definitions,
        }
    }
}

impl Default for SwaggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a document with default info for the given models.
pub fn generate(definitions: &[Definition]) -> SwaggerDocument {
    let mut builder = SwaggerBuilder::new();
    for definition in definitions {
        builder.add_definition(definition);
    }
    builder.build()
}

fn json() -> Vec<String> {
    vec![APPLICATION_JSON.to_string()]
}

/// `GET` (list) and `POST` (create) on the bare resource path.
fn collection_path(def: &Definition) -> PathItem {
    let name = &def.name;
    let singular = SchemaGenerator::definition_key(def);

    let list = Operation {
        tags: vec![name.plural_under()],
        summary: Some(format!("Get a list of {}", name.plural_camel())),
        operation_id: Some(format!("get{}", name.plural_camel())),
        produces: json(),
        responses: IndexMap::from([(
            "200".to_string(),
            Response::with_schema(
                format!("A list of {}", name.plural_camel()),
                Schema::array_of(SchemaGenerator::reference_to(def)),
            ),
        )]),
        ..Default::default()
    };

    let create = Operation {
        tags: vec![name.lower()],
        summary: Some(format!("Create a new {}", name.camel())),
        operation_id: Some(format!("add{}", name.camel())),
        consumes: json(),
        produces: json(),
        parameters: vec![Parameter::body(
            SchemaGenerator::reference_to(def),
            Some(format!("{} that needs to be added", singular)),
        )],
        responses: IndexMap::from([(
            "201".to_string(),
            Response::with_schema(
                format!("{} created", singular),
                SchemaGenerator::reference_to(def),
            ),
        )]),
    };

    PathItem {
        get: Some(list),
        post: Some(create),
        ..Default::default()
    }
}

/// `GET`, `PUT` and `DELETE` on `/{id}`. Deletion declares no success response.
fn item_path(def: &Definition) -> PathItem {
    let name = &def.name;
    let singular = SchemaGenerator::definition_key(def);

    let show = Operation {
        tags: vec![name.lower()],
        summary: Some(format!("Get a {} by ID", name.camel())),
        operation_id: Some(format!("get{}", singular)),
        consumes: json(),
        produces: json(),
        parameters: vec![Parameter::id()],
        responses: IndexMap::from([
            (
                "200".to_string(),
                Response::with_schema(singular.clone(), SchemaGenerator::reference_to(def)),
            ),
            ("404".to_string(), Response::plain("Not found")),
        ]),
    };

    let update = Operation {
        tags: vec![name.lower()],
        summary: Some(format!("Update a {} with ID", name.camel())),
        operation_id: Some(format!("put{}", singular)),
        consumes: json(),
        produces: json(),
        parameters: vec![
            Parameter::id(),
            Parameter::body(SchemaGenerator::reference_to(def), None),
        ],
        responses: IndexMap::from([(
            "201".to_string(),
            Response::with_schema(
                format!("{} updated", singular),
                SchemaGenerator::reference_to(def),
            ),
        )]),
    };

    let destroy = Operation {
        tags: vec![name.lower()],
        summary: Some(format!("delete a {} by ID", name.camel())),
        operation_id: Some(format!("destroy{}", singular)),
        consumes: json(),
        produces: json(),
        parameters: vec![Parameter::id()],
        responses: IndexMap::from([
            ("400".to_string(), Response::plain("Invalid ID")),
            ("404".to_string(), Response::plain("Not found")),
        ]),
    };

    PathItem {
        get: Some(show),
        put: Some(update),
        delete: Some(destroy),
        ..Default::default()
    }
}

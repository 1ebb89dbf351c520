//! Swagger generator - CRUD API documentation from the model structs of a Rust project.
//!
//! This library reads the structs declared in a project's models directory and turns each
//! of them into a resource of a Swagger 2.0 document: a collection path for listing and
//! creating, an item path for reading, updating and deleting, and an object schema built
//! from the struct's fields.
//!
//! # Architecture
//!
//! 1. [`scanner`] - Lists the `.rs` files of the models directory
//! 2. [`parser`] - Parses each file into a `syn` syntax tree
//! 3. [`extractor`] - Collects struct declarations as model definitions
//! 4. [`name`] - Derives resource, tag and schema names from a model name
//! 5. [`type_mapper`] - Maps field types to Swagger primitive types
//! 6. [`schema_generator`] - Builds the object schema of a model
//! 7. [`swagger_builder`] - Constructs the complete Swagger document
//! 8. [`serializer`] - Serializes the document to JSON or YAML
//!
//! # Example Usage
//!
//! ```no_run
//! use swagger_from_models::{
//!     extractor::ModelExtractor,
//!     serializer::serialize_json,
//!     swagger_builder::SwaggerBuilder,
//! };
//!
//! let extraction = ModelExtractor::new("./my-app").extract().unwrap();
//!
//! let mut builder = SwaggerBuilder::new();
//! for definition in &extraction.definitions {
//!     builder.add_definition(definition);
//! }
//! let document = builder.build();
//!
//! println!("{}", serialize_json(&document).unwrap());
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module.

pub mod cli;
pub mod error;
pub mod extractor;
pub mod name;
pub mod parser;
pub mod scanner;
pub mod schema_generator;
pub mod serializer;
pub mod swagger_builder;
pub mod type_mapper;

//! Serialization module for converting Swagger documents to JSON or YAML format.
//!
//! This module provides functions to serialize Swagger documents into standard formats
//! and write them to files or return them as strings.

use crate::swagger_builder::SwaggerDocument;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes a Swagger document to YAML format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(doc: &SwaggerDocument) -> Result<String> {
    debug!("Serializing Swagger document to YAML");
    serde_yaml::to_string(doc).context("Failed to serialize Swagger document to YAML")
}

/// Serializes a Swagger document to JSON format with pretty printing.
///
/// The output is indented with two spaces and keeps the document's key order, so
/// the same input always produces the same bytes.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(doc: &SwaggerDocument) -> Result<String> {
    debug!("Serializing Swagger document to JSON");
    serde_json::to_string_pretty(doc).context("Failed to serialize Swagger document to JSON")
}

/// Serializes to YAML when `yaml` is set, JSON otherwise.
pub fn serialize(doc: &SwaggerDocument, yaml: bool) -> Result<String> {
    if yaml {
        serialize_yaml(doc)
    } else {
        serialize_json(doc)
    }
}

/// Writes string content to a file.
///
/// Creates the file and any missing parent directories, or overwrites an existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Successfully wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{Definition, Property};
    use crate::name::Name;
    use crate::swagger_builder::{generate, SwaggerBuilder};
    use tempfile::TempDir;

    fn pet_document() -> SwaggerDocument {
        generate(&[Definition {
            name: Name::from("Pet"),
            properties: vec![
                Property {
                    name: Name::from("name"),
                    ty: "String".to_string(),
                    tag: None,
                },
                Property {
                    name: Name::from("born_at"),
                    ty: "DateTime<Utc>".to_string(),
                    tag: None,
                },
            ],
        }])
    }

    #[test]
    fn test_serialize_yaml() {
        let yaml = serialize_yaml(&pet_document()).unwrap();

        assert!(yaml.contains("swagger: '2.0'"));
        assert!(yaml.contains("paths:"));
        assert!(yaml.contains("/pets"));
        assert!(yaml.contains("definitions:"));
        assert!(yaml.contains("format: date-time"));
        assert!(yaml.contains("operationId: getPets"));
    }

    #[test]
    fn test_serialize_json() {
        let json = serialize_json(&pet_document()).unwrap();

        assert!(json.contains("\"swagger\": \"2.0\""));
        assert!(json.contains("\"$ref\": \"#/definitions/Pet\""));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["schemes"], serde_json::json!(["http", "https"]));
        assert_eq!(parsed["definitions"]["Pet"]["type"], "object");
    }

    #[test]
    fn test_serialize_json_pretty_format() {
        let json = serialize_json(&SwaggerBuilder::new().build()).unwrap();

        assert!(json.starts_with("{\n  \"swagger\""));
        assert!(json.lines().count() > 5);
    }

    #[test]
    fn test_serialize_selects_format() {
        let doc = pet_document();

        assert!(serialize(&doc, false).unwrap().starts_with('{'));
        assert!(serialize(&doc, true).unwrap().starts_with("swagger:"));
    }

    #[test]
    fn test_json_roundtrip_is_byte_identical() {
        let json = serialize_json(&pet_document()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let reserialized = serde_json::to_string_pretty(&value).unwrap();

        assert_eq!(reserialized, json);
    }

    #[test]
    fn test_roundtrip_yaml_serialization() {
        let doc = pet_document();
        let yaml = serialize_yaml(&doc).unwrap();

        let deserialized: SwaggerDocument = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(deserialized, doc);
    }

    #[test]
    fn test_write_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("swagger.json");

        write_to_file("test content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "test content");
    }

    #[test]
    fn test_write_to_file_creates_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("docs").join("api").join("swagger.yaml");

        write_to_file("test content", &file_path).unwrap();

        assert!(file_path.exists());
    }

    #[test]
    fn test_write_to_file_overwrites_existing() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("swagger.json");

        write_to_file("initial content", &file_path).unwrap();
        write_to_file("new content", &file_path).unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new content");
    }

    #[test]
    fn test_write_to_directory_fails() {
        let temp_dir = TempDir::new().unwrap();

        let err = write_to_file("content", temp_dir.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to write to file"));
    }
}

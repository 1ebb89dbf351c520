use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// AST (Abstract Syntax Tree) parser for Rust source files.
///
/// The `AstParser` uses the `syn` crate to parse a model file into a syntax tree
/// from which the extractor reads struct declarations.
///
/// # Example
///
/// ```no_run
/// use swagger_from_models::parser::AstParser;
/// use std::path::Path;
///
/// let parsed = AstParser::parse_file(Path::new("models/user.rs")).unwrap();
/// println!("Parsed {} items", parsed.syntax_tree.items.len());
/// ```
pub struct AstParser;

/// A successfully parsed Rust file with its abstract syntax tree.
#[derive(Debug)]
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// The parsed abstract syntax tree
    pub syntax_tree: syn::File,
}

impl AstParser {
    /// Parses a single Rust source file into an AST.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] if the file cannot be read and [`Error::Parse`] if it
    /// contains invalid Rust syntax.
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        debug!("Parsing file: {}", path.display());

        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            file: path.to_path_buf(),
            source,
        })?;

        let syntax_tree = syn::parse_file(&content).map_err(|source| Error::Parse {
            file: path.to_path_buf(),
            source,
        })?;

        debug!("Successfully parsed file: {}", path.display());

        Ok(ParsedFile {
            path: path.to_path_buf(),
            syntax_tree,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    /// Helper function to create a temporary file with content
    fn create_temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file_path
    }

    #[test]
    fn test_parse_valid_model_file() {
        let temp_dir = TempDir::new().unwrap();
        let code = r#"
            use chrono::{DateTime, Utc};

            #[derive(Debug, Serialize, Deserialize)]
            pub struct User {
                pub id: i64,
                pub name: String,
                pub created_at: DateTime<Utc>,
            }

            impl User {
                pub fn display_name(&self) -> &str {
                    &self.name
                }
            }
        "#;

        let file_path = create_temp_file(&temp_dir, "user.rs", code);
        let parsed = AstParser::parse_file(&file_path).unwrap();

        assert_eq!(parsed.path, file_path);
        assert_eq!(parsed.syntax_tree.items.len(), 3);
    }

    #[test]
    fn test_parse_invalid_rust_file() {
        let temp_dir = TempDir::new().unwrap();
        let invalid_code = r#"
            pub struct User {
                pub id: i64
                pub name: String
            }
        "#;

        let file_path = create_temp_file(&temp_dir, "invalid.rs", invalid_code);
        let err = AstParser::parse_file(&file_path).unwrap_err();

        assert!(matches!(err, Error::Parse { .. }));
        assert_eq!(err.file(), file_path.as_path());
        assert!(err.to_string().starts_with("failed to parse"));
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let err = AstParser::parse_file(Path::new("/nonexistent/models/user.rs")).unwrap_err();

        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_parse_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = create_temp_file(&temp_dir, "empty.rs", "");
        let parsed = AstParser::parse_file(&file_path).unwrap();

        assert!(parsed.syntax_tree.items.is_empty());
    }
}

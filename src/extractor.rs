//! Model extraction from the models directory of a project.
//!
//! Every struct with named fields declared at the top level of `<project>/models/*.rs`
//! is a model. The extractor records the struct name and, for each named field, the
//! field name and the printed form of its type. Files that cannot be read or parsed
//! are reported as [`Diagnostic`]s instead of failing the whole run.
//!
//! # Example
//!
//! ```no_run
//! use swagger_from_models::extractor::ModelExtractor;
//!
//! let extraction = ModelExtractor::new("./my-project").extract().unwrap();
//! for definition in &extraction.definitions {
//!     println!("{} ({} fields)", definition.name, definition.properties.len());
//! }
//! ```

use crate::name::Name;
use crate::parser::{AstParser, ParsedFile};
use crate::scanner::{FileScanner, ScanWarning};
use anyhow::Result;
use log::{debug, info};
use quote::ToTokens;
use syn::ext::IdentExt;
use std::path::{Path, PathBuf};

/// Directory, relative to the project root, that holds the model files.
pub const DEFAULT_MODELS_DIR: &str = "models";

/// One named field of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: Name,
    /// Printed field type, e.g. `String` or `chrono::DateTime<Utc>`
    pub ty: String,
    /// Raw contents of the field's `#[serde(...)]` attribute. Not used when generating.
    pub tag: Option<String>,
}

/// One discovered model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: Name,
    pub properties: Vec<Property>,
}

/// A model file that was left out of the extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub reason: String,
}

impl From<ScanWarning> for Diagnostic {
    fn from(warning: ScanWarning) -> Self {
        Self {
            file: warning.path,
            reason: warning.message,
        }
    }
}

/// Everything a scan of the models directory produced.
#[derive(Debug, Default)]
pub struct Extraction {
    /// Models in per-file, then per-declaration order
    pub definitions: Vec<Definition>,
    /// Files skipped because they could not be read or parsed
    pub diagnostics: Vec<Diagnostic>,
}

pub struct ModelExtractor {
    project_root: PathBuf,
    models_dir: PathBuf,
}

impl ModelExtractor {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            models_dir: PathBuf::from(DEFAULT_MODELS_DIR),
        }
    }

    /// Overrides the models directory, relative to the project root.
    pub fn with_models_dir(mut self, models_dir: impl Into<PathBuf>) -> Self {
        self.models_dir = models_dir.into();
        self
    }

    pub fn models_path(&self) -> PathBuf {
        self.project_root.join(&self.models_dir)
    }

    /// Scans the models directory and extracts every model it declares.
    ///
    /// A missing models directory gives an empty extraction. Files that fail to
    /// parse are recorded in [`Extraction::diagnostics`] and skipped; reporting
    /// them is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error only if the models directory exists but cannot be listed.
    pub fn extract(&self) -> Result<Extraction> {
        let models_path = self.models_path();
        info!("Scanning models in {}", models_path.display());

        let scan_result = FileScanner::new(models_path).scan()?;
        let mut extraction = Extraction {
            definitions: Vec::new(),
            diagnostics: scan_result
                .warnings
                .into_iter()
                .map(Diagnostic::from)
                .collect(),
        };

        for path in &scan_result.rust_files {
            match AstParser::parse_file(path) {
                Ok(parsed) => extraction.definitions.extend(extract_definitions(&parsed)),
                Err(e) => {
                    debug!("Skipping {}", e);
                    extraction.diagnostics.push(Diagnostic {
                        file: e.file().to_path_buf(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Extracted {} models from {} files",
            extraction.definitions.len(),
            scan_result.rust_files.len()
        );
        Ok(extraction)
    }
}

/// Extracts the models declared at the top level of one parsed file.
pub fn extract_definitions(parsed: &ParsedFile) -> Vec<Definition> {
    parsed
        .syntax_tree
        .items
        .iter()
        .filter_map(|item| match item {
            syn::Item::Struct(item_struct) => definition_from_struct(item_struct, &parsed.path),
            _ => None,
        })
        .collect()
}

/// Builds a definition from a struct item. Returns `None` for tuple and unit
/// structs and for structs without fields, none of which are models.
fn definition_from_struct(item_struct: &syn::ItemStruct, path: &Path) -> Option<Definition> {
    let syn::Fields::Named(named_fields) = &item_struct.fields else {
        debug!(
            "Skipping {} in {}: no named fields",
            item_struct.ident,
            path.display()
        );
        return None;
    };

    let properties: Vec<Property> = named_fields
        .named
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            Some(Property {
                name: Name::new(ident.unraw().to_string()),
                ty: render_type(&field.ty),
                tag: serde_tag(&field.attrs),
            })
        })
        .collect();

    if properties.is_empty() {
        debug!("Skipping {}: struct has no fields", item_struct.ident);
        return None;
    }

    debug!(
        "Found model {} with {} fields in {}",
        item_struct.ident,
        properties.len(),
        path.display()
    );
    Some(Definition {
        name: Name::new(item_struct.ident.unraw().to_string()),
        properties,
    })
}

/// Prints a type the way it is written in source, without the token spacing
/// `proc_macro2` inserts: `chrono :: DateTime < Utc >` becomes `chrono::DateTime<Utc>`.
pub fn render_type(ty: &syn::Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace(" < ", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}

fn serde_tag(attrs: &[syn::Attribute]) -> Option<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .find_map(|attr| attr.meta.require_list().ok())
        .map(|list| list.tokens.to_string())
}

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Suffix marking a source file as a test module rather than a model.
pub const TEST_FILE_SUFFIX: &str = "_test.rs";

/// File scanner for the models directory of a project.
///
/// The `FileScanner` lists the Rust source files that sit directly inside one
/// directory. Subdirectories are not descended into and files ending in
/// [`TEST_FILE_SUFFIX`] are skipped.
///
/// # Example
///
/// ```no_run
/// use swagger_from_models::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./my-project/models"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} model files", result.rust_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
}

/// Result of directory scanning operation.
///
/// Contains the list of discovered Rust files and any warnings encountered during scanning.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Paths of the discovered `.rs` files, sorted
    pub rust_files: Vec<PathBuf>,
    /// Entries that could not be inspected
    pub warnings: Vec<ScanWarning>,
}

/// An entry of the scanned directory that could not be inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub message: String,
}

impl FileScanner {
    /// Creates a new `FileScanner` for the specified directory.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Lists the `.rs` files directly inside the directory.
    ///
    /// A missing directory yields an empty result. The returned paths are sorted so
    /// that repeated runs over the same tree see files in the same order.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory exists but cannot be read.
    pub fn scan(&self) -> Result<ScanResult> {
        if !self.root_path.is_dir() {
            debug!("Models directory not found: {}", self.root_path.display());
            return Ok(ScanResult::default());
        }

        let mut rust_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    return Err(e).with_context(|| {
                        format!("Failed to read directory: {}", self.root_path.display())
                    });
                }
                Err(e) => {
                    let message = format!("Failed to access path: {}", e);
                    debug!("{}", message);
                    warnings.push(ScanWarning {
                        path: e
                            .path()
                            .map_or_else(|| self.root_path.clone(), Path::to_path_buf),
                        message,
                    });
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("rs") {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            if file_name.ends_with(TEST_FILE_SUFFIX) {
                debug!("Skipping test file: {}", path.display());
                continue;
            }

            rust_files.push(path.to_path_buf());
        }

        rust_files.sort();

        Ok(ScanResult {
            rust_files,
            warnings,
        })
    }
}

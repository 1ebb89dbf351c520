use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for per-file operations
pub type Result<T> = std::result::Result<T, Error>;

/// Failures tied to a single source file. None of these abort a run; the extractor
/// turns them into diagnostics and moves on to the next file.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .file.display())]
    Read {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .file.display())]
    Parse {
        file: PathBuf,
        #[source]
        source: syn::Error,
    },
}

impl Error {
    /// The file the failure belongs to.
    pub fn file(&self) -> &Path {
        match self {
            Error::Read { file, .. } | Error::Parse { file, .. } => file,
        }
    }
}

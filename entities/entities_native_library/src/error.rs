//! Load Error Types

use std::fmt;
use std::path::PathBuf;

use crate::library_name::LibraryName;

/// Errors reported by a load primitive for a single library
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitiveError {
    /// No search directory held the library and the platform loader could not resolve it
    #[error("library {library} not found (searched {}): {reason}", directories(.searched))]
    NotFound {
        library: LibraryName,
        /// Search directories probed before deferring to the platform loader
        searched: Vec<PathBuf>,
        /// Platform loader message
        reason: String,
    },
    /// The library file was located but could not be opened or initialized
    #[error("failed to load library {library}{}: {reason}", from_path(.path))]
    LoadFailed {
        library: LibraryName,
        /// File that was opened, when known
        path: Option<PathBuf>,
        /// Platform loader message
        reason: String,
    },
}

impl PrimitiveError {
    /// Library the error refers to
    pub fn library(&self) -> &LibraryName {
        match self {
            PrimitiveError::NotFound { library, .. } => library,
            PrimitiveError::LoadFailed { library, .. } => library,
        }
    }
}

fn directories(searched: &[PathBuf]) -> String {
    match searched.len() {
        1 => "1 directory".to_string(),
        n => format!("{} directories", n),
    }
}

fn from_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" from {}", p.display()))
        .unwrap_or_default()
}

/// A library that failed to load during an initialization attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryFailure {
    pub library: LibraryName,
    pub error: PrimitiveError,
}

impl LibraryFailure {
    pub fn new(library: LibraryName, error: PrimitiveError) -> Self {
        Self { library, error }
    }
}

impl fmt::Display for LibraryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The error text already names the library
        fmt::Display::fmt(&self.error, f)
    }
}

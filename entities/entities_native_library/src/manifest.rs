//! Library Manifest Module
//!
//! An OpenCV build may be split across several shared libraries. The optional
//! info library reports them as a single `;`-separated string, in the order
//! they must be loaded. When that report is missing or names nothing, the
//! manifest falls back to the single default core library.

use tracing::warn;

use crate::library_name::LibraryName;

/// Separator used by the info library's library list
pub const LIBRARY_LIST_SEPARATOR: char = ';';

/// Ordered list of core libraries to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryManifest {
    libraries: Vec<LibraryName>,
    is_fallback: bool,
}

impl LibraryManifest {
    /// Build a manifest from the info library's report
    ///
    /// Tokens are trimmed and blank tokens skipped. Tokens that are not valid
    /// library names are skipped with a warning. If nothing usable remains,
    /// the manifest holds only `default_core`.
    ///
    /// # Arguments
    /// * `list` - Raw library list, `None` when the info library was unavailable
    /// * `default_core` - Library to load when the list names nothing
    pub fn from_library_list(list: Option<&str>, default_core: &LibraryName) -> Self {
        let mut libraries = Vec::new();

        for token in list.unwrap_or_default().split(LIBRARY_LIST_SEPARATOR) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match LibraryName::new(token) {
                Ok(name) => libraries.push(name),
                Err(e) => warn!("Skipping library list entry {:?}: {}", token, e),
            }
        }

        if libraries.is_empty() {
            Self::fallback(default_core)
        } else {
            Self {
                libraries,
                is_fallback: false,
            }
        }
    }

    /// Manifest holding only the default core library
    pub fn fallback(default_core: &LibraryName) -> Self {
        Self {
            libraries: vec![default_core.clone()],
            is_fallback: true,
        }
    }

    /// Libraries in load order
    pub fn libraries(&self) -> &[LibraryName] {
        &self.libraries
    }

    /// True when the manifest came from the default rather than a reported list
    pub fn is_fallback(&self) -> bool {
        self.is_fallback
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    /// Always false: a manifest holds at least the default core library
    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

//! Loader Configuration Module
//!
//! Describes where the native libraries are searched for and which names make
//! up the OpenCV build. Defaults match the libraries packaged in the OpenCV
//! Android SDK. Deployments that unpack the libraries elsewhere, or ship a
//! differently named core library, override the defaults through environment
//! variables:
//!
//! - `OPENCV_LOADER_PATH`: directories probed before the platform loader's own
//!   search, in the platform's path-list syntax (`:` on Unix, `;` on Windows)
//! - `OPENCV_CORE_LIBRARY`: core library used when the info library names nothing
//! - `OPENCV_INFO_LIBRARY`: library that reports the build's library list
//!
//! Invalid values are logged and ignored, never fatal.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use tracing::warn;

use crate::library_name::LibraryName;

/// Core library loaded when the info library reports no list
pub const DEFAULT_CORE_LIBRARY: &str = "opencv_java4";

/// Library that reports the build's library list
pub const DEFAULT_INFO_LIBRARY: &str = "opencv_info";

/// CUDA runtime libraries, in load order
pub const DEFAULT_CUDA_LIBRARIES: [&str; 6] = ["cudart", "nppc", "nppi", "npps", "cufft", "cublas"];

/// Environment variable holding extra search directories
pub const ENV_LOADER_PATH: &str = "OPENCV_LOADER_PATH";

/// Environment variable overriding the default core library
pub const ENV_CORE_LIBRARY: &str = "OPENCV_CORE_LIBRARY";

/// Environment variable overriding the info library
pub const ENV_INFO_LIBRARY: &str = "OPENCV_INFO_LIBRARY";

/// Loader configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directories probed, in order, before the platform loader's own search
    pub search_paths: Vec<PathBuf>,
    /// Core library loaded when the info library names nothing
    pub core_library: LibraryName,
    /// Library reporting the build's library list
    pub info_library: LibraryName,
    /// CUDA runtime libraries, in load order
    pub cuda_libraries: Vec<LibraryName>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            search_paths: Vec::new(),
            core_library: LibraryName::from_static(DEFAULT_CORE_LIBRARY),
            info_library: LibraryName::from_static(DEFAULT_INFO_LIBRARY),
            cuda_libraries: DEFAULT_CUDA_LIBRARIES
                .into_iter()
                .map(LibraryName::from_static)
                .collect(),
        }
    }
}

impl LoaderConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Defaults overridden by `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();

        if let Some(paths) = lookup(ENV_LOADER_PATH) {
            config.search_paths = env::split_paths(&paths)
                .filter(|path| !path.as_os_str().is_empty())
                .collect();
        }

        if let Some(name) = Self::name_from(&lookup, ENV_CORE_LIBRARY) {
            config.core_library = name;
        }

        if let Some(name) = Self::name_from(&lookup, ENV_INFO_LIBRARY) {
            config.info_library = name;
        }

        config
    }

    /// Append a search directory
    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    /// Replace the default core library
    pub fn with_core_library(mut self, name: LibraryName) -> Self {
        self.core_library = name;
        self
    }

    fn name_from<F>(lookup: &F, key: &str) -> Option<LibraryName>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let raw = lookup(key)?;
        let Some(value) = raw.to_str() else {
            warn!("Ignoring {}: value is not valid UTF-8", key);
            return None;
        };
        match LibraryName::new(value) {
            Ok(name) => Some(name),
            Err(e) => {
                warn!("Ignoring {}: {}", key, e);
                None
            }
        }
    }
}

//! System Load Primitive Module
//!
//! Implements the `LoadPrimitive` port over the platform dynamic loader
//! (`dlopen` on Unix and Android, `LoadLibraryW` on Windows) using
//! `libloading`.
//!
//! ## Resolution
//!
//! A library name is turned into the platform file name with
//! `libloading::library_filename` (`opencv_java4` becomes `libopencv_java4.so`
//! on Linux and Android, `opencv_java4.dll` on Windows, `libopencv_java4.dylib`
//! on macOS). Each configured search directory is probed in order and the
//! first existing file is opened. A file that exists but fails to open is
//! reported as `LoadFailed` and no further directories are probed. When no
//! search directory holds the file, the bare file name is handed to the
//! platform loader, which applies its own search rules (the application's
//! native library directory on Android, `LD_LIBRARY_PATH` on Linux).
//!
//! ## Unloading
//!
//! Dropping a `LoadedLibrary` closes the underlying handle. The platform
//! loader reference-counts handles, so a library opened by several
//! `LoadedLibrary` values stays mapped until the last one is dropped.

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use tracing::debug;

use entities_native_library::{LibraryName, LoaderConfig, PrimitiveError};
use usecases_opencv_init::LoadPrimitive;

use crate::library_list::read_library_list;

/// A native library opened through the platform loader
pub struct LoadedLibrary {
    name: LibraryName,
    path: Option<PathBuf>,
    library: Library,
}

impl LoadedLibrary {
    pub fn name(&self) -> &LibraryName {
        &self.name
    }

    /// File that was opened, or `None` when the platform loader resolved the name
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Look up an exported symbol
    ///
    /// # Safety
    /// `T` must match the actual type of the exported symbol.
    pub unsafe fn symbol<T>(&self, symbol: &[u8]) -> Result<Symbol<'_, T>, libloading::Error> {
        self.library.get(symbol)
    }
}

impl fmt::Debug for LoadedLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedLibrary")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish()
    }
}

/// Load primitive backed by the platform dynamic loader
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemLoadPrimitive {
    search_paths: Vec<PathBuf>,
}

impl SystemLoadPrimitive {
    /// Primitive probing `search_paths`, in order, before the platform loader's own search
    pub fn new(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    pub fn from_config(config: &LoaderConfig) -> Self {
        Self::new(config.search_paths.clone())
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Platform file name for a library name
    pub fn platform_file_name(name: &LibraryName) -> OsString {
        libloading::library_filename(name.as_str())
    }

    /// Candidate files for `name`, one per search directory, in probe order
    pub fn candidates(&self, name: &LibraryName) -> Vec<PathBuf> {
        let file_name = Self::platform_file_name(name);
        self.search_paths
            .iter()
            .map(|dir| dir.join(&file_name))
            .collect()
    }

    /// First existing candidate file for `name`
    pub fn locate(&self, name: &LibraryName) -> Option<PathBuf> {
        self.candidates(name).into_iter().find(|path| path.is_file())
    }

    fn open_path(name: &LibraryName, path: PathBuf) -> Result<LoadedLibrary, PrimitiveError> {
        debug!("Opening {} from {}", name, path.display());
        // SAFETY: opening a library runs its initializers. Only libraries found
        // in the configured directories or by the platform search are opened.
        let library = unsafe { Library::new(&path) }.map_err(|e| PrimitiveError::LoadFailed {
            library: name.clone(),
            path: Some(path.clone()),
            reason: e.to_string(),
        })?;

        Ok(LoadedLibrary {
            name: name.clone(),
            path: Some(path),
            library,
        })
    }

    fn open_by_platform_search(&self, name: &LibraryName) -> Result<LoadedLibrary, PrimitiveError> {
        let file_name = Self::platform_file_name(name);
        debug!("Deferring {} to the platform loader as {:?}", name, file_name);
        // SAFETY: as in `open_path`.
        let library = unsafe { Library::new(&file_name) }.map_err(|e| PrimitiveError::NotFound {
            library: name.clone(),
            searched: self.search_paths.clone(),
            reason: e.to_string(),
        })?;

        Ok(LoadedLibrary {
            name: name.clone(),
            path: None,
            library,
        })
    }
}

impl LoadPrimitive for SystemLoadPrimitive {
    type Library = LoadedLibrary;

    fn load(&self, name: &LibraryName) -> Result<LoadedLibrary, PrimitiveError> {
        match self.locate(name) {
            Some(path) => Self::open_path(name, path),
            None => self.open_by_platform_search(name),
        }
    }

    fn library_list(&self, info: &LoadedLibrary) -> Option<String> {
        read_library_list(info)
    }
}

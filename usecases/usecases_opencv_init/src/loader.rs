//! OpenCV Initialization Module
//!
//! Runs the OpenCV initialization sequence over a `LoadPrimitive`:
//!
//! 1. When requested, load the CUDA runtime libraries. Failures are recorded
//!    and loading continues, unless the options make CUDA mandatory.
//! 2. Load the info library and ask it for the build's library list.
//! 3. Turn that list into a manifest, falling back to the default core library.
//! 4. Load every manifest library, collecting all failures.
//!
//! The result is a caller-owned `OpenCvHandle`. Nothing is cached between
//! calls: every `load` goes back to the primitive, which is expected to
//! reference-count repeated loads of the same library.

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

use tracing::{debug, error, info, warn};

use entities_native_library::{
    LibraryFailure, LibraryManifest, LibraryName, LoadOptions, LoaderConfig, OPENCV_VERSION,
};

use crate::handle::{release_in_reverse, AccelerationStatus, OpenCvHandle};
use crate::primitive::LoadPrimitive;

/// Initialization errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// One or more core libraries failed to load; every failure is listed
    #[error("OpenCV {} core libraries unavailable: {}", OPENCV_VERSION, join(.0))]
    CoreUnavailable(Vec<LibraryFailure>),
    /// CUDA was mandatory and one or more runtime libraries failed to load
    #[error("CUDA runtime unavailable: {}", join(.0))]
    CudaUnavailable(Vec<LibraryFailure>),
}

impl InitError {
    pub fn failures(&self) -> &[LibraryFailure] {
        match self {
            InitError::CoreUnavailable(failures) => failures,
            InitError::CudaUnavailable(failures) => failures,
        }
    }
}

fn join(failures: &[LibraryFailure]) -> String {
    failures
        .iter()
        .map(|failure| failure.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

type Loaded<L> = Vec<(LibraryName, L)>;

/// OpenCV loader over a load primitive
pub struct OpenCvLoader<P> {
    primitive: P,
    config: LoaderConfig,
}

impl<P: LoadPrimitive> OpenCvLoader<P> {
    pub fn new(primitive: P, config: LoaderConfig) -> Self {
        Self { primitive, config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Load and initialize OpenCV
    ///
    /// Blocks until every load attempt has returned. On failure, libraries
    /// loaded during this call are released before returning.
    ///
    /// # Errors
    /// - `CudaUnavailable`: CUDA was mandatory and a runtime library failed
    /// - `CoreUnavailable`: at least one core library failed
    pub fn load(&self, options: LoadOptions) -> Result<OpenCvHandle<P::Library>, InitError> {
        let (mut cuda, acceleration) = if options.init_cuda {
            let (cuda, failed) = self.load_cuda();
            if options.cuda_is_mandatory() && !failed.is_empty() {
                let mut cuda = cuda;
                release_in_reverse(&mut cuda);
                error!("CUDA runtime required but {} libraries failed to load", failed.len());
                return Err(InitError::CudaUnavailable(failed));
            }
            let names = cuda.iter().map(|(name, _)| name.clone()).collect();
            (cuda, AccelerationStatus::from_outcome(names, failed))
        } else {
            (Vec::new(), AccelerationStatus::NotRequested)
        };

        let (info, list) = self.load_library_list();
        debug!("Library list: {:?}", list.as_deref().unwrap_or(""));

        let manifest = LibraryManifest::from_library_list(list.as_deref(), &self.config.core_library);
        let core = match self.load_core(&manifest) {
            Ok(core) => core,
            Err(e) => {
                // Same order as dropping a handle
                drop(info);
                release_in_reverse(&mut cuda);
                return Err(e);
            }
        };

        info!(
            "OpenCV {} initialized ({} core libraries, CUDA {})",
            OPENCV_VERSION,
            core.len(),
            acceleration
        );

        Ok(OpenCvHandle::new(
            core,
            info,
            cuda,
            acceleration,
            !manifest.is_fallback(),
        ))
    }

    /// Convenience wrapper collapsing `load` to a boolean; the handle is dropped
    pub fn is_loadable(&self, options: LoadOptions) -> bool {
        self.load(options).is_ok()
    }

    fn load_cuda(&self) -> (Loaded<P::Library>, Vec<LibraryFailure>) {
        let mut loaded = Vec::new();
        let mut failed = Vec::new();

        for name in &self.config.cuda_libraries {
            match self.load_one(name) {
                Ok(library) => loaded.push((name.clone(), library)),
                Err(failure) => failed.push(failure),
            }
        }

        if !failed.is_empty() {
            warn!(
                "CUDA runtime incomplete: {} of {} libraries failed to load",
                failed.len(),
                self.config.cuda_libraries.len()
            );
        }
        (loaded, failed)
    }

    fn load_library_list(&self) -> (Option<P::Library>, Option<String>) {
        debug!("Trying to get library list");
        match self.primitive.load(&self.config.info_library) {
            Ok(library) => {
                let list = self.primitive.library_list(&library);
                (Some(library), list)
            }
            Err(e) => {
                error!("Cannot load info library for OpenCV: {}", e);
                (None, None)
            }
        }
    }

    fn load_core(&self, manifest: &LibraryManifest) -> Result<Loaded<P::Library>, InitError> {
        let mut loaded = Vec::with_capacity(manifest.len());
        let mut failed = Vec::new();

        for name in manifest.libraries() {
            match self.load_one(name) {
                Ok(library) => loaded.push((name.clone(), library)),
                Err(failure) => failed.push(failure),
            }
        }

        if failed.is_empty() {
            Ok(loaded)
        } else {
            release_in_reverse(&mut loaded);
            error!("OpenCV initialization failed: {} of {} core libraries unavailable", failed.len(), manifest.len());
            Err(InitError::CoreUnavailable(failed))
        }
    }

    fn load_one(&self, name: &LibraryName) -> Result<P::Library, LibraryFailure> {
        debug!("Trying to load library {}", name);
        match self.primitive.load(name) {
            Ok(library) => {
                debug!("Library {} loaded", name);
                Ok(library)
            }
            Err(e) => {
                debug!("Load attempt failed: {}", e);
                Err(LibraryFailure::new(name.clone(), e))
            }
        }
    }
}

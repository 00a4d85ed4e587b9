//! Entities Layer: Native Library
//!
//! Provides the plain data types shared by every layer of the OpenCV loader:
//! the bundled library version, validated library names, load options, the
//! library manifest reported by the info library, loader configuration and
//! the error types produced while loading.
//!
//! ## Modules
//!
//! - **[`version`](version/index.html)**: Version of the bundled native library
//! - **[`library_name`](library_name/index.html)**: Validated library names
//! - **[`options`](options/index.html)**: Per-call load options
//! - **[`manifest`](manifest/index.html)**: Ordered list of core libraries to load
//! - **[`config`](config/index.html)**: Search paths and library names, with environment overrides
//! - **[`error`](error/index.html)**: Load primitive errors and per-library failures
//!
//! ## Architecture
//!
//! This crate has no dependencies on other layers. The use cases layer builds
//! the initialization sequence on top of these types and the adapters layer
//! maps them onto the platform dynamic loader.

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

pub mod version;
pub mod library_name;
pub mod options;
pub mod manifest;
pub mod config;
pub mod error;

pub use version::OPENCV_VERSION;
pub use library_name::{LibraryName, NameError};
pub use options::LoadOptions;
pub use manifest::{LibraryManifest, LIBRARY_LIST_SEPARATOR};
pub use config::{
    LoaderConfig, DEFAULT_CORE_LIBRARY, DEFAULT_INFO_LIBRARY, DEFAULT_CUDA_LIBRARIES,
    ENV_LOADER_PATH, ENV_CORE_LIBRARY, ENV_INFO_LIBRARY,
};
pub use error::{PrimitiveError, LibraryFailure};

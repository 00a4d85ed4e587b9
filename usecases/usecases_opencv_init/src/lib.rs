//! Use Cases Layer: OpenCV Initialization
//!
//! Provides the OpenCV initialization sequence: optional CUDA runtime
//! loading, library list discovery through the info library, and loading of
//! the core libraries. The sequence is written against the `LoadPrimitive`
//! port so it can run over the platform dynamic loader or a test double.
//!
//! ## Modules
//!
//! - **[`primitive`](primitive/index.html)**: The `LoadPrimitive` port
//! - **[`handle`](handle/index.html)**: Caller-owned `OpenCvHandle` and CUDA status
//! - **[`loader`](loader/index.html)**: `OpenCvLoader` and `InitError`
//!
//! ## Architecture
//!
//! This crate depends on the Entities layer only. The adapters layer
//! implements `LoadPrimitive` over `libloading`, and the API facades layer
//! wraps `OpenCvLoader` in the boolean startup functions.

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

pub mod primitive;
pub mod handle;
pub mod loader;

pub use primitive::LoadPrimitive;
pub use handle::{AccelerationStatus, OpenCvHandle};
pub use loader::{InitError, OpenCvLoader};

//! C ABI Facades
//!
//! Exports the boolean startup functions and the version string with C
//! linkage, for native callers that link the `cdylib` build of this crate.

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

use std::ffi::{c_char, CStr};

use crate::loader_facades::{init_local, init_with_cuda};

/// NUL-terminated copy of `OPENCV_VERSION`
const OPENCV_VERSION_C: &CStr = c"4.11.0";

/// C facade for `init_local`
#[no_mangle]
pub extern "C" fn opencv_init_local() -> bool {
    init_local()
}

/// C facade for `init_with_cuda`
#[no_mangle]
pub extern "C" fn opencv_init_with_cuda(init_cuda: bool) -> bool {
    init_with_cuda(init_cuda)
}

/// Version of the bundled OpenCV release
///
/// The returned pointer is static and must not be freed.
#[no_mangle]
pub extern "C" fn opencv_version() -> *const c_char {
    OPENCV_VERSION_C.as_ptr()
}

//! Library Name Module
//!
//! A library name is the bare stem the platform loader turns into a file name
//! (`opencv_java4` becomes `libopencv_java4.so` on Linux and Android,
//! `opencv_java4.dll` on Windows). Names are validated once, on construction,
//! so every later layer can pass them to the loader without re-checking.

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

use std::fmt;
use std::str::FromStr;

/// Validated native library stem
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryName(String);

/// Reasons a library name is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// Name is empty
    #[error("library name is empty")]
    Empty,
    /// Name starts or ends with whitespace
    #[error("library name has surrounding whitespace: {0:?}")]
    Whitespace(String),
    /// Name contains a path separator; use the search path configuration instead
    #[error("library name contains a path separator: {0:?}")]
    PathSeparator(String),
    /// Name contains a NUL byte and cannot be handed to the platform loader
    #[error("library name contains a NUL byte: {0:?}")]
    Nul(String),
}

impl LibraryName {
    /// Validate and wrap a library stem
    ///
    /// # Errors
    /// - `Empty`: `name` is empty
    /// - `Whitespace`: `name` has leading or trailing whitespace
    /// - `PathSeparator`: `name` contains `/` or `\`
    /// - `Nul`: `name` contains a NUL byte
    pub fn new(name: impl Into<String>) -> Result<Self, NameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.trim() != name {
            return Err(NameError::Whitespace(name));
        }
        if name.contains('\0') {
            return Err(NameError::Nul(name));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(NameError::PathSeparator(name));
        }
        Ok(Self(name))
    }

    /// Wrap a built-in name known to be valid
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(Self::new(name).is_ok(), "invalid built-in library name {:?}", name);
        Self(name.to_string())
    }

    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibraryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LibraryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for LibraryName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for LibraryName {
    type Error = NameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for LibraryName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["opencv_java4", "opencv_info", "cudart", "nppi", "opencv-world.4"] {
            let parsed = LibraryName::new(name).unwrap();
            assert_eq!(parsed.as_str(), name);
            assert_eq!(parsed.to_string(), name);
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(LibraryName::new(""), Err(NameError::Empty));
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(matches!(LibraryName::new(" cudart"), Err(NameError::Whitespace(_))));
        assert!(matches!(LibraryName::new("cudart\n"), Err(NameError::Whitespace(_))));
    }

    #[test]
    fn test_path_separators_rejected() {
        assert!(matches!(LibraryName::new("lib/opencv"), Err(NameError::PathSeparator(_))));
        assert!(matches!(LibraryName::new("..\\opencv"), Err(NameError::PathSeparator(_))));
    }

    #[test]
    fn test_nul_rejected() {
        assert!(matches!(LibraryName::new("open\0cv"), Err(NameError::Nul(_))));
    }

    #[test]
    fn test_from_str_and_try_from_agree() {
        let a: LibraryName = "opencv_java4".parse().unwrap();
        let b = LibraryName::try_from("opencv_java4").unwrap();
        let c = LibraryName::try_from(String::from("opencv_java4")).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_error_display_mentions_name() {
        let err = LibraryName::new("a/b").unwrap_err();
        assert!(err.to_string().contains("a/b"));
    }
}

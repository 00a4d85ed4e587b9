//! Integration tests for entities_native_library crate
//!
//! These tests exercise the public types together: configuration feeding the
//! manifest fallback, options, and the bundled version.

use entities_native_library::*;
use std::ffi::OsString;

#[test]
fn test_version_stable_across_reads() {
    let first = OPENCV_VERSION;
    for _ in 0..10 {
        assert_eq!(OPENCV_VERSION, first);
    }
    assert!(!first.is_empty());
}

#[test]
fn test_manifest_falls_back_to_configured_core() {
    let config = LoaderConfig::from_lookup(|key| {
        (key == ENV_CORE_LIBRARY).then(|| OsString::from("opencv_world"))
    });
    let manifest = LibraryManifest::from_library_list(None, &config.core_library);
    assert!(manifest.is_fallback());
    assert_eq!(manifest.libraries()[0].as_str(), "opencv_world");
}

#[test]
fn test_manifest_from_reported_list_ignores_core_default() {
    let config = LoaderConfig::default();
    let manifest = LibraryManifest::from_library_list(
        Some("opencv_core;opencv_imgproc"),
        &config.core_library,
    );
    assert!(!manifest.is_fallback());
    assert!(manifest
        .libraries()
        .iter()
        .all(|name| name.as_str() != DEFAULT_CORE_LIBRARY));
}

#[test]
fn test_default_cuda_list_is_valid() {
    let config = LoaderConfig::default();
    assert_eq!(config.cuda_libraries.len(), DEFAULT_CUDA_LIBRARIES.len());
    for (configured, expected) in config.cuda_libraries.iter().zip(DEFAULT_CUDA_LIBRARIES) {
        assert_eq!(configured.as_str(), expected);
    }
}

#[test]
fn test_options_variants() {
    assert_eq!(LoadOptions::with_cuda(false), LoadOptions::default());
    assert!(LoadOptions::cuda_required().init_cuda);
    assert!(!LoadOptions::with_cuda(true).require_cuda);
}

#[test]
fn test_primitive_error_variants() {
    let name = LibraryName::new("opencv_java4").unwrap();
    let errors = vec![
        PrimitiveError::NotFound {
            library: name.clone(),
            searched: Vec::new(),
            reason: "not found".to_string(),
        },
        PrimitiveError::LoadFailed {
            library: name.clone(),
            path: None,
            reason: "bad".to_string(),
        },
    ];
    for error in errors {
        assert_eq!(error.library(), &name);
        assert!(!error.to_string().is_empty());
    }
}

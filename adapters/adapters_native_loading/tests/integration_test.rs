//! Integration tests for adapters_native_loading crate
//!
//! These tests run the full initialization sequence over the platform
//! loader, using temporary search directories. Failure paths use names that
//! cannot exist. On Linux, success paths stage a C library already mapped
//! into the test process under the OpenCV library names.

use adapters_native_loading::*;
use entities_native_library::{LibraryName, LoadOptions, LoaderConfig, PrimitiveError};
use std::fs;
use std::path::{Path, PathBuf};
use usecases_opencv_init::{InitError, LoadPrimitive, OpenCvLoader};

fn isolated_config(dir: &Path) -> LoaderConfig {
    let mut config = LoaderConfig::default()
        .with_search_path(dir)
        .with_core_library(LibraryName::new("opencv_loader_it_core").unwrap());
    config.info_library = LibraryName::new("opencv_loader_it_info").unwrap();
    config
}

#[test]
fn test_missing_build_reports_core_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let config = isolated_config(dir.path());
    let loader = OpenCvLoader::new(SystemLoadPrimitive::from_config(&config), config);

    match loader.load(LoadOptions::default()) {
        Err(InitError::CoreUnavailable(failures)) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].library.as_str(), "opencv_loader_it_core");
            assert!(matches!(failures[0].error, PrimitiveError::NotFound { .. }));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_corrupt_core_library_reports_load_failed() {
    let dir = tempfile::tempdir().unwrap();
    let config = isolated_config(dir.path());
    let core_file = dir
        .path()
        .join(SystemLoadPrimitive::platform_file_name(&config.core_library));
    fs::write(&core_file, b"\x7fELF truncated").unwrap();

    let loader = OpenCvLoader::new(SystemLoadPrimitive::from_config(&config), config);
    let err = loader.load(LoadOptions::default()).unwrap_err();
    match &err.failures()[0].error {
        PrimitiveError::LoadFailed { path, .. } => assert_eq!(path.as_deref(), Some(core_file.as_path())),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_missing_cuda_is_best_effort_then_core_decides() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = isolated_config(dir.path());
    config.cuda_libraries = vec![LibraryName::new("opencv_loader_it_cudart").unwrap()];
    let loader = OpenCvLoader::new(SystemLoadPrimitive::from_config(&config), config);

    // CUDA failure is recorded, the core failure decides the outcome
    assert!(matches!(
        loader.load(LoadOptions::with_cuda(true)),
        Err(InitError::CoreUnavailable(_))
    ));
    // With CUDA mandatory the attempt stops at the runtime
    assert!(matches!(
        loader.load(LoadOptions::cuda_required()),
        Err(InitError::CudaUnavailable(_))
    ));
}

#[test]
fn test_repeated_failed_loads_are_consistent() {
    let dir = tempfile::tempdir().unwrap();
    let config = isolated_config(dir.path());
    let loader = OpenCvLoader::new(SystemLoadPrimitive::from_config(&config), config);

    let outcomes: Vec<bool> = (0..5).map(|_| loader.is_loadable(LoadOptions::default())).collect();
    assert!(outcomes.iter().all(|ok| !ok));
}

#[test]
fn test_primitive_through_reference() {
    let dir = tempfile::tempdir().unwrap();
    let primitive = SystemLoadPrimitive::new(vec![dir.path().to_path_buf()]);
    let by_ref = &primitive;
    let lib = LibraryName::new("opencv_loader_it_absent").unwrap();
    assert!(<&SystemLoadPrimitive as LoadPrimitive>::load(&by_ref, &lib).is_err());
}

/// Shared object already mapped into this process
#[cfg(target_os = "linux")]
fn mapped_shared_object() -> Option<PathBuf> {
    let maps = fs::read_to_string("/proc/self/maps").ok()?;
    maps.lines()
        .filter_map(|line| line.split_whitespace().nth(5))
        .map(PathBuf::from)
        .find(|path| {
            let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            (file_name.starts_with("libc.so") || file_name.starts_with("libm.so")) && path.is_file()
        })
}

/// Link `target` into `dir` under the platform file name of `name`
#[cfg(target_os = "linux")]
fn stage(dir: &Path, name: &LibraryName, target: &Path) -> PathBuf {
    let link = dir.join(SystemLoadPrimitive::platform_file_name(name));
    std::os::unix::fs::symlink(target, &link).unwrap();
    link
}

#[cfg(target_os = "linux")]
#[test]
fn test_staged_core_library_loads() {
    let Some(target) = mapped_shared_object() else {
        eprintln!("no shared C library mapped, skipping");
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let config = isolated_config(dir.path());
    let link = stage(dir.path(), &config.core_library, &target);
    let loader = OpenCvLoader::new(SystemLoadPrimitive::from_config(&config), config);

    let handle = loader.load(LoadOptions::default()).unwrap();
    let core: Vec<&str> = handle.core_libraries().iter().map(|n| n.as_str()).collect();
    assert_eq!(core, vec!["opencv_loader_it_core"]);
    assert_eq!(
        handle.library("opencv_loader_it_core").unwrap().path(),
        Some(link.as_path())
    );
    assert!(handle.info_library().is_none());
    assert!(!handle.list_reported());
    assert!(loader.is_loadable(LoadOptions::default()));
}

#[cfg(target_os = "linux")]
#[test]
fn test_info_library_without_list_symbol_reports_none() {
    let Some(target) = mapped_shared_object() else {
        eprintln!("no shared C library mapped, skipping");
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let config = isolated_config(dir.path());
    stage(dir.path(), &config.info_library, &target);
    stage(dir.path(), &config.core_library, &target);

    let primitive = SystemLoadPrimitive::from_config(&config);
    let info = primitive.load(&config.info_library).unwrap();
    assert_eq!(info.name(), &config.info_library);
    assert_eq!(read_library_list(&info), None);
    assert_eq!(primitive.library_list(&info), None);

    let loader = OpenCvLoader::new(primitive, config);
    let handle = loader.load(LoadOptions::default()).unwrap();
    assert!(handle.info_library().is_some());
    assert!(!handle.list_reported());
}

#[cfg(target_os = "linux")]
#[test]
fn test_staged_cuda_runtime_is_available() {
    let Some(target) = mapped_shared_object() else {
        eprintln!("no shared C library mapped, skipping");
        return;
    };
    let dir = tempfile::tempdir().unwrap();
    let mut config = isolated_config(dir.path());
    config.cuda_libraries = vec![LibraryName::new("opencv_loader_it_cudart").unwrap()];
    stage(dir.path(), &config.cuda_libraries[0], &target);
    stage(dir.path(), &config.core_library, &target);
    let loader = OpenCvLoader::new(SystemLoadPrimitive::from_config(&config), config);

    let handle = loader.load(LoadOptions::cuda_required()).unwrap();
    assert!(handle.is_cuda_available());
    assert!(handle.library("opencv_loader_it_cudart").is_some());
}

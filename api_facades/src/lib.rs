//! API Facades Layer
//!
//! Provides the public startup surface of the OpenCV loader: boolean
//! functions for application code (`init_local`, `init_with_cuda` and their
//! deprecated synonyms), the bundled version, and C ABI exports of the same.
//!
//! All facades call the initialization sequence from the use cases layer
//! over the platform loader from the adapters layer. Callers that need to
//! know why initialization failed use `OpenCvLoader::load` directly.

pub mod loader_facades;
pub mod c_facades;

// Re-export main facade functions
pub use loader_facades::*;
pub use c_facades::*;

pub use entities_native_library::{LoadOptions, LoaderConfig};
pub use usecases_opencv_init::{AccelerationStatus, InitError, LoadPrimitive, OpenCvHandle, OpenCvLoader};
pub use adapters_native_loading::{LoadedLibrary, SystemLoadPrimitive};

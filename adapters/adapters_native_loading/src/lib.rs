//! Adapters Layer: Native Loading
//!
//! Connects the OpenCV initialization sequence to the platform dynamic
//! loader. `SystemLoadPrimitive` implements the `LoadPrimitive` port from the
//! use cases layer over `libloading`.
//!
//! ## Modules
//!
//! - **[`system_loader`](system_loader/index.html)**: `SystemLoadPrimitive` and
//!   `LoadedLibrary`: search directories, platform file names, opening and closing
//! - **[`library_list`](library_list/index.html)**: Reading the build's library
//!   list from the info library
//!
//! ## See Also
//!
//! - [`usecases_opencv_init`](../../usecases/usecases_opencv_init/index.html): The initialization sequence
//! - [`entities_native_library`](../../entities/entities_native_library/index.html): Names, configuration and errors

pub mod system_loader;
pub mod library_list;

pub use system_loader::{LoadedLibrary, SystemLoadPrimitive};
pub use library_list::{call_library_list, read_library_list, LibraryListFn, LIBRARY_LIST_SYMBOL};

//! Load Primitive Port
//!
//! The initialization sequence never talks to the platform loader directly.
//! It drives a `LoadPrimitive`, which resolves one library by name and, for
//! the info library, reports the build's library list. The adapters layer
//! supplies the real implementation; tests supply mocks.

use entities_native_library::{LibraryName, PrimitiveError};

/// Resolves and initializes native libraries by name
///
/// Dropping a `Library` value must release whatever the load acquired, so a
/// failed initialization leaves nothing behind once its partial results are
/// dropped.
pub trait LoadPrimitive {
    /// Handle that keeps a loaded library resident while it lives
    type Library;

    /// Load and initialize a single library
    ///
    /// # Errors
    /// - `NotFound`: the library could not be located
    /// - `LoadFailed`: the library was located but failed to open or initialize
    fn load(&self, name: &LibraryName) -> Result<Self::Library, PrimitiveError>;

    /// Ask a loaded info library for the build's `;`-separated library list
    ///
    /// Returns `None` when the library does not report one.
    fn library_list(&self, info: &Self::Library) -> Option<String>;
}

impl<P: LoadPrimitive + ?Sized> LoadPrimitive for &P {
    type Library = P::Library;

    fn load(&self, name: &LibraryName) -> Result<Self::Library, PrimitiveError> {
        (**self).load(name)
    }

    fn library_list(&self, info: &Self::Library) -> Option<String> {
        (**self).library_list(info)
    }
}

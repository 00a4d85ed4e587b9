//! Library List Module
//!
//! The info library reports which shared libraries make up the OpenCV build
//! through a single exported C function:
//!
//! ```c
//! const char *opencv_library_list(void);
//! ```
//!
//! It returns a NUL-terminated, `;`-separated list of library names in load
//! order, or `NULL` when the build is a single library. The returned string
//! is owned by the info library and must stay valid while it is loaded.

use std::ffi::{c_char, CStr};

use libloading::Symbol;
use tracing::debug;

use crate::system_loader::LoadedLibrary;

/// Exported symbol reporting the library list
pub const LIBRARY_LIST_SYMBOL: &[u8] = b"opencv_library_list\0";

/// Signature of the library list function
pub type LibraryListFn = unsafe extern "C" fn() -> *const c_char;

/// Read the library list from a loaded info library
///
/// Returns `None` when the symbol is missing or returns `NULL`. Invalid UTF-8
/// is replaced rather than rejected.
pub fn read_library_list(info: &LoadedLibrary) -> Option<String> {
    // SAFETY: `opencv_library_list` is declared with `LibraryListFn`'s signature.
    let list_fn: Symbol<LibraryListFn> = match unsafe { info.symbol(LIBRARY_LIST_SYMBOL) } {
        Ok(symbol) => symbol,
        Err(e) => {
            debug!("{} does not export the library list: {}", info.name(), e);
            return None;
        }
    };
    // SAFETY: the string it returns lives as long as `info`.
    unsafe { call_library_list(*list_fn) }
}

/// Call a library list function and copy out its result
///
/// # Safety
/// `list_fn` must return `NULL` or a NUL-terminated string that stays valid
/// for the duration of the call.
pub unsafe fn call_library_list(list_fn: LibraryListFn) -> Option<String> {
    let ptr = list_fn();
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

//! OpenCV Loader Facades
//!
//! Boolean startup functions for application code that only needs to know
//! whether OpenCV is usable. Each call builds a loader from the environment
//! (`LoaderConfig::from_env`), runs the full initialization sequence through
//! the platform loader and collapses the outcome to `true` or `false`.
//!
//! On success the libraries stay loaded for the rest of the process. On
//! failure everything loaded during the attempt has already been released.
//! Callers decide their own fallback when `false` comes back, for example
//! disabling camera processing or asking the user to install a support
//! package.
//!
//! Calls are not deduplicated: every call goes back to the platform loader,
//! which reference-counts repeated loads of the same library. The process
//! keeps at most one handle per `LoadOptions`; a later success replaces the
//! earlier handle.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard};

use tracing::debug;

use adapters_native_loading::{LoadedLibrary, SystemLoadPrimitive};
use entities_native_library::{LoadOptions, LoaderConfig};
use usecases_opencv_init::{LoadPrimitive, OpenCvHandle, OpenCvLoader};

pub use entities_native_library::OPENCV_VERSION;

/// Handles from successful initializations, one per `LoadOptions`
pub(crate) struct ResidentHandles<L> {
    by_options: HashMap<LoadOptions, OpenCvHandle<L>>,
}

impl<L> ResidentHandles<L> {
    pub(crate) fn new() -> Self {
        Self {
            by_options: HashMap::new(),
        }
    }

    /// Keep `handle` for `options`, releasing the handle it replaces
    ///
    /// The replaced handle is dropped only after the new one is stored, so
    /// the platform loader's reference counts stay above zero throughout.
    pub(crate) fn keep(&mut self, options: LoadOptions, handle: OpenCvHandle<L>) {
        if let Some(previous) = self.by_options.insert(options, handle) {
            debug!("Replacing resident OpenCV handle for {:?}", options);
            drop(previous);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.by_options.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.by_options.is_empty()
    }
}

/// Handles kept until process exit
static RESIDENT: LazyLock<Mutex<ResidentHandles<LoadedLibrary>>> =
    LazyLock::new(|| Mutex::new(ResidentHandles::new()));

fn resident() -> MutexGuard<'static, ResidentHandles<LoadedLibrary>> {
    // A panic while holding the lock cannot leave the map inconsistent
    RESIDENT.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Loads and initializes OpenCV from the current application package
///
/// Roughly the equivalent of asking the platform loader for `opencv_java4`,
/// or for every library the info library lists.
///
/// # Returns
/// `true` if initialization of OpenCV was successful
pub fn init_local() -> bool {
    init_with_cuda(false)
}

/// Loads and initializes OpenCV, optionally loading the CUDA runtime first
///
/// CUDA runtime libraries are loaded best effort: a missing runtime is
/// logged and does not change the result, which reflects the core OpenCV
/// libraries only.
///
/// # Arguments
/// * `init_cuda` - Also load and initialize the CUDA runtime libraries
///
/// # Returns
/// `true` if initialization of OpenCV was successful
pub fn init_with_cuda(init_cuda: bool) -> bool {
    let config = LoaderConfig::from_env();
    let loader = OpenCvLoader::new(SystemLoadPrimitive::from_config(&config), config);
    let options = LoadOptions::with_cuda(init_cuda);
    initialize(&loader, options, |handle| resident().keep(options, handle))
}

/// Synonym for `init_local`
#[deprecated(since = "0.1.0", note = "use `init_local`")]
pub fn init_debug() -> bool {
    init_local()
}

/// Synonym for `init_with_cuda`
///
/// # Arguments
/// * `init_cuda` - Also load and initialize the CUDA runtime libraries
#[deprecated(since = "0.1.0", note = "use `init_with_cuda`")]
pub fn init_debug_with_cuda(init_cuda: bool) -> bool {
    init_with_cuda(init_cuda)
}

/// True once any call in this process has initialized OpenCV
pub fn is_initialized() -> bool {
    !resident().is_empty()
}

/// Number of initializations currently kept resident
///
/// At most one per distinct set of load options, however many calls succeeded.
pub fn resident_count() -> usize {
    resident().len()
}

/// Run one initialization and hand a successful handle to `keep`
pub(crate) fn initialize<P, K>(loader: &OpenCvLoader<P>, options: LoadOptions, keep: K) -> bool
where
    P: LoadPrimitive,
    K: FnOnce(OpenCvHandle<P::Library>),
{
    match loader.load(options) {
        Ok(handle) => {
            keep(handle);
            true
        }
        Err(e) => {
            debug!("OpenCV initialization reported as unavailable: {}", e);
            false
        }
    }
}

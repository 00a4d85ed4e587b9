//! OpenCV Handle Module
//!
//! A handle is the caller-owned result of a successful initialization. It
//! keeps every library it loaded resident until it is dropped, and reports
//! what was loaded: the core libraries in load order, whether the info
//! library supplied the list, and the state of the CUDA runtime.

use std::fmt;

use entities_native_library::{LibraryFailure, LibraryName, OPENCV_VERSION};

/// State of the optional CUDA runtime after an initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccelerationStatus {
    /// CUDA loading was not requested
    NotRequested,
    /// Every CUDA runtime library loaded
    Available {
        components: Vec<LibraryName>,
    },
    /// Some CUDA runtime libraries loaded, some did not
    Partial {
        loaded: Vec<LibraryName>,
        failed: Vec<LibraryFailure>,
    },
    /// No CUDA runtime library loaded
    Unavailable {
        failed: Vec<LibraryFailure>,
    },
}

impl AccelerationStatus {
    /// Classify the outcome of a CUDA load pass
    pub fn from_outcome(loaded: Vec<LibraryName>, failed: Vec<LibraryFailure>) -> Self {
        match (loaded.is_empty(), failed.is_empty()) {
            (_, true) => AccelerationStatus::Available { components: loaded },
            (true, false) => AccelerationStatus::Unavailable { failed },
            (false, false) => AccelerationStatus::Partial { loaded, failed },
        }
    }

    /// True only when every CUDA runtime library loaded
    pub fn is_available(&self) -> bool {
        matches!(self, AccelerationStatus::Available { .. })
    }

    /// CUDA runtime libraries that failed to load
    pub fn failures(&self) -> &[LibraryFailure] {
        match self {
            AccelerationStatus::Partial { failed, .. } => failed,
            AccelerationStatus::Unavailable { failed } => failed,
            _ => &[],
        }
    }
}

impl fmt::Display for AccelerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccelerationStatus::NotRequested => write!(f, "not requested"),
            AccelerationStatus::Available { components } => {
                write!(f, "available ({} libraries)", components.len())
            }
            AccelerationStatus::Partial { loaded, failed } => {
                write!(f, "partial ({} loaded, {} failed)", loaded.len(), failed.len())
            }
            AccelerationStatus::Unavailable { failed } => {
                write!(f, "unavailable ({} failed)", failed.len())
            }
        }
    }
}

/// Caller-owned OpenCV initialization
///
/// Libraries are released in reverse load order when the handle is dropped:
/// core libraries first, then the info library, then the CUDA runtime.
pub struct OpenCvHandle<L> {
    core: Vec<(LibraryName, L)>,
    info: Option<L>,
    cuda: Vec<(LibraryName, L)>,
    acceleration: AccelerationStatus,
    list_reported: bool,
}

impl<L> OpenCvHandle<L> {
    pub(crate) fn new(
        core: Vec<(LibraryName, L)>,
        info: Option<L>,
        cuda: Vec<(LibraryName, L)>,
        acceleration: AccelerationStatus,
        list_reported: bool,
    ) -> Self {
        Self {
            core,
            info,
            cuda,
            acceleration,
            list_reported,
        }
    }

    /// Version of the bundled OpenCV release
    pub fn version(&self) -> &'static str {
        OPENCV_VERSION
    }

    /// Core libraries in load order
    pub fn core_libraries(&self) -> Vec<&LibraryName> {
        self.core.iter().map(|(name, _)| name).collect()
    }

    /// Loaded core or CUDA library by name
    pub fn library(&self, name: &str) -> Option<&L> {
        self.core
            .iter()
            .chain(self.cuda.iter())
            .find(|(loaded, _)| loaded.as_str() == name)
            .map(|(_, library)| library)
    }

    /// Info library, if it loaded
    pub fn info_library(&self) -> Option<&L> {
        self.info.as_ref()
    }

    /// True when the core library list came from the info library
    pub fn list_reported(&self) -> bool {
        self.list_reported
    }

    pub fn acceleration(&self) -> &AccelerationStatus {
        &self.acceleration
    }

    pub fn is_cuda_available(&self) -> bool {
        self.acceleration.is_available()
    }
}

impl<L> fmt::Debug for OpenCvHandle<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenCvHandle")
            .field("version", &OPENCV_VERSION)
            .field("core", &self.core_libraries())
            .field("info_loaded", &self.info.is_some())
            .field("acceleration", &self.acceleration)
            .field("list_reported", &self.list_reported)
            .finish()
    }
}

impl<L> Drop for OpenCvHandle<L> {
    fn drop(&mut self) {
        release_in_reverse(&mut self.core);
        self.info.take();
        release_in_reverse(&mut self.cuda);
    }
}

/// Drop libraries last-loaded first
pub(crate) fn release_in_reverse<L>(libraries: &mut Vec<(LibraryName, L)>) {
    while libraries.pop().is_some() {}
}

//! Load Options Module

/// Options for a single load attempt
///
/// The default loads only the core OpenCV libraries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LoadOptions {
    /// Also load the CUDA runtime libraries before the core libraries
    pub init_cuda: bool,
    /// Fail the whole attempt if any CUDA runtime library is missing.
    /// Ignored unless `init_cuda` is set.
    pub require_cuda: bool,
}

impl LoadOptions {
    /// Options with CUDA loading switched on or off, best effort
    pub fn with_cuda(init_cuda: bool) -> Self {
        Self {
            init_cuda,
            require_cuda: false,
        }
    }

    /// Options that load CUDA and treat any CUDA failure as fatal
    pub fn cuda_required() -> Self {
        Self {
            init_cuda: true,
            require_cuda: true,
        }
    }

    /// Whether a CUDA failure must abort the attempt
    pub fn cuda_is_mandatory(&self) -> bool {
        self.init_cuda && self.require_cuda
    }
}

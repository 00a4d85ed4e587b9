//! Frameworks Layer: OpenCV Probe
//!
//! Command-line startup check for deployments that bundle OpenCV. The
//! `opencv-probe` binary loads the native libraries the same way an
//! application does and reports the outcome, so install scripts and health
//! checks can pick a fallback without linking the library themselves.
//!
//! ## Modules
//!
//! - **[`args`](args/index.html)**: Command-line arguments merged over the environment configuration
//! - **[`logging`](logging/index.html)**: `tracing` subscriber setup
//! - **[`probe`](probe/index.html)**: Runs the loader, writes the report and picks the exit code
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | OpenCV loaded |
//! | 1 | Native capability unavailable |
//! | 2 | Invalid arguments |

pub mod args;
pub mod logging;
pub mod probe;

pub use args::ProbeArgs;
pub use logging::{filter_directive, init_logging};
pub use probe::{run, run_with, EXIT_INVALID_ARGS, EXIT_SUCCESS, EXIT_UNAVAILABLE};

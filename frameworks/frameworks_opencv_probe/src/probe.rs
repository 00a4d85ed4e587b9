//! Probe Report Module
//!
//! Runs one initialization and writes a short report. The exit code tells the
//! calling script which fallback to take.

use std::io::{self, Write};

use tracing::{error, info};

use adapters_native_loading::SystemLoadPrimitive;
use entities_native_library::{LoadOptions, LoaderConfig, OPENCV_VERSION};
use usecases_opencv_init::{InitError, LoadPrimitive, OpenCvHandle, OpenCvLoader};

use crate::args::ProbeArgs;

/// OpenCV loaded
pub const EXIT_SUCCESS: i32 = 0;
/// Native capability unavailable
pub const EXIT_UNAVAILABLE: i32 = 1;
/// Invalid command-line arguments
pub const EXIT_INVALID_ARGS: i32 = 2;

/// Run the probe with the platform loader
///
/// `base` is the configuration the arguments are merged over, normally
/// `LoaderConfig::from_env()`.
pub fn run<W: Write>(args: &ProbeArgs, base: LoaderConfig, out: &mut W) -> i32 {
    let config = match args.apply_to(base) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid core library name: {}", e);
            return EXIT_INVALID_ARGS;
        }
    };
    let loader = OpenCvLoader::new(SystemLoadPrimitive::from_config(&config), config);
    run_with(&loader, args.load_options(), out)
}

/// Run the probe with any load primitive
pub fn run_with<P, W>(loader: &OpenCvLoader<P>, options: LoadOptions, out: &mut W) -> i32
where
    P: LoadPrimitive,
    W: Write,
{
    let result = loader.load(options);
    let written = match &result {
        Ok(handle) => write_success(out, handle, options),
        Err(e) => write_failure(out, e),
    };
    if let Err(e) = written {
        error!("Failed to write probe report: {}", e);
    }

    match result {
        Ok(_) => {
            info!("OpenCV {} available", OPENCV_VERSION);
            EXIT_SUCCESS
        }
        Err(_) => EXIT_UNAVAILABLE,
    }
}

fn write_success<L, W: Write>(
    out: &mut W,
    handle: &OpenCvHandle<L>,
    options: LoadOptions,
) -> io::Result<()> {
    writeln!(out, "OpenCV {}: available", handle.version())?;
    let core = handle
        .core_libraries()
        .iter()
        .map(|name| name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "core libraries: {}", core)?;
    if !handle.list_reported() {
        writeln!(out, "library list: not reported, default used")?;
    }
    if options.init_cuda {
        writeln!(out, "cuda: {}", handle.acceleration())?;
        for failure in handle.acceleration().failures() {
            writeln!(out, "  {}", failure)?;
        }
    }
    Ok(())
}

fn write_failure<W: Write>(out: &mut W, e: &InitError) -> io::Result<()> {
    writeln!(out, "OpenCV {}: unavailable", OPENCV_VERSION)?;
    let label = match e {
        InitError::CoreUnavailable(_) => "core",
        InitError::CudaUnavailable(_) => "cuda",
    };
    for failure in e.failures() {
        writeln!(out, "  {} {}", label, failure)?;
    }
    Ok(())
}

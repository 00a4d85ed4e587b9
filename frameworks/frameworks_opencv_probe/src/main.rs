//! opencv-probe Binary Entry Point
//!
//! Checks whether the bundled OpenCV native libraries can be loaded on this
//! machine and exits with a status the calling script can branch on.

use std::io;
use std::process;

use clap::Parser;

use entities_native_library::LoaderConfig;
use frameworks_opencv_probe::{init_logging, run, ProbeArgs, EXIT_INVALID_ARGS};

fn main() {
    // clap exits with 2 on usage errors and 0 for --help
    let args = ProbeArgs::parse();

    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        process::exit(EXIT_INVALID_ARGS);
    }

    init_logging(&args.log_level);

    let code = run(&args, LoaderConfig::from_env(), &mut io::stdout().lock());
    process::exit(code);
}

//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing. Flags are layered over the
//! environment configuration: search directories are appended after those from
//! `OPENCV_LOADER_PATH`, and `--core-library` replaces `OPENCV_CORE_LIBRARY`.

use std::path::PathBuf;

use clap::Parser;

use entities_native_library::{LibraryName, LoadOptions, LoaderConfig, NameError};

/// opencv-probe command-line arguments
#[derive(Parser, Debug)]
#[command(name = "opencv-probe")]
#[command(about = "Check whether the bundled OpenCV native libraries can be loaded")]
pub struct ProbeArgs {
    /// Also load the CUDA runtime libraries (best effort)
    #[arg(long)]
    pub cuda: bool,

    /// Fail if any CUDA runtime library is missing (implies --cuda)
    #[arg(long)]
    pub require_cuda: bool,

    /// Extra directory to search for native libraries (can be specified multiple times)
    #[arg(long = "search-path", value_name = "DIR")]
    pub search_paths: Vec<PathBuf>,

    /// Core library to load when the info library reports none (e.g., "opencv_world")
    #[arg(long, value_name = "NAME")]
    pub core_library: Option<String>,

    /// Log filter used when RUST_LOG is unset (e.g., "info", "debug")
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ProbeArgs {
    /// Load options requested on the command line
    pub fn load_options(&self) -> LoadOptions {
        if self.require_cuda {
            LoadOptions::cuda_required()
        } else {
            LoadOptions::with_cuda(self.cuda)
        }
    }

    /// Validate argument values
    pub fn validate(&self) -> Result<(), NameError> {
        if let Some(name) = &self.core_library {
            LibraryName::new(name.as_str())?;
        }
        Ok(())
    }

    /// Merge the arguments over `base`
    pub fn apply_to(&self, base: LoaderConfig) -> Result<LoaderConfig, NameError> {
        let mut config = base;
        config.search_paths.extend(self.search_paths.iter().cloned());
        if let Some(name) = &self.core_library {
            config.core_library = LibraryName::new(name.as_str())?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ProbeArgs {
        ProbeArgs::try_parse_from(std::iter::once("opencv-probe").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(!args.cuda);
        assert!(!args.require_cuda);
        assert!(args.search_paths.is_empty());
        assert_eq!(args.log_level, "info");
        assert_eq!(args.load_options(), LoadOptions::default());
    }

    #[test]
    fn test_cuda_flags() {
        assert_eq!(parse(&["--cuda"]).load_options(), LoadOptions::with_cuda(true));
        assert_eq!(parse(&["--require-cuda"]).load_options(), LoadOptions::cuda_required());
    }

    #[test]
    fn test_search_paths_appended_after_environment() {
        let args = parse(&["--search-path", "/b", "--search-path", "/c"]);
        let base = LoaderConfig::default().with_search_path("/a");
        let config = args.apply_to(base).unwrap();
        assert_eq!(
            config.search_paths,
            vec![PathBuf::from("/a"), PathBuf::from("/b"), PathBuf::from("/c")]
        );
    }

    #[test]
    fn test_core_library_override() {
        let args = parse(&["--core-library", "opencv_world"]);
        assert!(args.validate().is_ok());
        let config = args.apply_to(LoaderConfig::default()).unwrap();
        assert_eq!(config.core_library.as_str(), "opencv_world");
    }

    #[test]
    fn test_invalid_core_library_rejected() {
        let args = parse(&["--core-library", "lib/opencv"]);
        assert!(matches!(args.validate(), Err(NameError::PathSeparator(_))));
        assert!(args.apply_to(LoaderConfig::default()).is_err());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(ProbeArgs::try_parse_from(["opencv-probe", "--gpu"]).is_err());
    }
}

//! Bundled Library Version
//!
//! Release identifier of the OpenCV native library shipped alongside the loader.

/// Current OpenCV library version
pub const OPENCV_VERSION: &str = "4.11.0";

/// Command-line arguments and the pattern runner
pub mod cli;
/// Growth constants, defaults and weight-table parsing
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG export
pub mod image;
/// Terminal progress reporting
pub mod progress;
/// Segment rasterization into a level-stamped buffer
pub mod raster;
/// Animated GIF export
pub mod visualization;

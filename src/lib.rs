//! Procedural growth of branching, grid-aligned circuit patterns
//!
//! A [`PatternGenerator`] starts from four seeds at the grid centre and, one
//! level per call, advances a frontier of growth points by weighted-random
//! moves with collision avoidance and density-driven termination. Each call
//! returns the [`Segment`]s that occurred, ready for an animated renderer.

#![forbid(unsafe_code)]

/// Growth engine: nodes, segments, traces and the generator itself
pub mod algorithm;
/// Configuration, errors, rasterization, export and the command-line driver
pub mod io;
/// Weighted sampling utilities and injectable random sources
pub mod math;
/// Grid geometry: points, headings and bounds
pub mod spatial;

pub use algorithm::generator::{GrowthConfig, PatternGenerator, TerminationPolicy};
pub use algorithm::node::{Node, Segment, SplitStrategy};
pub use io::error::{CircuitError, Result};

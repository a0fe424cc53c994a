//! Educational visualizer that animates classic in-memory sorting algorithms
//!
//! Each algorithm is instrumented to render the array as vertical bars at
//! every comparison or relocation, highlighting the two indices involved.
//! Rendering is synchronous, so the animation advances exactly one frame per
//! instrumented step.

#![forbid(unsafe_code)]

/// Instrumented sorting algorithms and their executor
pub mod algorithm;
/// Command-line, configuration, error handling and console output
pub mod io;
/// Random array generation
pub mod math;
/// Frame drawing, window presentation and recording
pub mod render;

pub use algorithm::executor::Algorithm;
pub use io::error::{Result, VisualizerError};

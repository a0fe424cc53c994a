//! Mathematical utilities for the visualizer

/// Unbiased bounded sampling and random array generation
pub mod sampling;

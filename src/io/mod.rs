//! Console-facing input and output: arguments, configuration, errors and reporting

/// Command-line parsing and invocation resolution
pub mod cli;
/// Defaults, limits and the resolved run configuration
pub mod configuration;
/// Error types and constructors
pub mod error;
/// Diagnostic log setup
pub mod logging;
/// Terminal progress feedback for headless runs
pub mod progress;
/// Console formatting of run results
pub mod report;
/// Orchestration of a complete visualizer run
pub mod session;

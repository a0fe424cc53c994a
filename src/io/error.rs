//! Error types for configuration, display and recording failures

use std::fmt;
use std::path::PathBuf;

/// Main error type for all visualizer operations
#[derive(Debug)]
pub enum VisualizerError {
    /// Configuration value failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// The windowing or presentation layer reported a failure
    ///
    /// Covers event loop creation, window creation, surface setup,
    /// surface sizing and frame presentation.
    Display {
        /// Setup or presentation stage that failed
        stage: &'static str,
        /// Diagnostic message from the underlying toolkit
        reason: String,
    },

    /// Recorded data doesn't meet export requirements
    InvalidSourceData {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// Failed to encode or write an animation to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A sort run was driven out of order
    InvalidState {
        /// State the operation requires
        expected: &'static str,
        /// State the run was actually in
        found: &'static str,
    },
}

impl fmt::Display for VisualizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Display { stage, reason } => {
                write!(f, "Display error during {stage}: '{reason}'")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export animation to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidState { expected, found } => {
                write!(f, "Sort run is {found}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for VisualizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for visualizer results
pub type Result<T> = std::result::Result<T, VisualizerError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> VisualizerError {
    VisualizerError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a display error carrying the toolkit's diagnostic
pub fn display_error(stage: &'static str, reason: &impl ToString) -> VisualizerError {
    VisualizerError::Display {
        stage,
        reason: reason.to_string(),
    }
}

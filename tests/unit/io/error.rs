//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use sortvis::VisualizerError;
    use sortvis::io::error::{display_error, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = VisualizerError::FileSystem {
            path: "/tmp/out.gif".into(),
            operation: "create file",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("create file"));
        assert!(error.to_string().contains("/tmp/out.gif"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("width", &0, &"must be between 1 and 10000");

        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be between 1 and 10000"));
        assert!(error.source().is_none());
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = VisualizerError::ImageExport {
            path: PathBuf::from("/readonly/sort.gif"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/readonly/sort.gif"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests Display errors keep the failing stage
    // Verified by dropping the stage from the message
    #[test]
    fn test_display_error_stage() {
        let error = display_error("surface creation", &"unsupported platform");

        assert_eq!(
            error.to_string(),
            "Display error during surface creation: 'unsupported platform'"
        );
    }

    // Tests InvalidState message names both states
    // Verified by swapping expected and found
    #[test]
    fn test_invalid_state_error() {
        let error = VisualizerError::InvalidState {
            expected: "not started",
            found: "done",
        };

        assert_eq!(error.to_string(), "Sort run is done, expected not started");
    }

    // Tests InvalidSourceData formatting
    // Verified by omitting the reason
    #[test]
    fn test_invalid_source_data_error() {
        let error = VisualizerError::InvalidSourceData {
            reason: "No frames captured for recording".to_string(),
        };

        assert!(error.to_string().contains("No frames captured"));
    }
}

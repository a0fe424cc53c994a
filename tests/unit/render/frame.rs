//! Tests for the recording test renderer

#[cfg(test)]
mod tests {
    use sortvis::render::frame::{FrameRenderer, RecordingRenderer};

    // Tests that calls and highlights are kept in order
    // Verified by storing highlights in reverse
    #[test]
    fn test_records_highlights() {
        let mut renderer = RecordingRenderer::new();

        renderer.render(&[1, 2], Some(0), Some(1)).unwrap();
        renderer.render(&[1, 2], None, Some(1)).unwrap();

        assert_eq!(renderer.calls(), 2);
        assert_eq!(renderer.highlights(), &[(Some(0), Some(1)), (None, Some(1))]);
        assert_eq!(renderer.violations(), 0);
    }

    // Tests that a change in array length is a violation
    // Verified by updating the expected length on every frame
    #[test]
    fn test_length_change_violation() {
        let mut renderer = RecordingRenderer::new();

        renderer.render(&[1, 2, 3], None, None).unwrap();
        renderer.render(&[1, 2], None, None).unwrap();
        renderer.render(&[1, 2, 3], None, None).unwrap();

        assert_eq!(renderer.violations(), 1);
    }

    // Tests the inclusive value bounds
    // Verified by making the upper bound exclusive
    #[test]
    fn test_value_bounds_violation() {
        let mut renderer = RecordingRenderer::new().with_value_bounds(1, 5);

        renderer.render(&[1, 5], None, None).unwrap();
        renderer.render(&[0, 5], None, None).unwrap();
        renderer.render(&[1, 6], None, None).unwrap();

        assert_eq!(renderer.violations(), 2);
    }
}

//! Tests for bubble sort sweeps and highlight placement

#[cfg(test)]
mod tests {
    use sortvis::algorithm::bubble::bubble_sort;
    use sortvis::render::frame::RecordingRenderer;

    // Tests adjacent-pair highlights with a shrinking upper bound
    // Verified by sweeping the full array on every pass
    #[test]
    fn test_bubble_sort_small_array() {
        let mut bars = vec![5, 3, 8, 1];
        let mut renderer = RecordingRenderer::new();

        bubble_sort(&mut bars, &mut renderer).unwrap();

        assert_eq!(bars, vec![1, 3, 5, 8]);
        assert_eq!(
            renderer.highlights(),
            &[
                (Some(0), Some(1)),
                (Some(1), Some(2)),
                (Some(2), Some(3)),
                (Some(0), Some(1)),
                (Some(1), Some(2)),
                (Some(0), Some(1)),
            ]
        );
    }

    // Tests that every pass runs even when the input is already sorted
    // Verified by adding an early exit on a swap-free pass
    #[test]
    fn test_bubble_sort_sorted_input_keeps_sweeping() {
        let mut bars: Vec<i32> = (1..=25).collect();
        let expected = bars.clone();
        let mut renderer = RecordingRenderer::new();

        bubble_sort(&mut bars, &mut renderer).unwrap();

        assert_eq!(bars, expected);
        assert_eq!(renderer.calls(), 25 * 24 / 2);
    }

    // Tests the two-element boundary
    // Verified by using len - pass as the inner bound
    #[test]
    fn test_bubble_sort_pair() {
        let mut bars = vec![2, 1];
        let mut renderer = RecordingRenderer::new();

        bubble_sort(&mut bars, &mut renderer).unwrap();

        assert_eq!(bars, vec![1, 2]);
        assert_eq!(renderer.highlights(), &[(Some(0), Some(1))]);
    }

    // Tests that trivial arrays render nothing and don't underflow
    // Verified by removing the saturating subtraction
    #[test]
    fn test_bubble_sort_trivial_arrays() {
        for mut bars in [vec![], vec![1]] {
            let mut renderer = RecordingRenderer::new();
            bubble_sort(&mut bars, &mut renderer).unwrap();
            assert_eq!(renderer.calls(), 0);
        }
    }
}

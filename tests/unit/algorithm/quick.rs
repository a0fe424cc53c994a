//! Tests for Lomuto quick sort partitioning and highlight placement

#[cfg(test)]
mod tests {
    use sortvis::algorithm::quick::quick_sort;
    use sortvis::render::frame::RecordingRenderer;

    // Tests that the boundary highlight is absent before the first swap at index 0
    // Verified by clamping the boundary to zero
    #[test]
    fn test_quick_sort_small_array() {
        let mut bars = vec![5, 3, 8, 1];
        let mut renderer = RecordingRenderer::new();

        quick_sort(&mut bars, &mut renderer).unwrap();

        assert_eq!(bars, vec![1, 3, 5, 8]);
        assert_eq!(
            renderer.highlights(),
            &[
                (None, Some(0)),
                (None, Some(1)),
                (None, Some(2)),
                (Some(1), Some(1)),
                (Some(1), Some(2)),
            ]
        );
    }

    // Tests the last-element pivot's quadratic behaviour on sorted input
    // Verified by choosing the middle element as pivot
    #[test]
    fn test_quick_sort_sorted_input_is_quadratic() {
        let mut bars: Vec<i32> = (1..=50).collect();
        let expected = bars.clone();
        let mut renderer = RecordingRenderer::new();

        quick_sort(&mut bars, &mut renderer).unwrap();

        assert_eq!(bars, expected);
        assert_eq!(renderer.calls(), 50 * 49 / 2);
    }

    // Tests that a run of equal values terminates and stays intact
    // Verified by using <= in the partition comparison
    #[test]
    fn test_quick_sort_all_equal() {
        let mut bars = vec![3; 20];
        let mut renderer = RecordingRenderer::new();

        quick_sort(&mut bars, &mut renderer).unwrap();

        assert_eq!(bars, vec![3; 20]);
        assert_eq!(renderer.calls(), 20 * 19 / 2);
    }

    // Tests that partitions not starting at 0 highlight the slot before them
    // Verified by resetting the boundary to the partition start
    #[test]
    fn test_quick_sort_boundary_before_partition() {
        let mut bars = vec![2, 9, 5, 1];
        let mut renderer = RecordingRenderer::new();

        quick_sort(&mut bars, &mut renderer).unwrap();

        assert_eq!(bars, vec![1, 2, 5, 9]);
        assert_eq!(
            renderer.highlights(),
            &[
                (None, Some(0)),
                (None, Some(1)),
                (None, Some(2)),
                (Some(0), Some(1)),
                (Some(0), Some(2)),
                (Some(2), Some(2)),
            ]
        );
    }

    // Tests that trivial arrays render nothing
    // Verified by removing the end <= start guard
    #[test]
    fn test_quick_sort_trivial_arrays() {
        for mut bars in [vec![], vec![2]] {
            let mut renderer = RecordingRenderer::new();
            quick_sort(&mut bars, &mut renderer).unwrap();
            assert_eq!(renderer.calls(), 0);
        }
    }
}

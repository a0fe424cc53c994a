//! Tests for bar drawing, scaling and rasterisation

#[cfg(test)]
mod tests {
    use sortvis::render::canvas::{Canvas, Shade};

    // Tests bar placement from the bottom row with highlights
    // Verified by drawing bars from the top row
    #[test]
    fn test_draw_bars_with_highlights() {
        let mut canvas = Canvas::new(3, 4);

        canvas.draw_bars(&[1, 4, 2], Some(1), Some(2));

        assert_eq!(canvas.shade_at(3, 0), Some(Shade::Bar));
        assert_eq!(canvas.shade_at(2, 0), Some(Shade::Background));
        for row in 0..4 {
            assert_eq!(canvas.shade_at(row, 1), Some(Shade::Primary));
        }
        assert_eq!(canvas.shade_at(1, 2), Some(Shade::Background));
        assert_eq!(canvas.shade_at(2, 2), Some(Shade::Secondary));
        assert_eq!(canvas.shade_at(3, 2), Some(Shade::Secondary));
        assert_eq!(canvas.shade_at(4, 0), None);
    }

    // Tests that a coinciding highlight pair draws as primary
    // Verified by checking secondary first
    #[test]
    fn test_primary_wins_when_indices_coincide() {
        let mut canvas = Canvas::new(2, 3);

        canvas.draw_bars(&[2, 2], Some(0), Some(0));

        assert_eq!(canvas.shade_at(2, 0), Some(Shade::Primary));
        assert_eq!(canvas.shade_at(2, 1), Some(Shade::Bar));
    }

    // Tests that each draw starts from a cleared canvas
    // Verified by removing the fill
    #[test]
    fn test_draw_clears_previous_frame() {
        let mut canvas = Canvas::new(1, 5);
        canvas.draw_bars(&[5], None, None);

        canvas.draw_bars(&[1], None, None);

        assert_eq!(canvas.shade_at(0, 0), Some(Shade::Background));
        assert_eq!(canvas.shade_at(3, 0), Some(Shade::Background));
        assert_eq!(canvas.shade_at(4, 0), Some(Shade::Bar));
    }

    // Tests clipping for oversized, negative and surplus bars
    // Verified by indexing without bounds checks
    #[test]
    fn test_draw_clips_out_of_range_bars() {
        let mut canvas = Canvas::new(2, 3);

        canvas.draw_bars(&[10, -4, 3], None, Some(2));

        for row in 0..3 {
            assert_eq!(canvas.shade_at(row, 0), Some(Shade::Bar));
            assert_eq!(canvas.shade_at(row, 1), Some(Shade::Background));
        }
        assert_eq!(canvas.width(), 2);
        assert_eq!(canvas.height(), 3);
    }

    // Tests nearest-neighbour scaling into packed pixels
    // Verified by swapping row and column lookup
    #[test]
    fn test_blit_scaled() {
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_bars(&[1, 2], None, Some(1));
        let mut target = vec![u32::MAX; 16];

        canvas.blit_scaled(&mut target, 4);

        let white = 0x00FF_FFFF;
        let red = 0x00FF_0000;
        assert_eq!(&target[0..4], &[0, 0, red, red]);
        assert_eq!(&target[4..8], &[0, 0, red, red]);
        assert_eq!(&target[8..12], &[white, white, red, red]);
        assert_eq!(&target[12..16], &[white, white, red, red]);
    }

    // Tests that a zero target width leaves the buffer untouched
    // Verified by dividing by the target width unconditionally
    #[test]
    fn test_blit_zero_width() {
        let canvas = Canvas::new(2, 2);
        let mut target = vec![7_u32; 4];

        canvas.blit_scaled(&mut target, 0);

        assert_eq!(target, vec![7; 4]);
    }

    // Tests colour values for each shade
    // Verified by packing as RGBA instead of 0RGB
    #[test]
    fn test_shade_colours() {
        assert_eq!(Shade::Background.packed(), 0x0000_0000);
        assert_eq!(Shade::Bar.packed(), 0x00FF_FFFF);
        assert_eq!(Shade::Primary.packed(), 0x0000_FF00);
        assert_eq!(Shade::Secondary.packed(), 0x00FF_0000);
        assert_eq!(Shade::Primary.rgba(), [0, 255, 0, 255]);
        assert_eq!(Shade::default(), Shade::Background);
    }

    // Tests rasterisation at logical resolution
    // Verified by transposing x and y
    #[test]
    fn test_to_rgba_image() {
        let mut canvas = Canvas::new(3, 2);
        canvas.draw_bars(&[1, 2, 0], Some(1), None);

        let image = canvas.to_rgba_image();

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(1, 0).0, [0, 255, 0, 255]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(image.get_pixel(0, 1).0, [255, 255, 255, 255]);
        assert_eq!(image.get_pixel(2, 1).0, [0, 0, 0, 255]);
    }
}

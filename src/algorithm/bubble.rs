use crate::io::error::Result;
use crate::render::frame::FrameRenderer;

/// Sort `bars` in place with adjacent-pair sweeps
///
/// Each pass bubbles the largest remaining value to the end, so the upper
/// bound shrinks by one per pass. Renders `(j, j + 1)` after every
/// comparison. Every pass runs even if the previous one made no swaps.
///
/// # Errors
///
/// Propagates the first error returned by `renderer`
pub fn bubble_sort<R: FrameRenderer + ?Sized>(
    bars: &mut [i32],
    renderer: &mut R,
) -> Result<()> {
    let len = bars.len();

    for pass in 0..len.saturating_sub(1) {
        for j in 0..(len - 1 - pass) {
            if let (Some(&left), Some(&right)) = (bars.get(j), bars.get(j + 1))
                && left > right
            {
                bars.swap(j, j + 1);
            }
            renderer.render(bars, Some(j), Some(j + 1))?;
        }
    }

    Ok(())
}

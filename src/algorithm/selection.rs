use crate::io::error::Result;
use crate::render::frame::FrameRenderer;

/// Sort `bars` in place by repeatedly selecting the minimum of the unsorted tail
///
/// Renders `(i, j)` at every inner comparison, where `i` is the slot being
/// filled and `j` the scan position. The minimum is swapped into place once
/// per outer step, and only when it moved.
///
/// # Errors
///
/// Propagates the first error returned by `renderer`
pub fn selection_sort<R: FrameRenderer + ?Sized>(
    bars: &mut [i32],
    renderer: &mut R,
) -> Result<()> {
    let len = bars.len();

    for i in 0..len {
        let mut min_index = i;

        for j in (i + 1)..len {
            if let (Some(&candidate), Some(&current_min)) = (bars.get(j), bars.get(min_index))
                && candidate < current_min
            {
                min_index = j;
            }
            renderer.render(bars, Some(i), Some(j))?;
        }

        if min_index != i {
            bars.swap(i, min_index);
        }
    }

    Ok(())
}

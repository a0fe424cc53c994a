use crate::io::error::Result;
use crate::render::frame::FrameRenderer;

/// Sort `bars` in place by inserting each element into the sorted prefix
///
/// The key at `i` is held aside while `j` walks backward over larger values,
/// shifting each one right. Renders `(i, j)` at every inner check, including
/// the check that stops the walk.
///
/// # Errors
///
/// Propagates the first error returned by `renderer`
pub fn insertion_sort<R: FrameRenderer + ?Sized>(
    bars: &mut [i32],
    renderer: &mut R,
) -> Result<()> {
    for i in 1..bars.len() {
        let Some(&key) = bars.get(i) else {
            break;
        };

        // Slot the key will land in once the walk stops
        let mut hole = i;
        while hole > 0 {
            let j = hole - 1;
            renderer.render(bars, Some(i), Some(j))?;

            let Some(&value) = bars.get(j) else {
                break;
            };
            if value <= key {
                break;
            }
            if let Some(slot) = bars.get_mut(hole) {
                *slot = value;
            }
            hole = j;
        }

        if let Some(slot) = bars.get_mut(hole) {
            *slot = key;
        }
    }

    Ok(())
}

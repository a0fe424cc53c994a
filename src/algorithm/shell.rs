use crate::io::error::Result;
use crate::render::frame::FrameRenderer;

/// Sort `bars` in place with shell sort
///
/// Gaps start at `len / 2` and halve down to 1; each gap runs a gapped
/// insertion sort. Renders `(j, k)` at every shift, where `j` is the element
/// being inserted and `k` the slot just overwritten.
///
/// # Errors
///
/// Propagates the first error returned by `renderer`
pub fn shell_sort<R: FrameRenderer + ?Sized>(
    bars: &mut [i32],
    renderer: &mut R,
) -> Result<()> {
    let len = bars.len();
    let mut gap = len / 2;

    while gap > 0 {
        for j in gap..len {
            let Some(&value) = bars.get(j) else {
                break;
            };

            let mut k = j;
            while k >= gap {
                let Some(&previous) = bars.get(k - gap) else {
                    break;
                };
                if previous <= value {
                    break;
                }
                if let Some(slot) = bars.get_mut(k) {
                    *slot = previous;
                }
                renderer.render(bars, Some(j), Some(k))?;
                k -= gap;
            }

            if let Some(slot) = bars.get_mut(k) {
                *slot = value;
            }
        }
        gap /= 2;
    }

    Ok(())
}

use crate::io::error::Result;
use crate::render::frame::FrameRenderer;

/// Sort `bars` in place with top-down merge sort
///
/// Each merge copies its two halves into temporaries sized to each half and
/// writes them back stably, preferring the left half on ties. Renders
/// `(right, k)` at every write, where `right` is the inclusive upper bound
/// of the merge window and `k` the write cursor.
///
/// # Errors
///
/// Propagates the first error returned by `renderer`
pub fn merge_sort<R: FrameRenderer + ?Sized>(
    bars: &mut [i32],
    renderer: &mut R,
) -> Result<()> {
    if bars.len() < 2 {
        return Ok(());
    }
    sort_range(bars, 0, bars.len() - 1, renderer)
}

// Bounds are inclusive
fn sort_range<R: FrameRenderer + ?Sized>(
    bars: &mut [i32],
    left: usize,
    right: usize,
    renderer: &mut R,
) -> Result<()> {
    if left >= right {
        return Ok(());
    }

    let mid = left + (right - left) / 2;
    sort_range(bars, left, mid, renderer)?;
    sort_range(bars, mid + 1, right, renderer)?;
    merge(bars, left, mid, right, renderer)
}

fn merge<R: FrameRenderer + ?Sized>(
    bars: &mut [i32],
    left: usize,
    mid: usize,
    right: usize,
    renderer: &mut R,
) -> Result<()> {
    let lower = bars.get(left..=mid).map(<[i32]>::to_vec).unwrap_or_default();
    let upper = bars
        .get(mid + 1..=right)
        .map(<[i32]>::to_vec)
        .unwrap_or_default();

    let mut i = 0;
    let mut j = 0;
    for k in left..=right {
        // An exhausted upper half is checked before any comparison
        let next = match (lower.get(i), upper.get(j)) {
            (Some(&a), Some(&b)) if a <= b => {
                i += 1;
                a
            }
            (Some(&a), None) => {
                i += 1;
                a
            }
            (_, Some(&b)) => {
                j += 1;
                b
            }
            (None, None) => break,
        };

        if let Some(slot) = bars.get_mut(k) {
            *slot = next;
        }
        renderer.render(bars, Some(right), Some(k))?;
    }

    Ok(())
}

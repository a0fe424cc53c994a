use crate::io::error::Result;
use crate::render::frame::FrameRenderer;

/// Sort `bars` in place with quick sort over a Lomuto partition
///
/// The last element of each range is the pivot. Renders `(i, j)` at every
/// scan step, where `i` is the last slot known to hold a value below the
/// pivot (absent before the first such value when the range starts at 0)
/// and `j` the scan position.
///
/// # Errors
///
/// Propagates the first error returned by `renderer`
pub fn quick_sort<R: FrameRenderer + ?Sized>(
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
    start: usize,
    end: usize,
    renderer: &mut R,
) -> Result<()> {
    if end <= start {
        return Ok(());
    }

    let pivot = partition(bars, start, end, renderer)?;
    if pivot > start {
        sort_range(bars, start, pivot - 1, renderer)?;
    }
    sort_range(bars, pivot + 1, end, renderer)
}

/// Returns the final index of the pivot
fn partition<R: FrameRenderer + ?Sized>(
    bars: &mut [i32],
    start: usize,
    end: usize,
    renderer: &mut R,
) -> Result<usize> {
    let Some(&pivot) = bars.get(end) else {
        return Ok(end);
    };

    // Everything in start..store is below the pivot
    let mut store = start;
    for j in start..end {
        if bars.get(j).is_some_and(|&value| value < pivot) {
            bars.swap(store, j);
            store += 1;
        }
        renderer.render(bars, store.checked_sub(1), Some(j))?;
    }

    bars.swap(store, end);
    Ok(store)
}

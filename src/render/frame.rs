//! The rendering capability the sorting algorithms draw through

use crate::io::error::Result;

/// Draws one frame of array state with up to two highlighted indices
///
/// Implementations block until the frame is presented (and any pacing delay
/// has elapsed), so the visual progress rate equals the call rate.
pub trait FrameRenderer {
    /// Draw and present `bars`, highlighting `primary` green and `secondary` red
    ///
    /// # Errors
    ///
    /// Returns an error if the frame cannot be presented
    fn render(
        &mut self,
        bars: &[i32],
        primary: Option<usize>,
        secondary: Option<usize>,
    ) -> Result<()>;
}

/// Records every render call instead of drawing
///
/// Also checks each frame against the first frame's length and an optional
/// inclusive value range, counting frames that break either.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    highlights: Vec<(Option<usize>, Option<usize>)>,
    value_bounds: Option<(i32, i32)>,
    expected_len: Option<usize>,
    violations: usize,
}

impl RecordingRenderer {
    /// Create a recorder with no value bounds
    pub fn new() -> Self {
        Self::default()
    }

    /// Count frames holding values outside `[min, max]` as violations
    #[must_use]
    pub const fn with_value_bounds(mut self, min: i32, max: i32) -> Self {
        self.value_bounds = Some((min, max));
        self
    }

    /// Number of render calls received
    pub const fn calls(&self) -> usize {
        self.highlights.len()
    }

    /// Highlight pairs in call order
    pub fn highlights(&self) -> &[(Option<usize>, Option<usize>)] {
        &self.highlights
    }

    /// Number of frames whose length changed or whose values left the bounds
    pub const fn violations(&self) -> usize {
        self.violations
    }
}

impl FrameRenderer for RecordingRenderer {
    fn render(
        &mut self,
        bars: &[i32],
        primary: Option<usize>,
        secondary: Option<usize>,
    ) -> Result<()> {
        let expected_len = *self.expected_len.get_or_insert(bars.len());
        let out_of_bounds = self
            .value_bounds
            .is_some_and(|(min, max)| bars.iter().any(|value| !(min..=max).contains(value)));

        if bars.len() != expected_len || out_of_bounds {
            self.violations += 1;
        }

        self.highlights.push((primary, secondary));
        Ok(())
    }
}

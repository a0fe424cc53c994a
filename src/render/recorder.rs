//! Frame capture and GIF generation for sort animations

use crate::io::configuration::{FINAL_FRAME_HOLD_FACTOR, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{Result, VisualizerError};
use crate::render::canvas::Canvas;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Captures every `stride`th rendered frame for later GIF export
///
/// The first frame is always kept; [`GifRecorder::finish`] appends the final
/// state unless it is already the last kept frame.
pub struct GifRecorder {
    frames: Vec<RgbaImage>,
    stride: u64,
    seen: u64,
    frame_delay_ms: u32,
}

impl GifRecorder {
    /// Frames shorter than viewers support are stretched to
    /// [`VIEWER_MIN_FRAME_DELAY_MS`]; a zero stride is treated as 1
    pub fn new(stride: u64, delay_ms: u64) -> Self {
        let requested = u32::try_from(delay_ms).unwrap_or(u32::MAX);

        Self {
            frames: Vec::new(),
            stride: stride.max(1),
            seen: 0,
            frame_delay_ms: requested.max(VIEWER_MIN_FRAME_DELAY_MS),
        }
    }

    /// Offer a rendered frame; kept when it falls on the stride
    pub fn capture(&mut self, canvas: &Canvas) {
        self.seen += 1;
        if (self.seen - 1) % self.stride == 0 {
            self.frames.push(canvas.to_rgba_image());
        }
    }

    /// Append the settled state drawn after the sort returned
    ///
    /// Skipped when it matches the last kept frame.
    pub fn finish(&mut self, canvas: &Canvas) {
        let image = canvas.to_rgba_image();
        if self.frames.last() != Some(&image) {
            self.frames.push(image);
        }
    }

    /// Number of frames held for export
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame the animation ends on
    pub fn last_frame(&self) -> Option<&RgbaImage> {
        self.frames.last()
    }

    /// Number of frames offered so far
    pub const fn frames_seen(&self) -> u64 {
        self.seen
    }

    /// Delay applied to every frame except the held final one
    pub const fn frame_delay_ms(&self) -> u32 {
        self.frame_delay_ms
    }

    /// Encode the captured frames as a looping animated GIF
    ///
    /// The final frame is repeated with a longer delay so the sorted state
    /// stays visible before the animation loops.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path) -> Result<()> {
        let Some(last_frame) = self.frames.last() else {
            return Err(VisualizerError::InvalidSourceData {
                reason: "No frames captured for recording".to_string(),
            });
        };

        if let Some(parent) = output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent).map_err(|e| VisualizerError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| VisualizerError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let delay = Delay::from_numer_denom_ms(self.frame_delay_ms, 1);
        let hold = Delay::from_numer_denom_ms(
            self.frame_delay_ms.saturating_mul(FINAL_FRAME_HOLD_FACTOR),
            1,
        );
        let frames = self
            .frames
            .iter()
            .map(|image| Frame::from_parts(image.clone(), 0, 0, delay))
            .chain(std::iter::once(Frame::from_parts(
                last_frame.clone(),
                0,
                0,
                hold,
            )));

        let export_error = |source| VisualizerError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        };
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        tracing::info!(
            path = %output_path.display(),
            frames = self.frames.len(),
            "recording written"
        );
        Ok(())
    }
}

//! Renderer that draws into an off-screen canvas instead of a window

use crate::io::error::Result;
use crate::io::progress::StepProgress;
use crate::render::canvas::Canvas;
use crate::render::frame::FrameRenderer;
use crate::render::recorder::GifRecorder;

/// Draws every frame off-screen, optionally recording and reporting progress
///
/// No pacing delay is applied: with nothing on screen there is nothing to
/// slow down for.
pub struct HeadlessRenderer {
    canvas: Canvas,
    frames: u64,
    recorder: Option<GifRecorder>,
    progress: Option<StepProgress>,
}

impl HeadlessRenderer {
    /// Create a renderer for a `width` by `height` logical canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            frames: 0,
            recorder: None,
            progress: None,
        }
    }

    /// Capture frames into `recorder`
    #[must_use]
    pub fn with_recorder(mut self, recorder: GifRecorder) -> Self {
        self.recorder = Some(recorder);
        self
    }

    /// Report rendered steps on `progress`
    #[must_use]
    pub fn with_progress(mut self, progress: StepProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Number of frames rendered
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Most recently drawn frame
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Draw the sorted array without highlights, clear the progress display
    /// and hand back the finished recording
    ///
    /// The last rendered step can predate an algorithm's final swap, so the
    /// settled `bars` are drawn before the recording is closed.
    pub fn finish(&mut self, bars: &[i32]) -> Option<GifRecorder> {
        self.canvas.draw_bars(bars, None, None);

        if let Some(progress) = self.progress.take() {
            progress.finish(self.frames);
        }

        let mut recorder = self.recorder.take()?;
        recorder.finish(&self.canvas);
        Some(recorder)
    }
}

impl FrameRenderer for HeadlessRenderer {
    fn render(
        &mut self,
        bars: &[i32],
        primary: Option<usize>,
        secondary: Option<usize>,
    ) -> Result<()> {
        self.canvas.draw_bars(bars, primary, secondary);
        self.frames += 1;

        if let Some(recorder) = self.recorder.as_mut() {
            recorder.capture(&self.canvas);
        }
        if let Some(progress) = &self.progress {
            progress.update(self.frames);
        }

        Ok(())
    }
}

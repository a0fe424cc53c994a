//! Orchestrates one visualizer run from array generation to window teardown

use crate::algorithm::executor::{SortExecutor, SortReport};
use crate::io::configuration::Config;
use crate::io::error::Result;
use crate::io::progress::StepProgress;
use crate::io::report::{format_bars, format_elapsed};
use crate::math::sampling::{RandomArrayGenerator, time_seed};
use crate::render::headless::HeadlessRenderer;
use crate::render::recorder::GifRecorder;
use crate::render::window::WindowRenderer;

/// Result of a completed run
#[derive(Debug)]
pub struct RunOutcome {
    /// Array after sorting
    pub bars: Vec<i32>,
    /// Seed the array was generated from
    pub seed: u64,
    /// Step statistics from the executor
    pub report: SortReport,
    /// Frames written to the recording, if one was requested
    pub frames_recorded: Option<usize>,
}

/// Runs the configured algorithm against a freshly generated array
///
/// The sequence is: seed, generate, open the display (or the headless
/// renderer), sort synchronously, report on stdout, write any recording,
/// then wait for the window to be closed.
pub struct Session {
    config: Config,
}

impl Session {
    /// Create a session for a validated configuration
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Configuration this session runs with
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Execute the full run
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Array generation rejects the configured height
    /// - The window or its surface cannot be created or presented to
    /// - The recording cannot be written
    pub fn run(&self) -> Result<RunOutcome> {
        let seed = self.config.seed().unwrap_or_else(time_seed);
        let mut bars = RandomArrayGenerator::from_seed(seed)
            .generate(self.config.width(), self.config.height())?;

        tracing::info!(
            algorithm = %self.config.algorithm(),
            width = self.config.width(),
            height = self.config.height(),
            seed,
            headless = self.config.headless(),
            "starting run"
        );

        let (report, frames_recorded) = if self.config.headless() {
            self.run_headless(&mut bars)?
        } else {
            self.run_windowed(&mut bars)?
        };

        Ok(RunOutcome {
            bars,
            seed,
            report,
            frames_recorded,
        })
    }

    fn run_headless(&self, bars: &mut [i32]) -> Result<(SortReport, Option<usize>)> {
        let mut renderer =
            HeadlessRenderer::new(self.config.width() as usize, self.config.height() as usize);
        if let Some(recorder) = self.recorder() {
            renderer = renderer.with_recorder(recorder);
        }
        if !self.config.quiet() {
            renderer = renderer.with_progress(StepProgress::new(self.config.algorithm()));
        }

        let report = SortExecutor::new(self.config.algorithm()).run(bars, &mut renderer)?;
        let recorder = renderer.finish(bars);

        self.print_report(bars, &report);
        let frames_recorded = self.export(recorder)?;
        Ok((report, frames_recorded))
    }

    fn run_windowed(&self, bars: &mut [i32]) -> Result<(SortReport, Option<usize>)> {
        let mut renderer = WindowRenderer::open(&self.config)?.with_recorder(self.recorder());

        let report = SortExecutor::new(self.config.algorithm()).run(bars, &mut renderer)?;
        let recorder = renderer.finish(bars)?;

        self.print_report(bars, &report);
        let frames_recorded = self.export(recorder)?;

        renderer.wait_for_quit()?;
        Ok((report, frames_recorded))
    }

    fn recorder(&self) -> Option<GifRecorder> {
        self.config
            .record_path()
            .map(|_| GifRecorder::new(self.config.record_stride(), self.config.delay_ms()))
    }

    fn export(&self, recorder: Option<GifRecorder>) -> Result<Option<usize>> {
        let (Some(recorder), Some(path)) = (recorder, self.config.record_path()) else {
            return Ok(None);
        };
        recorder.export_gif(path)?;
        Ok(Some(recorder.frame_count()))
    }

    // Allow print for the final array and timing, the visualizer's console output
    #[allow(clippy::print_stdout)]
    fn print_report(&self, bars: &[i32], report: &SortReport) {
        if !self.config.quiet() {
            println!("{}", format_bars(bars));
        }
        println!("{}", format_elapsed(report.elapsed));
    }
}

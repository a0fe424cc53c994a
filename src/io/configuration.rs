//! Runtime configuration defaults, safety limits and the resolved run configuration

use crate::algorithm::executor::Algorithm;
use crate::io::error::{Result, invalid_parameter};
use std::path::{Path, PathBuf};
use std::time::Duration;

// Default values for configurable parameters
/// Number of bars when no width is given
pub const DEFAULT_WIDTH: u32 = 200;
/// Logical canvas height when no height is given
pub const DEFAULT_HEIGHT: u32 = 150;
/// Window pixels per logical pixel
pub const DEFAULT_SCALE: f64 = 5.0;
/// Pause after each presented frame in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 0;
/// Algorithm code used when no positional argument is given
pub const DEFAULT_ALGORITHM_CODE: &str = "ss";

// Safety limits to prevent excessive memory allocation
/// Maximum logical width or height
pub const MAX_DIMENSION: u32 = 10_000;
/// Values are drawn from `[1, height - 1]`, which is empty below this
pub const MIN_HEIGHT: u32 = 2;
/// Largest window side in physical pixels
pub const MAX_SURFACE_DIMENSION: u32 = 16_384;

// Display settings
/// Fixed window title
pub const WINDOW_TITLE: &str = "Sort Visualizer";

// Recording settings
/// Keep every Nth rendered frame in a recording
pub const DEFAULT_RECORD_STRIDE: u64 = 64;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// The last recorded frame is held this many frame delays
pub const FINAL_FRAME_HOLD_FACTOR: u32 = 25;

// Progress display settings
/// Spinner refresh interval in rendered steps
pub const PROGRESS_UPDATE_INTERVAL: u64 = 256;

// Logging
/// Filter applied when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Immutable snapshot of everything a run needs
///
/// Built once at startup and passed by reference to the generator,
/// the renderers and the session.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    width: u32,
    height: u32,
    scale: f64,
    delay_ms: u64,
    algorithm: Algorithm,
    seed: Option<u64>,
    record: Option<PathBuf>,
    record_stride: u64,
    headless: bool,
    quiet: bool,
}

impl Config {
    /// Validate the core visual parameters
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `width` is zero or exceeds [`MAX_DIMENSION`]
    /// - `height` is below [`MIN_HEIGHT`] or exceeds [`MAX_DIMENSION`]
    /// - `scale` is not a finite positive number
    /// - The scaled window would be empty or exceed [`MAX_SURFACE_DIMENSION`]
    pub fn new(
        width: u32,
        height: u32,
        scale: f64,
        delay_ms: u64,
        algorithm: Algorithm,
    ) -> Result<Self> {
        if width == 0 || width > MAX_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &width,
                &format!("must be between 1 and {MAX_DIMENSION}"),
            ));
        }
        if !(MIN_HEIGHT..=MAX_DIMENSION).contains(&height) {
            return Err(invalid_parameter(
                "height",
                &height,
                &format!("must be between {MIN_HEIGHT} and {MAX_DIMENSION}"),
            ));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(invalid_parameter(
                "scale",
                &scale,
                &"must be a finite number greater than zero",
            ));
        }

        let config = Self {
            width,
            height,
            scale,
            delay_ms,
            algorithm,
            seed: None,
            record: None,
            record_stride: DEFAULT_RECORD_STRIDE,
            headless: false,
            quiet: false,
        };

        let (surface_width, surface_height) = config.surface_size();
        for side in [surface_width, surface_height] {
            if side == 0 || side > MAX_SURFACE_DIMENSION {
                return Err(invalid_parameter(
                    "scale",
                    &scale,
                    &format!(
                        "window of {surface_width}x{surface_height} pixels must fit within 1..={MAX_SURFACE_DIMENSION} per side"
                    ),
                ));
            }
        }

        Ok(config)
    }

    /// Use a fixed seed instead of the wall clock
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Record the animation as a GIF, keeping every `stride`th frame
    ///
    /// # Errors
    ///
    /// Returns an error if `stride` is zero
    pub fn with_recording(mut self, path: Option<PathBuf>, stride: u64) -> Result<Self> {
        if stride == 0 {
            return Err(invalid_parameter(
                "record_stride",
                &stride,
                &"must be at least 1",
            ));
        }
        self.record = path;
        self.record_stride = stride;
        Ok(self)
    }

    /// Run without opening a window
    #[must_use]
    pub const fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Suppress the progress spinner and the final array dump
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Number of bars
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Logical canvas height
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Window pixels per logical pixel
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Pause after each presented frame
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Pause after each presented frame in milliseconds
    pub const fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Selected sorting algorithm
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Fixed seed, if one was requested
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// GIF output path, if recording was requested
    pub fn record_path(&self) -> Option<&Path> {
        self.record.as_deref()
    }

    /// Frame stride for recordings
    pub const fn record_stride(&self) -> u64 {
        self.record_stride
    }

    /// Whether the run skips the window
    pub const fn headless(&self) -> bool {
        self.headless
    }

    /// Whether console feedback is reduced
    pub const fn quiet(&self) -> bool {
        self.quiet
    }

    /// Window dimensions in physical pixels
    pub fn surface_size(&self) -> (u32, u32) {
        let scaled = |side: u32| {
            let pixels = (f64::from(side) * self.scale).round();
            if pixels >= f64::from(u32::MAX) {
                u32::MAX
            } else {
                pixels as u32
            }
        };
        (scaled(self.width), scaled(self.height))
    }
}

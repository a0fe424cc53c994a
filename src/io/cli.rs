//! Command-line interface for choosing and tuning the animated sort

use crate::algorithm::executor::Algorithm;
use crate::io::configuration::{
    Config, DEFAULT_ALGORITHM_CODE, DEFAULT_DELAY_MS, DEFAULT_HEIGHT, DEFAULT_RECORD_STRIDE,
    DEFAULT_SCALE, DEFAULT_WIDTH, MAX_DIMENSION, MIN_HEIGHT,
};
use crate::io::error::{Result, VisualizerError};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

const ALGORITHM_HELP: &str = "\
Algorithms:
  ss   selection sort (default)
  is   insertion sort
  bs   bubble sort
  ms   merge sort
  qs   quick sort
  shs  shell sort
  help print this message and exit

Close the window or press Escape or Q to quit once sorting has finished.";

/// What the positional argument asked for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Print usage and exit without running
    Help,
    /// Animate the given algorithm
    Sort(Algorithm),
}

/// Animate classic sorting algorithms as vertical bars
#[derive(Parser, Debug)]
#[command(name = "sortvis")]
#[command(
    author,
    version,
    after_help = ALGORITHM_HELP,
    // `-h` selects the height, so usage is only available through `help`
    disable_help_flag = true
)]
pub struct Cli {
    /// Number of bars (array length)
    #[arg(
        short = 'w',
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DIMENSION))
    )]
    pub width: u32,

    /// Canvas height; values are drawn from [1, HEIGHT - 1]
    #[arg(
        short = 'h',
        long,
        default_value_t = DEFAULT_HEIGHT,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_HEIGHT)..=i64::from(MAX_DIMENSION))
    )]
    pub height: u32,

    /// Window pixels per logical pixel
    #[arg(short = 's', long, default_value_t = DEFAULT_SCALE, value_parser = parse_scale)]
    pub scale: f64,

    /// Pause after each frame in milliseconds
    #[arg(short = 'd', long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay: u64,

    /// Fixed seed for a reproducible array (defaults to the current time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the animation to an animated GIF
    #[arg(long, value_name = "PATH")]
    pub record: Option<PathBuf>,

    /// Keep every Nth frame in the recording
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_RECORD_STRIDE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub record_stride: u64,

    /// Sort without opening a window
    #[arg(long)]
    pub headless: bool,

    /// Suppress progress output and the final array
    #[arg(short, long)]
    pub quiet: bool,

    /// Algorithm code, or `help`
    #[arg(value_name = "ALGORITHM", default_value = DEFAULT_ALGORITHM_CODE, value_parser = parse_mode)]
    pub mode: Mode,
}

/// Resolved action for a parsed command line
#[derive(Debug)]
pub enum Invocation {
    /// Print usage only
    Help,
    /// Run with the given configuration
    Run(Config),
}

impl Cli {
    /// Check if the command line only asked for usage
    pub const fn wants_help(&self) -> bool {
        matches!(self.mode, Mode::Help)
    }

    /// Turn parsed arguments into an action
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments fail configuration validation
    pub fn resolve(&self) -> Result<Invocation> {
        let Mode::Sort(algorithm) = self.mode else {
            return Ok(Invocation::Help);
        };

        let config = Config::new(self.width, self.height, self.scale, self.delay, algorithm)?
            .with_seed(self.seed)
            .with_recording(self.record.clone(), self.record_stride)?
            .with_headless(self.headless)
            .with_quiet(self.quiet);

        Ok(Invocation::Run(config))
    }
}

/// Full usage text
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// Process exit status for a failed parse
///
/// Version output is reported by clap as an error but is a normal exit;
/// everything else is a usage error.
pub fn parse_error_status(error: &clap::Error) -> u8 {
    u8::from(error.use_stderr())
}

/// Parse the positional argument into a mode
///
/// # Errors
///
/// Returns an error naming the token if it is neither `help` nor a known
/// algorithm code
pub fn parse_mode(token: &str) -> std::result::Result<Mode, String> {
    if token == "help" {
        return Ok(Mode::Help);
    }
    token
        .parse::<Algorithm>()
        .map(Mode::Sort)
        .map_err(|error| match error {
            VisualizerError::InvalidParameter { reason, .. } => {
                format!("{reason}; `help` prints usage")
            }
            other => other.to_string(),
        })
}

/// Parse a scale factor
///
/// # Errors
///
/// Returns an error if the text is not a finite number greater than zero
pub fn parse_scale(text: &str) -> std::result::Result<f64, String> {
    let scale: f64 = text
        .parse()
        .map_err(|e| format!("'{text}' is not a number: {e}"))?;

    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(format!("scale must be finite and greater than zero, got {text}"))
    }
}

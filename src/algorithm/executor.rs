use crate::{
    algorithm::{
        bubble::bubble_sort, insertion::insertion_sort, merge::merge_sort, quick::quick_sort,
        selection::selection_sort, shell::shell_sort,
    },
    io::error::{Result, VisualizerError, invalid_parameter},
    render::frame::FrameRenderer,
};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

/// The closed set of animated sorting algorithms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Selection sort (`ss`)
    Selection,
    /// Insertion sort (`is`)
    Insertion,
    /// Bubble sort (`bs`)
    Bubble,
    /// Merge sort (`ms`)
    Merge,
    /// Quick sort (`qs`)
    Quick,
    /// Shell sort (`shs`)
    Shell,
}

impl Algorithm {
    /// Every algorithm, in command-line listing order
    pub const ALL: [Self; 6] = [
        Self::Selection,
        Self::Insertion,
        Self::Bubble,
        Self::Merge,
        Self::Quick,
        Self::Shell,
    ];

    /// Short code accepted on the command line
    pub const fn code(self) -> &'static str {
        match self {
            Self::Selection => "ss",
            Self::Insertion => "is",
            Self::Bubble => "bs",
            Self::Merge => "ms",
            Self::Quick => "qs",
            Self::Shell => "shs",
        }
    }

    /// Human-readable name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Selection => "selection sort",
            Self::Insertion => "insertion sort",
            Self::Bubble => "bubble sort",
            Self::Merge => "merge sort",
            Self::Quick => "quick sort",
            Self::Shell => "shell sort",
        }
    }

    /// Look up an algorithm by its command-line code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.code() == code)
    }

    /// Sort `bars` in place, rendering through `renderer` at every step
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `renderer`
    pub fn sort<R: FrameRenderer + ?Sized>(
        self,
        bars: &mut [i32],
        renderer: &mut R,
    ) -> Result<()> {
        match self {
            Self::Selection => selection_sort(bars, renderer),
            Self::Insertion => insertion_sort(bars, renderer),
            Self::Bubble => bubble_sort(bars, renderer),
            Self::Merge => merge_sort(bars, renderer),
            Self::Quick => quick_sort(bars, renderer),
            Self::Shell => shell_sort(bars, renderer),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = VisualizerError;

    fn from_str(code: &str) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|algorithm| algorithm.code()).collect();
            invalid_parameter(
                "algorithm",
                &code,
                &format!(
                    "unknown algorithm '{code}' (expected one of {})",
                    known.join("|")
                ),
            )
        })
    }
}

/// Lifecycle of a single sort run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    /// The array has not been touched yet
    NotStarted,
    /// The algorithm owns the array and is rendering steps
    Running,
    /// The algorithm's loops have terminated
    Done,
}

impl RunState {
    const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::Running => "running",
            Self::Done => "done",
        }
    }
}

/// Statistics for a completed run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortReport {
    /// Algorithm that produced the run
    pub algorithm: Algorithm,
    /// Number of frames rendered
    pub steps: u64,
    /// Wall-clock time spent sorting, including rendering and pacing
    pub elapsed: Duration,
}

/// Drives one algorithm over one array exactly once
pub struct SortExecutor {
    algorithm: Algorithm,
    state: RunState,
}

impl SortExecutor {
    /// Create an executor in the `NotStarted` state
    pub const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            state: RunState::NotStarted,
        }
    }

    /// Algorithm this executor runs
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Current lifecycle state
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Run the algorithm to completion, counting rendered steps
    ///
    /// Rendering is synchronous: this returns only once the array is sorted
    /// or a render call fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The executor has already been started
    /// - A render call fails, in which case the run stays `Running`
    pub fn run<R: FrameRenderer + ?Sized>(
        &mut self,
        bars: &mut [i32],
        renderer: &mut R,
    ) -> Result<SortReport> {
        if self.state != RunState::NotStarted {
            return Err(VisualizerError::InvalidState {
                expected: RunState::NotStarted.label(),
                found: self.state.label(),
            });
        }

        self.state = RunState::Running;
        tracing::debug!(algorithm = %self.algorithm, len = bars.len(), "sort started");

        let start_time = Instant::now();
        let mut counter = CountingRenderer {
            inner: renderer,
            calls: 0,
        };
        self.algorithm.sort(bars, &mut counter)?;
        let elapsed = start_time.elapsed();

        self.state = RunState::Done;
        tracing::debug!(
            algorithm = %self.algorithm,
            steps = counter.calls,
            elapsed_ms = elapsed.as_millis() as u64,
            "sort finished"
        );

        Ok(SortReport {
            algorithm: self.algorithm,
            steps: counter.calls,
            elapsed,
        })
    }
}

struct CountingRenderer<'a, R: ?Sized> {
    inner: &'a mut R,
    calls: u64,
}

impl<R: FrameRenderer + ?Sized> FrameRenderer for CountingRenderer<'_, R> {
    fn render(
        &mut self,
        bars: &[i32],
        primary: Option<usize>,
        secondary: Option<usize>,
    ) -> Result<()> {
        self.calls += 1;
        self.inner.render(bars, primary, secondary)
    }
}

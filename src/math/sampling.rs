use crate::io::error::{Result, invalid_parameter};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::num::NonZeroU32;
use std::time::{SystemTime, UNIX_EPOCH};

/// Draw a value uniformly from `[0, span)` without modulo bias
///
/// 32-bit words at or above the largest multiple of `span` that fits in the
/// generator's output range are rejected and redrawn. When `span` divides
/// `2^32` exactly nothing is rejected.
pub fn sample_below<R: RngCore + ?Sized>(rng: &mut R, span: NonZeroU32) -> u32 {
    let span = u64::from(span.get());
    let zone = ((1_u64 << 32) / span) * span;

    loop {
        let draw = u64::from(rng.next_u32());
        if draw < zone {
            return (draw % span) as u32;
        }
    }
}

/// Seed derived from the current wall-clock time
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}

/// Produces the unsorted bar heights a run starts from
pub struct RandomArrayGenerator<R> {
    rng: R,
}

impl RandomArrayGenerator<StdRng> {
    /// Deterministic generator for reproducible runs
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded once from the current time
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }
}

impl<R: RngCore> RandomArrayGenerator<R> {
    /// Wrap an existing entropy source
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw `width` values independently and uniformly from `[1, height - 1]`
    ///
    /// # Errors
    ///
    /// Returns an error if `height` is below 2 or above `i32::MAX`
    pub fn generate(&mut self, width: u32, height: u32) -> Result<Vec<i32>> {
        let span = height
            .checked_sub(1)
            .and_then(NonZeroU32::new)
            .filter(|_| i32::try_from(height).is_ok())
            .ok_or_else(|| {
                invalid_parameter(
                    "height",
                    &height,
                    &"must be between 2 and i32::MAX so values fit in [1, height - 1]",
                )
            })?;

        Ok((0..width)
            .map(|_| sample_below(&mut self.rng, span) as i32 + 1)
            .collect())
    }
}

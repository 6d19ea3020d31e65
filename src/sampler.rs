//! The trial predicate and the per-worker sampling loop.
//!
//! Every harness funnels its trials through [`is_inside`], so the five
//! strategies only differ in how they schedule calls to [`sample`].

use rand::Rng;
use serde::Serialize;
use std::iter::Sum;

/// Largest squared distance whose square root still rounds to `1.0`.
///
/// `sqrt(1 + EPSILON)` rounds down to exactly `1.0` and `sqrt(1 + 2 * EPSILON)`
/// does not, so comparing the squared distance against this bound classifies
/// every point the same way `sqrt(x * x + y * y) <= 1.0` would.
const CIRCLE_BOUND: f64 = 1.0 + f64::EPSILON;

/// Trials sampled between suspension points in [`sample_async`].
pub const YIELD_EVERY: u64 = 1 << 16;

/// Whether `(x, y)` lies inside (or on) the unit quarter-circle.
#[inline(always)]
pub fn is_inside(x: f64, y: f64) -> bool {
    x * x + y * y <= CIRCLE_BOUND
}

/// Draws one point in `[0, 1) x [0, 1)` and classifies it.
#[inline(always)]
pub fn trial<R: Rng + ?Sized>(rng: &mut R) -> bool {
    let x: f64 = rng.gen();
    let y: f64 = rng.gen();
    is_inside(x, y)
}

/// Counts produced by one worker before aggregation.
///
/// Invariant: `in_circle <= in_square`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PartialResult {
    pub in_circle: u64,
    pub in_square: u64,
}

impl PartialResult {
    pub fn new(in_circle: u64, in_square: u64) -> Self {
        debug_assert!(in_circle <= in_square);
        Self {
            in_circle,
            in_square,
        }
    }

    #[inline]
    pub fn merge(&mut self, other: PartialResult) {
        self.in_circle += other.in_circle;
        self.in_square += other.in_square;
    }

    /// `4 * in_circle / in_square`. Empty results give NaN.
    pub fn estimate(&self) -> f64 {
        4.0 * self.in_circle as f64 / self.in_square as f64
    }
}

impl Sum for PartialResult {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(PartialResult::default(), |mut acc, part| {
            acc.merge(part);
            acc
        })
    }
}

/// Runs `trials` trials against `rng` with local counters only.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, trials: u64) -> PartialResult {
    let mut in_circle = 0u64;
    let mut in_square = 0u64;

    for _ in 0..trials {
        if trial(rng) {
            in_circle += 1;
        }
        in_square += 1;
    }

    PartialResult {
        in_circle,
        in_square,
    }
}

/// Suspension-capable variant of [`sample`].
///
/// Yields to the executor every [`YIELD_EVERY`] trials. Draws the same
/// sequence from `rng` as [`sample`], so both return identical counts.
pub async fn sample_async<R: Rng + ?Sized>(rng: &mut R, trials: u64) -> PartialResult {
    let mut result = PartialResult::default();
    let mut remaining = trials;

    while remaining > 0 {
        let chunk = remaining.min(YIELD_EVERY);
        result.merge(sample(rng, chunk));
        remaining -= chunk;
        tokio::task::yield_now().await;
    }

    result
}

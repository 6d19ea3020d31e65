//! Run-scoped shared counters.
//!
//! Two disciplines combine worker counts. Atomic accumulation adds into
//! [`AggregateState`] while workers run. Collect-then-reduce leaves the
//! state untouched until every worker has been joined, then calls
//! [`AggregateState::reduce`] once from the harness thread. A harness uses
//! exactly one of the two.

use crate::sampler::PartialResult;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct AggregateState {
    point_in_circle: AtomicU64,
    point_in_square: AtomicU64,
}

impl AggregateState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&self) {
        self.point_in_circle.store(0, Ordering::Relaxed);
        self.point_in_square.store(0, Ordering::Relaxed);
    }

    /// Records a single trial.
    #[inline(always)]
    pub fn record_trial(&self, inside: bool) {
        if inside {
            self.point_in_circle.fetch_add(1, Ordering::Relaxed);
        }
        self.point_in_square.fetch_add(1, Ordering::Relaxed);
    }

    /// Adds one worker's local totals.
    #[inline]
    pub fn add(&self, part: PartialResult) {
        self.point_in_circle.fetch_add(part.in_circle, Ordering::Relaxed);
        self.point_in_square.fetch_add(part.in_square, Ordering::Relaxed);
    }

    /// Serial post-join reduction of collected worker results.
    pub fn reduce<I>(&self, parts: I)
    where
        I: IntoIterator<Item = PartialResult>,
    {
        self.add(parts.into_iter().sum());
    }

    /// Current totals. Only meaningful once every worker has been joined;
    /// the join supplies the happens-before edge for the relaxed adds.
    pub fn snapshot(&self) -> PartialResult {
        PartialResult {
            in_circle: self.point_in_circle.load(Ordering::Relaxed),
            in_square: self.point_in_square.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_reset_zeroes() {
        let state = AggregateState::new();
        state.add(PartialResult::new(3, 5));
        state.reset();
        assert_eq!(state.snapshot(), PartialResult::default());
    }

    #[test]
    fn test_record_trial() {
        let state = AggregateState::new();
        state.record_trial(true);
        state.record_trial(false);
        state.record_trial(true);
        assert_eq!(state.snapshot(), PartialResult::new(2, 3));
    }

    #[test]
    fn test_reduce() {
        let state = AggregateState::new();
        state.reduce(vec![PartialResult::new(1, 2), PartialResult::new(3, 4)]);
        assert_eq!(state.snapshot(), PartialResult::new(4, 6));
    }

    #[test]
    fn test_no_lost_updates() {
        let state = Arc::new(AggregateState::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let state = Arc::clone(&state);
                thread::spawn(move || {
                    for i in 0..10_000 {
                        state.record_trial(i % 2 == 0);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(state.snapshot(), PartialResult::new(80_000, 160_000));
    }
}

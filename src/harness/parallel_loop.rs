//! Rayon parallel iterator over every trial.
//!
//! Rayon decides how the range is split and scheduled. Each split pulls its
//! own generator from the factory, and each trial does its own atomic
//! increments, so contention on the shared counters is the cost being shown.

use crate::aggregate::AggregateState;
use crate::rng::StreamFactory;
use crate::sampler::trial;
use rayon::prelude::*;

/// Samples exactly `total` trials; no partition remainder is lost.
pub fn run(total: u64, streams: &StreamFactory, state: &AggregateState) {
    (0..total)
        .into_par_iter()
        .for_each_init(|| streams.next_stream(), |rng, _| state.record_trial(trial(rng)));
}

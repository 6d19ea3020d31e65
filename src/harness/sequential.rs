//! Single loop on the calling thread.

use crate::aggregate::AggregateState;
use crate::rng::StreamFactory;
use crate::sampler::sample;

/// Samples exactly `total` trials from worker stream 0.
pub fn run(total: u64, streams: &StreamFactory, state: &AggregateState) {
    let mut rng = streams.for_worker(0);
    state.add(sample(&mut rng, total));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_runs_repeat() {
        let first = AggregateState::new();
        let second = AggregateState::new();

        run(50_000, &StreamFactory::new(11), &first);
        run(50_000, &StreamFactory::new(11), &second);

        assert_eq!(first.snapshot(), second.snapshot());
        assert_eq!(first.snapshot().in_square, 50_000);
    }

    #[test]
    fn test_different_seeds_differ() {
        let first = AggregateState::new();
        let second = AggregateState::new();

        run(50_000, &StreamFactory::new(1), &first);
        run(50_000, &StreamFactory::new(2), &second);

        assert_ne!(first.snapshot(), second.snapshot());
    }
}

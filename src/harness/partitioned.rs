//! Fixed pool of scoped threads, one per batch.
//!
//! Workers count into locals and publish with one atomic add each, instead
//! of one per trial as in [`super::parallel_loop`].

use super::{Strategy, WorkerSpan};
use crate::aggregate::AggregateState;
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::partition::partition;
use crate::rng::StreamFactory;
use crate::sampler::sample;

pub fn run(config: &RunConfig, streams: &StreamFactory, state: &AggregateState) -> Result<Vec<WorkerSpan>> {
    let batches = partition(config.total, config.workers);

    let joined = crossbeam::scope(|scope| -> Result<Vec<_>> {
        let mut handles = Vec::with_capacity(batches.len());
        for batch in batches.iter().copied() {
            let mut rng = streams.for_worker(batch.worker);
            let handle = scope
                .builder()
                .name(format!("partitioned-{}", batch.worker))
                .spawn(move |_| {
                    let span = WorkerSpan::begin(batch.worker);
                    state.add(sample(&mut rng, batch.trials));
                    span.finish()
                })?;
            handles.push(handle);
        }

        Ok(handles.into_iter().map(|handle| handle.join()).collect())
    })
    .map_err(|_| Error::ScopePanicked {
        strategy: Strategy::Partitioned,
    })??;

    joined
        .into_iter()
        .enumerate()
        .map(|(worker, span)| {
            span.map_err(|_| Error::WorkerPanicked {
                strategy: Strategy::Partitioned,
                worker,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_span_per_worker() {
        let config = RunConfig::new(40_000, 4, 8).unwrap();
        let state = AggregateState::new();

        let spans = run(&config, &StreamFactory::new(config.seed), &state).unwrap();

        assert_eq!(spans.iter().map(|s| s.worker).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(state.snapshot().in_square, 40_000);
    }

    #[test]
    fn test_remainder_dropped() {
        let config = RunConfig::new(10_003, 4, 8).unwrap();
        let state = AggregateState::new();

        run(&config, &StreamFactory::new(config.seed), &state).unwrap();

        assert_eq!(state.snapshot().in_square, 10_000);
    }
}

//! Explicitly spawned worker threads that return their counts.
//!
//! Workers never touch the shared counters. The harness joins every handle
//! and only then reduces the collected results on its own thread.

use super::{Strategy, WorkerSpan};
use crate::aggregate::AggregateState;
use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::partition::partition;
use crate::rng::StreamFactory;
use crate::sampler::sample;
use std::thread;

pub fn run(config: &RunConfig, streams: &StreamFactory, state: &AggregateState) -> Result<Vec<WorkerSpan>> {
    let mut handles = vec![];

    for batch in partition(config.total, config.workers) {
        let mut rng = streams.for_worker(batch.worker);

        let handle = thread::Builder::new()
            .name(format!("worker-task-{}", batch.worker))
            .spawn(move || {
                let span = WorkerSpan::begin(batch.worker);
                let part = sample(&mut rng, batch.trials);
                (part, span.finish())
            })?;

        handles.push(handle);
    }

    let mut parts = Vec::with_capacity(handles.len());
    let mut spans = Vec::with_capacity(handles.len());
    for (worker, handle) in handles.into_iter().enumerate() {
        let (part, span) = handle.join().map_err(|_| Error::WorkerPanicked {
            strategy: Strategy::WorkerTasks,
            worker,
        })?;
        parts.push(part);
        spans.push(span);
    }

    state.reduce(parts);
    Ok(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduces_after_join() {
        let config = RunConfig::new(30_000, 3, 21).unwrap();
        let state = AggregateState::new();

        let spans = run(&config, &StreamFactory::new(config.seed), &state).unwrap();

        assert_eq!(spans.len(), 3);
        assert_eq!(state.snapshot().in_square, 30_000);
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = RunConfig::new(20_000, 4, 77).unwrap();
        let first = AggregateState::new();
        let second = AggregateState::new();

        run(&config, &StreamFactory::new(config.seed), &first).unwrap();
        run(&config, &StreamFactory::new(config.seed), &second).unwrap();

        assert_eq!(first.snapshot(), second.snapshot());
    }
}

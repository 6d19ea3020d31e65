//! Async workers awaited one at a time on a current-thread runtime.
//!
//! The sampling routine suspends every [`crate::sampler::YIELD_EVERY`]
//! trials, but each worker is awaited to completion before the next one is
//! created. With nothing else queued on the executor the suspensions resume
//! immediately, so the workers run strictly in sequence on one thread. This
//! strategy is the non-concurrent control: suspension points alone do not
//! spread work across cores.

use super::WorkerSpan;
use crate::aggregate::AggregateState;
use crate::config::RunConfig;
use crate::error::Result;
use crate::partition::{partition, TrialBatch};
use crate::rng::{StreamFactory, WorkerRng};
use crate::sampler::{sample_async, PartialResult};
use tokio::runtime;

pub fn run(config: &RunConfig, streams: &StreamFactory, state: &AggregateState) -> Result<Vec<WorkerSpan>> {
    let runtime = runtime::Builder::new_current_thread().build()?;
    Ok(runtime.block_on(run_async(config, streams, state)))
}

/// Same as [`run`], for callers already inside an async context.
pub async fn run_async(config: &RunConfig, streams: &StreamFactory, state: &AggregateState) -> Vec<WorkerSpan> {
    let batches = partition(config.total, config.workers);
    let mut parts = Vec::with_capacity(batches.len());
    let mut spans = Vec::with_capacity(batches.len());

    for batch in batches {
        let (part, span) = worker(batch, streams.for_worker(batch.worker)).await;
        parts.push(part);
        spans.push(span);
    }

    state.reduce(parts);
    spans
}

async fn worker(batch: TrialBatch, mut rng: WorkerRng) -> (PartialResult, WorkerSpan) {
    let span = WorkerSpan::begin(batch.worker);
    let part = sample_async(&mut rng, batch.trials).await;
    (part, span.finish())
}

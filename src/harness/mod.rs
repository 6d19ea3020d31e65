//! The five execution strategies and the driver that times them.
//!
//! Each run walks INIT (reset the shared counters) → RUNNING (strategy
//! executes to completion, every worker joined) → DONE (counters read once,
//! estimate computed).

pub mod cooperative;
pub mod parallel_loop;
pub mod partitioned;
pub mod sequential;
pub mod worker_tasks;

use crate::aggregate::AggregateState;
use crate::config::RunConfig;
use crate::error::Result;
use crate::rng::StreamFactory;
use crate::sampler::PartialResult;
use crate::timer::Stopwatch;
use clap::ValueEnum;
use log::{debug, trace};
use serde::{Serialize, Serializer};
use std::fmt;
use std::thread::{self, ThreadId};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// One loop on the calling thread
    Sequential,
    /// Rayon parallel iterator over every trial, atomic add per trial
    ParallelLoop,
    /// One scoped thread per batch, one atomic add per worker
    Partitioned,
    /// Spawned worker threads returning results, reduced after join
    WorkerTasks,
    /// Async workers awaited one after another on a single thread
    Cooperative,
}

impl Strategy {
    /// Fixed run order.
    pub const ALL: [Strategy; 5] = [
        Strategy::Sequential,
        Strategy::ParallelLoop,
        Strategy::Partitioned,
        Strategy::WorkerTasks,
        Strategy::Cooperative,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Sequential => "Sequential",
            Strategy::ParallelLoop => "Parallel loop",
            Strategy::Partitioned => "Partitioned",
            Strategy::WorkerTasks => "Worker tasks",
            Strategy::Cooperative => "Cooperative",
        }
    }

    /// Whether this strategy splits trials with [`crate::partition`] and so
    /// drops the remainder.
    pub fn is_partitioned(self) -> bool {
        matches!(
            self,
            Strategy::Partitioned | Strategy::WorkerTasks | Strategy::Cooperative
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => f.write_str(self.label()),
        }
    }
}

/// Wall-clock interval one worker spent sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerSpan {
    pub worker: usize,
    pub thread: ThreadId,
    pub started: Instant,
    pub finished: Instant,
}

impl WorkerSpan {
    pub fn begin(worker: usize) -> OpenSpan {
        trace!("worker {worker} started");
        OpenSpan {
            worker,
            started: Instant::now(),
        }
    }

    pub fn overlaps(&self, other: &WorkerSpan) -> bool {
        self.started < other.finished && other.started < self.finished
    }
}

/// A span whose worker is still running.
#[derive(Debug)]
pub struct OpenSpan {
    worker: usize,
    started: Instant,
}

impl OpenSpan {
    pub fn finish(self) -> WorkerSpan {
        let finished = Instant::now();
        trace!(
            "worker {} finished in {:?}",
            self.worker,
            finished.duration_since(self.started)
        );
        WorkerSpan {
            worker: self.worker,
            thread: thread::current().id(),
            started: self.started,
            finished,
        }
    }
}

/// Outcome of one strategy run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub strategy: Strategy,
    pub estimate: f64,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    #[serde(flatten)]
    pub counts: PartialResult,
    /// Per-worker timeline; empty for strategies without explicit workers.
    #[serde(skip)]
    pub spans: Vec<WorkerSpan>,
}

impl Report {
    /// Points actually sampled.
    pub fn points(&self) -> u64 {
        self.counts.in_square
    }
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Runs `strategy` to completion against a freshly reset `state`.
pub fn run(strategy: Strategy, config: &RunConfig, state: &AggregateState) -> Result<Report> {
    debug!("{strategy}: init");
    state.reset();
    let streams = StreamFactory::new(config.seed);

    let mut watch = Stopwatch::start();
    debug!(
        "{strategy}: running {} trials over {} workers",
        config.total, config.workers
    );
    let spans = match strategy {
        Strategy::Sequential => {
            sequential::run(config.total, &streams, state);
            Vec::new()
        }
        Strategy::ParallelLoop => {
            parallel_loop::run(config.total, &streams, state);
            Vec::new()
        }
        Strategy::Partitioned => partitioned::run(config, &streams, state)?,
        Strategy::WorkerTasks => worker_tasks::run(config, &streams, state)?,
        Strategy::Cooperative => cooperative::run(config, &streams, state)?,
    };
    let counts = state.snapshot();
    let elapsed = watch.stop();
    debug!("{strategy}: done in {elapsed:?}");

    Ok(Report {
        strategy,
        estimate: counts.estimate(),
        elapsed,
        counts,
        spans,
    })
}

//! Error types shared by every harness.

use crate::harness::Strategy;
use thiserror::Error;

/// Errors that end a run. Nothing here is retried.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{strategy} worker {worker} panicked")]
    WorkerPanicked { strategy: Strategy, worker: usize },

    #[error("{strategy} worker scope panicked")]
    ScopePanicked { strategy: Strategy },

    #[error("failed to start worker or runtime: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

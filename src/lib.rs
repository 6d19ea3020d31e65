//! Monte Carlo estimation of Pi under five concurrency strategies.
//!
//! Every strategy runs the same trial (draw a point in the unit square,
//! check whether it falls in the quarter circle) and differs only in how the
//! trials are spread over workers and how the counts are combined:
//!
//! - **sequential**: one loop, no synchronisation
//! - **parallel-loop**: rayon work stealing, an atomic add per trial
//! - **partitioned**: one scoped thread per batch, an atomic add per worker
//! - **worker-tasks**: spawned threads return counts, reduced after join
//! - **cooperative**: async workers awaited in turn, no real concurrency

pub mod aggregate;
pub mod config;
pub mod error;
pub mod harness;
pub mod output;
pub mod partition;
pub mod rng;
pub mod sampler;
pub mod timer;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use harness::{Report, Strategy};

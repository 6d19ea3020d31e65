//! Independent random streams for concurrent workers.
//!
//! All streams of a run come from one xoshiro256++ generator seeded with the
//! run seed. Worker `i` gets that generator advanced by `i` jumps of 2^128
//! steps, so no two workers ever draw overlapping sequences and each worker's
//! output depends only on the run seed and its index.

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::sync::{Mutex, PoisonError};

pub type WorkerRng = Xoshiro256PlusPlus;

/// Hands out per-worker generators derived from one run seed.
#[derive(Debug)]
pub struct StreamFactory {
    seed: u64,
    cursor: Mutex<WorkerRng>,
}

impl StreamFactory {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            cursor: Mutex::new(Xoshiro256PlusPlus::seed_from_u64(seed)),
        }
    }

    /// Generator for a fixed worker index. Same seed and index, same stream.
    pub fn for_worker(&self, worker: usize) -> WorkerRng {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.seed);
        for _ in 0..worker {
            rng.jump();
        }
        rng
    }

    /// Next unused stream, in worker-index order. Used where the scheduler,
    /// not the caller, decides how many workers exist.
    pub fn next_stream(&self) -> WorkerRng {
        let mut cursor = self.cursor.lock().unwrap_or_else(PoisonError::into_inner);
        let rng = cursor.clone();
        cursor.jump();
        rng
    }
}

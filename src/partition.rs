//! Splits a trial budget into per-worker batches.
//!
//! Every worker receives `total / workers` trials. The remainder
//! `total % workers` is dropped, so partitioned runs sample
//! `workers * (total / workers)` points, which is less than `total`
//! whenever the division is uneven.

/// Trials assigned to exactly one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialBatch {
    pub worker: usize,
    pub trials: u64,
}

/// `workers` equal batches. `workers` must be non-zero.
pub fn partition(total: u64, workers: usize) -> Vec<TrialBatch> {
    debug_assert!(workers > 0, "partition needs at least one worker");
    let per_worker = total / workers as u64;

    (0..workers)
        .map(|worker| TrialBatch {
            worker,
            trials: per_worker,
        })
        .collect()
}

/// Points a partitioned run actually samples.
pub fn sampled_total(total: u64, workers: usize) -> u64 {
    (total / workers as u64) * workers as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_even_split() {
        let batches = partition(600_000_000, 8);
        assert_eq!(batches.len(), 8);
        assert!(batches.iter().all(|b| b.trials == 75_000_000));
        assert_eq!(sampled_total(600_000_000, 8), 600_000_000);
    }

    #[test]
    fn test_remainder_dropped() {
        let batches = partition(10, 3);
        assert_eq!(batches.iter().map(|b| b.trials).collect::<Vec<_>>(), vec![3, 3, 3]);
        assert_eq!(sampled_total(10, 3), 9);
    }

    #[test]
    fn test_more_workers_than_trials() {
        let batches = partition(5, 8);
        assert_eq!(batches.len(), 8);
        assert!(batches.iter().all(|b| b.trials == 0));
    }

    #[test]
    fn test_worker_indices() {
        let workers: Vec<usize> = partition(100, 4).iter().map(|b| b.worker).collect();
        assert_eq!(workers, vec![0, 1, 2, 3]);
    }

    proptest! {
        #[test]
        fn prop_batches_sum_to_sampled_total(total in 0u64..10_000_000, workers in 1usize..256) {
            let batches = partition(total, workers);
            prop_assert_eq!(batches.len(), workers);
            let sum: u64 = batches.iter().map(|b| b.trials).sum();
            prop_assert_eq!(sum, sampled_total(total, workers));
            prop_assert!(total - sum < workers as u64);
        }
    }
}

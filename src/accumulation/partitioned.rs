use std::num::NonZeroUsize;

use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder, prelude::*};

use super::{Accumulator, Sums, accumulator::check_lengths, shard_range};
use crate::error::Result;

/// Splits the samples in one contiguous chunk per worker, reduces each chunk into a
/// local partial tuple without any shared mutation and merges the partials sequentially.
#[derive(Debug)]
pub struct PartitionedAccumulator {
    pool: ThreadPool,
}

impl PartitionedAccumulator {
    /// Creates a new `PartitionedAccumulator`.
    ///
    /// # Arguments
    /// * `workers` - The amount of threads in the worker pool, also the maximum amount of chunks.
    ///
    /// # Returns
    /// A new `PartitionedAccumulator` or a `ThreadPool` error if the pool couldn't be built.
    pub fn new(workers: NonZeroUsize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|i| format!("linreg-partitioned-{i}"))
            .build()?;

        Ok(Self { pool })
    }

    /// Fan-out: one partial tuple per chunk, collected in chunk order.
    fn partials(&self, xs: &[f64], ys: &[f64]) -> Vec<Sums> {
        let total = xs.len();
        let chunks = self.workers().min(total).max(1);

        self.pool.install(|| {
            (0..chunks)
                .into_par_iter()
                .map(|worker_id| {
                    let range = shard_range(total, worker_id, chunks);
                    Sums::over(&xs[range.clone()], &ys[range])
                })
                .collect()
        })
    }
}

impl Accumulator for PartitionedAccumulator {
    fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn accumulate(&self, xs: &[f64], ys: &[f64]) -> Result<Sums> {
        check_lengths(xs, ys)?;

        let partials = self.partials(xs, ys);
        for (worker_id, partial) in partials.iter().enumerate() {
            debug!(worker_id = worker_id, samples = partial.samples; "partial tuple ready");
        }

        // Fan-in.
        Ok(partials.into_iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitErr;

    fn create_test_accumulator(workers: usize) -> PartitionedAccumulator {
        PartitionedAccumulator::new(NonZeroUsize::new(workers).unwrap()).unwrap()
    }

    #[test]
    fn test_one_partial_per_worker() {
        let acc = create_test_accumulator(4);
        let xs = [1.0; 10];
        let ys = [1.0; 10];

        let partials = acc.partials(&xs, &ys);
        let sizes: Vec<_> = partials.iter().map(|p| p.samples).collect();
        assert_eq!(sizes, [3, 3, 2, 2]);
    }

    #[test]
    fn test_fewer_samples_than_workers() {
        let acc = create_test_accumulator(8);
        let partials = acc.partials(&[1., 2., 3.], &[4., 5., 6.]);
        assert_eq!(partials.len(), 3);
        assert!(partials.iter().all(|p| p.samples == 1));
    }

    #[test]
    fn test_matches_sequential_reduction() {
        let acc = create_test_accumulator(3);
        let xs: Vec<f64> = (0..101).map(f64::from).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 0.5 * x + 4.).collect();

        let sums = acc.accumulate(&xs, &ys).unwrap();
        let expected = Sums::over(&xs, &ys);
        assert_eq!(sums.samples, expected.samples);
        assert_eq!(sums.sum_x, expected.sum_x);
        assert_eq!(sums.sum_x_square, expected.sum_x_square);
        assert!((sums.sum_y - expected.sum_y).abs() < 1e-9);
        assert!((sums.sum_xy - expected.sum_xy).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input() {
        let acc = create_test_accumulator(2);
        assert_eq!(acc.accumulate(&[], &[]).unwrap(), Sums::default());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let acc = create_test_accumulator(2);
        let err = acc.accumulate(&[1.], &[1., 2., 3.]).unwrap_err();
        assert!(matches!(err, FitErr::InputLengthMismatch { xs: 1, ys: 3 }));
    }
}

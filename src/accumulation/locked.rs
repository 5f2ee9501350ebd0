use std::num::NonZeroUsize;

use log::debug;
use parking_lot::Mutex;
use rayon::{ThreadPool, ThreadPoolBuilder};

use super::{Accumulator, Sums, accumulator::check_lengths};
use crate::error::Result;

/// Schedules one unit of work per sample and serializes every contribution
/// through a single lock guarding all four sums.
///
/// Only the dispatch is parallel, the arithmetic on the shared sums is not.
#[derive(Debug)]
pub struct LockedAccumulator {
    pool: ThreadPool,
}

impl LockedAccumulator {
    /// Creates a new `LockedAccumulator`.
    ///
    /// # Arguments
    /// * `workers` - The amount of threads in the worker pool.
    ///
    /// # Returns
    /// A new `LockedAccumulator` or a `ThreadPool` error if the pool couldn't be built.
    pub fn new(workers: NonZeroUsize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers.get())
            .thread_name(|i| format!("linreg-locked-{i}"))
            .build()?;

        Ok(Self { pool })
    }
}

impl Accumulator for LockedAccumulator {
    fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    fn accumulate(&self, xs: &[f64], ys: &[f64]) -> Result<Sums> {
        check_lengths(xs, ys)?;

        let sums = Mutex::new(Sums::default());

        // The scope only returns once every spawned unit has completed.
        self.pool.scope(|s| {
            for (&x, &y) in xs.iter().zip(ys) {
                let sums = &sums;
                s.spawn(move |_| {
                    let contribution = Sums::from_sample(x, y);
                    *sums.lock() += contribution;
                });
            }
        });

        let sums = sums.into_inner();
        debug!(samples = sums.samples; "locked accumulation finished");
        Ok(sums)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitErr;

    fn create_test_accumulator(workers: usize) -> LockedAccumulator {
        LockedAccumulator::new(NonZeroUsize::new(workers).unwrap()).unwrap()
    }

    #[test]
    fn test_every_sample_counted_once() {
        const SAMPLES: usize = 1000;

        let acc = create_test_accumulator(4);
        let xs = vec![1.0; SAMPLES];
        let ys = vec![2.0; SAMPLES];

        let sums = acc.accumulate(&xs, &ys).unwrap();
        assert_eq!(sums.samples, SAMPLES);
        assert_eq!(sums.sum_x, SAMPLES as f64);
        assert_eq!(sums.sum_y, 2. * SAMPLES as f64);
        assert_eq!(sums.sum_xy, 2. * SAMPLES as f64);
        assert_eq!(sums.sum_x_square, SAMPLES as f64);
    }

    #[test]
    fn test_matches_sequential_reduction() {
        let acc = create_test_accumulator(3);
        let xs: Vec<f64> = (0..64).map(f64::from).collect();
        let ys: Vec<f64> = xs.iter().map(|x| 3. * x - 1.).collect();

        // Integer valued inputs keep every partial sum exact.
        assert_eq!(acc.accumulate(&xs, &ys).unwrap(), Sums::over(&xs, &ys));
    }

    #[test]
    fn test_empty_input() {
        let acc = create_test_accumulator(2);
        assert_eq!(acc.accumulate(&[], &[]).unwrap(), Sums::default());
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let acc = create_test_accumulator(2);
        let err = acc.accumulate(&[1., 2.], &[1.]).unwrap_err();
        assert!(matches!(err, FitErr::InputLengthMismatch { xs: 2, ys: 1 }));
    }

    #[test]
    fn test_pool_size() {
        assert_eq!(create_test_accumulator(3).workers(), 3);
    }
}

mod accumulator;
mod locked;
mod partitioned;
mod shard;
mod sums;

pub use accumulator::Accumulator;
pub use locked::LockedAccumulator;
pub use partitioned::PartitionedAccumulator;
pub use shard::shard_range;
pub use sums::Sums;

use crate::{config::AccumulatorConfig, error::Result};

/// Builds the accumulator described by `config`.
///
/// # Arguments
/// * `config` - The accumulation strategy and its worker count.
///
/// # Returns
/// A boxed `Accumulator` or a `ThreadPool` error if its worker pool couldn't be built.
pub fn build(config: AccumulatorConfig) -> Result<Box<dyn Accumulator + Send + Sync>> {
    let accumulator: Box<dyn Accumulator + Send + Sync> = match config {
        AccumulatorConfig::Locked { workers } => Box::new(LockedAccumulator::new(workers)?),
        AccumulatorConfig::Partitioned { workers } => {
            Box::new(PartitionedAccumulator::new(workers)?)
        }
    };

    Ok(accumulator)
}

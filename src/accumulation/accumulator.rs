use super::Sums;
use crate::error::{FitErr, Result};

/// An `Accumulator` reduces a dataset into its least-squares `Sums` using concurrent workers.
pub trait Accumulator {
    /// Returns the number of worker threads this accumulator dispatches to.
    fn workers(&self) -> usize;

    /// Should add every `(xs[i], ys[i])` contribution exactly once, in any order.
    ///
    /// # Arguments
    /// * `xs` - The feature values.
    /// * `ys` - The target values.
    ///
    /// # Returns
    /// The accumulated sums or an `InputLengthMismatch` error if the slices differ in length.
    fn accumulate(&self, xs: &[f64], ys: &[f64]) -> Result<Sums>;
}

impl<A: Accumulator + ?Sized> Accumulator for Box<A> {
    fn workers(&self) -> usize {
        (**self).workers()
    }

    fn accumulate(&self, xs: &[f64], ys: &[f64]) -> Result<Sums> {
        (**self).accumulate(xs, ys)
    }
}

/// Fails with `InputLengthMismatch` unless both slices have the same length.
pub(super) fn check_lengths(xs: &[f64], ys: &[f64]) -> Result<()> {
    if xs.len() != ys.len() {
        return Err(FitErr::InputLengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }

    Ok(())
}

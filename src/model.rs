use log::info;

use crate::{
    accumulation::{self, Accumulator},
    config::AccumulatorConfig,
    error::Result,
};

/// A single-variable linear model `y = slope * x + intercept` fitted by ordinary least squares.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LinearRegression {
    slope: f64,
    intercept: f64,
}

impl LinearRegression {
    /// Creates a model from already known parameters.
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Fits a model using the default accumulation strategy.
    ///
    /// # Arguments
    /// * `xs` - The feature values.
    /// * `ys` - The target values, same length as `xs`.
    ///
    /// # Returns
    /// The fitted model, an `InputLengthMismatch` error if the lengths differ or
    /// a `ThreadPool` error if the workers couldn't be started.
    pub fn fit(xs: &[f64], ys: &[f64]) -> Result<Self> {
        let accumulator = accumulation::build(AccumulatorConfig::default())?;
        Self::fit_with(&accumulator, xs, ys)
    }

    /// Fits a model reducing the dataset with the given accumulator.
    ///
    /// Degenerate inputs (every `x` equal, or no samples) aren't rejected,
    /// they produce non-finite parameters.
    ///
    /// # Arguments
    /// * `accumulator` - The strategy used to compute the aggregate sums.
    /// * `xs` - The feature values.
    /// * `ys` - The target values, same length as `xs`.
    ///
    /// # Returns
    /// The fitted model or an `InputLengthMismatch` error if the lengths differ.
    pub fn fit_with<A>(accumulator: &A, xs: &[f64], ys: &[f64]) -> Result<Self>
    where
        A: Accumulator + ?Sized,
    {
        info!(samples = xs.len(), workers = accumulator.workers(); "fitting linear regression");

        let sums = accumulator.accumulate(xs, ys)?;
        let (slope, intercept) = sums.solve();

        info!("fitted slope={slope} intercept={intercept}");
        Ok(Self { slope, intercept })
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    #[inline]
    pub fn predict_one(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Predicts every input, preserving order and length.
    pub fn predict(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.predict_one(x)).collect()
    }
}

use std::{error::Error, fmt};

use rayon::ThreadPoolBuildError;

/// The result type for model fitting.
pub type Result<T> = std::result::Result<T, FitErr>;

/// Failures while fitting a `LinearRegression`.
#[derive(Debug)]
pub enum FitErr {
    /// The feature and target slices don't have the same length.
    InputLengthMismatch { xs: usize, ys: usize },
    /// The accumulator's worker pool couldn't be created.
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for FitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitErr::InputLengthMismatch { xs, ys } => {
                write!(f, "input length mismatch: got {xs} x values and {ys} y values")
            }
            FitErr::ThreadPool(e) => write!(f, "failed to build worker pool: {e}"),
        }
    }
}

impl Error for FitErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FitErr::ThreadPool(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ThreadPoolBuildError> for FitErr {
    fn from(value: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(value)
    }
}

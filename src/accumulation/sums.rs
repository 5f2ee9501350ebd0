use std::{
    iter::Sum,
    ops::{Add, AddAssign},
};

/// The aggregate sums needed by the closed-form least-squares solution.
///
/// A `Sums` may cover the whole dataset or only a subset of it (a partial tuple),
/// partial tuples are merged by addition.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sums {
    pub samples: usize,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xy: f64,
    pub sum_x_square: f64,
}

impl Sums {
    /// Creates the contribution of a single sample.
    ///
    /// # Arguments
    /// * `x` - The feature value.
    /// * `y` - The target value.
    ///
    /// # Returns
    /// A `Sums` covering exactly one sample.
    #[inline]
    pub fn from_sample(x: f64, y: f64) -> Self {
        Self {
            samples: 1,
            sum_x: x,
            sum_y: y,
            sum_xy: x * y,
            sum_x_square: x * x,
        }
    }

    /// Sequentially reduces a pair of slices into a partial tuple.
    ///
    /// Extra elements of the longer slice are ignored, callers are expected
    /// to have validated the lengths.
    pub fn over(xs: &[f64], ys: &[f64]) -> Self {
        xs.iter()
            .zip(ys)
            .fold(Self::default(), |acc, (&x, &y)| acc + Self::from_sample(x, y))
    }

    /// Derives `(slope, intercept)` from the accumulated sums.
    ///
    /// A zero denominator (constant `x`, or no samples at all) is not guarded
    /// against, the result is then non-finite.
    pub fn solve(&self) -> (f64, f64) {
        let n = self.samples as f64;

        let slope = (n * self.sum_xy - self.sum_x * self.sum_y)
            / (n * self.sum_x_square - self.sum_x * self.sum_x);
        let intercept = (self.sum_y - slope * self.sum_x) / n;

        (slope, intercept)
    }
}

impl AddAssign for Sums {
    fn add_assign(&mut self, rhs: Self) {
        self.samples += rhs.samples;
        self.sum_x += rhs.sum_x;
        self.sum_y += rhs.sum_y;
        self.sum_xy += rhs.sum_xy;
        self.sum_x_square += rhs.sum_x_square;
    }
}

impl Add for Sums {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sum for Sums {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_contribution() {
        let sums = Sums::from_sample(3., 4.);
        assert_eq!(
            sums,
            Sums {
                samples: 1,
                sum_x: 3.,
                sum_y: 4.,
                sum_xy: 12.,
                sum_x_square: 9.,
            }
        );
    }

    #[test]
    fn test_partial_tuples_merge() {
        let xs = [1., 2., 3., 4.];
        let ys = [2., 4., 6., 8.];

        let whole = Sums::over(&xs, &ys);
        let merged: Sums = [Sums::over(&xs[..1], &ys[..1]), Sums::over(&xs[1..], &ys[1..])]
            .into_iter()
            .sum();

        assert_eq!(whole, merged);
        assert_eq!(whole.samples, 4);
        assert_eq!(whole.sum_xy, 60.);
        assert_eq!(whole.sum_x_square, 30.);
    }

    #[test]
    fn test_solve_perfect_line() {
        let sums = Sums::over(&[1., 2., 3.], &[3., 5., 7.]);
        let (slope, intercept) = sums.solve();
        assert!((slope - 2.).abs() < 1e-12);
        assert!((intercept - 1.).abs() < 1e-12);
    }

    #[test]
    fn test_solve_without_samples_is_not_finite() {
        let (slope, intercept) = Sums::default().solve();
        assert!(slope.is_nan());
        assert!(intercept.is_nan());
    }
}

use std::{fmt, time::Duration};

use crate::model::LinearRegression;

/// The outcome of a single fit, printed by the binary.
#[derive(Debug, Clone, PartialEq)]
pub struct FitReport {
    pub elapsed: Duration,
    pub model: LinearRegression,
    pub inputs: Vec<f64>,
    pub predictions: Vec<f64>,
}

impl FitReport {
    /// Predicts `inputs` with `model` and bundles everything for display.
    pub fn new(elapsed: Duration, model: LinearRegression, inputs: Vec<f64>) -> Self {
        let predictions = model.predict(&inputs);
        Self {
            elapsed,
            model,
            inputs,
            predictions,
        }
    }
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training Time: {:?}", self.elapsed)?;
        writeln!(f, "Slope: {:.2}", self.model.slope())?;
        writeln!(f, "Intercept: {:.2}", self.model.intercept())?;
        writeln!(f, "Input: {:?}", self.inputs)?;
        write!(f, "Predictions: {:?}", self.predictions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_layout() {
        let model = LinearRegression::new(2.25, -0.5);
        let report = FitReport::new(Duration::from_millis(12), model, vec![100.]);

        assert_eq!(
            report.to_string(),
            "Training Time: 12ms\n\
             Slope: 2.25\n\
             Intercept: -0.50\n\
             Input: [100.0]\n\
             Predictions: [224.5]"
        );
    }

    #[test]
    fn display_non_finite() {
        let model = LinearRegression::new(f64::NAN, f64::NAN);
        let report = FitReport::new(Duration::ZERO, model, vec![]);

        let text = report.to_string();
        assert!(text.contains("Slope: NaN"));
        assert!(text.contains("Predictions: []"));
    }
}

use super::{Axis, CurveFit, FitError, check_lengths, least_squares, ln_positive};

/// Coefficients of `y = a + b·ln x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogCoefficients {
    pub a: f64,
    pub b: f64,
}

/// Least-squares logarithmic curve `y = a + b·ln x`.
///
/// Useful for velocity profiles in the log-law region of a boundary layer,
/// where `x` is the wall distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogFit {
    coefficients: LogCoefficients,
}

impl LogFit {
    /// Fits `y = a + b·ln x` to paired data with strictly positive `x`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError`] if the sequences differ in length, hold fewer
    /// than two points, contain a non-positive `x`, or if every `x` is the same.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, FitError> {
        check_lengths(x, y, 2)?;
        let ln_x = ln_positive(x, Axis::X)?;

        let line = least_squares::line(&ln_x, y)?;
        Ok(Self {
            coefficients: LogCoefficients {
                a: line.intercept,
                b: line.slope,
            },
        })
    }

    #[must_use]
    pub fn coefficients(&self) -> LogCoefficients {
        self.coefficients
    }
}

impl CurveFit for LogFit {
    fn value(&self, x: f64) -> Result<f64, FitError> {
        if x <= 0.0 || x.is_nan() {
            return Err(FitError::OutOfDomain { x });
        }
        let LogCoefficients { a, b } = self.coefficients;
        Ok(a + b * x.ln())
    }
}

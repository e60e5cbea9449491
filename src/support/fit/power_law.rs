use super::{Axis, CurveFit, FitError, check_lengths, least_squares, ln_positive};

/// Coefficients of `y = a·x^b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawCoefficients {
    /// Scale `a`.
    pub a: f64,
    /// Exponent `b`.
    pub b: f64,
}

/// Least-squares power law `y = a·x^b`.
///
/// The fit is an ordinary least-squares line through `(ln x, ln y)`, so
/// `ln a` is the intercept and `b` the slope.
///
/// # Example
///
/// ```
/// use twine_anemometry::support::fit::{CurveFit, PowerLawFit};
///
/// let re = [10.0, 100.0, 1000.0];
/// let nu: Vec<f64> = re.iter().map(|x: &f64| 0.8 * x.powf(0.45)).collect();
///
/// let fit = PowerLawFit::new(&re, &nu).unwrap();
/// assert!((fit.coefficients().b - 0.45).abs() < 1e-9);
/// assert!((fit.value(100.0).unwrap() - nu[1]).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawFit {
    coefficients: PowerLawCoefficients,
}

impl PowerLawFit {
    /// Fits `y = a·x^b` to paired, strictly positive data.
    ///
    /// # Errors
    ///
    /// Returns [`FitError`] if the sequences differ in length, hold fewer
    /// than two points, contain a non-positive value, or if every `x` is
    /// the same.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, FitError> {
        check_lengths(x, y, 2)?;
        let ln_x = ln_positive(x, Axis::X)?;
        let ln_y = ln_positive(y, Axis::Y)?;

        let line = least_squares::line(&ln_x, &ln_y)?;
        Ok(Self {
            coefficients: PowerLawCoefficients {
                a: line.intercept.exp(),
                b: line.slope,
            },
        })
    }

    /// Wraps already known coefficients, e.g. from a stored calibration.
    #[must_use]
    pub fn from_coefficients(coefficients: PowerLawCoefficients) -> Self {
        Self { coefficients }
    }

    #[must_use]
    pub fn coefficients(&self) -> PowerLawCoefficients {
        self.coefficients
    }
}

impl CurveFit for PowerLawFit {
    /// Evaluates `a·x^b`, defined for `x > 0`.
    fn value(&self, x: f64) -> Result<f64, FitError> {
        if x <= 0.0 || x.is_nan() {
            return Err(FitError::OutOfDomain { x });
        }
        let PowerLawCoefficients { a, b } = self.coefficients;
        Ok(a * x.powf(b))
    }
}

//! Least-squares curve fits for calibration data.
//!
//! All fits are closed-form: there is no iteration and therefore no
//! convergence failure mode. Invalid data is rejected up front with a
//! [`FitError`].
//!
//! - [`PowerLawFit`]: `y = a·x^b`, fitted as a line in `(ln x, ln y)`
//! - [`LogFit`]: `y = a + b·ln x`, fitted as a line in `(ln x, y)`
//! - [`PolynomialFit`]: `y = p₀ + p₁·x + … + pₙ·xⁿ`
//!
//! Each fit is immutable once built and evaluates through [`CurveFit::value`].

mod error;
mod least_squares;
mod logarithmic;
mod polynomial;
mod power_law;

pub use error::{Axis, FitError};
pub use logarithmic::{LogCoefficients, LogFit};
pub use polynomial::PolynomialFit;
pub use power_law::{PowerLawCoefficients, PowerLawFit};

/// A fitted curve `y = f(x)`.
pub trait CurveFit {
    /// Evaluates the fitted curve at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::OutOfDomain`] if `x` is outside the curve's domain.
    fn value(&self, x: f64) -> Result<f64, FitError>;
}

/// Checks the common preconditions of every fit.
fn check_lengths(x: &[f64], y: &[f64], required: usize) -> Result<(), FitError> {
    if x.len() != y.len() {
        return Err(FitError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.len() < required {
        return Err(FitError::TooFewPoints {
            count: x.len(),
            required,
        });
    }
    Ok(())
}

/// Takes the natural log of every value, rejecting non-positive entries.
fn ln_positive(values: &[f64], axis: Axis) -> Result<Vec<f64>, FitError> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value > 0.0 {
                Ok(value.ln())
            } else {
                Err(FitError::NonPositive { axis, index, value })
            }
        })
        .collect()
}

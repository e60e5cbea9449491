use nalgebra::{DMatrix, DVector};

use super::{CurveFit, FitError, check_lengths};

/// Least-squares polynomial `y = p₀ + p₁·x + … + pₙ·xⁿ`.
///
/// Coefficients are stored in ascending powers of `x`. The fit solves the
/// Vandermonde system directly by singular value decomposition, with each
/// column scaled to unit norm, so raw ADC counts can be used as `x` even
/// at higher degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialFit {
    coefficients: Vec<f64>,
}

impl PolynomialFit {
    /// Fits a polynomial of `degree` to paired data.
    ///
    /// # Errors
    ///
    /// Returns [`FitError`] if the sequences differ in length, hold fewer
    /// than `degree + 1` points, or if `x` has too few distinct values for
    /// the requested degree.
    pub fn new(x: &[f64], y: &[f64], degree: usize) -> Result<Self, FitError> {
        let required = degree.checked_add(1).ok_or(FitError::TooFewPoints {
            count: x.len(),
            required: usize::MAX,
        })?;
        check_lengths(x, y, required)?;

        let coefficients = solve(x, y, required)?;
        Ok(Self { coefficients })
    }

    /// Coefficients in ascending powers of `x`.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }
}

impl CurveFit for PolynomialFit {
    /// Evaluates the polynomial with Horner's scheme; defined everywhere.
    fn value(&self, x: f64) -> Result<f64, FitError> {
        Ok(self
            .coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &p| acc * x + p))
    }
}

/// Solves `V·p ≈ y` in the least-squares sense for `size` coefficients.
fn solve(x: &[f64], y: &[f64], size: usize) -> Result<Vec<f64>, FitError> {
    let mut vandermonde = DMatrix::from_element(x.len(), size, 1.0);
    for col in 1..size {
        for (row, &xi) in x.iter().enumerate() {
            vandermonde[(row, col)] = vandermonde[(row, col - 1)] * xi;
        }
    }

    let mut scales = Vec::with_capacity(size);
    for mut column in vandermonde.column_iter_mut() {
        let norm = column.norm();
        if !(norm > 0.0 && norm.is_finite()) {
            return Err(FitError::Degenerate);
        }
        column.unscale_mut(norm);
        scales.push(norm);
    }

    let svd = vandermonde.svd(true, true);

    #[allow(clippy::cast_precision_loss)]
    let tolerance = svd.singular_values.max() * f64::EPSILON * x.len().max(size) as f64;
    if svd.rank(tolerance) < size {
        return Err(FitError::Degenerate);
    }

    let scaled = svd
        .solve(&DVector::from_column_slice(y), tolerance)
        .map_err(|_| FitError::Degenerate)?;

    Ok(scaled.iter().zip(&scales).map(|(p, scale)| p / scale).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn recovers_quadratic() {
        let x = [-1.0, 0.0, 0.5, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|xi| 1.5 - 0.25 * xi + 0.75 * xi * xi).collect();

        let fit = PolynomialFit::new(&x, &y, 2).unwrap();

        assert_eq!(fit.degree(), 2);
        let p = fit.coefficients();
        assert_relative_eq!(p[0], 1.5, epsilon = 1e-10);
        assert_relative_eq!(p[1], -0.25, epsilon = 1e-10);
        assert_relative_eq!(p[2], 0.75, epsilon = 1e-10);
        assert_relative_eq!(fit.value(4.0).unwrap(), 1.5 - 1.0 + 12.0, epsilon = 1e-9);
    }

    #[test]
    fn degree_one_matches_line() {
        // Raw ADC counts to volts is linear.
        let counts = [0.0, 1024.0, 2048.0, 4095.0];
        let volts: Vec<f64> = counts.iter().map(|c| c * 3.3 / 4095.0 - 0.146).collect();

        let fit = PolynomialFit::new(&counts, &volts, 1).unwrap();

        assert_relative_eq!(fit.coefficients()[0], -0.146, epsilon = 1e-8);
        assert_relative_eq!(fit.coefficients()[1], 3.3 / 4095.0, max_relative = 1e-8);
    }

    #[test]
    fn too_few_points_for_degree() {
        assert_eq!(
            PolynomialFit::new(&[1.0, 2.0], &[1.0, 2.0], 2),
            Err(FitError::TooFewPoints {
                count: 2,
                required: 3
            })
        );
    }

    #[test]
    fn higher_degrees_on_adc_counts() {
        let counts: Vec<f64> = (0..20_u32).map(|i| 100.0 + 200.0 * f64::from(i)).collect();
        let cubic = |c: f64| 0.2 + 1.5e-3 * c - 2.0e-7 * c * c + 3.0e-11 * c * c * c;
        let volts: Vec<f64> = counts.iter().map(|&c| cubic(c)).collect();

        for degree in [3, 4, 5] {
            let fit = PolynomialFit::new(&counts, &volts, degree).unwrap();

            assert_eq!(fit.degree(), degree);
            for &c in &counts {
                assert_relative_eq!(fit.value(c).unwrap(), cubic(c), max_relative = 1e-8);
            }
        }
    }

    #[test]
    fn overflowing_degree_is_rejected() {
        assert_eq!(
            PolynomialFit::new(&[1.0, 2.0], &[1.0, 2.0], usize::MAX),
            Err(FitError::TooFewPoints {
                count: 2,
                required: usize::MAX
            })
        );
    }

    #[test]
    fn repeated_x_is_degenerate() {
        assert_eq!(
            PolynomialFit::new(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0], 1),
            Err(FitError::Degenerate)
        );
    }
}

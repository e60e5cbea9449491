//! Ordinary least squares for a straight line.

use super::FitError;

/// The least-squares line `y = intercept + slope·x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Line {
    pub(super) intercept: f64,
    pub(super) slope: f64,
}

/// Fits a straight line to equal-length data with at least two points.
///
/// Sums are taken about the means, which keeps the slope accurate when the
/// regressor sits far from zero (as `ln Re` does).
pub(super) fn line(x: &[f64], y: &[f64]) -> Result<Line, FitError> {
    debug_assert_eq!(x.len(), y.len());

    #[allow(clippy::cast_precision_loss)]
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let (sxx, sxy) = x
        .iter()
        .zip(y)
        .fold((0.0, 0.0), |(sxx, sxy), (&xi, &yi)| {
            let dx = xi - x_mean;
            (sxx + dx * dx, sxy + dx * (yi - y_mean))
        });

    if sxx <= 0.0 || !sxx.is_finite() {
        return Err(FitError::Degenerate);
    }

    let slope = sxy / sxx;
    Ok(Line {
        intercept: y_mean - slope * x_mean,
        slope,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn exact_line() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|xi| 0.5 - 2.0 * xi).collect();

        let fit = line(&x, &y).unwrap();

        assert_relative_eq!(fit.slope, -2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn noisy_line_minimizes_residuals() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.1, 0.9, 2.1, 2.9];

        let fit = line(&x, &y).unwrap();

        assert_relative_eq!(fit.slope, 0.96, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 0.06, epsilon = 1e-12);
    }

    #[test]
    fn identical_regressors_are_degenerate() {
        assert_eq!(line(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]), Err(FitError::Degenerate));
    }
}

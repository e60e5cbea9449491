use std::fmt;

use thiserror::Error;

use crate::ErrorKind;

/// Which data sequence an offending value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors that can occur while fitting or evaluating a curve.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FitError {
    /// The `x` and `y` sequences have different lengths.
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    /// Not enough points to determine the fit.
    #[error("fit needs at least {required} points, got {count}")]
    TooFewPoints { count: usize, required: usize },

    /// A log-linear fit received a value that is zero or negative.
    #[error("{axis}[{index}] = {value} must be strictly positive")]
    NonPositive { axis: Axis, index: usize, value: f64 },

    /// The regressor takes too few distinct values to determine the fit.
    #[error("x values are not distinct enough to determine the fit")]
    Degenerate,

    /// The fitted curve is undefined at the requested point.
    #[error("curve is undefined at x = {x}")]
    OutOfDomain { x: f64 },
}

impl FitError {
    /// Returns whether this error comes from the data or from a query.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::LengthMismatch { .. }
            | Self::TooFewPoints { .. }
            | Self::NonPositive { .. }
            | Self::Degenerate => ErrorKind::InvalidInput,
            Self::OutOfDomain { .. } => ErrorKind::Domain,
        }
    }
}

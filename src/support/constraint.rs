//! Numeric constraints used to validate model parameters and inputs.
//!
//! Physical parameters such as a thermistor's reference resistance or a gas
//! constant must be strictly positive for the models built on them to make
//! sense. Constructors check them once through [`Constraint::check`].
//!
//! Two markers are provided:
//!
//! - [`StrictlyPositive`]: greater than zero
//! - [`NonZero`]: not equal to zero
//!
//! Custom invariants can be added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

use std::cmp::Ordering;

use num_traits::Zero;
use thiserror::Error;

/// A numeric invariant checked on a borrowed value.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// Marker for values greater than zero.
///
/// ```
/// use twine_anemometry::support::constraint::{Constraint, StrictlyPositive};
///
/// assert!(StrictlyPositive::check(&3470.0).is_ok());
/// assert!(StrictlyPositive::check(&0.0).is_err());
/// assert!(StrictlyPositive::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker for values other than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

use thiserror::Error;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::ErrorKind;

/// Errors that may occur when evaluating gas transport properties.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PropertyError {
    /// The temperature is at or below absolute zero.
    #[error("temperature at or below absolute zero: {temperature:?}")]
    BelowAbsoluteZero {
        temperature: ThermodynamicTemperature,
    },

    /// The ideal gas law gives a non-positive density for this pressure.
    #[error("pressure must be strictly positive: {pressure:?}")]
    NonPositivePressure { pressure: Pressure },
}

impl PropertyError {
    /// Every property failure is a physically invalid state.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Domain
    }
}

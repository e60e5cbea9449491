use thiserror::Error;
use uom::si::f64::{ElectricCurrent, ThermodynamicTemperature};

use crate::{
    ErrorKind,
    support::{fit::FitError, thermistor::ThermistorError, thermo::PropertyError},
};

/// Errors that can occur while fitting or querying a hot-wire calibration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalibrationError {
    /// The wire temperature could not be recovered from its resistance.
    #[error("wire temperature inversion failed")]
    Thermistor(#[from] ThermistorError),

    /// A gas property could not be evaluated at the film temperature.
    #[error("fluid property evaluation failed")]
    Property(#[from] PropertyError),

    /// The Reynolds/Nusselt power law could not be fitted.
    #[error("power-law fit failed")]
    Fit(#[from] FitError),

    /// The wire is not hotter than the surrounding gas, so no heat is convected.
    #[error("wire at {wire:?} is not hotter than ambient {ambient:?}")]
    NonPositiveOverheat {
        wire: ThermodynamicTemperature,
        ambient: ThermodynamicTemperature,
    },

    /// The computed Nusselt number cannot be raised to a fractional power.
    #[error("Nusselt number must be strictly positive, got {nusselt}")]
    NonPositiveNusselt { nusselt: f64 },

    /// The power-law exponent is zero, so it cannot be inverted.
    #[error("power-law exponent b is zero")]
    ZeroExponent,

    /// The power-law scale of a restored calibration is not positive.
    #[error("power-law scale a must be strictly positive, got {a}")]
    NonPositiveScale { a: f64 },

    /// The excitation current is zero or negative.
    #[error("excitation current must be strictly positive: {current:?}")]
    NonPositiveCurrent { current: ElectricCurrent },

    /// The overheat ratio is zero or negative.
    #[error("overheat ratio must be strictly positive, got {ratio}")]
    NonPositiveOverheatRatio { ratio: f64 },
}

impl CalibrationError {
    /// Returns whether this error comes from the calibration data or from
    /// a physically invalid intermediate value.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Thermistor(err) => err.kind(),
            Self::Property(err) => err.kind(),
            Self::Fit(err) => err.kind(),
            Self::NonPositiveScale { .. } | Self::NonPositiveOverheatRatio { .. } => {
                ErrorKind::InvalidInput
            }
            Self::NonPositiveOverheat { .. }
            | Self::NonPositiveNusselt { .. }
            | Self::ZeroExponent
            | Self::NonPositiveCurrent { .. } => ErrorKind::Domain,
        }
    }
}

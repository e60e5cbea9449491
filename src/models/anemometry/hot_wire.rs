//! Constant-current hot-wire anemometer.
//!
//! The computational core (fitting and voltage-to-velocity conversion) is
//! [`HotWireCalibration`]. [`HotWireAnemometer`] wraps a fitted calibration
//! as a [`twine_core::Model`] that maps a [`Sample`] to a velocity.
//!
//! # Example
//!
//! ```
//! use twine_anemometry::models::anemometry::hot_wire::{
//!     AmbientConditions, CalibrationSettings, HotWireAnemometer, HotWireCalibration, Sample,
//! };
//! use twine_anemometry::support::{
//!     fit::PowerLawCoefficients, thermistor::Thermistor, thermo::model::Gas,
//! };
//! use twine_core::Model;
//! use uom::si::{electric_potential::volt, f64::ElectricPotential};
//!
//! let calibration = HotWireCalibration::from_parts(
//!     PowerLawCoefficients { a: 0.5, b: 0.45 },
//!     Thermistor::default(),
//!     Gas::air(),
//!     CalibrationSettings::default(),
//!     AmbientConditions::default(),
//! )
//! .unwrap();
//!
//! let anemometer = HotWireAnemometer::new(calibration);
//! let velocity = anemometer
//!     .call(&Sample::new(ElectricPotential::new::<volt>(2.0)))
//!     .unwrap();
//! assert!(velocity.value > 0.0);
//! ```

mod core;

pub use self::core::{
    AmbientConditions, CalibrationError, CalibrationPoint, CalibrationSettings, Conditions,
    FilmTemperature, HotWireCalibration,
};

use twine_core::Model;
use uom::si::f64::{
    ElectricCurrent, ElectricPotential, Pressure, ThermodynamicTemperature, Velocity,
};

use crate::support::thermo::{capability::TransportProperties, model::Gas};

/// One anemometer reading, with optional measured ambient conditions.
///
/// Conditions left as `None` fall back to those stored in the calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub voltage: ElectricPotential,
    pub ambient_temperature: Option<ThermodynamicTemperature>,
    pub ambient_pressure: Option<Pressure>,
    pub excitation_current: Option<ElectricCurrent>,
}

impl Sample {
    /// Creates a sample at the calibration's stored conditions.
    #[must_use]
    pub fn new(voltage: ElectricPotential) -> Self {
        Self {
            voltage,
            ambient_temperature: None,
            ambient_pressure: None,
            excitation_current: None,
        }
    }

    #[must_use]
    pub fn with_ambient_temperature(self, temperature: ThermodynamicTemperature) -> Self {
        Self {
            ambient_temperature: Some(temperature),
            ..self
        }
    }

    #[must_use]
    pub fn with_ambient_pressure(self, pressure: Pressure) -> Self {
        Self {
            ambient_pressure: Some(pressure),
            ..self
        }
    }

    #[must_use]
    pub fn with_excitation_current(self, current: ElectricCurrent) -> Self {
        Self {
            excitation_current: Some(current),
            ..self
        }
    }
}

/// A hot-wire anemometer backed by a fitted calibration.
#[derive(Debug, Clone, PartialEq)]
pub struct HotWireAnemometer<F = Gas> {
    calibration: HotWireCalibration<F>,
}

impl<F> HotWireAnemometer<F> {
    #[must_use]
    pub fn new(calibration: HotWireCalibration<F>) -> Self {
        Self { calibration }
    }

    #[must_use]
    pub fn calibration(&self) -> &HotWireCalibration<F> {
        &self.calibration
    }
}

impl<F: TransportProperties> Model for HotWireAnemometer<F> {
    type Input = Sample;
    type Output = Velocity;
    type Error = CalibrationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let conditions = Conditions {
            ambient_temperature: input.ambient_temperature,
            ambient_pressure: input.ambient_pressure,
            excitation_current: input.excitation_current,
            ..Conditions::default()
        };
        self.calibration.value_with(input.voltage, &conditions)
    }
}

//! Exponential (beta) thermistor law.
//!
//! A thermistor's resistance follows
//!
//! ```text
//! R(T) = R0 · exp(B · (1/T − 1/T0))
//! ```
//!
//! with absolute temperatures `T` and `T0`. For `B > 0` the resistance is
//! strictly decreasing in temperature, so the law has a closed-form inverse:
//!
//! ```text
//! 1/T = ln(R/R0)/B + 1/T0
//! ```
//!
//! The hot wire of an anemometer probe is modeled this way: its operating
//! resistance tells us how hot it runs.

use thiserror::Error;
use uom::si::{
    electrical_resistance::ohm,
    f64::{ElectricalResistance, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::{
    ErrorKind,
    support::constraint::{Constraint, StrictlyPositive},
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThermistorParametersError {
    #[error("invalid reference resistance: {r0:?}")]
    ReferenceResistance { r0: ElectricalResistance },
    #[error("invalid material constant B: {beta:?}")]
    MaterialConstant { beta: TemperatureInterval },
    #[error("invalid reference temperature: {t0:?}")]
    ReferenceTemperature { t0: ThermodynamicTemperature },
}

/// Errors that may occur when evaluating a [`Thermistor`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ThermistorError {
    /// The logarithm in the inverse law is undefined.
    #[error("resistance must be strictly positive: {resistance:?}")]
    NonPositiveResistance { resistance: ElectricalResistance },
}

impl ThermistorError {
    /// Every thermistor failure is a physically invalid value.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Domain
    }
}

/// Constant parameters of a [`Thermistor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermistorParameters {
    /// Resistance at the reference temperature.
    pub r0: ElectricalResistance,
    /// Material constant `B`.
    pub beta: TemperatureInterval,
    /// Reference temperature.
    pub t0: ThermodynamicTemperature,
}

impl Default for ThermistorParameters {
    /// Returns the probe used by the wind-tunnel rig: 5 kΩ at 25 °C, `B = 3470 K`.
    fn default() -> Self {
        Self {
            r0: ElectricalResistance::new::<ohm>(5.0e3),
            beta: TemperatureInterval::new::<delta_kelvin>(3470.0),
            t0: ThermodynamicTemperature::new::<degree_celsius>(25.0),
        }
    }
}

/// Resistance/temperature model of a thermistor.
///
/// Parameters are validated once; evaluation never mutates the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thermistor {
    r0: f64,
    beta: f64,
    t0: f64,
}

impl Default for Thermistor {
    fn default() -> Self {
        Self::from_valid(ThermistorParameters::default())
    }
}

impl Thermistor {
    /// Creates a thermistor model from its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ThermistorParametersError`] if `R0`, `B`, or the absolute
    /// reference temperature is not strictly positive.
    pub fn new(parameters: ThermistorParameters) -> Result<Self, ThermistorParametersError> {
        let ThermistorParameters { r0, beta, t0 } = parameters;

        if StrictlyPositive::check(&r0.get::<ohm>()).is_err() {
            return Err(ThermistorParametersError::ReferenceResistance { r0 });
        }
        if StrictlyPositive::check(&beta.get::<delta_kelvin>()).is_err() {
            return Err(ThermistorParametersError::MaterialConstant { beta });
        }
        if StrictlyPositive::check(&t0.get::<kelvin>()).is_err() {
            return Err(ThermistorParametersError::ReferenceTemperature { t0 });
        }

        Ok(Self::from_valid(parameters))
    }

    fn from_valid(parameters: ThermistorParameters) -> Self {
        Self {
            r0: parameters.r0.get::<ohm>(),
            beta: parameters.beta.get::<delta_kelvin>(),
            t0: parameters.t0.get::<kelvin>(),
        }
    }

    /// Returns the parameters this model was built from.
    #[must_use]
    pub fn parameters(&self) -> ThermistorParameters {
        ThermistorParameters {
            r0: ElectricalResistance::new::<ohm>(self.r0),
            beta: TemperatureInterval::new::<delta_kelvin>(self.beta),
            t0: ThermodynamicTemperature::new::<kelvin>(self.t0),
        }
    }

    /// Computes the resistance at `temperature` with `R = R0·exp(B·(1/T − 1/T0))`.
    #[must_use]
    pub fn resistance(&self, temperature: ThermodynamicTemperature) -> ElectricalResistance {
        let t = temperature.get::<kelvin>();
        let r = self.r0 * (self.beta * (1.0 / t - 1.0 / self.t0)).exp();
        ElectricalResistance::new::<ohm>(r)
    }

    /// Computes the temperature at which the thermistor has `resistance`.
    ///
    /// # Errors
    ///
    /// Returns [`ThermistorError::NonPositiveResistance`] if `resistance <= 0`.
    pub fn temperature(
        &self,
        resistance: ElectricalResistance,
    ) -> Result<ThermodynamicTemperature, ThermistorError> {
        let r = resistance.get::<ohm>();
        if StrictlyPositive::check(&r).is_err() {
            return Err(ThermistorError::NonPositiveResistance { resistance });
        }

        let inverse_t = (r / self.r0).ln() / self.beta + 1.0 / self.t0;
        Ok(ThermodynamicTemperature::new::<kelvin>(1.0 / inverse_t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn reference_point_is_exact() {
        let thermistor = Thermistor::default();

        assert_eq!(thermistor.resistance(celsius(25.0)).get::<ohm>(), 5000.0);

        let t = thermistor
            .temperature(ElectricalResistance::new::<ohm>(5000.0))
            .unwrap();
        assert_relative_eq!(t.get::<degree_celsius>(), 25.0, epsilon = 1e-9);
    }

    #[test]
    fn hot_wire_resistance_maps_above_reference() {
        let thermistor = Thermistor::default();

        // Roughly the operating point of the rig at 2 V.
        let t = thermistor
            .temperature(ElectricalResistance::new::<ohm>(1246.7))
            .unwrap();
        assert!(t.get::<degree_celsius>() > 60.0);
        assert!(t.get::<degree_celsius>() < 70.0);
    }

    #[test]
    fn non_positive_resistance_is_a_domain_error() {
        let thermistor = Thermistor::default();

        for r in [-5.0, 0.0] {
            let err = thermistor
                .temperature(ElectricalResistance::new::<ohm>(r))
                .unwrap_err();
            assert!(matches!(err, ThermistorError::NonPositiveResistance { .. }));
            assert_eq!(err.kind(), ErrorKind::Domain);
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let base = ThermistorParameters::default();

        let err = Thermistor::new(ThermistorParameters {
            r0: ElectricalResistance::new::<ohm>(0.0),
            ..base
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ThermistorParametersError::ReferenceResistance { .. }
        ));

        let err = Thermistor::new(ThermistorParameters {
            beta: TemperatureInterval::new::<delta_kelvin>(-3470.0),
            ..base
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ThermistorParametersError::MaterialConstant { .. }
        ));

        let err = Thermistor::new(ThermistorParameters {
            t0: ThermodynamicTemperature::new::<kelvin>(0.0),
            ..base
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ThermistorParametersError::ReferenceTemperature { .. }
        ));
    }

    #[test]
    fn parameters_survive_validation() {
        let parameters = ThermistorParameters {
            r0: ElectricalResistance::new::<ohm>(10.0e3),
            beta: TemperatureInterval::new::<delta_kelvin>(3950.0),
            t0: celsius(25.0),
        };
        let thermistor = Thermistor::new(parameters).unwrap();
        let restored = thermistor.parameters();

        assert_relative_eq!(restored.r0.get::<ohm>(), 10.0e3);
        assert_relative_eq!(restored.beta.get::<delta_kelvin>(), 3950.0);
        assert_relative_eq!(restored.t0.get::<degree_celsius>(), 25.0, epsilon = 1e-12);
    }

    proptest! {
        #[test]
        fn temperature_inverts_resistance(t in -50.0..300.0_f64) {
            let thermistor = Thermistor::default();
            let r = thermistor.resistance(celsius(t));
            let back = thermistor.temperature(r).unwrap();
            prop_assert!(
                (back.get::<kelvin>() - celsius(t).get::<kelvin>()).abs()
                    <= 1e-9 * celsius(t).get::<kelvin>()
            );
        }

        #[test]
        fn resistance_decreases_with_temperature(t in -50.0..299.0_f64, dt in 0.01..1.0_f64) {
            let thermistor = Thermistor::default();
            let cold = thermistor.resistance(celsius(t));
            let hot = thermistor.resistance(celsius(t + dt));
            prop_assert!(hot < cold);
        }
    }
}

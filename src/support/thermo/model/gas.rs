//! Correlation-based gas transport model.
//!
//! `Gas` evaluates the properties a convective heat-transfer calculation
//! needs from four simple correlations:
//!
//! - Thermal conductivity, linear in temperature: `k = 1e-3·(a_k + b_k·T)` W/m·K
//! - Prandtl number, linear in temperature: `Pr = a_p + b_p·T`
//! - Density, ideal gas law: `ρ = p / (R·T)`
//! - Dynamic viscosity, Sutherland's law: `μ = μ₀·(T₀ + C)/(T + C)·(T/T₀)^1.5`
//!
//! The linear correlations take `T` in °C; the ideal gas and Sutherland laws
//! use absolute temperature.
//!
//! # When To Use
//!
//! The correlations are fitted for near-ambient air and hold well over the
//! range a heated probe sees in a wind tunnel (roughly 0–150 °C). They are
//! not meant for combustion gases or cryogenic flows.

use thiserror::Error;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, Pressure, TemperatureInterval, ThermalConductivity,
        ThermodynamicTemperature,
    },
    pressure::pascal,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{PropertyError, capability::TransportProperties, fluid::Air},
    units::SpecificGasConstant,
};

use super::ideal_gas_eos;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GasParametersError {
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },
    #[error("invalid Sutherland constant C: {c:?}")]
    SutherlandConstant { c: TemperatureInterval },
    #[error("invalid Sutherland reference temperature: {t0:?}")]
    ReferenceTemperature { t0: ThermodynamicTemperature },
    #[error("invalid Sutherland reference viscosity: {mu0:?}")]
    ReferenceViscosity { mu0: DynamicViscosity },
}

/// A correlation `y = intercept + slope·T` with `T` in °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCorrelation {
    pub intercept: f64,
    pub slope: f64,
}

impl LinearCorrelation {
    #[must_use]
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    fn at(&self, celsius: f64) -> f64 {
        self.intercept + self.slope * celsius
    }
}

/// Constants of Sutherland's viscosity law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sutherland {
    /// Sutherland constant `C`.
    pub constant: TemperatureInterval,
    /// Reference temperature `T₀`.
    pub reference_temperature: ThermodynamicTemperature,
    /// Viscosity `μ₀` at the reference temperature.
    pub reference_viscosity: DynamicViscosity,
}

/// Constant parameters for the [`Gas`] model.
///
/// These values are typically provided by a fluid's [`GasFluid`] implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasParameters {
    pub gas_constant: SpecificGasConstant,
    /// Thermal conductivity in mW/m·K.
    pub conductivity: LinearCorrelation,
    pub prandtl: LinearCorrelation,
    pub sutherland: Sutherland,
}

/// Fluid constants required by the [`Gas`] model.
pub trait GasFluid {
    /// Returns the constant parameters for use with [`Gas`].
    fn parameters() -> GasParameters;
}

/// Correlation-based transport property model of a gas.
///
/// The model is an immutable value object: build it once per fluid and
/// share it by reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gas {
    parameters: GasParameters,
}

impl Default for Gas {
    /// Returns the model for dry air.
    fn default() -> Self {
        Self {
            parameters: Air::parameters(),
        }
    }
}

impl Gas {
    /// Creates a gas model using constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`GasParametersError`] if any required constant is invalid.
    pub fn of<Fluid: GasFluid>() -> Result<Self, GasParametersError> {
        Self::new(Fluid::parameters())
    }

    /// Creates a gas model from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GasParametersError`] if the gas constant, the Sutherland
    /// constant, the reference temperature, or the reference viscosity is
    /// not strictly positive.
    pub fn new(parameters: GasParameters) -> Result<Self, GasParametersError> {
        let r = parameters.gas_constant;
        if StrictlyPositive::check(&r.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(GasParametersError::GasConstant { r });
        }

        let Sutherland {
            constant: c,
            reference_temperature: t0,
            reference_viscosity: mu0,
        } = parameters.sutherland;

        if StrictlyPositive::check(&c.get::<delta_kelvin>()).is_err() {
            return Err(GasParametersError::SutherlandConstant { c });
        }
        if StrictlyPositive::check(&t0.get::<kelvin>()).is_err() {
            return Err(GasParametersError::ReferenceTemperature { t0 });
        }
        if StrictlyPositive::check(&mu0.get::<pascal_second>()).is_err() {
            return Err(GasParametersError::ReferenceViscosity { mu0 });
        }

        Ok(Self { parameters })
    }

    /// Returns the model for dry air.
    #[must_use]
    pub fn air() -> Self {
        Self::default()
    }

    /// Returns the parameters this model was built from.
    #[must_use]
    pub fn parameters(&self) -> &GasParameters {
        &self.parameters
    }
}

/// Returns the temperature in °C once it is known to be above absolute zero.
fn checked_celsius(temperature: ThermodynamicTemperature) -> Result<f64, PropertyError> {
    if StrictlyPositive::check(&temperature.get::<kelvin>()).is_err() {
        return Err(PropertyError::BelowAbsoluteZero { temperature });
    }
    Ok(temperature.get::<degree_celsius>())
}

impl TransportProperties for Gas {
    /// Computes conductivity with `k = 1e-3·(a_k + b_k·T)`.
    fn thermal_conductivity(
        &self,
        temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Result<ThermalConductivity, PropertyError> {
        let t = checked_celsius(temperature)?;
        let k = 1e-3 * self.parameters.conductivity.at(t);
        Ok(ThermalConductivity::new::<watt_per_meter_kelvin>(k))
    }

    /// Computes Prandtl number with `Pr = a_p + b_p·T`.
    fn prandtl_number(
        &self,
        temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Result<f64, PropertyError> {
        let t = checked_celsius(temperature)?;
        Ok(self.parameters.prandtl.at(t))
    }

    /// Computes density with `ρ = p / (R·T)`.
    fn density(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MassDensity, PropertyError> {
        checked_celsius(temperature)?;
        if StrictlyPositive::check(&pressure.get::<pascal>()).is_err() {
            return Err(PropertyError::NonPositivePressure { pressure });
        }
        Ok(ideal_gas_eos::density(
            temperature,
            pressure,
            self.parameters.gas_constant,
        ))
    }

    /// Computes viscosity with Sutherland's law.
    fn dynamic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
        _pressure: Pressure,
    ) -> Result<DynamicViscosity, PropertyError> {
        checked_celsius(temperature)?;

        let sutherland = &self.parameters.sutherland;
        let c = sutherland.constant.get::<delta_kelvin>();
        let t0 = sutherland.reference_temperature.get::<kelvin>();
        let mu0 = sutherland.reference_viscosity.get::<pascal_second>();
        let t = temperature.get::<kelvin>();

        let mu = mu0 * (t0 + c) / (t + c) * (t / t0).powf(1.5);
        Ok(DynamicViscosity::new::<pascal_second>(mu))
    }
}

//! Capability trait used to query transport properties of a gas.

use uom::si::f64::{
    DynamicViscosity, MassDensity, Pressure, ThermalConductivity, ThermodynamicTemperature,
};

use crate::support::{thermo::PropertyError, units::KinematicViscosity};

/// Temperature and pressure dependent transport properties of a fluid.
///
/// Implementations are stateless after construction, so a single model can
/// be shared by reference across any number of calibrations.
pub trait TransportProperties {
    /// Returns the thermal conductivity at the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the state is outside the model's domain.
    fn thermal_conductivity(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<ThermalConductivity, PropertyError>;

    /// Returns the (dimensionless) Prandtl number at the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the state is outside the model's domain.
    fn prandtl_number(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<f64, PropertyError>;

    /// Returns the density at the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the state is outside the model's domain.
    fn density(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MassDensity, PropertyError>;

    /// Returns the dynamic viscosity at the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the state is outside the model's domain.
    fn dynamic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<DynamicViscosity, PropertyError>;

    /// Returns the kinematic viscosity `ν = μ/ρ` at the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if either property cannot be evaluated.
    fn kinematic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<KinematicViscosity, PropertyError> {
        let mu = self.dynamic_viscosity(temperature, pressure)?;
        let rho = self.density(temperature, pressure)?;
        Ok(mu / rho)
    }
}

/// A shared reference to a model is itself a model.
impl<T: TransportProperties + ?Sized> TransportProperties for &T {
    fn thermal_conductivity(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<ThermalConductivity, PropertyError> {
        (**self).thermal_conductivity(temperature, pressure)
    }

    fn prandtl_number(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<f64, PropertyError> {
        (**self).prandtl_number(temperature, pressure)
    }

    fn density(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<MassDensity, PropertyError> {
        (**self).density(temperature, pressure)
    }

    fn dynamic_viscosity(
        &self,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<DynamicViscosity, PropertyError> {
        (**self).dynamic_viscosity(temperature, pressure)
    }
}

//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical quantities that cross a public
//! API (temperatures, pressures, resistances, voltages, velocities, ...).
//! Dimensionless groups such as the Prandtl, Reynolds, and Nusselt numbers
//! stay plain `f64`.
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus)
//! method for subtracting one absolute temperature from another:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_anemometry::support::units::TemperatureDifference;
//!
//! let wire = ThermodynamicTemperature::new::<degree_celsius>(65.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let overheat = wire.minus(ambient);
//! // overheat is a TemperatureInterval of 45 K
//! ```

use uom::si::{
    ISQ, Quantity, SI,
    f64::{DiffusionCoefficient, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};
use uom::typenum::{N1, N2, P2, Z0};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Kinematic viscosity, m²/s in SI.
///
/// `uom` names this dimension `DiffusionCoefficient`; build values with the
/// `uom::si::diffusion_coefficient` units.
pub type KinematicViscosity = DiffusionCoefficient;

/// Extension trait for computing temperature differences.
///
/// `uom` does not subtract two [`ThermodynamicTemperature`] values into a
/// [`TemperatureInterval`], see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

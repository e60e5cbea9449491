use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, TemperatureInterval, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::model::gas::{GasFluid, GasParameters, LinearCorrelation, Sutherland};
use crate::support::units::SpecificGasConstant;

/// Canonical identifier for dry air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Air;

impl GasFluid for Air {
    fn parameters() -> GasParameters {
        GasParameters {
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(287.06),
            conductivity: LinearCorrelation::new(24.34607, 0.07526),
            prandtl: LinearCorrelation::new(0.714296, -0.000268),
            sutherland: Sutherland {
                constant: TemperatureInterval::new::<delta_kelvin>(120.0),
                reference_temperature: ThermodynamicTemperature::new::<kelvin>(291.15),
                reference_viscosity: DynamicViscosity::new::<pascal_second>(18.27e-6),
            },
        }
    }
}

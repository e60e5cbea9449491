//! Hot-wire calibration: fitting and voltage-to-velocity conversion.
//!
//! At every calibration point the wire temperature follows from its
//! operating resistance, gas properties are evaluated at the film
//! temperature, and the point is reduced to a Reynolds/Nusselt pair:
//!
//! ```text
//! Rw = α·E/i0        Tw = thermistor⁻¹(Rw)
//! Re = ρ·U/μ         Nu = α·E·i0 / (Pr^(1/3)·k·(Tw − Ta))
//! ```
//!
//! A power law `Nu = a·Re^b` is fitted through the pairs. A query repeats the
//! chain for a new voltage and inverts the law: `U = (μ/ρ)·(Nu/a)^(1/b)`.

mod config;
mod error;

pub use config::{AmbientConditions, CalibrationSettings, Conditions, FilmTemperature};
pub use error::CalibrationError;

use log::{debug, trace};
use uom::si::{
    dynamic_viscosity::pascal_second,
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential, Pressure, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constraint, NonZero, StrictlyPositive},
    fit::{PowerLawCoefficients, PowerLawFit},
    thermistor::Thermistor,
    thermo::{capability::TransportProperties, model::Gas},
    units::TemperatureDifference,
};

/// One measured point of a wind-tunnel calibration run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    /// Anemometer output voltage `E`.
    pub voltage: ElectricPotential,
    /// Reference velocity from the tunnel instrumentation.
    pub velocity: Velocity,
    pub ambient_temperature: ThermodynamicTemperature,
    pub ambient_pressure: Pressure,
}

/// A fitted hot-wire calibration.
///
/// The calibration owns its thermistor model and fit coefficients and holds
/// the gas model by value (use `&Gas` as `F` to share one model between
/// calibrations). It is immutable once built, so any number of threads may
/// query it at the same time.
#[derive(Debug, Clone, PartialEq)]
pub struct HotWireCalibration<F = Gas> {
    thermistor: Thermistor,
    fluid: F,
    settings: CalibrationSettings,
    ambient: AmbientConditions,
    fit: PowerLawFit,
}

/// Gas properties evaluated at one film temperature.
struct FilmProperties {
    prandtl: f64,
    conductivity: f64,
    density: f64,
    viscosity: f64,
}

impl FilmProperties {
    fn evaluate(
        fluid: &impl TransportProperties,
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, CalibrationError> {
        Ok(Self {
            prandtl: fluid.prandtl_number(temperature, pressure)?,
            conductivity: fluid
                .thermal_conductivity(temperature, pressure)?
                .get::<watt_per_meter_kelvin>(),
            density: fluid
                .density(temperature, pressure)?
                .get::<kilogram_per_cubic_meter>(),
            viscosity: fluid
                .dynamic_viscosity(temperature, pressure)?
                .get::<pascal_second>(),
        })
    }
}

impl<F: TransportProperties> HotWireCalibration<F> {
    /// Fits a calibration to measured points.
    ///
    /// The stored default ambient conditions are the means over all points.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError`] if the settings are not positive, if any
    /// point has a non-positive wire resistance or a wire no hotter than
    /// ambient, if a gas property is undefined, or if the Reynolds/Nusselt
    /// pairs cannot be fitted (fewer than two points, non-positive values).
    /// No calibration is returned in any of these cases.
    pub fn fit(
        points: &[CalibrationPoint],
        thermistor: Thermistor,
        fluid: F,
        settings: CalibrationSettings,
    ) -> Result<Self, CalibrationError> {
        check_settings(&settings)?;
        let current = settings.excitation_current;

        let mut reynolds = Vec::with_capacity(points.len());
        let mut nusselt = Vec::with_capacity(points.len());

        for (index, point) in points.iter().enumerate() {
            let ta = point.ambient_temperature;
            let tw = wire_temperature(&thermistor, &settings, point.voltage, current, ta)?;
            let tf = FilmTemperature::Mean.at(ta, tw);
            let film = FilmProperties::evaluate(&fluid, tf, point.ambient_pressure)?;

            let re = film.density * point.velocity.get::<meter_per_second>() / film.viscosity;
            let nu = nusselt_number(&settings, point.voltage, current, &film, tw, ta)?;
            trace!("calibration point {index}: Tw={tw:?}, Tf={tf:?}, Re={re}, Nu={nu}");

            reynolds.push(re);
            nusselt.push(nu);
        }

        let fit = PowerLawFit::new(&reynolds, &nusselt)?;
        let ambient = mean_ambient(points);

        let PowerLawCoefficients { a, b } = fit.coefficients();
        debug!(
            "fitted hot-wire calibration to {} points: a={a}, b={b}",
            points.len()
        );

        Ok(Self {
            thermistor,
            fluid,
            settings,
            ambient,
            fit,
        })
    }

    /// Rebuilds a calibration from previously fitted coefficients.
    ///
    /// The exponent is stored as given; a zero exponent is reported by the
    /// queries that would have to invert it.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError`] if `a` is not strictly positive or the
    /// settings are not positive.
    pub fn from_parts(
        coefficients: PowerLawCoefficients,
        thermistor: Thermistor,
        fluid: F,
        settings: CalibrationSettings,
        ambient: AmbientConditions,
    ) -> Result<Self, CalibrationError> {
        check_settings(&settings)?;
        if StrictlyPositive::check(&coefficients.a).is_err() {
            return Err(CalibrationError::NonPositiveScale { a: coefficients.a });
        }

        Ok(Self {
            thermistor,
            fluid,
            settings,
            ambient,
            fit: PowerLawFit::from_coefficients(coefficients),
        })
    }

    /// Converts a voltage to a velocity at the stored ambient conditions.
    ///
    /// # Errors
    ///
    /// See [`HotWireCalibration::value_with`].
    pub fn value(&self, voltage: ElectricPotential) -> Result<Velocity, CalibrationError> {
        self.value_with(voltage, &Conditions::default())
    }

    /// Converts a voltage to a velocity, applying any per-query overrides.
    ///
    /// # Errors
    ///
    /// Returns [`CalibrationError`] if the fitted exponent is zero, the
    /// excitation current is not positive, the wire resistance is not
    /// positive, the wire is no hotter than ambient, or a gas property is
    /// undefined. The calibration itself remains usable.
    pub fn value_with(
        &self,
        voltage: ElectricPotential,
        conditions: &Conditions<'_, F>,
    ) -> Result<Velocity, CalibrationError> {
        let PowerLawCoefficients { a, b } = self.fit.coefficients();
        if NonZero::check(&b).is_err() {
            return Err(CalibrationError::ZeroExponent);
        }

        let ta = conditions
            .ambient_temperature
            .unwrap_or(self.ambient.temperature);
        let pa = conditions.ambient_pressure.unwrap_or(self.ambient.pressure);
        let current = conditions
            .excitation_current
            .unwrap_or(self.settings.excitation_current);
        let fluid = conditions.fluid.unwrap_or(&self.fluid);

        check_current(current)?;

        let tw = wire_temperature(&self.thermistor, &self.settings, voltage, current, ta)?;
        let tf = conditions.film_temperature.at(ta, tw);
        let film = FilmProperties::evaluate(fluid, tf, pa)?;
        let nu = nusselt_number(&self.settings, voltage, current, &film, tw, ta)?;

        let u = film.viscosity / film.density * (nu / a).powf(1.0 / b);
        Ok(Velocity::new::<meter_per_second>(u))
    }
}

impl<F> HotWireCalibration<F> {
    /// Returns the fitted power-law coefficients `Nu = a·Re^b`.
    #[must_use]
    pub fn coefficients(&self) -> PowerLawCoefficients {
        self.fit.coefficients()
    }

    /// Returns the default ambient conditions used by queries.
    #[must_use]
    pub fn ambient(&self) -> AmbientConditions {
        self.ambient
    }

    /// Returns the operating point the calibration was fitted at.
    #[must_use]
    pub fn settings(&self) -> CalibrationSettings {
        self.settings
    }

    /// Returns the wire's resistance/temperature model.
    #[must_use]
    pub fn thermistor(&self) -> &Thermistor {
        &self.thermistor
    }

    /// Returns the gas model used when a query does not override it.
    #[must_use]
    pub fn fluid(&self) -> &F {
        &self.fluid
    }
}

fn check_settings(settings: &CalibrationSettings) -> Result<(), CalibrationError> {
    check_current(settings.excitation_current)?;
    if StrictlyPositive::check(&settings.overheat_ratio).is_err() {
        return Err(CalibrationError::NonPositiveOverheatRatio {
            ratio: settings.overheat_ratio,
        });
    }
    Ok(())
}

fn check_current(current: ElectricCurrent) -> Result<(), CalibrationError> {
    if StrictlyPositive::check(&current.get::<ampere>()).is_err() {
        return Err(CalibrationError::NonPositiveCurrent { current });
    }
    Ok(())
}

/// Recovers the wire temperature and checks that it exceeds ambient.
fn wire_temperature(
    thermistor: &Thermistor,
    settings: &CalibrationSettings,
    voltage: ElectricPotential,
    current: ElectricCurrent,
    ambient: ThermodynamicTemperature,
) -> Result<ThermodynamicTemperature, CalibrationError> {
    let tw = thermistor.temperature(settings.wire_resistance(voltage, current))?;
    if tw <= ambient {
        return Err(CalibrationError::NonPositiveOverheat { wire: tw, ambient });
    }
    Ok(tw)
}

/// Computes `Nu = α·E·i0 / (Pr^(1/3)·k·(Tw − Ta))`.
fn nusselt_number(
    settings: &CalibrationSettings,
    voltage: ElectricPotential,
    current: ElectricCurrent,
    film: &FilmProperties,
    wire: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> Result<f64, CalibrationError> {
    let overheat = wire.minus(ambient).get::<delta_kelvin>();
    let power = settings.overheat_ratio * voltage.get::<volt>() * current.get::<ampere>();
    let nu = power / (film.prandtl.cbrt() * film.conductivity * overheat);

    if StrictlyPositive::check(&nu).is_err() || !nu.is_finite() {
        return Err(CalibrationError::NonPositiveNusselt { nusselt: nu });
    }
    Ok(nu)
}

/// Averages ambient temperature and pressure over the calibration points.
fn mean_ambient(points: &[CalibrationPoint]) -> AmbientConditions {
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let (t_sum, p_sum) = points.iter().fold((0.0, 0.0), |(t, p), point| {
        (
            t + point.ambient_temperature.get::<kelvin>(),
            p + point.ambient_pressure.get::<pascal>(),
        )
    });

    AmbientConditions {
        temperature: ThermodynamicTemperature::new::<kelvin>(t_sum / n),
        pressure: Pressure::new::<pascal>(p_sum / n),
    }
}

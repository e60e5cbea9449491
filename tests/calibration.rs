use approx::assert_relative_eq;
use uom::si::{
    dynamic_viscosity::pascal_second,
    electric_current::ampere,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{ElectricPotential, ElectricalResistance, Pressure, ThermodynamicTemperature, Velocity},
    mass_density::kilogram_per_cubic_meter,
    pressure::kilopascal,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
    velocity::meter_per_second,
};

use twine_anemometry::ErrorKind;
use twine_anemometry::models::anemometry::hot_wire::{
    CalibrationError, CalibrationPoint, CalibrationSettings, Conditions, FilmTemperature,
    HotWireCalibration,
};
use twine_anemometry::support::{
    dataset::{AdcConversion, DEFAULT_HEADER, SampleFile},
    fit::{FitError, PowerLawFit},
    thermistor::{Thermistor, ThermistorError},
    thermo::{capability::TransportProperties, model::Gas},
};

const A: f64 = 5.5e-4;
const B: f64 = 0.45;

/// (voltage in V, ambient temperature in °C) for a synthetic tunnel run.
const RUN: [(f64, f64); 6] = [
    (1.70, 20.0),
    (1.85, 20.4),
    (2.00, 20.1),
    (2.15, 19.8),
    (2.30, 20.3),
    (2.45, 20.0),
];

fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// Generates points that lie exactly on `Nu = A·Re^B` by running the
/// physical chain forward and solving the power law for velocity.
fn simulated_run() -> Vec<CalibrationPoint> {
    let thermistor = Thermistor::default();
    let settings = CalibrationSettings::default();
    let air = Gas::air();
    let pa = Pressure::new::<kilopascal>(93.0);
    let i0 = settings.excitation_current;

    RUN.iter()
        .map(|&(e, ta)| {
            let voltage = ElectricPotential::new::<volt>(e);
            let ta = celsius(ta);
            let tw = thermistor
                .temperature(settings.wire_resistance(voltage, i0))
                .unwrap();
            let tf = FilmTemperature::Mean.at(ta, tw);

            let pr = air.prandtl_number(tf, pa).unwrap();
            let k = air
                .thermal_conductivity(tf, pa)
                .unwrap()
                .get::<watt_per_meter_kelvin>();
            let rho = air.density(tf, pa).unwrap().get::<kilogram_per_cubic_meter>();
            let mu = air.dynamic_viscosity(tf, pa).unwrap().get::<pascal_second>();

            let dt = tw.get::<kelvin>() - ta.get::<kelvin>();
            let nu = settings.overheat_ratio * e * i0.get::<ampere>() / (pr.cbrt() * k * dt);
            let re = (nu / A).powf(1.0 / B);

            CalibrationPoint {
                voltage,
                velocity: Velocity::new::<meter_per_second>(re * mu / rho),
                ambient_temperature: ta,
                ambient_pressure: pa,
            }
        })
        .collect()
}

fn fitted() -> HotWireCalibration {
    HotWireCalibration::fit(
        &simulated_run(),
        Thermistor::default(),
        Gas::air(),
        CalibrationSettings::default(),
    )
    .expect("simulated run should fit")
}

#[test]
fn fit_recovers_simulated_power_law() {
    let coefficients = fitted().coefficients();

    assert_relative_eq!(coefficients.a, A, max_relative = 1e-6);
    assert_relative_eq!(coefficients.b, B, max_relative = 1e-6);
}

#[test]
fn simulated_velocities_span_a_tunnel_range() {
    let points = simulated_run();
    let slowest = points[0].velocity.get::<meter_per_second>();
    let fastest = points[points.len() - 1].velocity.get::<meter_per_second>();

    assert!(slowest > 0.1);
    assert!(fastest > 2.0 * slowest);
}

#[test]
fn symmetric_query_reproduces_reference_velocities() {
    let calibration = fitted();

    for point in simulated_run() {
        let conditions = Conditions::default()
            .with_ambient_temperature(point.ambient_temperature)
            .with_ambient_pressure(point.ambient_pressure)
            .with_film_temperature(FilmTemperature::Mean);

        let u = calibration.value_with(point.voltage, &conditions).unwrap();

        assert_relative_eq!(
            u.get::<meter_per_second>(),
            point.velocity.get::<meter_per_second>(),
            max_relative = 1e-6
        );
    }
}

#[test]
fn default_query_uses_sum_film_temperature() {
    let calibration = fitted();
    let voltage = ElectricPotential::new::<volt>(2.0);

    let default = calibration.value(voltage).unwrap();
    let sum = calibration
        .value_with(
            voltage,
            &Conditions::default().with_film_temperature(FilmTemperature::Sum),
        )
        .unwrap();
    let mean = calibration
        .value_with(
            voltage,
            &Conditions::default().with_film_temperature(FilmTemperature::Mean),
        )
        .unwrap();

    assert_eq!(default, sum);
    assert_ne!(default, mean);
}

#[test]
fn wire_at_ambient_temperature_aborts_the_fit() {
    let thermistor = Thermistor::default();
    let settings = CalibrationSettings::default();

    let points: Vec<CalibrationPoint> = [1.8, 2.0, 2.2]
        .into_iter()
        .enumerate()
        .map(|(i, e)| {
            let voltage = ElectricPotential::new::<volt>(e);
            let tw = thermistor
                .temperature(settings.wire_resistance(voltage, settings.excitation_current))
                .unwrap();
            #[allow(clippy::cast_precision_loss)]
            let velocity = 1.0 + i as f64;
            CalibrationPoint {
                voltage,
                velocity: Velocity::new::<meter_per_second>(velocity),
                ambient_temperature: tw,
                ambient_pressure: Pressure::new::<kilopascal>(93.0),
            }
        })
        .collect();

    let err = HotWireCalibration::fit(&points, thermistor, Gas::air(), settings).unwrap_err();

    assert!(matches!(err, CalibrationError::NonPositiveOverheat { .. }));
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn error_scenarios() {
    let err = PowerLawFit::new(&[1.0, 2.0, 3.0], &[1.0, -1.0, 4.0]).unwrap_err();
    assert!(matches!(err, FitError::NonPositive { .. }));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let err = Thermistor::default()
        .temperature(ElectricalResistance::new::<ohm>(-5.0))
        .unwrap_err();
    assert!(matches!(err, ThermistorError::NonPositiveResistance { .. }));
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn calibration_from_acquisition_files() {
    let adc = AdcConversion::default();
    let to_counts = |e: f64| (e + 0.146) * 4095.0 / 3.3;

    let points: Vec<CalibrationPoint> = simulated_run()
        .into_iter()
        .map(|point| {
            let counts = to_counts(point.voltage.get::<volt>());
            let text = format!(
                "anemometer ready\nIPT\t0\t{}\nIPT\t1\t{}\nIPT\t2\t{}\n",
                counts - 1.0,
                counts,
                counts + 1.0
            );
            let file = SampleFile::parse(text.as_bytes(), DEFAULT_HEADER).unwrap();
            let means = file.column_means().unwrap();

            CalibrationPoint {
                voltage: adc.voltage(means[1]),
                ..point
            }
        })
        .collect();

    let calibration = HotWireCalibration::fit(
        &points,
        Thermistor::default(),
        Gas::air(),
        CalibrationSettings::default(),
    )
    .unwrap();

    assert_relative_eq!(calibration.coefficients().b, B, max_relative = 1e-6);
}

//! Supporting utilities shared by the models in this crate.
//!
//! Everything here is public because it is useful on its own (a thermistor
//! law, gas transport properties, least-squares curve fits), but the APIs
//! are not stable.

pub mod constraint;
pub mod dataset;
pub mod fit;
pub mod thermistor;
pub mod thermo;
pub mod units;

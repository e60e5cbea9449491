//! # Twine Anemometry
//!
//! Hot-wire anemometer calibration models and model-building tools for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A constant-current hot-wire probe reports an excitation voltage. Turning
//! that voltage into a flow velocity takes three physical ingredients, which
//! this crate provides as separate, reusable pieces:
//!
//! - a thermistor law relating wire resistance to wire temperature,
//! - temperature-dependent transport properties of the surrounding gas,
//! - an empirical power law `Nu = a·Re^b` fitted to wind-tunnel data.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations,
//!   including the hot-wire calibration itself.
//! - [`support`]: Supporting utilities used by models (thermistor, gas
//!   properties, curve fits, dataset parsing, units, constraints).
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

mod error;

pub mod models;
pub mod support;

pub use error::ErrorKind;

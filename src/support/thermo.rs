//! Gas transport properties for convective heat-transfer calculations.
//!
//! A hot-wire calibration needs four properties of the surrounding gas at
//! the film temperature: thermal conductivity, Prandtl number, density, and
//! dynamic viscosity. The [`capability::TransportProperties`] trait names
//! them; [`model::Gas`] provides them from simple correlations whose
//! constants come from a [`fluid`] marker such as [`fluid::Air`].

mod error;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;

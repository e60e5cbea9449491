//! Flow velocity measurement models.
//!
//! This module contains models that turn anemometer readings into flow
//! velocities, together with the calibrations they depend on.

pub mod hot_wire;

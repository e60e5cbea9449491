//! Canonical fluid identifiers.
//!
//! A fluid type names a gas and supplies the constants of the
//! [`Gas`](crate::support::thermo::model::Gas) correlations through
//! [`GasFluid`](crate::support::thermo::model::gas::GasFluid).

mod air;

pub use air::Air;

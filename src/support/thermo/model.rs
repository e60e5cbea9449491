//! Transport property models.

pub mod gas;

pub(crate) mod ideal_gas_eos;

pub use gas::Gas;

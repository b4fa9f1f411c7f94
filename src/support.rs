//! Supporting utilities used by models.
//!
//! These modules are part of the public API, but their APIs are not stable.

pub mod config;
pub mod constraint;
pub mod thermo;
pub mod transport;
pub mod units;

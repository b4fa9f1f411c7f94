//! Transport property models.
//!
//! This module provides [`twine_core::Model`] adapters that evaluate transport
//! properties at a pressure and temperature.

pub mod sutherland;

use uom::si::f64::{Pressure, ThermodynamicTemperature};

pub use sutherland::SutherlandTransport;

/// The state at which transport properties are evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportInput {
    pub pressure: Pressure,
    pub temperature: ThermodynamicTemperature,
}

impl TransportInput {
    #[must_use]
    pub fn new(pressure: Pressure, temperature: ThermodynamicTemperature) -> Self {
        Self {
            pressure,
            temperature,
        }
    }
}

//! Ideal gas equation of state helpers.
//!
//! These functions implement the ideal gas equation of state:
//! `p = ρ·R·T`.

use uom::si::f64::{MassDensity, Pressure, ThermodynamicTemperature};

use crate::support::units::SpecificGasConstant;

/// Computes density using the ideal gas equation of state.
#[must_use]
pub(crate) fn density(
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    gas_constant: SpecificGasConstant,
) -> MassDensity {
    pressure / (gas_constant * temperature)
}

//! Transport property models.
//!
//! A transport model wraps a thermodynamic model and adds dynamic viscosity,
//! thermal conductivity, and thermal diffusivity of enthalpy as closed-form
//! functions of pressure and temperature.

pub mod sutherland;

use uom::si::f64::{DynamicViscosity, ThermalConductivity};

use crate::support::units::EnthalpyDiffusivity;

pub use sutherland::{Sutherland, SutherlandCoefficients, SutherlandFluid};

/// Transport properties evaluated at a single state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransportProperties {
    /// Dynamic viscosity.
    pub mu: DynamicViscosity,
    /// Thermal conductivity.
    pub kappa: ThermalConductivity,
    /// Thermal diffusivity of enthalpy, `κ/cp`.
    pub alphah: EnthalpyDiffusivity,
}

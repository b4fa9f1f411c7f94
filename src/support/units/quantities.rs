use uom::{
    si::{ISQ, Quantity, SI, f64::DynamicViscosity},
    typenum::{N1, N2, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Thermal diffusivity of enthalpy (`κ/cp`), kg/m·s in SI.
///
/// Dimensionally identical to dynamic viscosity.
pub type EnthalpyDiffusivity = DynamicViscosity;

/// Universal gas constant, J/mol·K.
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314_462_618;

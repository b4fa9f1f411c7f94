//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, pressure,
//! viscosity). This module provides quantity aliases that are useful for
//! property modeling but aren't named in [`uom`].

mod quantities;

pub use quantities::{EnthalpyDiffusivity, SpecificGasConstant, UNIVERSAL_GAS_CONSTANT};

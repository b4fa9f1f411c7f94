//! Capability traits required of thermodynamic models.

mod base;
mod mixing;
mod properties;

pub use base::ThermoModel;
pub use mixing::{Mix, SMALL_WEIGHT};
pub use properties::HasCp;

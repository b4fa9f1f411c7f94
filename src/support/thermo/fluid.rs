//! Canonical fluid identifiers.
//!
//! A fluid type names a substance, and each model defines how that name is
//! interpreted through trait implementations: perfect-gas constants via
//! [`PerfectGasFluid`](crate::support::thermo::model::perfect_gas::PerfectGasFluid)
//! and Sutherland coefficients via
//! [`SutherlandFluid`](crate::support::transport::SutherlandFluid).

mod air;
mod carbon_dioxide;
mod nitrogen;

pub use air::Air;
pub use carbon_dioxide::CarbonDioxide;
pub use nitrogen::Nitrogen;

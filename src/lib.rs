//! # Twine Transport
//!
//! Transport property models for [Twine](https://github.com/isentropic-dev/twine).
//!
//! The centerpiece is [`Sutherland`](support::transport::Sutherland), which
//! evaluates dynamic viscosity with Sutherland's two-parameter law and derives
//! thermal conductivity and enthalpy diffusivity from a fixed Prandtl number and
//! the `cp` of a wrapped thermodynamic model.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters over the transport models.
//! - [`support`]: Transport models, the thermodynamic models they wrap,
//!   configuration records, and supporting utilities.
//!
//! ## Example
//!
//! ```
//! use twine_transport::support::{
//!     thermo::{fluid::Air, model::PerfectGas},
//!     transport::Sutherland,
//! };
//! use uom::si::{
//!     dynamic_viscosity::pascal_second,
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::pascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let air = Sutherland::<PerfectGas>::for_fluid::<Air>().unwrap();
//! let mu = air.mu(
//!     Pressure::new::<pascal>(101_325.0),
//!     ThermodynamicTemperature::new::<kelvin>(300.0),
//! );
//! assert!((mu.get::<pascal_second>() - 1.846e-5).abs() < 1e-7);
//! ```

pub mod models;
pub mod support;

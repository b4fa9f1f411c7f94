//! Public Twine models.
//!
//! Each model here is a thin [`twine_core::Model`] adapter that delegates to a
//! property model in [`crate::support`]. The adapters exist so transport
//! evaluation can be composed with other Twine models and observers; code that
//! only needs the closed-form properties can use the support types directly.

pub mod transport;

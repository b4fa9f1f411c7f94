//! Thermodynamic models wrapped by transport models.
//!
//! Transport models only need a small slice of a thermodynamic model: its
//! heat capacity, its identity, and how it combines with other species. Those
//! needs are expressed as capability traits in [`capability`], so any
//! thermodynamic model implementing them can be wrapped.

pub mod capability;
pub mod fluid;
pub mod model;

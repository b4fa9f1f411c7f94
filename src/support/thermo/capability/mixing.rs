use super::ThermoModel;

/// Combined weights with a magnitude below this are treated as zero.
pub const SMALL_WEIGHT: f64 = 1e-15;

/// Weighted combination of species into mixtures.
///
/// Each instance carries a weight (e.g., a mass fraction). Mixing two
/// instances adds their weights and blends their properties by each
/// operand's share of the combined weight.
pub trait Mix: ThermoModel {
    /// Returns the mixing weight of this instance.
    fn weight(&self) -> f64;

    /// Accumulates `other` into `self`.
    ///
    /// If the combined weight is below [`SMALL_WEIGHT`], only the weight is
    /// updated and the intensive properties are left as they were.
    fn mix_in(&mut self, other: &Self);

    /// Multiplies the mixing weight by `factor`, leaving intensive properties unchanged.
    fn scale(&mut self, factor: f64);
}

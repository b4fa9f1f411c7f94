/// Identity shared by all thermodynamic models.
pub trait ThermoModel: Clone {
    /// Returns the model's type name, used for runtime model selection.
    fn type_name() -> String;

    /// Returns the name of the species or mixture this instance describes.
    fn name(&self) -> &str;

    /// Returns a copy relabeled as `name`.
    #[must_use]
    fn renamed(&self, name: &str) -> Self;
}

use super::{Constraint, ConstraintError};

/// Marker type enforcing that a finite value is strictly positive.
///
/// # Examples
///
/// ```
/// use twine_transport::support::constraint::{Constraint, StrictlyPositive};
///
/// assert!(StrictlyPositive::check(&28.96).is_ok());
/// assert!(StrictlyPositive::check(&0.0).is_err());
/// assert!(StrictlyPositive::check(&f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl Constraint<f64> for StrictlyPositive {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else if *value < 0.0 {
            Err(ConstraintError::Negative)
        } else if *value == 0.0 {
            Err(ConstraintError::Zero)
        } else {
            Ok(())
        }
    }
}

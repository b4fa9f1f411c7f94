use super::{Constraint, ConstraintError};

/// Marker type enforcing that a finite value is zero or greater.
///
/// # Examples
///
/// ```
/// use twine_transport::support::constraint::{Constraint, NonNegative};
///
/// assert!(NonNegative::check(&0.0).is_ok());
/// assert!(NonNegative::check(&0.25).is_ok());
/// assert!(NonNegative::check(&-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl Constraint<f64> for NonNegative {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else if *value < 0.0 {
            Err(ConstraintError::Negative)
        } else {
            Ok(())
        }
    }
}

use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Every quantity that ends up as a divisor in the sizing or cooling
/// equations (copper section, cooling surface, characteristic length,
/// line voltage) is carried as a `Constrained<T, StrictlyPositive>`.
///
/// # Examples
///
/// ```
/// use transformer_design::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Length, length::meter};
///
/// let height = StrictlyPositive::new(Length::new::<meter>(1.2)).unwrap();
/// assert_eq!(height.into_inner().get::<meter>(), 1.2);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        area::{square_centimeter, square_meter},
        f64::Area,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(1.0).is_ok());
        assert!(StrictlyPositive::new(1e-12).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn section_areas() {
        let core = Area::new::<square_centimeter>(60.0);
        let core = StrictlyPositive::new(core).unwrap();
        assert_eq!(core.as_ref().get::<square_centimeter>(), 60.0);

        assert!(StrictlyPositive::new(Area::new::<square_meter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Area::new::<square_meter>(-0.5)).is_err());
    }
}

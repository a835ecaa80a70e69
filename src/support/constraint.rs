//! Type-level numeric constraints checked once, at construction.
//!
//! Transformer sizing and cooling calculations divide by section areas,
//! surfaces and characteristic lengths. Wrapping those inputs in
//! [`Constrained<T, C>`] moves the positivity check to the edge of the API,
//! so the arithmetic itself never sees a zero or negative divisor.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero (areas, lengths, voltages)
//! - [`NonNegative`]: zero or greater (dissipated power, weights)
//! - [`UnitInterval`]: closed unit interval `0 ≤ x ≤ 1` (emissivity)
//!
//! Each marker provides an associated `new()` constructor
//! (e.g., `StrictlyPositive::new(5.0)`).

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitInterval};

/// A numeric invariant enforced when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use transformer_design::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{area::square_millimeter, f64::Area};
///
/// let copper = Area::new::<square_millimeter>(240.0);
/// let section = Constrained::<_, StrictlyPositive>::new(copper).unwrap();
/// assert_eq!(section.into_inner().get::<square_millimeter>(), 240.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Wraps a value the caller knows satisfies `C`.
    ///
    /// Reserved for literal defaults inside the crate.
    pub(crate) fn new_unchecked(value: T) -> Self {
        debug_assert!(C::check(&value).is_ok());
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

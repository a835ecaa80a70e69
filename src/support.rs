//! Supporting utilities used by the transformer models.
//!
//! - [`constraint`]: type-level numeric invariants (strictly positive areas, etc.)
//! - [`units`]: extensions to [`uom`]

pub mod constraint;
pub mod units;

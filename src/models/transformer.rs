//! Distribution transformer design models.
//!
//! - [`sizing`]: weighted constrained optimization of the core and copper sections.
//! - [`cooling`]: steady-state temperature rise of the tank under natural
//!   convection, radiation and oil cooling.
//!
//! The two are independent. A design pipeline typically sizes the unit first,
//! then refines the temperature-rise estimate of the chosen design with
//! [`cooling`], which uses a more detailed convective model than the closed-form
//! hotspot proxy that constrains the optimizer.

pub mod cooling;
pub mod sizing;

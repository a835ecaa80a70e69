//! # Transformer Design
//!
//! Sizing and thermal models for three-phase distribution transformers.
//!
//! ## Crate layout
//!
//! - [`models`]: the transformer models.
//!   - [`models::transformer::sizing`]: weighted constrained optimization of
//!     the core and copper cross-sections under a hotspot temperature limit.
//!   - [`models::transformer::cooling`]: steady-state temperature rise under
//!     natural convection, radiation and oil cooling.
//! - [`support`]: type-level numeric constraints and [`uom`] extensions used
//!   by the models.
//!
//! Physical inputs and outputs are [`uom`] quantities. Inputs that divide the
//! calculations (areas, lengths, voltages) are wrapped in
//! [`support::constraint::Constrained`] so invalid values are rejected once,
//! at the API boundary.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` for solver progress, `warn`
//! for failures and iteration limits, `trace` per fixed-point step) and never
//! installs a subscriber.
//!
//! Modules in [`support`] are public because they are useful alongside the
//! models, but their APIs are not stable.

pub mod models;
pub mod support;

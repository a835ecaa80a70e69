//! Weighted constrained sizing of the core and copper sections.
//!
//! The design variables are the core leg cross-section (cm²) and the winding
//! conductor cross-section (mm²). For a candidate pair, [`TransformerDesign`]
//! evaluates active-part mass, material cost, rated-load losses and efficiency.
//! [`optimize`] scalarizes those metrics with an [`ObjectiveProfile`] and
//! minimizes the result with COBYLA inside the section bounds, subject to a
//! hotspot temperature limit (and optionally a conductor current density limit).
//!
//! Two objective profiles are available:
//!
//! - [`SizingConfig::normalized`] (the default): four weights, each metric
//!   divided by a fixed scale from [`NormalizationScales`].
//! - [`SizingConfig::three_term`]: mass, cost and efficiency weights applied to
//!   raw metrics, with the [`DesignConstants::conservative`] loss calibration.
//!
//! # Example
//!
//! ```
//! use transformer_design::models::transformer::sizing::{optimize, DesignSpec, SizingConfig};
//! use uom::si::{electric_potential::volt, f64::{ElectricPotential, Power}, power::kilowatt};
//!
//! let spec = DesignSpec::new(
//!     ElectricPotential::new::<volt>(20_000.0),
//!     ElectricPotential::new::<volt>(400.0),
//!     Power::new::<kilowatt>(250.0),
//! )
//! .unwrap();
//!
//! let best = optimize(&spec, &SizingConfig::default()).unwrap();
//! assert!(best.max_temperature_c <= 90.01);
//! ```

mod core;

pub use self::core::{
    DesignBounds, DesignConstants, DesignMetrics, DesignSpec, DesignVariables, HotspotProxy,
    NormalizationScales, ObjectiveProfile, ObjectiveWeights, OptimizationResult, SectionRange,
    SizingConfig, SizingError, ThreeTermWeights, TransformerDesign,
};

/// Finds the section pair minimizing the configured objective.
///
/// The initial guess is clamped into the bounds before the search starts.
/// Every call is independent: identical inputs give identical results.
///
/// # Errors
///
/// Returns [`SizingError::InvalidDomainInput`] or [`SizingError::InvalidBounds`]
/// if the configuration is unusable, and [`SizingError::OptimizationFailure`]
/// if the solver does not converge to a feasible point inside the bounds.
pub fn optimize(
    spec: &DesignSpec,
    config: &SizingConfig,
) -> Result<OptimizationResult, SizingError> {
    core::optimize(spec, config)
}

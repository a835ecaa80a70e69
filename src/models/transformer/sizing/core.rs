//! Objective model, scalarization and constrained search for section sizing.

mod config;
mod constants;
mod error;
mod model;
mod objective;
mod optimize;
mod profile;
mod results;
mod spec;
mod variables;

pub use config::SizingConfig;
pub use constants::{DesignConstants, HotspotProxy};
pub use error::SizingError;
pub use model::TransformerDesign;
pub use objective::DesignMetrics;
pub use profile::{NormalizationScales, ObjectiveProfile, ObjectiveWeights, ThreeTermWeights};
pub use results::OptimizationResult;
pub use spec::DesignSpec;
pub use variables::{DesignBounds, DesignVariables, SectionRange};

pub(super) use optimize::optimize;

#[cfg(test)]
mod test_support;

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{Mass, Power, Ratio};

use super::{DesignConstants, DesignMetrics, DesignSpec, DesignVariables, objective};

/// Objective model of a transformer with a fixed rating.
///
/// Maps a [`DesignVariables`] pair to its [`DesignMetrics`]. Evaluation cannot
/// fail because the variables are validated when they are built.
///
/// # Example
///
/// ```
/// use transformer_design::models::transformer::sizing::{
///     DesignConstants, DesignSpec, DesignVariables, TransformerDesign,
/// };
/// use twine_core::Model;
/// use uom::si::{
///     area::{square_centimeter, square_millimeter},
///     electric_potential::volt,
///     f64::{Area, ElectricPotential, Power},
///     power::kilowatt,
///     ratio::ratio,
/// };
///
/// let spec = DesignSpec::new(
///     ElectricPotential::new::<volt>(20_000.0),
///     ElectricPotential::new::<volt>(400.0),
///     Power::new::<kilowatt>(250.0),
/// )
/// .unwrap();
/// let model = TransformerDesign::new(spec, DesignConstants::default());
///
/// let design = DesignVariables::new(
///     Area::new::<square_centimeter>(60.0),
///     Area::new::<square_millimeter>(200.0),
/// )
/// .unwrap();
///
/// let Ok(metrics) = model.call(&design);
/// let eta = metrics.efficiency.get::<ratio>();
/// assert!(eta > 0.0 && eta < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformerDesign {
    spec: DesignSpec,
    constants: DesignConstants,
}

impl TransformerDesign {
    #[must_use]
    pub fn new(spec: DesignSpec, constants: DesignConstants) -> Self {
        Self { spec, constants }
    }

    #[must_use]
    pub fn spec(&self) -> &DesignSpec {
        &self.spec
    }

    /// Active-part mass; non-decreasing in both sections.
    #[must_use]
    pub fn mass(&self, design: &DesignVariables) -> Mass {
        objective::mass(design, &self.constants)
    }

    /// Material cost; non-decreasing in both sections.
    #[must_use]
    pub fn cost(&self, design: &DesignVariables) -> f64 {
        objective::cost(design, &self.constants)
    }

    /// Rated-load losses.
    #[must_use]
    pub fn losses(&self, design: &DesignVariables) -> Power {
        objective::losses(design, &self.spec, &self.constants)
    }

    /// Rated-load efficiency.
    #[must_use]
    pub fn efficiency(&self, design: &DesignVariables) -> Ratio {
        objective::efficiency(design, &self.spec, &self.constants)
    }
}

impl Model for TransformerDesign {
    type Input = DesignVariables;
    type Output = DesignMetrics;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(DesignMetrics::evaluate(input, &self.spec, &self.constants))
    }
}

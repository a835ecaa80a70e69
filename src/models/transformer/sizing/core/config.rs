use uom::si::{
    area::{square_centimeter, square_millimeter},
    electric_current_density::ampere_per_square_meter,
    f64::{Area, ElectricCurrentDensity, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{
    DesignBounds, DesignConstants, DesignVariables, HotspotProxy, ObjectiveProfile, SizingError,
};

/// Conductor sizing rule of thumb, A/m² (3 A/mm²).
const STANDARD_CURRENT_DENSITY: f64 = 3e6;

/// Configuration of a sizing run.
///
/// Use [`SizingConfig::normalized`] or [`SizingConfig::three_term`] to pick
/// an objective variant explicitly; [`Default`] is the normalized one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingConfig {
    /// Objective weights and scaling policy.
    pub profile: ObjectiveProfile,

    /// Material and loss constants of the objective model.
    pub constants: DesignConstants,

    /// Hotspot temperature proxy used by the thermal constraint.
    pub hotspot: HotspotProxy,

    /// Upper limit of the proxy hotspot temperature.
    pub temperature_limit: ThermodynamicTemperature,

    /// Maximum conductor current density, if the ampacity constraint is active.
    ///
    /// When set, the copper section must carry the secondary line current:
    /// `copper ≥ I2 / J_max`. Both named profiles start at 3 A/mm².
    pub current_density_limit: Option<ElectricCurrentDensity>,

    /// Box bounds of the search.
    pub bounds: DesignBounds,

    /// Starting point, clamped into `bounds` before the search.
    pub initial_guess: DesignVariables,

    /// Relative tolerance on the objective (and on the design variables).
    pub objective_tol: f64,

    /// Objective evaluation budget.
    pub max_evals: usize,

    /// Initial trust-region radius, as a fraction of each bound width.
    pub initial_step: f64,

    /// Largest constraint violation accepted at the optimum, in the
    /// constraint's own unit (°C for temperature, mm² for ampacity).
    pub feasibility_tol: f64,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self::normalized()
    }
}

impl SizingConfig {
    /// Four-weight objective normalized by fixed scales, standard loss calibration.
    #[must_use]
    pub fn normalized() -> Self {
        Self {
            profile: ObjectiveProfile::default(),
            constants: DesignConstants::standard(),
            hotspot: HotspotProxy::default(),
            temperature_limit: ThermodynamicTemperature::new::<degree_celsius>(90.0),
            current_density_limit: Some(ElectricCurrentDensity::new::<ampere_per_square_meter>(
                STANDARD_CURRENT_DENSITY,
            )),
            bounds: DesignBounds::default(),
            initial_guess: DesignVariables::new_unchecked(
                Area::new::<square_centimeter>(60.0),
                Area::new::<square_millimeter>(200.0),
            ),
            objective_tol: 1e-6,
            max_evals: 2_000,
            initial_step: 0.1,
            feasibility_tol: 1e-3,
        }
    }

    /// Three-weight objective on raw metrics, conservative loss calibration.
    #[must_use]
    pub fn three_term() -> Self {
        Self {
            profile: ObjectiveProfile::three_term(),
            constants: DesignConstants::conservative(),
            ..Self::normalized()
        }
    }

    /// Replaces the current density limit of the ampacity constraint.
    #[must_use]
    pub fn with_current_density_limit(mut self, limit: ElectricCurrentDensity) -> Self {
        self.current_density_limit = Some(limit);
        self
    }

    /// Drops the ampacity constraint, leaving only the hotspot limit.
    #[must_use]
    pub fn without_current_density_limit(mut self) -> Self {
        self.current_density_limit = None;
        self
    }

    /// Replaces the search bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: DesignBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Checks every numeric setting before a run.
    pub(super) fn validate(&self) -> Result<(), SizingError> {
        self.profile.validate()?;

        StrictlyPositive::new(self.objective_tol)
            .map_err(SizingError::invalid("objective tolerance"))?;
        StrictlyPositive::new(self.initial_step).map_err(SizingError::invalid("initial step"))?;
        StrictlyPositive::new(self.max_evals)
            .map_err(SizingError::invalid("evaluation budget"))?;
        NonNegative::new(self.feasibility_tol)
            .map_err(SizingError::invalid("feasibility tolerance"))?;
        if let Some(limit) = self.current_density_limit {
            StrictlyPositive::new(limit)
                .map_err(SizingError::invalid("current density limit"))?;
        }
        Ok(())
    }

    /// Minimum copper section (mm²) imposed by the ampacity constraint, if active.
    pub(super) fn min_copper_mm2(&self, secondary_current_a: f64) -> Option<f64> {
        self.current_density_limit.map(|j| {
            let amps_per_mm2 = j.get::<ampere_per_square_meter>() * 1e-6;
            secondary_current_a / amps_per_mm2
        })
    }
}

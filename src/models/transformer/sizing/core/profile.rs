//! Scalarization of the design metrics into a single objective.

use uom::si::{
    f64::{Mass, Power},
    mass::kilogram,
    power::watt,
    ratio::ratio,
};

use crate::support::constraint::{NonNegative, StrictlyPositive};

use super::{DesignMetrics, SizingError};

/// Weights of the normalized four-term objective.
///
/// Intended to sum to one, which is not enforced: unnormalized weights only
/// rescale the objective. Each weight must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectiveWeights {
    pub mass: f64,
    pub cost: f64,

    /// Applied to `1 − η`, so a larger weight favors high efficiency.
    pub efficiency: f64,

    pub losses: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            mass: 0.25,
            cost: 0.25,
            efficiency: 0.25,
            losses: 0.25,
        }
    }
}

/// Weights of the three-term objective (no explicit losses term).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeTermWeights {
    pub mass: f64,
    pub cost: f64,
    pub efficiency: f64,
}

impl Default for ThreeTermWeights {
    fn default() -> Self {
        Self {
            mass: 0.4,
            cost: 0.4,
            efficiency: 0.2,
        }
    }
}

/// Fixed scales dividing each term of the normalized objective.
///
/// These are heuristics chosen so each term is of order one for typical
/// distribution transformers; tune them when sizing far outside that range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationScales {
    pub mass: Mass,
    pub cost: f64,
    pub losses: Power,
}

impl Default for NormalizationScales {
    fn default() -> Self {
        Self {
            mass: Mass::new::<kilogram>(1_000.0),
            cost: 10_000.0,
            losses: Power::new::<watt>(10_000.0),
        }
    }
}

/// How design metrics are combined into the minimized scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectiveProfile {
    /// `w_m·m/M + w_c·c/C + w_η·(1 − η) + w_l·L/L₀`
    Normalized {
        weights: ObjectiveWeights,
        scales: NormalizationScales,
    },

    /// `w_m·m[kg] + w_c·c + w_η·(1 − η)`
    ThreeTerm { weights: ThreeTermWeights },
}

impl Default for ObjectiveProfile {
    fn default() -> Self {
        Self::Normalized {
            weights: ObjectiveWeights::default(),
            scales: NormalizationScales::default(),
        }
    }
}

impl ObjectiveProfile {
    /// Default three-term profile.
    #[must_use]
    pub fn three_term() -> Self {
        Self::ThreeTerm {
            weights: ThreeTermWeights::default(),
        }
    }

    /// Combines the metrics of one design into the objective value.
    #[must_use]
    pub fn scalarize(&self, metrics: &DesignMetrics) -> f64 {
        let mass_kg = metrics.mass.get::<kilogram>();
        let inefficiency = 1.0 - metrics.efficiency.get::<ratio>();

        match self {
            Self::Normalized { weights, scales } => {
                weights.mass * (mass_kg / scales.mass.get::<kilogram>())
                    + weights.cost * (metrics.cost / scales.cost)
                    + weights.efficiency * inefficiency
                    + weights.losses * (metrics.losses.get::<watt>() / scales.losses.get::<watt>())
            }
            Self::ThreeTerm { weights } => {
                weights.mass * mass_kg + weights.cost * metrics.cost + weights.efficiency * inefficiency
            }
        }
    }

    /// Checks that weights are non-negative and scales strictly positive.
    pub(super) fn validate(&self) -> Result<(), SizingError> {
        let weight = |name, value: f64| {
            NonNegative::new(value)
                .map(|_| ())
                .map_err(SizingError::invalid(name))
        };

        match self {
            Self::Normalized { weights, scales } => {
                weight("mass weight", weights.mass)?;
                weight("cost weight", weights.cost)?;
                weight("efficiency weight", weights.efficiency)?;
                weight("losses weight", weights.losses)?;
                StrictlyPositive::new(scales.mass).map_err(SizingError::invalid("mass scale"))?;
                StrictlyPositive::new(scales.cost).map_err(SizingError::invalid("cost scale"))?;
                StrictlyPositive::new(scales.losses)
                    .map_err(SizingError::invalid("losses scale"))?;
            }
            Self::ThreeTerm { weights } => {
                weight("mass weight", weights.mass)?;
                weight("cost weight", weights.cost)?;
                weight("efficiency weight", weights.efficiency)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::Ratio;

    fn metrics() -> DesignMetrics {
        DesignMetrics {
            mass: Mass::new::<kilogram>(500.0),
            cost: 2_000.0,
            losses: Power::new::<watt>(5_000.0),
            efficiency: Ratio::new::<ratio>(0.98),
        }
    }

    #[test]
    fn normalized_objective() {
        let profile = ObjectiveProfile::default();

        // 0.25 · (0.5 + 0.2 + 0.02 + 0.5)
        assert_relative_eq!(profile.scalarize(&metrics()), 0.305, epsilon = 1e-12);
    }

    #[test]
    fn three_term_objective_uses_raw_metrics() {
        let profile = ObjectiveProfile::three_term();

        // 0.4 · 500 + 0.4 · 2000 + 0.2 · 0.02
        assert_relative_eq!(profile.scalarize(&metrics()), 1000.004, epsilon = 1e-9);
    }

    #[test]
    fn unnormalized_weights_only_rescale() {
        let half = ObjectiveProfile::default();
        let double = ObjectiveProfile::Normalized {
            weights: ObjectiveWeights {
                mass: 0.5,
                cost: 0.5,
                efficiency: 0.5,
                losses: 0.5,
            },
            scales: NormalizationScales::default(),
        };

        assert_relative_eq!(
            double.scalarize(&metrics()),
            2.0 * half.scalarize(&metrics()),
            epsilon = 1e-12
        );
        assert!(double.validate().is_ok());
    }

    #[test]
    fn rejects_negative_weights_and_zero_scales() {
        let negative = ObjectiveProfile::ThreeTerm {
            weights: ThreeTermWeights {
                cost: -0.1,
                ..ThreeTermWeights::default()
            },
        };
        assert!(matches!(
            negative.validate(),
            Err(SizingError::InvalidDomainInput {
                quantity: "cost weight",
                ..
            })
        ));

        let zero_scale = ObjectiveProfile::Normalized {
            weights: ObjectiveWeights::default(),
            scales: NormalizationScales {
                cost: 0.0,
                ..NormalizationScales::default()
            },
        };
        assert!(zero_scale.validate().is_err());
    }
}

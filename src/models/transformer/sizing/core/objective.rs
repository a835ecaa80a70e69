//! Mass, cost, loss and efficiency of a candidate design.
//!
//! All functions are total on validated [`DesignVariables`], whose sections
//! are strictly positive by construction.

use uom::si::{
    area::{square_centimeter, square_meter, square_millimeter},
    f64::{Mass, Power, Ratio},
    length::meter,
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    power::watt,
    ratio::ratio,
};

use super::{DesignConstants, DesignSpec, DesignVariables};

/// Objective metrics of one design, at rated load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignMetrics {
    /// Active-part mass (core steel plus winding copper).
    pub mass: Mass,

    /// Material cost, in the currency of the unit prices.
    pub cost: f64,

    /// No-load plus load losses.
    pub losses: Power,

    /// `P / (P + losses)`, in (0, 1).
    pub efficiency: Ratio,
}

impl DesignMetrics {
    pub(super) fn evaluate(
        design: &DesignVariables,
        spec: &DesignSpec,
        constants: &DesignConstants,
    ) -> Self {
        let losses = losses(design, spec, constants);
        Self {
            mass: mass(design, constants),
            cost: cost(design, constants),
            losses,
            efficiency: efficiency_from_losses(spec, losses),
        }
    }
}

/// Core steel mass, in kg.
fn steel_kg(design: &DesignVariables, constants: &DesignConstants) -> f64 {
    design.core_section().get::<square_meter>()
        * constants.core_stack_depth.get::<meter>()
        * constants.steel_density.get::<kilogram_per_cubic_meter>()
}

/// Winding copper mass, in kg.
fn copper_kg(design: &DesignVariables, constants: &DesignConstants) -> f64 {
    design.copper_section().get::<square_meter>()
        * constants.winding_length.get::<meter>()
        * constants.copper_density.get::<kilogram_per_cubic_meter>()
}

/// Active-part mass, linear in both sections.
pub(super) fn mass(design: &DesignVariables, constants: &DesignConstants) -> Mass {
    Mass::new::<kilogram>(steel_kg(design, constants) + copper_kg(design, constants))
}

/// Material cost, linear in both sections.
pub(super) fn cost(design: &DesignVariables, constants: &DesignConstants) -> f64 {
    steel_kg(design, constants) * constants.steel_price_per_kg
        + copper_kg(design, constants) * constants.copper_price_per_kg
}

/// Rated-load losses.
///
/// The no-load term grows as `core^1.5`; the load term is `∝ P² / copper`.
pub(super) fn losses(
    design: &DesignVariables,
    spec: &DesignSpec,
    constants: &DesignConstants,
) -> Power {
    let core_cm2 = design.core_section().get::<square_centimeter>();
    let copper_mm2 = design.copper_section().get::<square_millimeter>();
    let power_w = spec.rated_power_w();

    let no_load = constants.core_loss_coefficient * core_cm2.powf(1.5);
    let load = constants.copper_loss_coefficient * power_w * power_w / copper_mm2;

    Power::new::<watt>(no_load + load)
}

/// Rated-load efficiency, `P / (P + losses)`.
pub(super) fn efficiency(
    design: &DesignVariables,
    spec: &DesignSpec,
    constants: &DesignConstants,
) -> Ratio {
    efficiency_from_losses(spec, losses(design, spec, constants))
}

fn efficiency_from_losses(spec: &DesignSpec, losses: Power) -> Ratio {
    let power_w = spec.rated_power_w();
    Ratio::new::<ratio>(power_w / (power_w + losses.get::<watt>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::transformer::sizing::core::test_support::{design, spec_250_kva};

    #[test]
    fn mass_and_cost_at_reference_point() {
        let constants = DesignConstants::standard();
        let d = design(60.0, 200.0);

        // 60 cm² · 30 cm · 7.6 g/cm³ + 200 mm² · 2 m · 8.9 g/cm³
        assert_relative_eq!(mass(&d, &constants).get::<kilogram>(), 17.24, epsilon = 1e-9);
        assert_relative_eq!(cost(&d, &constants), 13.68 * 2.0 + 3.56 * 8.0, epsilon = 1e-9);
    }

    #[test]
    fn mass_and_cost_grow_with_both_sections() {
        let constants = DesignConstants::standard();
        let sections = [10.0, 35.0, 80.0, 150.0, 200.0];

        for pair in sections.windows(2) {
            let (small, large) = (pair[0], pair[1]);

            let by_core = (design(small, 200.0), design(large, 200.0));
            assert!(mass(&by_core.1, &constants) >= mass(&by_core.0, &constants));
            assert!(cost(&by_core.1, &constants) >= cost(&by_core.0, &constants));

            let by_copper = (design(60.0, small * 5.0), design(60.0, large * 5.0));
            assert!(mass(&by_copper.1, &constants) >= mass(&by_copper.0, &constants));
            assert!(cost(&by_copper.1, &constants) >= cost(&by_copper.0, &constants));
        }
    }

    #[test]
    fn losses_fall_with_copper_and_rise_with_core() {
        let constants = DesignConstants::standard();
        let spec = spec_250_kva();

        let thin = losses(&design(60.0, 100.0), &spec, &constants);
        let thick = losses(&design(60.0, 400.0), &spec, &constants);
        assert!(thick < thin);

        let small_core = losses(&design(20.0, 200.0), &spec, &constants);
        let large_core = losses(&design(120.0, 200.0), &spec, &constants);
        assert!(large_core > small_core);

        // 1.1 · 60^1.5 + 0.006 · 250000² / 200
        let expected = 1.1 * 60.0_f64.powf(1.5) + 0.006 * 250_000.0_f64.powi(2) / 200.0;
        assert_relative_eq!(
            losses(&design(60.0, 200.0), &spec, &constants).get::<watt>(),
            expected,
            max_relative = 1e-12
        );
    }

    #[test]
    fn efficiency_is_a_fraction_of_rated_power() {
        let constants = DesignConstants::standard();
        let spec = spec_250_kva();

        for (core, copper) in [(10.0, 50.0), (60.0, 200.0), (200.0, 1000.0), (0.5, 5000.0)] {
            let d = design(core, copper);
            let eta = efficiency(&d, &spec, &constants).get::<ratio>();
            let p = spec.rated_power_w();
            let l = losses(&d, &spec, &constants).get::<watt>();

            assert!(eta > 0.0 && eta < 1.0);
            assert_relative_eq!(eta, p / (p + l), max_relative = 1e-12);
        }
    }

    #[test]
    fn metrics_bundle_matches_individual_functions() {
        let constants = DesignConstants::conservative();
        let spec = spec_250_kva();
        let d = design(45.0, 320.0);

        let metrics = DesignMetrics::evaluate(&d, &spec, &constants);
        assert_eq!(metrics.mass, mass(&d, &constants));
        assert_eq!(metrics.cost, cost(&d, &constants));
        assert_eq!(metrics.losses, losses(&d, &spec, &constants));
        assert_eq!(metrics.efficiency, efficiency(&d, &spec, &constants));
    }
}

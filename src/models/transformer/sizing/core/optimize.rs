//! Constrained minimization of the scalarized objective with COBYLA.

use cobyla::{Func, RhoBeg, StopTols, SuccessStatus, minimize};
use tracing::{debug, warn};
use twine_core::Model;
use uom::si::{electric_current::ampere, thermodynamic_temperature::degree_celsius};

use super::{DesignSpec, OptimizationResult, SizingConfig, SizingError, TransformerDesign};

/// Runs the constrained search and evaluates the optimum.
///
/// Constraints follow the `g(x) ≥ 0` convention:
///
/// - hotspot: `limit − T_proxy(core, copper) ≥ 0`
/// - ampacity (unless disabled): `copper − I2 / J_max ≥ 0`
pub(crate) fn optimize(
    spec: &DesignSpec,
    config: &SizingConfig,
) -> Result<OptimizationResult, SizingError> {
    config.validate()?;

    let model = TransformerDesign::new(*spec, config.constants);
    let bounds = config.bounds.to_solver();
    let x0 = config.bounds.clamp(config.initial_guess).to_solver();
    let limit_c = config.temperature_limit.get::<degree_celsius>();
    let min_copper = config.min_copper_mm2(spec.secondary_current().get::<ampere>());

    debug!(
        rated_power_w = spec.rated_power_w(),
        ?x0,
        ?bounds,
        ?min_copper,
        "starting transformer sizing"
    );

    // Trial points are projected onto the box before evaluation.
    let objective = |x: &[f64], _: &mut ()| -> f64 {
        let Ok(metrics) = model.call(&config.bounds.project(x));
        config.profile.scalarize(&metrics)
    };
    let hotspot = |x: &[f64], _: &mut ()| limit_c - config.hotspot.temperature_c(x[0], x[1]);
    let ampacity = |x: &[f64], _: &mut ()| x[1] - min_copper.unwrap_or(0.0);

    let mut constraints: Vec<&dyn Func<()>> = vec![&hotspot];
    if min_copper.is_some() {
        constraints.push(&ampacity);
    }

    let rhobeg = RhoBeg::Set(
        bounds
            .iter()
            .map(|(lo, hi)| config.initial_step * (hi - lo))
            .collect(),
    );
    let stop_tol = StopTols {
        ftol_rel: config.objective_tol,
        xtol_rel: config.objective_tol,
        ..StopTols::default()
    };

    let outcome = minimize(
        objective,
        &x0,
        &bounds,
        &constraints,
        (),
        config.max_evals,
        rhobeg,
        Some(stop_tol),
    );

    let (status, x, objective_value) = match outcome {
        Ok(converged) => converged,
        Err((status, x, _)) => {
            warn!(?status, ?x, "solver failed");
            return Err(SizingError::failure(format!("solver failed with {status:?}")));
        }
    };

    if matches!(
        status,
        SuccessStatus::MaxEvalReached | SuccessStatus::MaxTimeReached
    ) {
        warn!(?status, ?x, "solver stopped before converging");
        return Err(SizingError::failure(format!(
            "no convergence within {} evaluations ({status:?})",
            config.max_evals
        )));
    }

    let design = config.bounds.project(&x);
    let x = design.to_solver();

    let hotspot_margin = hotspot(&x[..], &mut ());
    if hotspot_margin < -config.feasibility_tol {
        warn!(hotspot_margin, ?x, "no feasible design within bounds");
        return Err(SizingError::failure(format!(
            "no feasible design within bounds: hotspot exceeds {limit_c} °C by {:.3} °C",
            -hotspot_margin
        )));
    }
    if let Some(required) = min_copper {
        let ampacity_margin = ampacity(&x[..], &mut ());
        if ampacity_margin < -config.feasibility_tol {
            warn!(ampacity_margin, ?x, "no feasible design within bounds");
            return Err(SizingError::failure(format!(
                "no feasible design within bounds: copper section {:.3} mm² below the \
                 {required:.3} mm² needed for the secondary current",
                x[1]
            )));
        }
    }

    let Ok(metrics) = model.call(&design);
    let temperature = config.hotspot.temperature(&design);

    debug!(?status, objective = objective_value, ?x, "transformer sizing converged");

    Ok(OptimizationResult::new(&design, &metrics, temperature))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        electric_current_density::ampere_per_square_meter,
        electric_potential::volt,
        f64::{ElectricCurrentDensity, ElectricPotential, Power},
        power::kilowatt,
    };

    use crate::models::transformer::sizing::core::{DesignBounds, test_support::spec_250_kva};

    fn proxy_temperature(result: &OptimizationResult) -> f64 {
        20.0 + 0.03 * (result.core_section_cm2 + result.copper_section_mm2).powf(1.2)
    }

    #[test]
    fn default_run_is_feasible() {
        let result = optimize(&spec_250_kva(), &SizingConfig::default())
            .expect("default sizing should converge");

        assert!(result.max_temperature_c <= 90.0 + 1e-2);
        assert!(proxy_temperature(&result) <= 90.0 + 5e-2);

        assert!((10.0..=200.0).contains(&result.core_section_cm2));
        assert!((50.0..=1000.0).contains(&result.copper_section_mm2));
        assert!(result.efficiency_percent > 0.0 && result.efficiency_percent < 100.0);
    }

    #[test]
    fn losses_drive_copper_to_the_thermal_limit() {
        // Copper losses dominate at 250 kVA, so the optimum sits on the
        // smallest core and the largest copper section the hotspot allows.
        let result = optimize(&spec_250_kva(), &SizingConfig::default()).unwrap();

        let max_sum = (70.0_f64 / 0.03).powf(1.0 / 1.2);
        assert_relative_eq!(result.core_section_cm2, 10.0, epsilon = 0.5);
        assert_relative_eq!(
            result.core_section_cm2 + result.copper_section_mm2,
            max_sum,
            epsilon = 0.5
        );
        assert_relative_eq!(result.max_temperature_c, 90.0, epsilon = 0.05);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let spec = spec_250_kva();
        let config = SizingConfig::default();

        let first = optimize(&spec, &config).unwrap();
        let second = optimize(&spec, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn three_term_profile_converges() {
        let result = optimize(&spec_250_kva(), &SizingConfig::three_term())
            .expect("three-term sizing should converge");

        assert!(result.max_temperature_c <= 90.0 + 1e-2);
        assert!((10.0..=200.0).contains(&result.core_section_cm2));
        assert!((50.0..=1000.0).contains(&result.copper_section_mm2));
    }

    #[test]
    fn unreachable_thermal_limit_fails() {
        // Every design in this box is hotter than 90 °C.
        let bounds = DesignBounds::from_cm2_mm2((190.0, 200.0), (900.0, 1000.0)).unwrap();
        let config = SizingConfig::default().with_bounds(bounds);

        let err = optimize(&spec_250_kva(), &config).unwrap_err();
        assert!(matches!(err, SizingError::OptimizationFailure { .. }));
    }

    #[test]
    fn tight_bounds_below_required_copper_fail() {
        // 250 kVA at 400 V needs ~120 mm² of copper at 3 A/mm².
        let bounds = DesignBounds::from_cm2_mm2((10.0, 10.001), (50.0, 50.001)).unwrap();

        for config in [SizingConfig::default(), SizingConfig::three_term()] {
            let err = optimize(&spec_250_kva(), &config.with_bounds(bounds)).unwrap_err();
            assert!(matches!(err, SizingError::OptimizationFailure { .. }));
        }
    }

    #[test]
    fn tight_bounds_pass_without_ampacity_limit() {
        let bounds = DesignBounds::from_cm2_mm2((10.0, 10.001), (50.0, 50.001)).unwrap();
        let config = SizingConfig::default()
            .with_bounds(bounds)
            .without_current_density_limit();

        let result = optimize(&spec_250_kva(), &config).unwrap();
        assert_relative_eq!(result.copper_section_mm2, 50.0, epsilon = 1e-2);
    }

    #[test]
    fn exhausted_evaluation_budget_fails() {
        let config = SizingConfig {
            max_evals: 5,
            ..SizingConfig::default()
        };

        let err = optimize(&spec_250_kva(), &config).unwrap_err();
        assert!(matches!(err, SizingError::OptimizationFailure { .. }));
    }

    #[test]
    fn ampacity_limit_is_respected() {
        // A low-voltage secondary with a strict current density pushes the
        // minimum copper section above the default starting point.
        let spec = DesignSpec::new(
            ElectricPotential::new::<volt>(20_000.0),
            ElectricPotential::new::<volt>(230.0),
            Power::new::<kilowatt>(160.0),
        )
        .unwrap();
        let config = SizingConfig::three_term()
            .with_current_density_limit(ElectricCurrentDensity::new::<ampere_per_square_meter>(
                1.5e6,
            ));

        let required = config.min_copper_mm2(spec.secondary_current().get::<ampere>()).unwrap();
        let result = optimize(&spec, &config).unwrap();

        assert!(result.copper_section_mm2 >= required - 5e-2);
        assert!(result.max_temperature_c <= 90.0 + 1e-2);
    }

    #[test]
    fn invalid_configuration_is_rejected_before_solving() {
        let config = SizingConfig {
            initial_step: -1.0,
            ..SizingConfig::default()
        };
        assert!(matches!(
            optimize(&spec_250_kva(), &config),
            Err(SizingError::InvalidDomainInput { .. })
        ));
    }
}

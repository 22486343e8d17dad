use tracing::debug;

use crate::types::{ExtractionParameters, YieldEstimate, YieldFactors};

/// mg GAE per mg of leaf at ideal conditions, before the time term.
const BASE_YIELD: f64 = 0.04;
const ETHANOL_OPTIMUM_PCT: f64 = 70.0;
const ETHANOL_PENALTY_PER_PCT: f64 = 0.003;
const ETHANOL_EFFECT_FLOOR: f64 = 0.6;
/// Time constant of the saturating extraction curve, hours.
const TIME_CONSTANT_H: f64 = 18.0;
const TEMP_OPTIMUM_C: f64 = 65.0;
const TEMP_PENALTY_PER_C: f64 = 0.005;
const TEMP_EFFECT_FLOOR: f64 = 0.7;
/// Cuts finer than this earn a bonus.
const CUT_BONUS_BELOW_MM: f64 = 5.0;
const CUT_BONUS_PER_MM: f64 = 0.02;
const MIN_YIELD_PER_G: f64 = 0.5;

/// Empirical polyphenol yield model.
///
/// Total over all real inputs: out-of-range parameters produce a well-defined
/// (if meaningless) number rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct YieldEstimator;

impl YieldEstimator {
    pub fn new() -> Self {
        Self
    }

    pub fn factors(&self, params: &ExtractionParameters) -> YieldFactors {
        let ethanol_effect = (1.0
            - ETHANOL_PENALTY_PER_PCT * (params.ethanol_pct - ETHANOL_OPTIMUM_PCT).abs())
        .max(ETHANOL_EFFECT_FLOOR);

        let time_effect = 1.0 - (-params.time_h / TIME_CONSTANT_H).exp();

        let temp_effect = (1.0 - TEMP_PENALTY_PER_C * (params.temp_c - TEMP_OPTIMUM_C).abs())
            .max(TEMP_EFFECT_FLOOR);

        let cut_effect = 1.0 + CUT_BONUS_PER_MM * (CUT_BONUS_BELOW_MM - params.cut_size_mm).max(0.0);

        YieldFactors {
            ethanol_effect,
            time_effect,
            temp_effect,
            cut_effect,
        }
    }

    pub fn estimate(&self, params: &ExtractionParameters) -> YieldEstimate {
        self.estimate_from(params, &self.factors(params))
    }

    /// Combines factors already computed by [`YieldEstimator::factors`] for
    /// the same `params`.
    pub fn estimate_from(&self, params: &ExtractionParameters, f: &YieldFactors) -> YieldEstimate {
        let raw_per_g = BASE_YIELD
            * f.ethanol_effect
            * (0.5 + f.time_effect)
            * f.temp_effect
            * f.cut_effect
            * 1000.0;
        // f64::max ignores a NaN operand, so the floor holds even for NaN inputs.
        let yield_per_g = raw_per_g.max(MIN_YIELD_PER_G);
        let total_yield_mg = yield_per_g * params.leaf_mass_g;

        debug!(?f, yield_per_g, total_yield_mg, "Estimated extraction yield");

        YieldEstimate {
            total_yield_mg: round_to(total_yield_mg, 1),
            yield_per_g_mg: round_to(yield_per_g, 3),
        }
    }
}

/// Returns `(total_yield_mg, yield_per_g_mg)`.
pub fn estimate_yield(
    leaf_mass_g: f64,
    ethanol_pct: f64,
    time_h: f64,
    temp_c: f64,
    cut_size_mm: f64,
) -> (f64, f64) {
    let params = ExtractionParameters::new(leaf_mass_g, ethanol_pct, time_h, temp_c, cut_size_mm);
    let estimate = YieldEstimator::new().estimate(&params);
    (estimate.total_yield_mg, estimate.yield_per_g_mg)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn reference_point_at_optimal_conditions() {
        let (total, per_g) = estimate_yield(2000.0, 70.0, 24.0, 65.0, 5.0);
        assert!((per_g - 49.456).abs() < EPS, "per_g = {per_g}");
        // Total is taken from the unrounded per-gram yield (49.45611...).
        assert!((total - 98912.2).abs() < 1e-6, "total = {total}");
    }

    #[test]
    fn factors_at_optimum() {
        let f = YieldEstimator::new().factors(&ExtractionParameters::default());
        assert!((f.ethanol_effect - 1.0).abs() < EPS);
        assert!((f.temp_effect - 1.0).abs() < EPS);
        assert!((f.cut_effect - 1.0).abs() < EPS);
        assert!((f.time_effect - (1.0 - (-24.0f64 / 18.0).exp())).abs() < EPS);
    }

    #[test]
    fn ethanol_effect_peaks_at_seventy_and_is_floored() {
        let estimator = YieldEstimator::new();
        let effect = |ethanol_pct| {
            estimator
                .factors(&ExtractionParameters {
                    ethanol_pct,
                    ..Default::default()
                })
                .ethanol_effect
        };

        for pct in [30.0, 50.0, 69.0, 71.0, 90.0] {
            assert!(effect(pct) < effect(70.0));
        }
        assert!((effect(30.0) - 0.88).abs() < EPS);
        assert!((effect(300.0) - 0.6).abs() < EPS);
        assert!((effect(-500.0) - 0.6).abs() < EPS);
    }

    #[test]
    fn temperature_effect_is_floored() {
        let estimator = YieldEstimator::new();
        let effect = |temp_c| {
            estimator
                .factors(&ExtractionParameters {
                    temp_c,
                    ..Default::default()
                })
                .temp_effect
        };

        assert!((effect(20.0) - 0.775).abs() < EPS);
        assert!((effect(90.0) - 0.875).abs() < EPS);
        assert!((effect(-100.0) - 0.7).abs() < EPS);
    }

    #[test]
    fn only_fine_cuts_earn_a_bonus() {
        let estimator = YieldEstimator::new();
        let effect = |cut_size_mm| {
            estimator
                .factors(&ExtractionParameters {
                    cut_size_mm,
                    ..Default::default()
                })
                .cut_effect
        };

        assert!((effect(1.0) - 1.08).abs() < EPS);
        assert!((effect(5.0) - 1.0).abs() < EPS);
        assert!((effect(20.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn per_gram_yield_never_drops_below_floor() {
        let (total, per_g) = estimate_yield(100.0, 70.0, -100.0, 65.0, 5.0);
        assert_eq!(per_g, 0.5);
        assert_eq!(total, 50.0);

        for ethanol in [30.0, 60.0, 90.0] {
            for time in [1.0, 12.0, 72.0] {
                for temp in [20.0, 65.0, 90.0] {
                    for cut in [1.0, 10.0, 20.0] {
                        let (_, per_g) = estimate_yield(500.0, ethanol, time, temp, cut);
                        assert!(per_g >= 0.5);
                    }
                }
            }
        }
    }

    #[test]
    fn total_scales_with_mass() {
        let mut previous = 0.0;
        for mass in [10.0, 100.0, 250.0, 1000.0, 2000.0, 5000.0] {
            let (total, per_g) = estimate_yield(mass, 55.0, 12.0, 40.0, 3.0);
            assert!(total >= previous);
            assert!((total - per_g * mass).abs() <= 0.0005 * mass + 0.05);
            previous = total;
        }
    }

    #[test]
    fn longer_extraction_never_lowers_yield() {
        let (_, short) = estimate_yield(1000.0, 70.0, 1.0, 65.0, 5.0);
        let (_, long) = estimate_yield(1000.0, 70.0, 72.0, 65.0, 5.0);
        assert!(long > short);
    }

    #[test]
    fn estimate_from_precomputed_factors_matches_estimate() {
        let estimator = YieldEstimator::new();
        for params in [
            ExtractionParameters::default(),
            ExtractionParameters::new(350.0, 35.0, 3.0, 88.0, 1.5),
            ExtractionParameters::new(10.0, 90.0, 72.0, 20.0, 20.0),
        ] {
            let factors = estimator.factors(&params);
            assert_eq!(estimator.estimate_from(&params, &factors), estimator.estimate(&params));
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let first = estimate_yield(1234.5, 42.0, 7.5, 33.0, 2.5);
        let second = estimate_yield(1234.5, 42.0, 7.5, 33.0, 2.5);
        assert_eq!(first, second);
    }
}

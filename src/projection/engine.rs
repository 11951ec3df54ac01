//! Core projection engine for per-option savings and payback

use super::payback::{cumulative_savings, payback_years};
use super::results::{OptionProjection, ProjectionResult};
use crate::catalog::{standard_catalog, RetrofitOption};
use crate::params::SiteParameters;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Number of years of cumulative savings to report
    pub years_shown: u32,

    /// Iteration cap for the escalating payback simulation
    pub max_payback_years: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            years_shown: 5,
            max_payback_years: 100,
        }
    }
}

/// Blended marginal cost per litre flushed
///
/// Water and sewerage are billed per m³ (per 1000 litres); sewerage applies
/// to only a percentage of metered volume.
pub fn unit_cost(water_unit_cost: f64, sewer_unit_cost: f64, sewer_billed_percent: f64) -> f64 {
    water_unit_cost / 1000.0 + sewer_unit_cost / 1000.0 * (sewer_billed_percent / 100.0)
}

/// First-year saving from replacing the baseline device
///
/// Linear in the volume difference; negative when the replacement flushes
/// more than the baseline (a net cost, not an error).
pub fn annual_saving(
    baseline_volume: f64,
    replacement_volume: f64,
    unit_cost: f64,
    total_annual_uses: f64,
) -> f64 {
    (baseline_volume - replacement_volume) * unit_cost * total_annual_uses
}

/// Main projection engine
///
/// Stateless: every invocation is a pure function of the supplied
/// parameters, recomputed fresh on each call.
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Project a single catalog option against the site parameters
    pub fn project_option(
        &self,
        params: &SiteParameters,
        option: &RetrofitOption,
    ) -> OptionProjection {
        let unit_cost = unit_cost(
            params.water_unit_cost,
            params.sewer_unit_cost,
            params.sewer_billed_percent,
        );
        let saving = annual_saving(
            params.baseline_flush_volume,
            option.volume.resolve(params),
            unit_cost,
            params.total_annual_uses(),
        );
        let rate = params.inflation_rate();

        OptionProjection {
            label: option.label.to_string(),
            annual_saving: saving,
            payback: payback_years(saving, option.capital_cost, rate, self.config.max_payback_years),
            cumulative_savings: cumulative_savings(saving, rate, self.config.years_shown),
        }
    }

    /// Project all standard catalog options, in catalog order
    pub fn project_site(&self, params: &SiteParameters) -> ProjectionResult {
        let mut result = ProjectionResult::new();
        for option in standard_catalog() {
            result.add_option(self.project_option(params, &option));
        }
        result
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Payback;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_cost_blend() {
        let cost = unit_cost(2.69, 2.34, 90.0);
        assert_relative_eq!(cost, 0.004796, epsilon = 1e-12);

        // Zero sewer billing leaves only the water component
        assert_relative_eq!(unit_cost(2.69, 2.34, 0.0), 0.00269, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_cost_linearity() {
        let base = unit_cost(2.0, 3.0, 50.0);
        assert_relative_eq!(unit_cost(4.0, 3.0, 50.0), base + 2.0 / 1000.0, epsilon = 1e-12);
        assert_relative_eq!(unit_cost(2.0, 6.0, 50.0), base + 1.5 / 1000.0, epsilon = 1e-12);

        // Sewer contribution scales with the billed percentage
        let full = unit_cost(0.0, 3.0, 100.0);
        assert_relative_eq!(unit_cost(0.0, 3.0, 25.0), full * 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_annual_saving_sign() {
        // Equal volumes: no saving
        assert_eq!(annual_saving(9.0, 9.0, 0.004796, 43680.0), 0.0);

        // Replacement flushes more than baseline: net cost
        assert!(annual_saving(9.0, 10.0, 0.004796, 43680.0) < 0.0);
    }

    #[test]
    fn test_default_site_projection() {
        // Reference scenario from the calculator defaults
        let params = SiteParameters::default();
        let engine = ProjectionEngine::default();
        let result = engine.project_site(&params);

        assert_eq!(result.options.len(), 3);
        assert_eq!(result.options[0].label, "Propelair 135");
        assert_eq!(result.options[1].label, "PAST");
        assert_eq!(result.options[2].label, "Analogue");

        // Propelair: (9 - 1.35) * 0.004796 * 43680 = 1602.592992
        let propelair = &result.options[0];
        assert_relative_eq!(propelair.annual_saving, 1602.592992, epsilon = 1e-6);

        // Saving exceeds the 1000 capex within year 1, so payback is the
        // plain ratio even at 5% escalation
        let payback = propelair.payback.as_years().unwrap();
        assert_relative_eq!(payback, 1000.0 / 1602.592992, epsilon = 1e-9);
        assert!(payback < 1.0);

        assert_eq!(propelair.cumulative_savings.len(), 5);
        for pair in propelair.cumulative_savings.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_matching_volume_means_zero_everything() {
        let params = SiteParameters {
            past_flush_volume: 9.0, // same as baseline
            ..Default::default()
        };
        let engine = ProjectionEngine::default();
        let result = engine.project_site(&params);

        let past = &result.options[1];
        assert_eq!(past.annual_saving, 0.0);
        assert_eq!(past.payback, Payback::Never);
        assert!(past.cumulative_savings.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_net_cost_option() {
        let params = SiteParameters {
            analogue_flush_volume: 10.0, // worse than the 9L baseline
            ..Default::default()
        };
        let engine = ProjectionEngine::default();
        let result = engine.project_site(&params);

        let analogue = &result.options[2];
        assert!(analogue.annual_saving < 0.0);
        assert!(analogue.payback.is_never());

        // Cumulative losses deepen every year
        for pair in analogue.cumulative_savings.windows(2) {
            assert!(pair[1] < pair[0]);
        }
        assert!(analogue.cumulative_savings.iter().all(|&c| c < 0.0));
    }

    #[test]
    fn test_zero_inflation_payback_and_cumulative() {
        let params = SiteParameters {
            inflation_rate_percent: 0.0,
            ..Default::default()
        };
        let engine = ProjectionEngine::default();
        let result = engine.project_site(&params);

        let propelair = &result.options[0];
        let saving = propelair.annual_saving;

        assert_relative_eq!(
            propelair.payback.as_years().unwrap(),
            1000.0 / saving,
            epsilon = 1e-12
        );
        for (i, &cum) in propelair.cumulative_savings.iter().enumerate() {
            assert_relative_eq!(cum, saving * (i + 1) as f64, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_years_shown_config() {
        let engine = ProjectionEngine::new(ProjectionConfig {
            years_shown: 8,
            ..Default::default()
        });
        let result = engine.project_site(&SiteParameters::default());
        assert!(result
            .options
            .iter()
            .all(|opt| opt.cumulative_savings.len() == 8));
    }

    #[test]
    fn test_degenerate_usage_counts() {
        // Zero uses per day: no saving anywhere, payback unreachable
        let params = SiteParameters {
            uses_per_day: 0.0,
            ..Default::default()
        };
        let engine = ProjectionEngine::default();
        let result = engine.project_site(&params);

        for opt in &result.options {
            assert_eq!(opt.annual_saving, 0.0);
            assert!(opt.payback.is_never());
        }
    }
}

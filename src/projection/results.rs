//! Projection output structures

use super::payback::Payback;
use serde::{Deserialize, Serialize};

/// Projection result for a single retrofit option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionProjection {
    /// Display name, copied from the catalog row
    pub label: String,

    /// First-year operating-cost saving vs. the baseline (signed; zero or
    /// negative when the option uses as much or more water)
    pub annual_saving: f64,

    /// Time to recover the option's capital cost
    pub payback: Payback,

    /// Cumulative savings through each year 1..=years_shown
    pub cumulative_savings: Vec<f64>,
}

/// Complete projection result for one site: all catalog options in order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub options: Vec<OptionProjection>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// Add an option's projection
    pub fn add_option(&mut self, option: OptionProjection) {
        self.options.push(option);
    }

    /// Get summary statistics across the catalog
    pub fn summary(&self) -> ProjectionSummary {
        let best_payback = self
            .options
            .iter()
            .filter_map(|opt| opt.payback.as_years().map(|y| (opt.label.clone(), y)))
            .filter(|(_, y)| y.is_finite())
            .min_by(|a, b| a.1.total_cmp(&b.1));

        let highest_annual_saving = self
            .options
            .iter()
            .map(|opt| opt.annual_saving)
            .fold(f64::NEG_INFINITY, f64::max);

        ProjectionSummary {
            option_count: self.options.len(),
            best_payback_label: best_payback.as_ref().map(|(label, _)| label.clone()),
            best_payback_years: best_payback.map(|(_, y)| y),
            highest_annual_saving,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub option_count: usize,
    pub best_payback_label: Option<String>,
    pub best_payback_years: Option<f64>,
    pub highest_annual_saving: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projection(label: &str, saving: f64, payback: Payback) -> OptionProjection {
        OptionProjection {
            label: label.to_string(),
            annual_saving: saving,
            payback,
            cumulative_savings: vec![saving; 5],
        }
    }

    #[test]
    fn test_summary_picks_fastest_payback() {
        let mut result = ProjectionResult::new();
        result.add_option(projection("A", 1600.0, Payback::Years(0.62)));
        result.add_option(projection("B", 1200.0, Payback::Years(0.48)));
        result.add_option(projection("C", -50.0, Payback::Never));

        let summary = result.summary();
        assert_eq!(summary.option_count, 3);
        assert_eq!(summary.best_payback_label.as_deref(), Some("B"));
        assert_eq!(summary.best_payback_years, Some(0.48));
        assert_eq!(summary.highest_annual_saving, 1600.0);
    }

    #[test]
    fn test_summary_with_no_reachable_payback() {
        let mut result = ProjectionResult::new();
        result.add_option(projection("A", 0.0, Payback::Never));
        result.add_option(projection("B", -10.0, Payback::Never));

        let summary = result.summary();
        assert!(summary.best_payback_label.is_none());
        assert!(summary.best_payback_years.is_none());
    }

    #[test]
    fn test_payback_serializes_as_number_or_null() {
        let reachable = serde_json::to_value(Payback::Years(2.5)).unwrap();
        assert_eq!(reachable, serde_json::json!(2.5));

        let never = serde_json::to_value(Payback::Never).unwrap();
        assert!(never.is_null());
    }
}

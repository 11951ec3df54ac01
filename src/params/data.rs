//! Site parameter structures matching the savings calculator input form

use serde::{Deserialize, Serialize};

/// Input parameters for one site (one bank of toilets on one tariff)
///
/// All values are non-negative by caller contract; the projection engine
/// itself is total over all reals and produces degenerate but defined
/// outputs (negative savings, unreachable payback) for degenerate inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteParameters {
    /// Flush volume of the existing toilet in litres (the do-nothing case)
    pub baseline_flush_volume: f64,

    /// Flushes per day across the site
    pub uses_per_day: f64,

    /// Days per week the site is occupied
    pub days_per_week: f64,

    /// Weeks per year the site is occupied
    pub weeks_per_year: f64,

    /// Metered water charge per m³ (per 1000 litres)
    pub water_unit_cost: f64,

    /// Sewerage charge per m³ (per 1000 litres)
    pub sewer_unit_cost: f64,

    /// Percentage of metered volume billed for sewerage (0-100)
    pub sewer_billed_percent: f64,

    /// Annual utility price inflation in percent (may be 0)
    pub inflation_rate_percent: f64,

    /// Flush volume of the PAST option in litres (user-adjustable)
    pub past_flush_volume: f64,

    /// Flush volume of the Analogue option in litres (user-adjustable)
    pub analogue_flush_volume: f64,
}

impl SiteParameters {
    /// Total flushes per year: uses/day * days/week * weeks/year
    pub fn total_annual_uses(&self) -> f64 {
        self.uses_per_day * self.days_per_week * self.weeks_per_year
    }

    /// Inflation as a fraction (5% -> 0.05)
    pub fn inflation_rate(&self) -> f64 {
        self.inflation_rate_percent / 100.0
    }
}

impl Default for SiteParameters {
    fn default() -> Self {
        Self {
            baseline_flush_volume: 9.0,
            uses_per_day: 120.0,
            days_per_week: 7.0,
            weeks_per_year: 52.0,
            water_unit_cost: 2.69,
            sewer_unit_cost: 2.34,
            sewer_billed_percent: 90.0,
            inflation_rate_percent: 5.0,
            past_flush_volume: 3.0,
            analogue_flush_volume: 4.0,
        }
    }
}

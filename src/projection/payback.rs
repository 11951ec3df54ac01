//! Payback period and cumulative savings calculations
//!
//! Pure functions over real-valued inputs; no error paths. Degenerate
//! inputs (zero or negative savings) produce the `Never` sentinel or
//! negative running totals rather than faults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payback period for a retrofit option
///
/// `Never` means the capital cost is never recovered because the option
/// saves nothing (or is a net cost). Serializes untagged: a JSON number
/// for `Years`, `null` for `Never`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payback {
    /// Possibly fractional years until cumulative savings reach capital cost
    Years(f64),
    /// Unreachable: annual saving is zero or negative
    Never,
}

impl Payback {
    pub fn as_years(&self) -> Option<f64> {
        match self {
            Payback::Years(y) => Some(*y),
            Payback::Never => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, Payback::Never)
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Years(y) if y.is_finite() => write!(f, "{:.2}", y),
            _ => write!(f, "\u{2014}"),
        }
    }
}

/// Calculate cumulative savings through each year 1..=`years_shown`
///
/// Year `y`'s nominal saving escalates by `(1 + rate)` relative to the
/// prior year; the cumulative value is the running sum of escalated annual
/// savings. With `rate == 0` this collapses to `annual_saving * y`.
///
/// # Arguments
/// * `annual_saving` - First-year saving (may be negative)
/// * `rate` - Annual escalation rate as a fraction (0.05 for 5%)
/// * `years_shown` - Number of years to report
pub fn cumulative_savings(annual_saving: f64, rate: f64, years_shown: u32) -> Vec<f64> {
    (1..=years_shown)
        .map(|year| {
            if rate == 0.0 {
                annual_saving * year as f64
            } else {
                // Geometric series: sum of annual_saving * (1+r)^(k-1) for k = 1..=year
                annual_saving * ((1.0 + rate).powi(year as i32) - 1.0) / rate
            }
        })
        .collect()
}

/// Calculate the payback period for a capital outlay
///
/// Simulates year-by-year escalating contributions until the running total
/// reaches `capital_cost`, then interpolates fractionally within the year
/// the total is crossed.
///
/// The simulation is capped at `max_years` iterations. If the cap is hit
/// before the total reaches `capital_cost`, the same interpolation formula
/// is applied to the boundary iteration, so the result is an estimate
/// beyond `max_years` rather than `Never`. This matches the reference
/// calculator's behavior for savings too small to ever pay back.
///
/// # Arguments
/// * `annual_saving` - First-year saving
/// * `capital_cost` - One-time upfront cost to recover
/// * `rate` - Annual escalation rate as a fraction
/// * `max_years` - Iteration cap for the escalating simulation
pub fn payback_years(annual_saving: f64, capital_cost: f64, rate: f64, max_years: u32) -> Payback {
    if annual_saving <= 0.0 {
        return Payback::Never;
    }
    if rate == 0.0 {
        return Payback::Years(capital_cost / annual_saving);
    }

    let mut cumulative = 0.0;
    let mut year: u32 = 0;
    while cumulative < capital_cost && year < max_years {
        cumulative += annual_saving * (1.0 + rate).powi(year as i32);
        year += 1;
    }

    if cumulative == capital_cost {
        return Payback::Years(year as f64);
    }

    // Interpolate within the crossing year (or the boundary year if the
    // cap was hit, in which case the fraction exceeds 1)
    let year_contribution = annual_saving * (1.0 + rate).powi(year as i32 - 1);
    let prev_cumulative = cumulative - year_contribution;
    let remaining = capital_cost - prev_cumulative;

    Payback::Years((year - 1) as f64 + remaining / year_contribution)
}

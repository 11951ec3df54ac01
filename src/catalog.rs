//! Fixed retrofit option catalog
//!
//! The three hardware options are a small ordered data table so the
//! per-option projection logic is written once and applied uniformly.

use crate::params::SiteParameters;
use serde::Serialize;

/// Where an option's flush volume comes from
///
/// The Propelair unit has a fixed mechanical flush volume; the other two
/// options are placeholders whose volumes the user adjusts on the form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum VolumeSource {
    /// Constant volume in litres, independent of user input
    Fixed(f64),
    /// Taken from `SiteParameters::past_flush_volume`
    PastInput,
    /// Taken from `SiteParameters::analogue_flush_volume`
    AnalogueInput,
}

impl VolumeSource {
    /// Resolve to a concrete per-flush volume for the given parameters
    pub fn resolve(&self, params: &SiteParameters) -> f64 {
        match self {
            VolumeSource::Fixed(volume) => *volume,
            VolumeSource::PastInput => params.past_flush_volume,
            VolumeSource::AnalogueInput => params.analogue_flush_volume,
        }
    }
}

/// One row of the retrofit option catalog
#[derive(Debug, Clone, Serialize)]
pub struct RetrofitOption {
    /// Display name
    pub label: &'static str,

    /// Per-flush volume of the candidate device
    pub volume: VolumeSource,

    /// One-time upfront cost per toilet
    pub capital_cost: f64,
}

/// The standard three-option catalog, in display order
pub fn standard_catalog() -> [RetrofitOption; 3] {
    [
        RetrofitOption {
            label: "Propelair 135",
            volume: VolumeSource::Fixed(1.35),
            capital_cost: 1000.0,
        },
        RetrofitOption {
            label: "PAST",
            volume: VolumeSource::PastInput,
            capital_cost: 600.0,
        },
        RetrofitOption {
            label: "Analogue",
            volume: VolumeSource::AnalogueInput,
            capital_cost: 450.0,
        },
    ]
}

//! Retrofit Payback - projection engine for water-saving toilet retrofits
//!
//! This library provides:
//! - Per-option annual saving, payback period, and cumulative savings
//! - A fixed three-option retrofit catalog compared against a site baseline
//! - Scenario loading from CSV and batch projection
//!
//! The engine is stateless: every projection is a pure function of the
//! supplied site parameters and catalog row.

pub mod catalog;
pub mod params;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use catalog::{standard_catalog, RetrofitOption, VolumeSource};
pub use params::SiteParameters;
pub use projection::{OptionProjection, Payback, ProjectionEngine, ProjectionResult};
pub use scenario::ScenarioRunner;

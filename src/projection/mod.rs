//! Projection engine for per-option savings, payback, and cumulative totals

mod engine;
mod payback;
mod results;

pub use engine::{annual_saving, unit_cost, ProjectionConfig, ProjectionEngine};
pub use payback::{cumulative_savings, payback_years, Payback};
pub use results::{OptionProjection, ProjectionResult, ProjectionSummary};

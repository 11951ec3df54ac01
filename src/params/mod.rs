//! Site parameter structures and scenario loading

mod data;
pub mod loader;

pub use data::SiteParameters;
pub use loader::{load_scenarios, load_scenarios_from_reader, ScenarioLoadError};

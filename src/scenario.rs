//! Scenario runner for batch projections
//!
//! Holds a projection config once, then runs many parameter sets (or many
//! configs over one parameter set) without rebuilding the engine.

use crate::params::SiteParameters;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Runner for projecting one or many site scenarios
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let scenarios = load_scenarios("scenarios.csv")?;
/// let results = runner.run_batch(&scenarios);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create runner with the default projection config
    pub fn new() -> Self {
        Self {
            config: ProjectionConfig::default(),
        }
    }

    /// Create runner with a specific config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a single scenario
    pub fn run(&self, params: &SiteParameters) -> ProjectionResult {
        let engine = ProjectionEngine::new(self.config.clone());
        engine.project_site(params)
    }

    /// Run many scenarios with the same config
    pub fn run_batch(&self, scenarios: &[SiteParameters]) -> Vec<ProjectionResult> {
        let engine = ProjectionEngine::new(self.config.clone());
        scenarios.iter().map(|s| engine.project_site(s)).collect()
    }

    /// Run multiple configs (e.g. different horizons) for a single scenario
    pub fn run_configs(
        &self,
        params: &SiteParameters,
        configs: &[ProjectionConfig],
    ) -> Vec<ProjectionResult> {
        configs
            .iter()
            .map(|config| {
                let engine = ProjectionEngine::new(config.clone());
                engine.project_site(params)
            })
            .collect()
    }

    /// Get reference to the config for inspection
    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

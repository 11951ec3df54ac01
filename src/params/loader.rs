//! Load site parameter scenarios from CSV

use super::SiteParameters;
use csv::Reader;
use std::path::Path;

/// Errors raised while loading a scenario file
#[derive(Debug, thiserror::Error)]
pub enum ScenarioLoadError {
    #[error("failed to open scenario file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scenario row: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario file contains no rows")]
    Empty,
}

/// Raw CSV row matching the scenario file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "BaselineFlush")]
    baseline_flush_volume: f64,
    #[serde(rename = "UsesPerDay")]
    uses_per_day: f64,
    #[serde(rename = "DaysPerWeek")]
    days_per_week: f64,
    #[serde(rename = "WeeksPerYear")]
    weeks_per_year: f64,
    #[serde(rename = "WaterCost")]
    water_unit_cost: f64,
    #[serde(rename = "SewerCost")]
    sewer_unit_cost: f64,
    #[serde(rename = "SewerPercent")]
    sewer_billed_percent: f64,
    #[serde(rename = "Inflation")]
    inflation_rate_percent: f64,
    #[serde(rename = "PastFlush")]
    past_flush_volume: f64,
    #[serde(rename = "AnalogueFlush")]
    analogue_flush_volume: f64,
}

impl From<CsvRow> for SiteParameters {
    fn from(row: CsvRow) -> Self {
        Self {
            baseline_flush_volume: row.baseline_flush_volume,
            uses_per_day: row.uses_per_day,
            days_per_week: row.days_per_week,
            weeks_per_year: row.weeks_per_year,
            water_unit_cost: row.water_unit_cost,
            sewer_unit_cost: row.sewer_unit_cost,
            sewer_billed_percent: row.sewer_billed_percent,
            inflation_rate_percent: row.inflation_rate_percent,
            past_flush_volume: row.past_flush_volume,
            analogue_flush_volume: row.analogue_flush_volume,
        }
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<SiteParameters>, ScenarioLoadError> {
    let mut reader = Reader::from_path(path)?;
    let mut scenarios = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into());
    }

    if scenarios.is_empty() {
        return Err(ScenarioLoadError::Empty);
    }

    log::info!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer)
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<SiteParameters>, ScenarioLoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.into());
    }

    if scenarios.is_empty() {
        return Err(ScenarioLoadError::Empty);
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
BaselineFlush,UsesPerDay,DaysPerWeek,WeeksPerYear,WaterCost,SewerCost,SewerPercent,Inflation,PastFlush,AnalogueFlush
9,120,7,52,2.69,2.34,90,5,3,4
6,80,5,48,3.10,2.80,95,0,3,4
";

    #[test]
    fn test_load_from_reader() {
        let scenarios = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        let first = &scenarios[0];
        assert_eq!(first.baseline_flush_volume, 9.0);
        assert_eq!(first.weeks_per_year, 52.0);
        assert_eq!(first.sewer_billed_percent, 90.0);

        let second = &scenarios[1];
        assert_eq!(second.uses_per_day, 80.0);
        assert_eq!(second.inflation_rate_percent, 0.0);
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let header_only =
            "BaselineFlush,UsesPerDay,DaysPerWeek,WeeksPerYear,WaterCost,SewerCost,SewerPercent,Inflation,PastFlush,AnalogueFlush\n";
        let err = load_scenarios_from_reader(header_only.as_bytes()).unwrap_err();
        assert!(matches!(err, ScenarioLoadError::Empty));
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let bad = "\
BaselineFlush,UsesPerDay,DaysPerWeek,WeeksPerYear,WaterCost,SewerCost,SewerPercent,Inflation,PastFlush,AnalogueFlush
nine,120,7,52,2.69,2.34,90,5,3,4
";
        assert!(load_scenarios_from_reader(bad.as_bytes()).is_err());
    }
}

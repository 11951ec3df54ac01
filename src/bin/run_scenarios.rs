//! Run projections for a whole batch of site scenarios
//!
//! Reads one SiteParameters per CSV row, projects every scenario in
//! parallel, and writes one output row per (scenario, option).

use anyhow::Context;
use clap::Parser;
use rayon::prelude::*;
use retrofit_payback::{
    params::load_scenarios,
    projection::{Payback, ProjectionConfig, ProjectionEngine, ProjectionResult},
};
use std::fs::File;
use std::io::Write;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(version, about = "Batch payback projection over a scenario CSV")]
struct Args {
    /// Input scenario CSV
    #[arg(long, default_value = "scenarios.csv")]
    input: String,

    /// Output results CSV
    #[arg(long, default_value = "scenario_results.csv")]
    output: String,

    /// Number of years of cumulative savings per option
    #[arg(long, default_value_t = 5)]
    years: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    println!("Loading scenarios from {}...", args.input);
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("failed to load {}", args.input))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let config = ProjectionConfig {
        years_shown: args.years,
        ..Default::default()
    };

    println!("Running projections...");
    let proj_start = Instant::now();

    let results: Vec<ProjectionResult> = scenarios
        .par_iter()
        .map(|params| {
            let engine = ProjectionEngine::new(config.clone());
            engine.project_site(params)
        })
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());
    log::info!(
        "projected {} scenarios x {} options",
        results.len(),
        results.first().map(|r| r.options.len()).unwrap_or(0)
    );

    let mut file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output))?;

    write!(file, "Scenario,Option,AnnualSaving,PaybackYears")?;
    for year in 1..=args.years {
        write!(file, ",CumYr{}", year)?;
    }
    writeln!(file)?;

    for (idx, result) in results.iter().enumerate() {
        for opt in &result.options {
            let payback = match opt.payback {
                Payback::Years(y) if y.is_finite() => format!("{:.6}", y),
                _ => String::new(),
            };
            write!(file, "{},{},{:.2},{}", idx + 1, opt.label, opt.annual_saving, payback)?;
            for &cum in &opt.cumulative_savings {
                write!(file, ",{:.2}", cum)?;
            }
            writeln!(file)?;
        }
    }

    println!("Output written to {}", args.output);

    // Quick block summary for eyeballing
    let reachable = results
        .iter()
        .flat_map(|r| &r.options)
        .filter(|opt| !opt.payback.is_never())
        .count();
    let total = results.len() * 3;
    println!("\nBatch Summary:");
    println!("  Scenarios: {}", results.len());
    println!("  Options with reachable payback: {}/{}", reachable, total);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}

//! Retrofit Payback CLI
//!
//! Runs one projection for a site and prints the per-option results table.
//! Supports JSON output via --json and CSV export via --csv <path>.

use anyhow::Context;
use clap::Parser;
use retrofit_payback::{
    params::SiteParameters,
    projection::{Payback, ProjectionConfig, ProjectionEngine},
};
use std::fs::File;
use std::io::Write;

/// Payback projection for water-saving toilet retrofit options
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Current flush volume in litres
    #[arg(long, default_value_t = 9.0, value_parser = non_negative)]
    baseline_flush: f64,

    /// Flushes per day across the site
    #[arg(long, default_value_t = 120.0, value_parser = non_negative)]
    uses_per_day: f64,

    /// Days per week the site is occupied
    #[arg(long, default_value_t = 7.0, value_parser = non_negative)]
    days_per_week: f64,

    /// Weeks per year the site is occupied
    #[arg(long, default_value_t = 52.0, value_parser = non_negative)]
    weeks_per_year: f64,

    /// Metered water charge per m³
    #[arg(long, default_value_t = 2.69, value_parser = non_negative)]
    water_cost: f64,

    /// Sewerage charge per m³
    #[arg(long, default_value_t = 2.34, value_parser = non_negative)]
    sewer_cost: f64,

    /// Percentage of volume billed for sewerage
    #[arg(long, default_value_t = 90.0, value_parser = non_negative)]
    sewer_percent: f64,

    /// Utility price inflation, percent per year
    #[arg(long, default_value_t = 5.0, value_parser = non_negative)]
    inflation: f64,

    /// PAST option flush volume in litres
    #[arg(long, default_value_t = 3.0, value_parser = non_negative)]
    past_flush: f64,

    /// Analogue option flush volume in litres
    #[arg(long, default_value_t = 4.0, value_parser = non_negative)]
    analogue_flush: f64,

    /// Number of years of cumulative savings to show
    #[arg(long, default_value_t = 5)]
    years: u32,

    /// Emit the full result as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write per-option results to a CSV file
    #[arg(long)]
    csv: Option<String>,
}

/// Inputs are physically non-negative; enforce it at the CLI boundary so
/// the engine stays total over whatever reals it is handed.
fn non_negative(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("not a number: {s}"))?;
    if value < 0.0 {
        return Err(format!("must be non-negative, got {value}"));
    }
    Ok(value)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let params = SiteParameters {
        baseline_flush_volume: args.baseline_flush,
        uses_per_day: args.uses_per_day,
        days_per_week: args.days_per_week,
        weeks_per_year: args.weeks_per_year,
        water_unit_cost: args.water_cost,
        sewer_unit_cost: args.sewer_cost,
        sewer_billed_percent: args.sewer_percent,
        inflation_rate_percent: args.inflation,
        past_flush_volume: args.past_flush,
        analogue_flush_volume: args.analogue_flush,
    };

    let engine = ProjectionEngine::new(ProjectionConfig {
        years_shown: args.years,
        ..Default::default()
    });
    let result = engine.project_site(&params);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Retrofit Payback v0.1.0");
    println!("=======================\n");
    println!("Site: {:.0} flushes/day, {:.0} days/week, {:.0} weeks/year ({:.0} flushes/year)",
        params.uses_per_day,
        params.days_per_week,
        params.weeks_per_year,
        params.total_annual_uses(),
    );
    println!("Tariff: water £{:.2}/m³, sewer £{:.2}/m³ on {:.0}% of volume, inflation {:.1}%/yr\n",
        params.water_unit_cost,
        params.sewer_unit_cost,
        params.sewer_billed_percent,
        params.inflation_rate_percent,
    );

    // Results table (per toilet)
    print!("{:<16} {:>14} {:>14}", "Option", "Annual saving", "Payback (yrs)");
    for year in 1..=args.years {
        print!(" {:>12}", format!("Cum Yr {}", year));
    }
    println!();
    println!("{}", "-".repeat(46 + 13 * args.years as usize));

    for opt in &result.options {
        print!("{:<16} {:>14} {:>14}",
            opt.label,
            format_currency(opt.annual_saving),
            opt.payback.to_string(),
        );
        for &cum in &opt.cumulative_savings {
            print!(" {:>12}", format_currency(cum));
        }
        println!();
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Highest annual saving: {}", format_currency(summary.highest_annual_saving));
    match (summary.best_payback_label, summary.best_payback_years) {
        (Some(label), Some(years)) => {
            println!("  Fastest payback: {} in {:.2} yrs", label, years);
        }
        _ => println!("  Fastest payback: none reachable"),
    }

    if let Some(path) = args.csv {
        write_csv(&path, &result.options, args.years)
            .with_context(|| format!("failed to write {path}"))?;
        println!("\nResults written to: {}", path);
    }

    Ok(())
}

/// Format a currency value to 2 dp; non-finite values render as an em-dash
fn format_currency(value: f64) -> String {
    if value.is_finite() {
        format!("£{:.2}", value)
    } else {
        "\u{2014}".to_string()
    }
}

fn write_csv(
    path: &str,
    options: &[retrofit_payback::OptionProjection],
    years: u32,
) -> anyhow::Result<()> {
    let mut file = File::create(path)?;

    write!(file, "Option,AnnualSaving,PaybackYears")?;
    for year in 1..=years {
        write!(file, ",CumYr{}", year)?;
    }
    writeln!(file)?;

    for opt in options {
        let payback = match opt.payback {
            Payback::Years(y) if y.is_finite() => format!("{:.6}", y),
            _ => String::new(),
        };
        write!(file, "{},{:.2},{}", opt.label, opt.annual_saving, payback)?;
        for &cum in &opt.cumulative_savings {
            write!(file, ",{:.2}", cum)?;
        }
        writeln!(file)?;
    }

    Ok(())
}

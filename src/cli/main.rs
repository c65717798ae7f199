#![warn(clippy::all, clippy::pedantic)]

use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use csv::{ReaderBuilder, Writer};
use ibfs::{balance, solve, MatrixMinima, NorthWestCorner, TransportPlan, VogelApproximation};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Compute an initial basic feasible solution for a transportation problem.
#[derive(Parser)]
#[command(name = "ibfs-cli", version, about)]
struct Args {
    /// Headerless CSV file holding the cost matrix, one origin per row
    costs: PathBuf,

    /// Comma-separated supply per origin
    #[arg(long, value_delimiter = ',', required = true)]
    supply: Vec<i64>,

    /// Comma-separated demand per destination
    #[arg(long, value_delimiter = ',', required = true)]
    demand: Vec<i64>,

    /// Cell-selection rule
    #[arg(long, value_enum, default_value_t = Rule::NorthWest)]
    rule: Rule,

    /// Write the allocation plan to this CSV file instead of logging it
    #[arg(long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Rule {
    /// Top-left corner first, cost-blind
    NorthWest,
    /// Globally cheapest cell first
    MatrixMinima,
    /// Largest penalty (gap between the two cheapest costs) first
    Vogel,
}

// Read the cost matrix from a headerless CSV grid.
fn read_costs(path: &Path) -> Result<Vec<Vec<i64>>, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(File::open(path)?);
    let mut rows = Vec::new();
    for record in reader.records() {
        let row = record?
            .iter()
            .map(|field| field.trim().parse())
            .collect::<Result<Vec<i64>, _>>()?;
        rows.push(row);
    }
    Ok(rows)
}

// Write the allocation plan as CSV.
fn write_plan(plan: &TransportPlan<i64>, path: &Path) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(path)?;
    wtr.write_record(["origin", "destination", "quantity", "cost"])?;
    for a in plan.allocations() {
        wtr.write_record([
            a.origin.to_string(),
            a.destination.to_string(),
            a.quantity.to_string(),
            a.cost.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let costs = read_costs(&args.costs)?;
    let problem = balance(costs, args.supply, args.demand)?;
    let plan = match args.rule {
        Rule::NorthWest => solve(problem, &NorthWestCorner),
        Rule::MatrixMinima => solve(problem, &MatrixMinima),
        Rule::Vogel => solve(problem, &VogelApproximation),
    };

    match &args.output {
        Some(path) => write_plan(&plan, path)?,
        None => {
            for a in plan.allocations() {
                log::info!(
                    "ship {} from origin {} to destination {} at cost {}",
                    a.quantity,
                    a.origin,
                    a.destination,
                    a.cost
                );
            }
        }
    }
    log::info!("total cost: {}", plan.total_cost());

    Ok(())
}

//! lightforce - interactive simulator for the speculative light force
//! thrust model.
//!
//! Usage:
//!   lightforce                      # start with the built-in defaults
//!   lightforce --scenario run.yaml  # initial parameters from a YAML file

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lightforce::config::scenario::load_scenario;
use lightforce::models::SimulationParameters;

mod repl;

use repl::ReplConfig;

#[derive(Parser)]
#[command(name = "lightforce")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Interactive simulator for the speculative light force thrust model", long_about = None)]
struct Cli {
    /// YAML file with initial parameters (built-in defaults when omitted)
    #[arg(short, long)]
    scenario: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let params = match cli.scenario {
        Some(path) => {
            let scenario = load_scenario(&path)
                .with_context(|| format!("could not load scenario {}", path.display()))?;
            SimulationParameters::new(
                scenario.total_power,
                scenario.container_volume,
                scenario.reflectivity,
            )
        }
        None => SimulationParameters::default(),
    };

    repl::run_repl(ReplConfig::default(), params)
}

//! Interactive read-modify-run loop for the simulator.

mod commands;
mod handler;

pub use commands::{parse_choice, MenuChoice};
pub use handler::Session;

use std::path::PathBuf;

use console::style;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use lightforce::constants::{BETA, C};
use lightforce::models::SimulationParameters;

/// REPL configuration
pub struct ReplConfig {
    pub history_file: PathBuf,
}

impl Default for ReplConfig {
    fn default() -> Self {
        let history_file = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lightforce")
            .join("history");

        ReplConfig { history_file }
    }
}

fn print_banner() {
    println!();
    println!(
        "{}",
        style("--- Light Force Momentum and Pressure Simulator ---")
            .cyan()
            .bold()
    );
    println!("A speculative model of the exponential 'thrust' of contained light.");
    println!(
        "Constants used: speed of light (c) = {:.2e} m/s, density exponent (beta) = {}",
        C, BETA
    );
    println!(
        "{}",
        style("--------------------------------------------------").cyan()
    );
}

/// Runs the interactive loop over a caller-supplied parameter set.
pub fn run_repl(config: ReplConfig, params: SimulationParameters) -> anyhow::Result<()> {
    print_banner();

    let mut rl = DefaultEditor::new()?;

    if config.history_file.exists() {
        let _ = rl.load_history(&config.history_file);
    }
    if let Some(parent) = config.history_file.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut session = Session::new(params);

    loop {
        session.print_parameters();

        match rl.readline("Enter 1, 2, 3 to edit a parameter, R to run, or Q to quit: ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                match parse_choice(line) {
                    Ok(choice) => match session.execute(choice, &mut rl) {
                        Ok(should_exit) => {
                            if should_exit {
                                println!("{}", style("Goodbye!").green());
                                break;
                            }
                        }
                        Err(e) => {
                            println!("{} {}", style("Error:").red().bold(), e);
                            break;
                        }
                    },
                    Err(e) => {
                        println!("{} {}", style("Error:").red().bold(), e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", style("Use Q to quit").yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", style("Goodbye!").green());
                break;
            }
            Err(err) => {
                println!("{} {:?}", style("Error:").red().bold(), err);
                break;
            }
        }
    }

    let _ = rl.save_history(&config.history_file);

    Ok(())
}

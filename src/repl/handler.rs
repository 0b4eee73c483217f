//! Menu choice execution against the session's parameter store.

use console::style;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use lightforce::constants::BETA;
use lightforce::models::parameters::MIN_VOLUME;
use lightforce::models::SimulationParameters;
use lightforce::physics::thrust::light_force_thrust;

use super::MenuChoice;

/// Session state behind the interactive loop.
pub struct Session {
    params: SimulationParameters,
}

impl Session {
    pub fn new(params: SimulationParameters) -> Self {
        Session { params }
    }

    /// Prints the numbered parameter menu.
    pub fn print_parameters(&self) {
        println!();
        println!("Current parameters:");
        println!(
            "  [1] Total light power (Watts): {:.2} W",
            self.params.total_power()
        );
        println!(
            "  [2] Container volume (m³):     {:.2} m³",
            self.params.container_volume()
        );
        println!(
            "  [3] Wall reflectivity (0-1):   {:.2}",
            self.params.reflectivity()
        );
        println!("{}", style("-".repeat(34)).dim());
    }

    /// Executes a menu choice; returns true when the session should end.
    pub fn execute(&mut self, choice: MenuChoice, rl: &mut DefaultEditor) -> anyhow::Result<bool> {
        match choice {
            MenuChoice::EditPower => self.edit_power(rl)?,
            MenuChoice::EditVolume => self.edit_volume(rl)?,
            MenuChoice::EditReflectivity => self.edit_reflectivity(rl)?,
            MenuChoice::Run => self.run_calculation(),
            MenuChoice::Quit => return Ok(true),
        }
        Ok(false)
    }

    fn edit_power(&mut self, rl: &mut DefaultEditor) -> anyhow::Result<()> {
        let prompt = "Enter new total light power (Watts, e.g. 50000): ";
        if let Some(value) = prompt_value(rl, prompt)? {
            self.params.set_parameters(
                value,
                self.params.container_volume(),
                self.params.reflectivity(),
            );
        }
        Ok(())
    }

    fn edit_volume(&mut self, rl: &mut DefaultEditor) -> anyhow::Result<()> {
        let prompt = format!("Enter new container volume (m³, min {}): ", MIN_VOLUME);
        if let Some(value) = prompt_value(rl, &prompt)? {
            self.params.set_parameters(
                self.params.total_power(),
                value,
                self.params.reflectivity(),
            );
        }
        Ok(())
    }

    fn edit_reflectivity(&mut self, rl: &mut DefaultEditor) -> anyhow::Result<()> {
        let prompt = "Enter new wall reflectivity (0.0 to 1.0, e.g. 0.99 for high reflection): ";
        if let Some(value) = prompt_value(rl, prompt)? {
            self.params.set_parameters(
                self.params.total_power(),
                self.params.container_volume(),
                value,
            );
        }
        Ok(())
    }

    fn run_calculation(&self) {
        let result = light_force_thrust(&self.params);

        println!();
        println!(
            "{}",
            style("=============== SIMULATION RESULTS ===============").cyan()
        );
        println!(
            "A. Relativistic light density (ρ_rel): {} kg/m³",
            style(format!("{:.3e}", result.rho_rel)).yellow()
        );
        println!("   (the 'weight density' build-up of the contained energy)");
        println!(
            "B. Standard radiation force (F_rad):   {} N",
            style(format!("{:.3e}", result.force_rad_base)).yellow()
        );
        println!(
            "C. Hypothetical light force thrust (F_LF): {} N",
            style(format!("{:.3e}", result.thrust)).green().bold()
        );
        println!(
            "{}",
            style("==================================================").cyan()
        );
        println!(
            "Result C is the base force amplified by the density build-up, a factor of (ρ_rel / ρ_atm)^{}.",
            BETA
        );
    }
}

/// Reads one numeric value from the user. A line that does not parse as
/// a number is reported and `None` is returned; the session keeps going.
fn prompt_value(rl: &mut DefaultEditor, prompt: &str) -> anyhow::Result<Option<f64>> {
    match rl.readline(prompt) {
        Ok(line) => match line.trim().parse::<f64>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                println!(
                    "{} Invalid input. Please enter a numerical value.",
                    style("Error:").red().bold()
                );
                Ok(None)
            }
        },
        // Aborting the prompt leaves the parameter unchanged
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

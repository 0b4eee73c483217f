use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Initial parameters read from a scenario file. Values are stored as
/// given here; clamping happens when they enter the parameter store.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioParameters {
    pub total_power: f64,      // Total light power (W)
    pub container_volume: f64, // Container volume (m³)
    pub reflectivity: f64,     // Wall reflectivity, 0 to 1
}

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to open scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Loads initial parameters from a YAML scenario file.
pub fn load_scenario(path: &Path) -> Result<ScenarioParameters, ScenarioError> {
    let file = File::open(path)?;
    let params: ScenarioParameters = serde_yaml::from_reader(file)?;
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scenario_yaml() {
        let yaml = "total_power: 120000.0\ncontainer_volume: 2.5\nreflectivity: 0.8\n";
        let params: ScenarioParameters = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(params.total_power, 120_000.0);
        assert_eq!(params.container_volume, 2.5);
        assert_eq!(params.reflectivity, 0.8);
    }
}

use crate::constants::C;
use crate::models::SimulationParameters;

/// Relativistic mass density (kg/m³) of the light energy contained in
/// the chamber: rho_rel = P / (V * c²).
pub fn relativistic_mass_density(params: &SimulationParameters) -> f64 {
    params.total_power() / (params.container_volume() * C.powi(2))
}

use super::density::relativistic_mass_density;
use crate::constants::{BETA, C, K_ENV, RHO_ATM};
use crate::models::SimulationParameters;

/// One thrust run, split into the quantities the model reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustBreakdown {
    pub thrust: f64,         // Amplified light force thrust F_LF (N)
    pub force_rad_base: f64, // Standard radiation force F_rad (N)
    pub rho_rel: f64,        // Relativistic mass density (kg/m³)
}

/// Light force thrust: F_LF = F_rad * K_ENV * (rho_rel / RHO_ATM)^BETA.
///
/// F_rad = (1 + alpha) * P / c is the standard radiation force; the
/// density ratio raised to BETA supplies the non-linear amplification.
pub fn light_force_thrust(params: &SimulationParameters) -> ThrustBreakdown {
    let force_rad_base = (1.0 + params.reflectivity()) * params.total_power() / C;

    let rho_rel = relativistic_mass_density(params);

    // RHO_ATM is fixed and non-zero; the fallback keeps the ratio
    // defined should the constant ever be edited.
    let density_ratio = if RHO_ATM == 0.0 {
        1.0
    } else {
        rho_rel / RHO_ATM
    };

    let amplification = K_ENV * density_ratio.powf(BETA);

    ThrustBreakdown {
        thrust: force_rad_base * amplification,
        force_rad_base,
        rho_rel,
    }
}

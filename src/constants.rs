pub const C: f64 = 2.99792458e8; // Speed of light (m/s)
pub const RHO_ATM: f64 = 1.225; // Standard atmospheric density at sea level (kg/m³)

// Hypothetical/empirical factors
pub const K_ENV: f64 = 1.0; // Environmental constant (K)
pub const BETA: f64 = 2.0; // Pressure build-up exponent (beta)
#[allow(dead_code)]
pub const A_EFF: f64 = 1.0; // Effective area for force calculation (m²), cancels out of the thrust formula

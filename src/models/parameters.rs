/// Smallest admissible container volume (m³). Keeps the density
/// formula's denominator away from zero.
pub const MIN_VOLUME: f64 = 0.1;

/// The three mutable simulation parameters.
///
/// Fields are private: every write goes through the clamping in
/// [`SimulationParameters::set_parameters`], so a stored value is always
/// inside its admissible range (power ≥ 0, volume ≥ [`MIN_VOLUME`],
/// reflectivity in [0, 1]).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    total_power: f64,      // Total power of all light sources (W)
    container_volume: f64, // Volume of the enclosed environment (m³)
    reflectivity: f64,     // Reflectivity (alpha) of the walls, 0 to 1
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            total_power: 50_000.0,
            container_volume: 10.0,
            reflectivity: 0.95,
        }
    }
}

impl SimulationParameters {
    pub fn new(power: f64, volume: f64, reflectivity: f64) -> Self {
        let mut params = SimulationParameters {
            total_power: 0.0,
            container_volume: MIN_VOLUME,
            reflectivity: 0.0,
        };
        params.set_parameters(power, volume, reflectivity);
        params
    }

    /// Replaces all three parameters at once. Out-of-range inputs are
    /// clamped, never rejected; to change a single parameter, pass the
    /// current values of the other two back unchanged.
    pub fn set_parameters(&mut self, power: f64, volume: f64, reflectivity: f64) {
        self.total_power = power.max(0.0);
        self.container_volume = volume.max(MIN_VOLUME);
        self.reflectivity = reflectivity.clamp(0.0, 1.0);
    }

    pub fn total_power(&self) -> f64 {
        self.total_power
    }

    pub fn container_volume(&self) -> f64 {
        self.container_volume
    }

    pub fn reflectivity(&self) -> f64 {
        self.reflectivity
    }
}

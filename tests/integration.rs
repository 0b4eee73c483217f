use approx::assert_relative_eq;
use lightforce::models::SimulationParameters;
use lightforce::physics::density::relativistic_mass_density;
use lightforce::physics::thrust::light_force_thrust;

// Drives the engine the way the console loop does: start from the
// defaults, edit one parameter at a time, run, and check the reported
// quantities.
#[test]
fn read_modify_run_session() {
    let mut params = SimulationParameters::default();

    let baseline = light_force_thrust(&params);
    assert_relative_eq!(baseline.rho_rel, 5.5632501e-14, max_relative = 1e-6);
    assert_relative_eq!(baseline.force_rad_base, 3.2522499e-4, max_relative = 1e-6);
    assert_relative_eq!(baseline.thrust, 6.7076268e-31, max_relative = 1e-5);

    // Switch the sources off with a single-field edit, as menu choice 1 does
    params.set_parameters(0.0, params.container_volume(), params.reflectivity());
    let dark = light_force_thrust(&params);
    assert_eq!(dark.rho_rel, 0.0);
    assert_eq!(dark.force_rad_base, 0.0);
    assert_eq!(dark.thrust, 0.0);

    // Power back on and shrink the chamber below the floor: the volume
    // clamps to 0.1 m³, one hundredth of the default, so the density
    // rises 100x and the thrust by the squared ratio.
    params.set_parameters(50_000.0, 0.05, params.reflectivity());
    assert_eq!(params.container_volume(), 0.1);

    let dense = light_force_thrust(&params);
    assert_eq!(dense.force_rad_base, baseline.force_rad_base);
    assert_relative_eq!(dense.rho_rel, baseline.rho_rel * 100.0, max_relative = 1e-9);
    assert_relative_eq!(dense.thrust, baseline.thrust * 1.0e4, max_relative = 1e-9);
}

#[test]
fn repeated_runs_are_deterministic() {
    let params = SimulationParameters::new(120_000.0, 2.5, 0.8);
    let first = light_force_thrust(&params);

    for _ in 0..10 {
        assert_eq!(light_force_thrust(&params), first);
    }
}

#[test]
fn breakdown_density_matches_density_function() {
    let params = SimulationParameters::new(80_000.0, 4.0, 0.5);
    let result = light_force_thrust(&params);

    assert_eq!(result.rho_rel, relativistic_mass_density(&params));
}

use std::env;

use charge_grid::prelude::*;

fn main() -> Result<(), ChargeGridError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    // Dipole: +5 nC and -5 nC, 2 m apart.
    let particles = vec![
        Particle::new(1.0, 2.0, "5 nC".parse()?),
        Particle::new(3.0, 2.0, "-5 nC".parse()?),
    ];
    for p in &particles {
        println!("{p}");
    }

    let spacing = env::args()
        .nth(1)
        .and_then(|s| s.parse::<Scalar>().ok())
        .unwrap_or(0.5);
    let config = SamplingConfig::electric_field("dipole", spacing).with_debug(true);
    let grid = EquipotentialMapper::new(config).run(&particles)?;
    println!("sampled {} x {} grid", grid.columns(), grid.rows());
    write_grid_csv(DEFAULT_OUTPUT_FILE, grid.points())?;

    // Single-pair force: two 1 µC charges 1 m apart.
    let q = Charge::from_scientific(1.0, -6);
    println!("force: {:.6e} N", coulomb_force(q, q, 1.0));
    Ok(())
}

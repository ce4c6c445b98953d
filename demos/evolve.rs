//! Headless evolution demo: builds a random partition, runs a few hundred
//! generations and prints the analysis summary every 50.
//!
//! Run with `RUST_LOG=celldrift=debug` for per-generation diagnostics.

use celldrift::math::Point2;
use celldrift::partition::Domain;
use celldrift::{Simulation, SimulationConfig};

fn main() -> celldrift::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let domain = Domain::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0))?;
    let config = SimulationConfig {
        cell_count: 80,
        rng_seed: Some(2024),
        ..SimulationConfig::default()
    };

    let mut sim = Simulation::new(config, domain)?;
    println!(
        "partition: {} cells, {} edges",
        sim.store().cell_count(),
        sim.store().edge_count()
    );

    sim.start();
    for generation in 1..=300_u32 {
        let Some(stats) = sim.tick()? else {
            break;
        };
        if generation % 50 == 0 {
            println!(
                "gen {generation:>4}: {} edges, {} growing, {} shrinking, {} unconnected",
                stats.total_edges, stats.with_acute, stats.without_acute, stats.unconnected
            );
        }
    }

    let longest = sim
        .edge_views()
        .iter()
        .map(|e| (e.end - e.start).norm())
        .fold(0.0_f64, f64::max);
    println!("done after {} generations, longest edge {longest:.3}", sim.generation());
    Ok(())
}

use clap::Parser;
use nalgebra::vector;
use spacewar_simulator::{Ship, Simulation, SpaceObject};
use std::path::PathBuf;

/// Flies a single ship around a headless screen and prints the final
/// snapshot as JSON.
#[derive(Parser, Debug)]
#[clap()]
struct Arguments {
    #[clap(default_value = "600")]
    ticks: u32,

    #[clap(short, long)]
    config: Option<PathBuf>,

    #[clap(short, long)]
    sprite: Option<PathBuf>,

    /// Turn clockwise every this many ticks (0 disables turning).
    #[clap(long, default_value = "30")]
    turn_every: u32,

    /// Thrust every this many ticks (0 disables thrust).
    #[clap(long, default_value = "60")]
    thrust_every: u32,

    /// Write the ship's final rendered image here.
    #[clap(long)]
    save_image: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("drift=info"))
        .init();

    let args = Arguments::parse();
    let screen = spacewar_tools::load_screen_config(args.config.as_deref())?;
    let sprite = spacewar_tools::load_sprite(args.sprite.as_deref())?;

    let mut sim = Simulation::new(screen)?;
    let center = vector![screen.width / 2.0, screen.height / 2.0];
    let handle = sim.add(Box::new(Ship::new(0, sprite, center, 0.0, screen)?))?;

    for tick in 0..args.ticks {
        if let Some(ship) = sim.ship_mut(handle) {
            if args.turn_every > 0 && tick % args.turn_every == 0 {
                ship.rotate_clockwise();
            }
            if args.thrust_every > 0 && tick % args.thrust_every == 0 {
                ship.thrust();
            }
        }
        sim.step();
        if sim.tick() % screen.max_fps == 0 {
            if let Some(ship) = sim.get(handle) {
                log::info!(
                    "t={:.1}s position=({:.1}, {:.1}) angle={}",
                    sim.time(),
                    ship.position().x,
                    ship.position().y,
                    ship.angle()
                );
            }
        }
    }

    if let (Some(path), Some(ship)) = (&args.save_image, sim.get(handle)) {
        log::info!("Saving image to {:?}", path);
        ship.entity().image().save(path)?;
    }

    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}

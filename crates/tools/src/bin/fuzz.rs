use anyhow::{Result, bail};
use clap::Parser;
use dungeon_core::generate_dungeon;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    maps: u32,
    /// Largest grid size to draw
    #[arg(long, default_value_t = 96)]
    max_size: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.max_size < 2 {
        bail!("--max-size must be at least 2");
    }

    println!("Starting dungeon fuzz on seed {} for {} maps...", args.seed, args.maps);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut total_rooms = 0usize;

    for _ in 0..args.maps {
        let map_seed = rng.next_u64() as i64;
        let grid_size = 2 + (rng.next_u64() % u64::from(args.max_size - 1)) as u32;

        let map = generate_dungeon(map_seed, grid_size)?;
        if let Err(e) = map.validate() {
            bail!("Invariant failed: {e} (seed={map_seed}, size={grid_size})");
        }
        if map != generate_dungeon(map_seed, grid_size)? {
            bail!("Invariant failed: regeneration differs (seed={map_seed}, size={grid_size})");
        }
        log::debug!("seed={map_seed} size={grid_size} rooms={}", map.rooms.len());
        total_rooms += map.rooms.len();
    }

    println!("Fuzzing completed successfully: {total_rooms} rooms checked.");
    Ok(())
}

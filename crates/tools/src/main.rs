use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use dungeon_core::{DungeonGenerator, GeneratorConfig};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

mod config_file;
mod preview;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Preview,
    Fingerprint,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Generator seed; picked from the wall clock when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i64>,
    /// Edge length of the square logical grid
    #[arg(short = 'n', long, default_value_t = 10)]
    size: u32,
    /// TOML file overriding generator policy
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
    /// Draw unvisited rooms in the preview instead of fog
    #[arg(long)]
    reveal: bool,
    /// Room ids to walk through, in order, before printing
    #[arg(long = "move", value_name = "ROOM_ID")]
    moves: Vec<String>,
}

fn wall_clock_seed() -> i64 {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |elapsed| elapsed.as_millis() as i64)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => config_file::load_generator_config(path)?,
        None => GeneratorConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(wall_clock_seed);
    log::info!("generating seed={seed} size={}", args.size);

    let mut map = DungeonGenerator::new(config)
        .generate(seed, args.size)
        .with_context(|| format!("Failed to generate dungeon for seed {seed}"))?;
    for room_id in &args.moves {
        map.move_to_room(room_id).with_context(|| format!("Cannot move to {room_id}"))?;
    }

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&map)
                .with_context(|| "Failed to serialize dungeon JSON")?;
            println!("{json}");
        }
        OutputFormat::Preview => {
            print!("{}", preview::render(&map, args.reveal));
            println!(
                "seed {} | {} rooms | current {}",
                map.seed,
                map.rooms.len(),
                map.current_room_id
            );
        }
        OutputFormat::Fingerprint => println!("{:016x}", map.fingerprint()),
    }

    Ok(())
}

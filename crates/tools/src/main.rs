use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use procgen::{CellType, run};
use std::path::PathBuf;
use tools::format_fingerprint;
use tools::params_file::ParamsFile;
use tools::render::render_ascii;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Parameter file to load; defaults to the saved file in the data directory
    #[arg(short, long)]
    params: Option<PathBuf>,
    #[arg(short, long, allow_negative_numbers = true)]
    seed: Option<i32>,
    #[arg(long)]
    width: Option<i32>,
    #[arg(long)]
    height: Option<i32>,
    #[arg(long)]
    room_attempts: Option<i32>,
    #[arg(long)]
    min_room_size: Option<i32>,
    #[arg(long)]
    max_room_size: Option<i32>,
    #[arg(long)]
    extra_corridors: Option<i32>,
    /// Write the resolved parameters and seed to this file
    #[arg(long)]
    save_params: Option<PathBuf>,
    /// Print only the summary lines
    #[arg(long)]
    no_preview: bool,
}

fn load_base_config(explicit: Option<&PathBuf>) -> Result<ParamsFile> {
    if let Some(path) = explicit {
        return ParamsFile::load(path)
            .with_context(|| format!("Failed to read params file: {}", path.display()));
    }
    match ParamsFile::get_default_path() {
        Some(path) if path.exists() => {
            info!("using saved parameters from {}", path.display());
            ParamsFile::load(&path)
                .with_context(|| format!("Failed to read params file: {}", path.display()))
        }
        _ => Ok(ParamsFile::default()),
    }
}

fn apply_overrides(config: &mut ParamsFile, args: &Args) {
    let params = &mut config.params;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    if let Some(room_attempts) = args.room_attempts {
        params.room_attempts = room_attempts;
    }
    if let Some(min_room_size) = args.min_room_size {
        params.min_room_size = min_room_size;
    }
    if let Some(max_room_size) = args.max_room_size {
        params.max_room_size = max_room_size;
    }
    if let Some(extra_corridors) = args.extra_corridors {
        params.extra_corridors = extra_corridors;
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = load_base_config(args.params.as_ref())?;
    apply_overrides(&mut config, &args);

    if let Err(problem) = config.params.validate() {
        warn!("parameters will produce a degenerate map: {problem}");
    }

    if let Some(path) = &args.save_params {
        config
            .write_atomic(path)
            .with_context(|| format!("Failed to write params file: {}", path.display()))?;
        info!("saved parameters to {}", path.display());
    }

    let map = run(&config.params, config.seed);

    if !args.no_preview {
        print!("{}", render_ascii(&map));
    }
    println!("Seed: {}", config.seed);
    println!("Grid: {}x{}", map.width, map.height);
    println!("Rooms: {}", map.rooms.len());
    println!("Floor cells: {}", map.count_of(CellType::Floor));
    println!("Wall cells: {}", map.count_of(CellType::Wall));
    println!("Walkable regions: {}", map.walkable_region_count());
    println!("Fingerprint: {}", format_fingerprint(map.fingerprint()));

    Ok(())
}

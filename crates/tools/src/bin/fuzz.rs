use anyhow::{Result, bail};
use clap::Parser;
use log::debug;
use procgen::{CellType, GenerationParameters, MapData, run};
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
    iterations: u32,
}

fn draw(rng: &mut ChaCha8Rng, min_value: i32, max_value: i32) -> i32 {
    min_value + (rng.next_u64() % (max_value - min_value + 1) as u64) as i32
}

fn random_params(rng: &mut ChaCha8Rng) -> GenerationParameters {
    let min_room_size = draw(rng, 1, 10);
    GenerationParameters {
        width: draw(rng, 1, 160),
        height: draw(rng, 1, 120),
        room_attempts: draw(rng, 0, 200),
        min_room_size,
        max_room_size: min_room_size + draw(rng, 0, 10),
        extra_corridors: draw(rng, 0, 16),
    }
}

fn violated_invariant(map: &MapData) -> Option<String> {
    if let Some((key, _)) = map.cells.iter().find(|(key, cell)| **key != cell.pos()) {
        return Some(format!("cell key {key:?} does not match stored coordinates"));
    }
    if let Some(key) = map.cells.keys().find(|key| !map.in_bounds(**key)) {
        return Some(format!("cell {key:?} lies outside the grid"));
    }
    for (index, room) in map.rooms.iter().enumerate() {
        if room.bounds.min.x < 1
            || room.bounds.min.y < 1
            || room.bounds.max.x > map.width - 1
            || room.bounds.max.y > map.height - 1
        {
            return Some(format!("room {index} crosses the border: {:?}", room.bounds));
        }
        let padded = room.bounds.expanded(1);
        if let Some(other) =
            map.rooms[index + 1..].iter().find(|other| padded.intersects(&other.bounds))
        {
            return Some(format!("room {index} touches {:?}", other.bounds));
        }
    }
    for cell in map.cells.values().filter(|cell| cell.kind == CellType::Wall) {
        if !cell.pos().orthogonal_neighbors().into_iter().any(|next| map.is_walkable(next)) {
            return Some(format!("wall at {:?} has no walkable neighbour", cell.pos()));
        }
    }
    if !map.rooms.is_empty() && map.walkable_region_count() != 1 {
        return Some(format!("{} disconnected walkable regions", map.walkable_region_count()));
    }
    None
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting map fuzz on seed {} for {} iterations...", args.seed, args.iterations);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut total_rooms = 0_usize;
    for iteration in 0..args.iterations {
        let params = random_params(&mut rng);
        let map_seed = rng.next_u32() as i32;

        let map = run(&params, map_seed);
        debug!("iteration {iteration}: {} rooms for {params:?}", map.rooms.len());
        if let Some(problem) = violated_invariant(&map) {
            bail!(
                "Invariant failed on iteration {iteration} (seed {map_seed}, {params:?}): {problem}"
            );
        }
        if run(&params, map_seed) != map {
            bail!(
                "Invariant failed on iteration {iteration}: seed {map_seed} is not deterministic"
            );
        }
        total_rooms += map.rooms.len();
    }

    println!("Fuzzing completed successfully ({total_rooms} rooms checked).");
    Ok(())
}

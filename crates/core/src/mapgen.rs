//! Procedural room-and-corridor map generation split into coherent submodules.

pub mod model;
pub mod params;
pub mod rect;

mod corridors;
mod generator;
mod grid;
mod layout;
mod rng;
mod walls;

pub use generator::MapGenerator;
pub use model::{MapData, Room};
pub use params::{GenerationParameters, ParamsError};
pub use rect::RoomRect;

/// Builds a map from `params` and `seed`. Same inputs always give the same map.
pub fn run(params: &GenerationParameters, seed: i32) -> MapData {
    MapGenerator::new(*params).generate(seed)
}

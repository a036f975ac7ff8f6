pub mod mapgen;
pub mod types;

pub use mapgen::{GenerationParameters, MapData, MapGenerator, ParamsError, Room, RoomRect, run};
pub use types::*;

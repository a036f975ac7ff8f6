//! L-shaped corridor carving between room centers.

use log::trace;

use crate::types::{CellType, GridPos};

use super::model::MapData;
use super::rng::MapRng;

/// Links each room to its predecessor in placement order, so the rooms form a path.
pub(super) fn connect_sequential(map: &mut MapData) {
    for index in 1..map.rooms.len() {
        let from = map.rooms[index - 1].center();
        let to = map.rooms[index].center();
        carve_corridor(map, from, to);
    }
}

/// Adds `extra_corridors` links between randomly drawn room pairs. Pairs that draw the
/// same room twice are skipped without a redraw.
pub(super) fn connect_extra(map: &mut MapData, extra_corridors: i32, rng: &mut MapRng) {
    if map.rooms.len() < 2 {
        return;
    }
    for _ in 0..extra_corridors.max(0) {
        let first = rng.index(map.rooms.len());
        let second = rng.index(map.rooms.len());
        if first == second {
            trace!("extra corridor drew room {first} twice, skipping");
            continue;
        }
        let from = map.rooms[first].center();
        let to = map.rooms[second].center();
        carve_corridor(map, from, to);
    }
}

/// Walks x toward `to.x` along `from.y`, then y toward `to.y` along `to.x`, marking
/// every visited coordinate after the start as floor.
pub(super) fn carve_corridor(map: &mut MapData, from: GridPos, to: GridPos) {
    let mut cursor = from;
    while cursor.x != to.x {
        cursor.x += (to.x - cursor.x).signum();
        map.set_cell(cursor, CellType::Floor);
    }
    while cursor.y != to.y {
        cursor.y += (to.y - cursor.y).signum();
        map.set_cell(cursor, CellType::Floor);
    }
}

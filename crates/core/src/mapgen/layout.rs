//! Room placement by rejection sampling, floor stamping, and the padded overlap test.

use log::trace;

use crate::types::CellType;

use super::model::{MapData, Room};
use super::params::GenerationParameters;
use super::rect::RoomRect;
use super::rng::MapRng;

/// Spends exactly `room_attempts` candidates; accepted rooms are stamped as floor
/// and appended in placement order.
pub(super) fn place_rooms(map: &mut MapData, params: &GenerationParameters, rng: &mut MapRng) {
    for attempt in 0..params.room_attempts.max(0) {
        let room_width = rng.range_inclusive(params.min_room_size, params.max_room_size);
        let room_height = rng.range_inclusive(params.min_room_size, params.max_room_size);
        let max_x = origin_upper_bound(params.width, room_width);
        let max_y = origin_upper_bound(params.height, room_height);
        let x = rng.range_inclusive(1, max_x);
        let y = rng.range_inclusive(1, max_y);

        if max_x < 1 || max_y < 1 {
            trace!("attempt {attempt}: {room_width}x{room_height} room has no valid origin");
            continue;
        }

        let candidate = RoomRect::from_origin_size(x, y, room_width, room_height);
        if candidate.is_empty() {
            trace!("attempt {attempt}: {room_width}x{room_height} room has no interior");
            continue;
        }
        if intersects_existing(map, candidate) {
            trace!("attempt {attempt}: rejected {candidate:?}");
            continue;
        }
        stamp_room(map, candidate);
        map.rooms.push(Room::new(candidate));
    }
}

/// Largest origin that keeps a `room_size` span plus the one-tile border inside `extent`.
/// Computed wide and clamped, so any input pair maps to a bound instead of overflowing.
pub(super) fn origin_upper_bound(extent: i32, room_size: i32) -> i32 {
    let bound = i64::from(extent) - i64::from(room_size) - 2;
    bound.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

pub(super) fn stamp_room(map: &mut MapData, rect: RoomRect) {
    for pos in rect.positions() {
        map.set_cell(pos, CellType::Floor);
    }
}

/// True when any materialized cell lies within `rect` grown by one tile on every side.
pub(super) fn intersects_existing(map: &MapData, rect: RoomRect) -> bool {
    rect.expanded(1).positions().any(|pos| map.cells.contains_key(&pos))
}

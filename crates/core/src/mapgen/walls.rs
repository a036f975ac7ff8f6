//! Wall derivation: empty tiles that border walkable tiles become walls.

use crate::types::{CellType, GridPos};

use super::model::MapData;

/// Row-major scan over the generation extent. Returns the number of walls added.
///
/// Only floor and door cells count as neighbours, so a wall placed earlier in the scan
/// never causes a later one.
pub(super) fn derive_walls(map: &mut MapData) -> usize {
    let mut added = 0;
    for y in 0..map.height {
        for x in 0..map.width {
            let pos = GridPos { x, y };
            if map.cell_type_at(pos) != CellType::Empty {
                continue;
            }
            if pos.orthogonal_neighbors().into_iter().any(|next| map.is_walkable(next)) {
                map.set_cell(pos, CellType::Wall);
                added += 1;
            }
        }
    }
    added
}

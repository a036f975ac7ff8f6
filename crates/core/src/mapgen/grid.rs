//! Grid-space queries over the sparse cell map.

use std::collections::{HashSet, VecDeque};

use crate::types::GridPos;

use super::model::MapData;

/// True when `pos` lies inside the generation extent `[0, width) x [0, height)`.
pub(super) fn in_bounds(width: i32, height: i32, pos: GridPos) -> bool {
    pos.x >= 0 && pos.y >= 0 && pos.x < width && pos.y < height
}

/// Number of 4-connected components formed by Floor and Door cells.
pub(super) fn walkable_region_count(map: &MapData) -> usize {
    let mut walkable: Vec<GridPos> =
        map.cells.values().filter(|cell| cell.kind.is_walkable()).map(|cell| cell.pos()).collect();
    walkable.sort_by_key(|pos| (pos.y, pos.x));

    let mut seen: HashSet<u64> = HashSet::with_capacity(walkable.len());
    let mut regions = 0;
    for start in walkable {
        if !seen.insert(start.packed()) {
            continue;
        }
        regions += 1;
        let mut open = VecDeque::from([start]);
        while let Some(pos) = open.pop_front() {
            for next in pos.orthogonal_neighbors() {
                if map.is_walkable(next) && seen.insert(next.packed()) {
                    open.push_back(next);
                }
            }
        }
    }
    regions
}

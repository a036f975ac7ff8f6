//! Public data models for generated maps: the sparse cell grid and placed rooms.

use std::collections::HashMap;

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Cell, CellType, GridPos};

use super::grid;
use super::rect::RoomRect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Room {
    pub bounds: RoomRect,
    pub door_cells: Vec<GridPos>,
}

impl Room {
    pub fn new(bounds: RoomRect) -> Self {
        Self { bounds, door_cells: Vec::new() }
    }

    pub fn center(&self) -> GridPos {
        self.bounds.center()
    }
}

/// Result of one generation run. Only non-empty cells are stored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapData {
    pub width: i32,
    pub height: i32,
    pub cells: HashMap<GridPos, Cell>,
    /// Placement order; corridor connection follows this order.
    pub rooms: Vec<Room>,
}

impl MapData {
    pub(super) fn empty(width: i32, height: i32) -> Self {
        Self { width, height, cells: HashMap::new(), rooms: Vec::new() }
    }

    pub(super) fn set_cell(&mut self, pos: GridPos, kind: CellType) {
        self.cells.insert(pos, Cell::new(pos, kind));
    }

    pub fn cell_type_at(&self, pos: GridPos) -> CellType {
        self.cells.get(&pos).map_or(CellType::Empty, |cell| cell.kind)
    }

    /// True for coordinates inside the generation extent, materialized or not.
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        grid::in_bounds(self.width, self.height, pos)
    }

    pub fn is_walkable(&self, pos: GridPos) -> bool {
        self.cell_type_at(pos).is_walkable()
    }

    pub fn count_of(&self, kind: CellType) -> usize {
        self.cells.values().filter(|cell| cell.kind == kind).count()
    }

    pub fn walkable_region_count(&self) -> usize {
        grid::walkable_region_count(self)
    }

    /// Stable byte encoding: extent, cells in row-major order, then rooms in placement order.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.width.to_le_bytes());
        bytes.extend(self.height.to_le_bytes());

        let mut cells: Vec<&Cell> = self.cells.values().collect();
        cells.sort_by_key(|cell| (cell.y, cell.x));
        bytes.extend((cells.len() as u32).to_le_bytes());
        for cell in cells {
            bytes.extend(cell.y.to_le_bytes());
            bytes.extend(cell.x.to_le_bytes());
            bytes.push(match cell.kind {
                CellType::Empty => 0,
                CellType::Floor => 1,
                CellType::Wall => 2,
                CellType::Door => 3,
            });
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend(room.bounds.min.x.to_le_bytes());
            bytes.extend(room.bounds.min.y.to_le_bytes());
            bytes.extend(room.bounds.max.x.to_le_bytes());
            bytes.extend(room.bounds.max.y.to_le_bytes());
            bytes.extend((room.door_cells.len() as u32).to_le_bytes());
            for door in &room.door_cells {
                bytes.extend(door.x.to_le_bytes());
                bytes.extend(door.y.to_le_bytes());
            }
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

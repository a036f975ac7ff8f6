use serde::{Deserialize, Serialize};

/// Integer tile coordinate; doubles as the key of the sparse cell map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Both coordinates folded into one word: x in the high half, y in the low half.
    pub fn packed(self) -> u64 {
        (u64::from(self.x as u32) << 32) | u64::from(self.y as u32)
    }

    pub fn orthogonal_neighbors(self) -> [Self; 4] {
        [
            Self { x: self.x + 1, y: self.y },
            Self { x: self.x - 1, y: self.y },
            Self { x: self.x, y: self.y + 1 },
            Self { x: self.x, y: self.y - 1 },
        ]
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellType {
    #[default]
    Empty,
    Floor,
    Wall,
    Door,
}

impl CellType {
    pub fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::Door)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub kind: CellType,
}

impl Cell {
    pub fn new(pos: GridPos, kind: CellType) -> Self {
        Self { x: pos.x, y: pos.y, kind }
    }

    pub fn pos(self) -> GridPos {
        GridPos { x: self.x, y: self.y }
    }
}

//! Half-open rectangle math for room footprints.

use serde::{Deserialize, Serialize};

use crate::types::GridPos;

/// Axis-aligned rectangle covering `min.x..max.x` by `min.y..max.y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomRect {
    pub min: GridPos,
    pub max: GridPos,
}

impl RoomRect {
    pub fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { min: GridPos { x, y }, max: GridPos { x: x + width, y: y + height } }
    }

    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Midpoint of the bounds, rounded toward zero per axis.
    pub fn center(self) -> GridPos {
        GridPos { x: (self.min.x + self.max.x) / 2, y: (self.min.y + self.max.y) / 2 }
    }

    pub fn expanded(self, margin: i32) -> Self {
        Self {
            min: GridPos { x: self.min.x - margin, y: self.min.y - margin },
            max: GridPos { x: self.max.x + margin, y: self.max.y + margin },
        }
    }

    pub fn contains(self, pos: GridPos) -> bool {
        pos.x >= self.min.x && pos.x < self.max.x && pos.y >= self.min.y && pos.y < self.max.y
    }

    pub fn intersects(self, other: &Self) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Row-major walk over every covered coordinate.
    pub fn positions(self) -> impl Iterator<Item = GridPos> {
        (self.min.y..self.max.y)
            .flat_map(move |y| (self.min.x..self.max.x).map(move |x| GridPos { x, y }))
    }
}

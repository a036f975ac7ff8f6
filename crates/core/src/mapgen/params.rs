//! Tunable generation inputs and advisory validation.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Immutable input record for a generation run. All extents are tile counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    pub width: i32,
    pub height: i32,
    pub room_attempts: i32,
    pub min_room_size: i32,
    pub max_room_size: i32,
    pub extra_corridors: i32,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            width: 80,
            height: 60,
            room_attempts: 80,
            min_room_size: 4,
            max_room_size: 10,
            extra_corridors: 6,
        }
    }
}

impl GenerationParameters {
    /// Reports the first parameter that would make generation degenerate.
    ///
    /// The generator itself never calls this; degenerate inputs produce degenerate
    /// maps rather than errors.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.width < 1 || self.height < 1 {
            return Err(ParamsError::EmptyGrid { width: self.width, height: self.height });
        }
        if self.min_room_size < 1 || self.max_room_size < 1 {
            return Err(ParamsError::NonPositiveRoomSize {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.min_room_size > self.max_room_size {
            return Err(ParamsError::InvertedRoomSize {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.room_attempts < 0 {
            return Err(ParamsError::NegativeCount {
                field: "room_attempts",
                value: self.room_attempts,
            });
        }
        if self.extra_corridors < 0 {
            return Err(ParamsError::NegativeCount {
                field: "extra_corridors",
                value: self.extra_corridors,
            });
        }
        let spare_x = i64::from(self.width) - i64::from(self.max_room_size) - 2;
        let spare_y = i64::from(self.height) - i64::from(self.max_room_size) - 2;
        if spare_x < 1 || spare_y < 1 {
            return Err(ParamsError::GridTooSmall {
                width: self.width,
                height: self.height,
                max_room_size: self.max_room_size,
            });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamsError {
    EmptyGrid { width: i32, height: i32 },
    NonPositiveRoomSize { min: i32, max: i32 },
    InvertedRoomSize { min: i32, max: i32 },
    NegativeCount { field: &'static str, value: i32 },
    /// A room of `max_room_size` plus the one-tile border does not fit.
    GridTooSmall { width: i32, height: i32, max_room_size: i32 },
}

impl fmt::Display for ParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must be at least 1x1, got {width}x{height}")
            }
            Self::NonPositiveRoomSize { min, max } => {
                write!(f, "room sizes must be positive, got min={min} max={max}")
            }
            Self::InvertedRoomSize { min, max } => {
                write!(f, "min_room_size {min} exceeds max_room_size {max}")
            }
            Self::NegativeCount { field, value } => {
                write!(f, "{field} must not be negative, got {value}")
            }
            Self::GridTooSmall { width, height, max_room_size } => write!(
                f,
                "{width}x{height} grid cannot hold a {max_room_size}-tile room inside its border"
            ),
        }
    }
}

impl Error for ParamsError {}

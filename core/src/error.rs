use thiserror::Error;

use crate::{CellCount, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size {width}x{height} is out of range")]
    InvalidSize { width: i64, height: i64 },
    #[error("At least one bomb is required, got {0}")]
    TooFewBombs(i64),
    #[error("Cannot place {requested} bombs on a board of {capacity} cells")]
    TooManyBombs {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
}

impl GameError {
    /// Whether the error comes from user-supplied board parameters rather than a broken invariant.
    pub const fn is_range_violation(&self) -> bool {
        matches!(self, Self::InvalidSize { .. } | Self::TooFewBombs(_))
    }
}

pub type Result<T> = core::result::Result<T, GameError>;

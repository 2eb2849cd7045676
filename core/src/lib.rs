#![no_std]

extern crate alloc;

use core::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use render::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod render;
mod types;

pub const MIN_SIDE: Coord = 3;
pub const MAX_SIDE: Coord = 15;
pub const MIN_BOMBS: CellCount = 1;

pub const DEFAULT_WIDTH: Coord = 9;
pub const DEFAULT_HEIGHT: Coord = 9;
pub const DEFAULT_BOMBS: CellCount = 12;

const SIDE_RANGE: RangeInclusive<i64> = (MIN_SIDE as i64)..=(MAX_SIDE as i64);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub bombs: CellCount,
}

/// A config that passed validation, remembering the bomb count originally asked for if it had to be lowered.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Validated {
    pub config: BoardConfig,
    pub clamped_from: Option<i64>,
}

impl BoardConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, bombs: CellCount) -> Self {
        Self {
            width,
            height,
            bombs,
        }
    }

    /// Checks raw user input: sides must be within `MIN_SIDE..=MAX_SIDE` and at least one bomb is required.
    ///
    /// A bomb count above [`BoardConfig::max_bombs`] is not an error, it is lowered to the maximum and reported
    /// through [`Validated::clamped_from`].
    pub fn validate(width: i64, height: i64, bombs: i64) -> Result<Validated> {
        let (Some(w), Some(h)) = (Self::side(width), Self::side(height)) else {
            return Err(GameError::InvalidSize { width, height });
        };
        if bombs < i64::from(MIN_BOMBS) {
            return Err(GameError::TooFewBombs(bombs));
        }

        let max_bombs = Self::max_bombs(w, h);
        let (bombs, clamped_from) = if bombs > i64::from(max_bombs) {
            log::debug!("Clamping {bombs} bombs to {max_bombs} for a {w}x{h} board");
            (max_bombs, Some(bombs))
        } else {
            // fits in CellCount since it is at most max_bombs
            (bombs as CellCount, None)
        };

        Ok(Validated {
            config: Self::new_unchecked(w, h, bombs),
            clamped_from,
        })
    }

    /// Converts a raw side length, `None` when outside `MIN_SIDE..=MAX_SIDE`.
    pub fn side(value: i64) -> Option<Coord> {
        if SIDE_RANGE.contains(&value) {
            Coord::try_from(value).ok()
        } else {
            None
        }
    }

    /// A third of the board, rounded down.
    pub const fn max_bombs(width: Coord, height: Coord) -> CellCount {
        mult(width, height) / 3
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Array shape `(rows, columns)`.
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_BOMBS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest_board_accepts_its_maximum() {
        let validated = BoardConfig::validate(3, 3, 3).unwrap();

        assert_eq!(validated.config, BoardConfig::new_unchecked(3, 3, 3));
        assert_eq!(validated.clamped_from, None);
    }

    #[test]
    fn bomb_count_above_maximum_is_clamped() {
        let validated = BoardConfig::validate(3, 3, 5).unwrap();

        assert_eq!(validated.config.bombs, 3);
        assert_eq!(validated.clamped_from, Some(5));
    }

    #[test]
    fn zero_bombs_is_rejected() {
        assert_eq!(
            BoardConfig::validate(3, 3, 0),
            Err(GameError::TooFewBombs(0))
        );
    }

    #[test]
    fn sides_outside_range_are_rejected() {
        for (width, height) in [(2, 9), (9, 2), (16, 9), (9, 16), (-3, 9), (9, i64::MAX)] {
            let err = BoardConfig::validate(width, height, 5).unwrap_err();
            assert_eq!(err, GameError::InvalidSize { width, height });
            assert!(err.is_range_violation());
        }
    }

    #[test]
    fn size_is_checked_before_bombs() {
        assert!(matches!(
            BoardConfig::validate(1, 1, 0),
            Err(GameError::InvalidSize { .. })
        ));
    }

    #[test]
    fn max_bombs_rounds_down() {
        assert_eq!(BoardConfig::max_bombs(3, 3), 3);
        assert_eq!(BoardConfig::max_bombs(4, 5), 6);
        assert_eq!(BoardConfig::max_bombs(9, 9), 27);
        assert_eq!(BoardConfig::max_bombs(15, 15), 75);
    }

    #[test]
    fn default_matches_command_defaults() {
        let config = BoardConfig::default();

        assert_eq!(config.size(), (9, 9));
        assert_eq!(config.bombs, 12);
        assert_eq!(config.total_cells(), 81);
    }
}

use serde::{Deserialize, Serialize};

/// Content of a single board cell once generation has finished.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Bomb,
    Adjacent(u8),
}

impl Cell {
    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    /// Number of neighboring bombs, `None` for a bomb cell.
    pub const fn adjacent_count(self) -> Option<u8> {
        match self {
            Self::Bomb => None,
            Self::Adjacent(count) => Some(count),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Adjacent(0)
    }
}

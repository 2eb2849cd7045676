use core::ops::Index;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;

/// A fully generated board, `height` rows by `width` columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    bomb_count: CellCount,
}

impl Grid {
    pub(crate) fn from_cells(cells: Array2<Cell>, bomb_count: CellCount) -> Self {
        Self { cells, bomb_count }
    }

    /// Builds a board with bombs at exactly `bomb_coords` and every other cell counting its bomb neighbors.
    pub fn from_bomb_coords(size: Coord2, bomb_coords: &[Coord2]) -> Result<Self> {
        let mut cells: Array2<Cell> = Array2::default(size.to_nd_index());

        for &coords in bomb_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords(coords));
            }
            cells[coords.to_nd_index()] = Cell::Bomb;
        }

        let mut grid = Self::from_cells(cells, 0);
        grid.bomb_count = grid.cells.iter().filter(|cell| cell.is_bomb()).count() as CellCount;
        for (row, col) in grid.coords() {
            if !grid[(row, col)].is_bomb() {
                let count = grid.count_adjacent_bombs((row, col));
                grid.cells[(row, col).to_nd_index()] = Cell::Adjacent(count);
            }
        }
        Ok(grid)
    }

    /// Array shape `(rows, columns)`.
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().1
    }

    pub fn height(&self) -> Coord {
        self.size().0
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new_unchecked(self.width(), self.height(), self.bomb_count)
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.rows().into_iter()
    }

    /// Every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Counts bombs around `coords` by looking at the neighbors, ignoring any stored count.
    pub fn count_adjacent_bombs(&self, coords: Coord2) -> u8 {
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_bomb())
            .count() as u8
    }

    /// Whether every non-bomb cell holds the actual number of bombs around it.
    pub fn is_consistent(&self) -> bool {
        self.coords().all(|coords| match self[coords] {
            Cell::Bomb => true,
            Cell::Adjacent(count) => count == self.count_adjacent_bombs(coords),
        })
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

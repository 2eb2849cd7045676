use ndarray::Array2;

use super::*;

/// Purely random placement: every bomb goes to a uniformly chosen cell, redrawing on collisions.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: BoardConfig) -> Result<Grid> {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        if config.bombs > total_cells {
            return Err(GameError::TooManyBombs {
                requested: config.bombs,
                capacity: total_cells,
            });
        }

        let (rows, cols) = config.size();
        let mut cells: Array2<Cell> = Array2::default(config.size().to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut collisions: u32 = 0;

        for _ in 0..config.bombs {
            let coords = loop {
                let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
                if !cells[coords.to_nd_index()].is_bomb() {
                    break coords;
                }
                collisions += 1;
                log::trace!("Cell {coords:?} already holds a bomb, drawing again");
            };

            cells[coords.to_nd_index()] = Cell::Bomb;
            for pos in NeighborIter::new(coords, (rows, cols)) {
                if let Cell::Adjacent(count) = &mut cells[pos.to_nd_index()] {
                    *count += 1;
                }
            }
        }

        log::debug!(
            "Generated {}x{} board with {} bombs (seed {}, {} collisions)",
            config.width,
            config.height,
            config.bombs,
            self.seed,
            collisions
        );
        Ok(Grid::from_cells(cells, config.bombs))
    }
}

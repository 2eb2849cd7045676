use ndarray::Array2;

/// Single coordinate axis used for board width, height, rows and columns.
pub type Coord = u8;

/// Count type used for bomb counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`, or a size `(height, width)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // boards never exceed `Coord::MAX` on either axis
        let bounds = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, bounds)
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates over the in-bounds cells among the up to 8 cells surrounding `center`.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_three_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors() {
        assert_eq!(NeighborIter::new((1, 1), (3, 3)).count(), 8);
    }

    #[test]
    fn edge_of_wide_board_respects_both_axes() {
        let neighbors: Vec<_> = NeighborIter::new((2, 4), (3, 5)).collect();

        assert_eq!(neighbors, [(1, 3), (1, 4), (2, 3)]);
    }

    #[test]
    fn mult_widens_before_multiplying() {
        assert_eq!(mult(15, 15), 225);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}

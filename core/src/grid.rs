use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::types::apply_delta;
use crate::*;

/// Fixed-size stage grid, stored row-major and addressed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Creates a grid of `size` where every location is an off-goal wall.
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::from_elem(size.to_nd_index(), Cell::WALL),
        }
    }

    /// The 0x0 grid produced by a stage buffer without cells.
    pub fn empty() -> Self {
        Self::new((0, 0))
    }

    pub fn size(&self) -> Coord2 {
        let (height, width) = self.cells.dim();
        // dimensions always come from a Coord2
        (width as Coord, height as Coord)
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn get(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    pub fn set(&mut self, coords: Coord2, cell: Cell) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()] = cell;
        Ok(())
    }

    pub fn occupant_at(&self, coords: Coord2) -> Occupant {
        self[coords].occupant
    }

    /// Neighbor of `coords` one step towards `direction`, `None` past the border.
    pub fn offset(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        apply_delta(coords, direction.delta(), self.size())
    }

    /// All cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| ((x as Coord, y as Coord), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell>> {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }

    /// Writes an occupant at coordinates the caller already validated.
    pub(crate) fn put(&mut self, coords: Coord2, occupant: Occupant) {
        let cell = &mut self.cells[coords.to_nd_index()];
        cell.occupant = occupant;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn new_grid_is_filled_with_walls() {
        let grid = Grid::new((3, 2));

        assert_eq!(grid.size(), (3, 2));
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert!(grid.iter().all(|(_, cell)| cell == Cell::WALL));
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut grid = Grid::new((3, 2));

        assert_eq!(grid.get((3, 0)), Err(GameError::OutOfBounds));
        assert_eq!(grid.get((0, 2)), Err(GameError::OutOfBounds));
        assert_eq!(grid.set((5, 5), Cell::WALL), Err(GameError::OutOfBounds));
        assert_eq!(grid.set((3, 1), Cell::WALL), Err(GameError::OutOfBounds));
    }

    #[test]
    fn put_keeps_goal_flag() {
        let mut grid = Grid::new((2, 2));
        grid.set((1, 0), Cell::new(Occupant::Empty, true)).unwrap();

        grid.put((1, 0), Occupant::Block);

        assert_eq!(grid.get((1, 0)), Ok(Cell::new(Occupant::Block, true)));
        assert_eq!(grid.occupant_at((0, 0)), Occupant::Wall);
    }

    #[test]
    fn iter_walks_rows_first() {
        let grid = Grid::new((2, 2));
        let coords: Vec<_> = grid.iter().map(|(coords, _)| coords).collect();

        assert_eq!(coords, [(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(grid.rows().count(), 2);
    }

    #[test]
    fn empty_grid_has_no_cells() {
        let grid = Grid::empty();

        assert!(grid.is_empty());
        assert_eq!(grid.size(), (0, 0));
        assert_eq!(grid.iter().count(), 0);
        assert_eq!(grid.get((0, 0)), Err(GameError::OutOfBounds));
    }
}

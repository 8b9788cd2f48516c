use crate::*;

impl Grid {
    /// Whether every block stands on a goal. A grid without blocks counts as cleared.
    pub fn has_cleared(&self) -> bool {
        !self.iter().any(|(_, cell)| cell.is_misplaced_block())
    }

    /// Blocks that are not on a goal yet.
    pub fn misplaced_blocks(&self) -> CellCount {
        self.count_cells(Cell::is_misplaced_block)
    }

    pub fn block_count(&self) -> CellCount {
        self.count_cells(|cell| cell.occupant.is_block())
    }

    fn count_cells(&self, predicate: impl Fn(Cell) -> bool) -> CellCount {
        self.iter()
            .filter(|&(_, cell)| predicate(cell))
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }
}

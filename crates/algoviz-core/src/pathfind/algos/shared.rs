use crate::grid::{Grid, Position};

/// Open neighbors of `pos` in direction order, collected so the grid can be
/// mutated while they are processed.
pub fn open_neighbors(grid: &Grid, pos: Position) -> Vec<Position> {
    grid.open_neighbors(pos).collect()
}

/// Mark a cell visited for display.
pub fn mark_visited(grid: &mut Grid, pos: Position) {
    grid.cell_mut(pos).is_visited = true;
}

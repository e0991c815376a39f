//! Grid model for the pathfinding visualizer
//!
//! A fixed-size matrix of [`Cell`]s addressed by `(row, col)`. Exactly one cell
//! carries the start flag and one the end flag; the setters below keep that
//! invariant by clearing the previous cell before flagging the new one.

mod position;

use serde::{Deserialize, Serialize};

use crate::{bail_invalid, ensure_range};
use crate::error::{Result, VizError};

pub use position::{Position, DIRECTIONS};

/// Default grid height
pub const DEFAULT_ROWS: usize = 26;
/// Default grid width
pub const DEFAULT_COLS: usize = 50;
/// Largest accepted height or width
pub const MAX_GRID_DIM: usize = 200;
/// Default start node
pub const DEFAULT_START: Position = Position { row: 5, col: 5 };
/// Default end node
pub const DEFAULT_END: Position = Position { row: 15, col: 15 };

/// A single grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub is_wall: bool,
    pub is_visited: bool,
    pub is_start: bool,
    pub is_end: bool,
    pub is_path: bool,
    /// Accumulated distance from start; `None` means unreached (infinity)
    pub distance: Option<u32>,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            is_wall: false,
            is_visited: false,
            is_start: false,
            is_end: false,
            is_path: false,
            distance: None,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    fn clear_run_state(&mut self) {
        self.is_visited = false;
        self.is_path = false;
        self.distance = None;
    }
}

/// Row-major cell matrix with start/end bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Position,
    end: Position,
}

impl Grid {
    /// Build an empty grid with the given dimensions and endpoints.
    pub fn new(rows: usize, cols: usize, start: Position, end: Position) -> Result<Self> {
        ensure_range!("grid rows", rows, 1..=MAX_GRID_DIM as u64);
        ensure_range!("grid cols", cols, 1..=MAX_GRID_DIM as u64);
        let Some(len) = rows.checked_mul(cols) else {
            bail_invalid!("grid size", format!("{rows}x{cols}"));
        };

        let mut cells = Vec::with_capacity(len);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(Cell::new(row, col));
            }
        }

        let mut grid = Self {
            rows,
            cols,
            cells,
            start,
            end,
        };
        grid.check_bounds(start)?;
        grid.check_bounds(end)?;
        grid.cell_mut(start).is_start = true;
        grid.cell_mut(end).is_end = true;
        Ok(grid)
    }

    /// The classic 26x50 board with start (5,5) and end (15,15).
    pub fn standard() -> Self {
        let mut cells = Vec::with_capacity(DEFAULT_ROWS * DEFAULT_COLS);
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                let mut cell = Cell::new(row, col);
                cell.is_start = DEFAULT_START == Position::new(row, col);
                cell.is_end = DEFAULT_END == Position::new(row, col);
                cells.push(cell);
            }
        }
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells,
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn check_bounds(&self, pos: Position) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(VizError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Cell at `pos`. Panics when `pos` is outside the grid; use
    /// [`Grid::get`] for unchecked input.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[self.index(pos)]
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let idx = self.index(pos);
        &mut self.cells[idx]
    }

    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.contains(pos).then(|| self.cell(pos))
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(|cell| !cell.is_wall)
    }

    /// In-bounds neighbors of `pos` in right, down, left, up order, walls included.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&dir| pos.step(dir))
            .filter(move |next| self.contains(*next))
    }

    /// Neighbors that a traversal may enter (in bounds and not a wall).
    pub fn open_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        self.neighbors(pos).filter(move |next| !self.cell(*next).is_wall)
    }

    /// Flip the wall flag of a cell. Start and end cells stay open.
    pub fn toggle_wall(&mut self, pos: Position) -> Result<bool> {
        self.check_bounds(pos)?;
        if pos == self.start {
            return Err(VizError::ReservedCell {
                position: pos,
                role: "start",
            });
        }
        if pos == self.end {
            return Err(VizError::ReservedCell {
                position: pos,
                role: "end",
            });
        }
        let cell = self.cell_mut(pos);
        cell.is_wall = !cell.is_wall;
        Ok(cell.is_wall)
    }

    /// Move the start flag to `pos`, clearing any wall there.
    pub fn set_start(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(pos)?;
        let previous = self.start;
        self.cell_mut(previous).is_start = false;
        let cell = self.cell_mut(pos);
        cell.is_start = true;
        cell.is_wall = false;
        self.start = pos;
        Ok(())
    }

    /// Move the end flag to `pos`, clearing any wall there.
    pub fn set_end(&mut self, pos: Position) -> Result<()> {
        self.check_bounds(pos)?;
        let previous = self.end;
        self.cell_mut(previous).is_end = false;
        let cell = self.cell_mut(pos);
        cell.is_end = true;
        cell.is_wall = false;
        self.end = pos;
        Ok(())
    }

    /// Clear visited/path/distance state left behind by a previous run.
    pub fn clear_run_state(&mut self) {
        for cell in &mut self.cells {
            cell.clear_run_state();
        }
    }

    /// Clear run state and walls; start and end stay where they are.
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            cell.clear_run_state();
            cell.is_wall = false;
        }
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited).count()
    }

    pub fn path_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_path)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_grid_shape() {
        let grid = Grid::standard();
        assert_eq!(grid.rows(), 26);
        assert_eq!(grid.cols(), 50);
        assert_eq!(grid.len(), 1300);
        assert!(grid.cell(Position::new(5, 5)).is_start);
        assert!(grid.cell(Position::new(15, 15)).is_end);
        assert_eq!(grid.cells.iter().filter(|c| c.is_start).count(), 1);
        assert_eq!(grid.cells.iter().filter(|c| c.is_end).count(), 1);
    }

    #[test]
    fn test_standard_matches_new() {
        let built = Grid::new(26, 50, DEFAULT_START, DEFAULT_END).unwrap();
        assert_eq!(built, Grid::standard());
    }

    #[test]
    fn test_cells_know_their_position() {
        let grid = Grid::standard();
        let cell = grid.cell(Position::new(7, 42));
        assert_eq!((cell.row, cell.col), (7, 42));
    }

    #[test]
    fn test_new_rejects_out_of_bounds_endpoints() {
        let err = Grid::new(4, 4, Position::new(0, 0), Position::new(4, 0)).unwrap_err();
        assert!(matches!(err, VizError::OutOfBounds { .. }));
        assert!(Grid::new(0, 4, Position::new(0, 0), Position::new(0, 1)).is_err());
    }

    #[test]
    fn test_new_bounds_dimensions() {
        let origin = Position::new(0, 0);
        let next = Position::new(0, 1);
        assert!(Grid::new(MAX_GRID_DIM, MAX_GRID_DIM, origin, next).is_ok());
        assert!(matches!(
            Grid::new(MAX_GRID_DIM + 1, 4, origin, next),
            Err(VizError::OutOfRange { .. })
        ));
        assert!(matches!(
            Grid::new(1 << 33, 1 << 33, origin, next),
            Err(VizError::OutOfRange { .. })
        ));
        assert!(matches!(
            Grid::new(0, 4, origin, next),
            Err(VizError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_neighbor_order_right_down_left_up() {
        let grid = Grid::standard();
        let got: Vec<_> = grid.neighbors(Position::new(3, 3)).collect();
        assert_eq!(
            got,
            vec![
                Position::new(3, 4),
                Position::new(4, 3),
                Position::new(3, 2),
                Position::new(2, 3),
            ]
        );
    }

    #[test]
    fn test_corner_neighbors_stay_in_bounds() {
        let grid = Grid::standard();
        let got: Vec<_> = grid.neighbors(Position::new(0, 0)).collect();
        assert_eq!(got, vec![Position::new(0, 1), Position::new(1, 0)]);

        let got: Vec<_> = grid.neighbors(Position::new(25, 49)).collect();
        assert_eq!(got, vec![Position::new(25, 48), Position::new(24, 49)]);
    }

    #[test]
    fn test_open_neighbors_skip_walls() {
        let mut grid = Grid::standard();
        grid.toggle_wall(Position::new(3, 4)).unwrap();
        let got: Vec<_> = grid.open_neighbors(Position::new(3, 3)).collect();
        assert_eq!(got.len(), 3);
        assert!(!got.contains(&Position::new(3, 4)));
    }

    #[test]
    fn test_toggle_wall_flips() {
        let mut grid = Grid::standard();
        let pos = Position::new(1, 1);
        assert!(grid.toggle_wall(pos).unwrap());
        assert!(!grid.is_open(pos));
        assert!(!grid.toggle_wall(pos).unwrap());
        assert!(grid.is_open(pos));
    }

    #[test]
    fn test_toggle_wall_rejects_endpoints() {
        let mut grid = Grid::standard();
        assert!(matches!(
            grid.toggle_wall(DEFAULT_START),
            Err(VizError::ReservedCell { role: "start", .. })
        ));
        assert!(matches!(
            grid.toggle_wall(DEFAULT_END),
            Err(VizError::ReservedCell { role: "end", .. })
        ));
        assert!(grid.toggle_wall(Position::new(99, 0)).is_err());
    }

    #[test]
    fn test_set_start_moves_single_flag() {
        let mut grid = Grid::standard();
        let pos = Position::new(0, 0);
        grid.toggle_wall(pos).unwrap();
        grid.set_start(pos).unwrap();

        assert_eq!(grid.start(), pos);
        assert!(grid.cell(pos).is_start);
        assert!(!grid.cell(pos).is_wall);
        assert!(!grid.cell(DEFAULT_START).is_start);
        assert_eq!(grid.cells.iter().filter(|c| c.is_start).count(), 1);
    }

    #[test]
    fn test_set_end_moves_single_flag() {
        let mut grid = Grid::standard();
        grid.set_end(Position::new(20, 40)).unwrap();
        assert_eq!(grid.end(), Position::new(20, 40));
        assert!(!grid.cell(DEFAULT_END).is_end);
        assert_eq!(grid.cells.iter().filter(|c| c.is_end).count(), 1);
    }

    #[test]
    fn test_clear_run_state_keeps_walls() {
        let mut grid = Grid::standard();
        let wall = Position::new(2, 2);
        grid.toggle_wall(wall).unwrap();
        {
            let cell = grid.cell_mut(Position::new(0, 0));
            cell.is_visited = true;
            cell.is_path = true;
            cell.distance = Some(4);
        }

        grid.clear_run_state();
        let cell = grid.cell(Position::new(0, 0));
        assert!(!cell.is_visited && !cell.is_path);
        assert_eq!(cell.distance, None);
        assert!(grid.cell(wall).is_wall);

        grid.reset();
        assert!(!grid.cell(wall).is_wall);
        assert!(grid.cell(DEFAULT_START).is_start);
    }
}

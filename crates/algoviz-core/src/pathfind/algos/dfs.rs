use std::collections::HashSet;

use crate::error::Result;
use crate::grid::{Grid, Position, DIRECTIONS};
use crate::pathfind::algos::shared::mark_visited;
use crate::pathfind::types::{DfsOutcome, DfsRun};
use crate::step::Stepper;

/// One level of the emulated recursion: a cell and the next direction to try
struct Frame {
    pos: Position,
    next_dir: usize,
}

/// State tracked during DFS traversal
struct DfsState {
    visited: HashSet<Position>,
    stack: Vec<Frame>,
    count: usize,
}

impl DfsState {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            stack: Vec::new(),
            count: 0,
        }
    }

    /// Enter `pos`: mark, count, publish, then make it the top of the stack.
    fn enter(
        &mut self,
        grid: &mut Grid,
        pos: Position,
        stepper: &mut Stepper<'_, Grid>,
    ) -> Result<()> {
        self.visited.insert(pos);
        mark_visited(grid, pos);
        self.count += 1;
        stepper.frame(grid)?;
        self.stack.push(Frame { pos, next_dir: 0 });
        Ok(())
    }

    /// Next unvisited open neighbor of the top frame, advancing its cursor.
    fn next_candidate(&mut self, grid: &Grid) -> Option<Option<Position>> {
        let frame = self.stack.last_mut()?;
        while frame.next_dir < DIRECTIONS.len() {
            let dir = DIRECTIONS[frame.next_dir];
            frame.next_dir += 1;
            let Some(next) = frame.pos.step(dir) else {
                continue;
            };
            if grid.is_open(next) && !self.visited.contains(&next) {
                return Some(Some(next));
            }
        }
        Some(None)
    }
}

/// Depth-first search from the grid's start to its end.
///
/// Visits neighbors right, down, left, up and descends into the first open,
/// unvisited one, backtracking when a cell runs out of candidates. The first
/// path found wins; it is not necessarily the shortest.
#[tracing::instrument(skip_all, fields(start = %grid.start(), end = %grid.end()))]
pub fn dfs(grid: &mut Grid, stepper: &mut Stepper<'_, Grid>) -> Result<DfsRun> {
    let start = grid.start();
    let end = grid.end();
    let mut state = DfsState::new();

    if start == end {
        return Ok(DfsRun {
            outcome: DfsOutcome::Found(1),
            visited: 1,
        });
    }

    state.enter(grid, start, stepper)?;

    while let Some(candidate) = state.next_candidate(grid) {
        match candidate {
            Some(next) if next == end => {
                state.count += 1;
                tracing::debug!(
                    visited = state.count,
                    depth = state.stack.len(),
                    "end reached"
                );
                return Ok(DfsRun {
                    outcome: DfsOutcome::Found(state.count),
                    visited: state.count,
                });
            }
            Some(next) => state.enter(grid, next, stepper)?,
            None => {
                state.stack.pop();
            }
        }
    }

    tracing::debug!(visited = state.count, "no path");
    Ok(DfsRun {
        outcome: DfsOutcome::NotFound,
        visited: state.count,
    })
}

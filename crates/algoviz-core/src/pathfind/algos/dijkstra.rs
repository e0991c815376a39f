use std::collections::HashSet;

use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::pathfind::algos::shared::{mark_visited, open_neighbors};
use crate::pathfind::queue::MinQueue;
use crate::pathfind::types::{CameFrom, DijkstraOutcome};
use crate::step::Stepper;

/// Every move between adjacent open cells costs the same
const EDGE_COST: u32 = 1;

/// State tracked during Dijkstra traversal
struct DijkstraState {
    visited: HashSet<Position>,
    queue: MinQueue<Position>,
    came_from: CameFrom,
    extracted: usize,
}

impl DijkstraState {
    fn new() -> Self {
        Self {
            visited: HashSet::new(),
            queue: MinQueue::new(),
            came_from: CameFrom::new(),
            extracted: 0,
        }
    }

    fn finish(self, reached: bool) -> DijkstraOutcome {
        DijkstraOutcome {
            visited: self.extracted,
            reached,
            came_from: self.came_from,
        }
    }
}

/// Relax the edges out of `current`, queueing neighbors whose distance improves.
fn relax_neighbors(grid: &mut Grid, current: Position, state: &mut DijkstraState) {
    let base = grid.cell(current).distance.unwrap_or(0);

    for next in open_neighbors(grid, current) {
        if state.visited.contains(&next) {
            continue;
        }

        let candidate = base + EDGE_COST;
        let cell = grid.cell_mut(next);
        if cell.distance.is_none_or(|known| candidate < known) {
            cell.distance = Some(candidate);
            state.came_from.insert(next, current);
            state.queue.push(next, candidate);
        }
    }
}

/// Uniform-cost Dijkstra search from the grid's start to its end.
///
/// Records each cell's distance and predecessor. Stale queue entries are
/// skipped on extraction; the search returns as soon as the end is extracted.
/// Expanded cells are marked visited with one frame per expansion.
#[tracing::instrument(skip_all, fields(start = %grid.start(), end = %grid.end()))]
pub fn dijkstra(grid: &mut Grid, stepper: &mut Stepper<'_, Grid>) -> Result<DijkstraOutcome> {
    let start = grid.start();
    let end = grid.end();
    let mut state = DijkstraState::new();

    grid.cell_mut(start).distance = Some(0);
    state.queue.push(start, 0);

    while let Some(current) = state.queue.pop() {
        if !state.visited.insert(current) {
            continue;
        }
        state.extracted += 1;

        if current == end {
            tracing::debug!(
                visited = state.extracted,
                distance = ?grid.cell(end).distance,
                "end reached"
            );
            return Ok(state.finish(true));
        }

        relax_neighbors(grid, current, &mut state);

        mark_visited(grid, current);
        stepper.frame(grid)?;
    }

    tracing::debug!(visited = state.extracted, "frontier exhausted");
    Ok(state.finish(false))
}

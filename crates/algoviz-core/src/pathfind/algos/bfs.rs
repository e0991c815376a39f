use std::collections::{HashSet, VecDeque};

use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::pathfind::algos::shared::{mark_visited, open_neighbors};
use crate::pathfind::types::BfsOutcome;
use crate::step::Stepper;

/// State tracked during BFS traversal
struct BfsState {
    visited: HashSet<Position>,
    queue: VecDeque<Position>,
    dequeued: usize,
}

impl BfsState {
    fn new(start: Position) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        Self {
            visited,
            queue: VecDeque::from([start]),
            dequeued: 0,
        }
    }
}

/// Breadth-first search from the grid's start to its end.
///
/// Counts every dequeued node; stops when the end node is dequeued. Cells are
/// marked visited as they are discovered, with one frame per discovery.
#[tracing::instrument(skip_all, fields(start = %grid.start(), end = %grid.end()))]
pub fn bfs(grid: &mut Grid, stepper: &mut Stepper<'_, Grid>) -> Result<BfsOutcome> {
    let end = grid.end();
    let mut state = BfsState::new(grid.start());

    while let Some(current) = state.queue.pop_front() {
        state.dequeued += 1;

        if current == end {
            tracing::debug!(visited = state.dequeued, "end reached");
            return Ok(BfsOutcome {
                visited: state.dequeued,
                reached: true,
            });
        }

        for next in open_neighbors(grid, current) {
            if !state.visited.insert(next) {
                continue;
            }
            mark_visited(grid, next);
            stepper.frame(grid)?;
            state.queue.push_back(next);
        }
    }

    tracing::debug!(visited = state.dequeued, "frontier exhausted");
    Ok(BfsOutcome {
        visited: state.dequeued,
        reached: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::{Discard, Recorder};
    use crate::pathfind::algos::shared::fixtures::{component_size, enclose_end, gapped_wall};
    use crate::step::Instant;
    use std::time::Duration;

    fn run(grid: &mut Grid) -> BfsOutcome {
        let mut sink = Discard;
        let mut stepper = Stepper::<Grid>::new(&mut sink, &Instant, Duration::ZERO);
        bfs(grid, &mut stepper).unwrap()
    }

    #[test]
    fn test_start_equals_end() {
        let mut grid = Grid::new(4, 4, Position::new(1, 1), Position::new(1, 1)).unwrap();
        let outcome = run(&mut grid);
        assert_eq!(outcome, BfsOutcome { visited: 1, reached: true });
        assert_eq!(grid.visited_count(), 0);
    }

    #[test]
    fn test_adjacent_end() {
        let mut grid = Grid::new(3, 3, Position::new(0, 0), Position::new(0, 1)).unwrap();
        // start dequeued, then right neighbor (the end)
        assert_eq!(run(&mut grid), BfsOutcome { visited: 2, reached: true });
    }

    #[test]
    fn test_routes_around_wall() {
        let mut grid = gapped_wall();
        let outcome = run(&mut grid);
        assert!(outcome.reached);
        assert!(outcome.visited <= component_size(&grid));
        assert!(!grid.cell(Position::new(0, 2)).is_visited);
    }

    #[test]
    fn test_enclosed_end_exhausts_component() {
        let mut grid = Grid::standard();
        enclose_end(&mut grid);
        let expected = component_size(&grid);

        let outcome = run(&mut grid);
        assert!(!outcome.reached);
        assert_eq!(outcome.visited, expected);
        assert_eq!(expected, 1300 - 4 - 1);
    }

    #[test]
    fn test_one_frame_per_discovery() {
        let mut grid = Grid::new(2, 2, Position::new(0, 0), Position::new(1, 1)).unwrap();
        let mut recorder = Recorder::<Grid>::new();
        {
            let mut stepper = Stepper::<Grid>::new(&mut recorder, &Instant, Duration::ZERO);
            bfs(&mut grid, &mut stepper).unwrap();
        }
        // (0,1) and (1,0) from the start, then (1,1) from (0,1)
        assert_eq!(recorder.len(), 3);
        let first = &recorder.frames()[0];
        assert!(first.cell(Position::new(0, 1)).is_visited);
        assert!(!first.cell(Position::new(1, 0)).is_visited);
    }
}

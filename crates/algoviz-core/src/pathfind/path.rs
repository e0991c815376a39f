//! Shortest-path reconstruction from Dijkstra's predecessor map

use crate::error::Result;
use crate::grid::{Grid, Position};
use crate::pathfind::types::{CameFrom, Path};
use crate::step::Stepper;

/// Walk `came_from` back from `end` to `start` and return the cells in
/// start-to-end order. `None` when `end` was never reached.
pub fn reconstruct_path(came_from: &CameFrom, start: Position, end: Position) -> Option<Path> {
    let mut cells = vec![end];
    let mut current = end;

    while current != start {
        current = *came_from.get(&current)?;
        cells.push(current);
        // a predecessor map is a tree rooted at start; longer means a cycle
        if cells.len() > came_from.len() + 1 {
            return None;
        }
    }

    cells.reverse();
    Some(Path { cells })
}

/// Mark each path cell in start-to-end order, one frame per cell.
pub fn highlight_path(
    grid: &mut Grid,
    path: &Path,
    stepper: &mut Stepper<'_, Grid>,
) -> Result<()> {
    for &pos in &path.cells {
        grid.cell_mut(pos).is_path = true;
        stepper.frame(grid)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observe::Recorder;
    use crate::step::Instant;
    use std::time::Duration;

    fn chain(points: &[(usize, usize)]) -> CameFrom {
        points
            .windows(2)
            .map(|pair| {
                (
                    Position::new(pair[1].0, pair[1].1),
                    Position::new(pair[0].0, pair[0].1),
                )
            })
            .collect()
    }

    #[test]
    fn test_reconstruct_in_start_to_end_order() {
        let came_from = chain(&[(0, 0), (0, 1), (1, 1), (2, 1)]);
        let path = reconstruct_path(&came_from, Position::new(0, 0), Position::new(2, 1)).unwrap();
        assert_eq!(
            path.cells,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(2, 1),
            ]
        );
        assert_eq!(path.steps(), 3);
    }

    #[test]
    fn test_start_equals_end_is_zero_length() {
        let path = reconstruct_path(&CameFrom::new(), Position::new(4, 4), Position::new(4, 4))
            .unwrap();
        assert_eq!(path.cells, vec![Position::new(4, 4)]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn test_unreached_end_has_no_path() {
        let came_from = chain(&[(0, 0), (0, 1)]);
        assert!(reconstruct_path(&came_from, Position::new(0, 0), Position::new(5, 5)).is_none());
    }

    #[test]
    fn test_cycle_does_not_loop_forever() {
        let mut came_from = CameFrom::new();
        came_from.insert(Position::new(1, 1), Position::new(1, 2));
        came_from.insert(Position::new(1, 2), Position::new(1, 1));
        assert!(reconstruct_path(&came_from, Position::new(0, 0), Position::new(1, 1)).is_none());
    }

    #[test]
    fn test_highlight_marks_in_order() {
        let mut grid = Grid::new(1, 3, Position::new(0, 0), Position::new(0, 2)).unwrap();
        let path = Path {
            cells: vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
        };
        let mut recorder = Recorder::<Grid>::new();
        {
            let mut stepper = Stepper::<Grid>::new(&mut recorder, &Instant, Duration::ZERO);
            highlight_path(&mut grid, &path, &mut stepper).unwrap();
        }

        assert_eq!(recorder.len(), 3);
        let marked: Vec<usize> = recorder
            .frames()
            .iter()
            .map(|frame| frame.path_cells().count())
            .collect();
        assert_eq!(marked, vec![1, 2, 3]);
        assert!(recorder.frames()[0].cell(Position::new(0, 0)).is_path);
        assert!(!recorder.frames()[0].cell(Position::new(0, 1)).is_path);
    }
}

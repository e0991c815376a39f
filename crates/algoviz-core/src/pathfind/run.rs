//! Timed traversal runs over a grid

use std::time::{Duration, Instant};

use chrono::Utc;

use crate::error::Result;
use crate::grid::Grid;
use crate::observe::Observer;
use crate::pathfind::algos::{bfs, dfs, dijkstra};
use crate::pathfind::path::{highlight_path, reconstruct_path};
use crate::pathfind::types::{PathStats, Traversal};
use crate::step::{Pacer, Stepper};
use crate::trace_time;

/// Pace of the path highlight animation when no delay is configured
pub const PATH_HIGHLIGHT_DELAY: Duration = Duration::from_millis(50);

/// Run one traversal on `grid` and time it.
///
/// Run state left over from a previous traversal is cleared first; walls and
/// endpoints are kept. For Dijkstra the elapsed time includes the shortest
/// path highlight. `delay` overrides the per-algorithm default pace.
#[tracing::instrument(skip(grid, observer, pacer), fields(rows = grid.rows(), cols = grid.cols()))]
pub fn run_traversal(
    kind: Traversal,
    grid: &mut Grid,
    observer: &mut dyn Observer<Grid>,
    pacer: &dyn Pacer,
    delay: Option<Duration>,
) -> Result<PathStats> {
    grid.clear_run_state();
    observer.publish(grid);

    let start = Instant::now();
    let mut stepper = Stepper::new(observer, pacer, delay.unwrap_or(kind.default_delay()));

    let (visited, reached, path_len) = match kind {
        Traversal::Bfs => {
            let outcome = bfs(grid, &mut stepper)?;
            (outcome.visited, outcome.reached, None)
        }
        Traversal::Dfs => {
            let run = dfs(grid, &mut stepper)?;
            (run.visited, run.outcome.is_found(), None)
        }
        Traversal::Dijkstra => {
            let outcome = dijkstra(grid, &mut stepper)?;
            let path = reconstruct_path(&outcome.came_from, grid.start(), grid.end());
            if let Some(path) = &path {
                stepper.set_delay(delay.unwrap_or(PATH_HIGHLIGHT_DELAY));
                highlight_path(grid, path, &mut stepper)?;
            }
            (outcome.visited, outcome.reached, path.map(|p| p.steps()))
        }
    };

    let elapsed = start.elapsed();
    trace_time!(start, "traversal", algorithm = kind.name());
    tracing::info!(
        algorithm = kind.name(),
        visited,
        reached,
        path_len = ?path_len,
        frames = stepper.frames(),
        "traversal finished"
    );

    Ok(PathStats {
        algorithm: kind,
        visited,
        reached,
        path_len,
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        recorded_at: Utc::now(),
    })
}

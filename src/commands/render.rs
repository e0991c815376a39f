//! Text rendering of arrays and grids
//!
//! `Screen` redraws the terminal on every published snapshot while a run is
//! animated; the plain functions render final states for human output.

use std::io::{self, Write};

use algoviz_core::grid::{Cell, Grid};
use algoviz_core::observe::Observer;
use algoviz_core::pathfind::PathStats;
use algoviz_core::sort::{ArrayFrame, SortAlgorithm, SortStats};

const BAR_WIDTH: u64 = 40;
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const CONTROLS_HINT: &str = "[p + Enter] pause/resume   [q + Enter] stop   [Ctrl-C] stop";

/// One line per element, bar length proportional to magnitude
pub fn bars(frame: &ArrayFrame) -> String {
    let max = frame
        .values
        .iter()
        .map(|v| v.unsigned_abs())
        .max()
        .unwrap_or(1)
        .max(1);

    let mut out = String::new();
    for (idx, value) in frame.values.iter().enumerate() {
        let mark = if frame.is_highlighted(idx) {
            '*'
        } else if frame.is_sorted(idx) {
            '='
        } else {
            '#'
        };
        let len = (u128::from(value.unsigned_abs()) * u128::from(BAR_WIDTH))
            .div_ceil(u128::from(max)) as usize;
        out.push_str(&format!(
            "{:>3} {:>6} {}\n",
            idx,
            value,
            mark.to_string().repeat(len)
        ));
    }
    out
}

/// Space-separated values
pub fn values_line(values: &[i64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell_char(cell: &Cell) -> char {
    if cell.is_start {
        'S'
    } else if cell.is_end {
        'E'
    } else if cell.is_wall {
        '#'
    } else if cell.is_path {
        '*'
    } else if cell.is_visited {
        'o'
    } else {
        '.'
    }
}

/// One character per cell: S start, E end, # wall, * path, o visited
pub fn grid(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.len() + grid.rows());
    for row in grid.iter_rows() {
        out.extend(row.iter().map(cell_char));
        out.push('\n');
    }
    out
}

/// What a sort's counter measures
pub fn counter_label(algorithm: SortAlgorithm) -> &'static str {
    if algorithm.counts_copies() {
        "copies"
    } else {
        "swaps"
    }
}

/// Statistics table for sort runs
pub fn sort_table<'a>(runs: impl IntoIterator<Item = &'a SortStats>) -> String {
    let mut out = format!(
        "{:<16} {:>10} {:>8} {:<6}  {}\n",
        "Algorithm", "Time (ms)", "Count", "", "Complexity"
    );
    for stats in runs {
        out.push_str(&format!(
            "{:<16} {:>10.3} {:>8} {:<6}  {}\n",
            stats.algorithm.name(),
            stats.elapsed_ms,
            stats.swaps,
            counter_label(stats.algorithm),
            stats.algorithm.complexity()
        ));
    }
    out
}

/// Statistics table for traversal runs
pub fn path_table<'a>(runs: impl IntoIterator<Item = &'a PathStats>) -> String {
    let mut out = format!(
        "{:<10} {:>8} {:>10} {:>6}  {}\n",
        "Algorithm", "Visited", "Time (ms)", "Path", "Reached"
    );
    for stats in runs {
        let path = stats
            .path_len
            .map_or_else(|| "-".to_string(), |len| len.to_string());
        out.push_str(&format!(
            "{:<10} {:>8} {:>10.3} {:>6}  {}\n",
            stats.algorithm.name(),
            stats.visited,
            stats.elapsed_ms,
            path,
            if stats.reached { "yes" } else { "no" }
        ));
    }
    out
}

/// Redraws the terminal for each snapshot of an animated run
#[derive(Debug, Default)]
pub struct Screen {
    title: String,
}

impl Screen {
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    fn draw(&self, body: &str) {
        let mut stdout = io::stdout().lock();
        // a closed stdout ends the animation silently; the run itself goes on
        let _ = write!(
            stdout,
            "{}{}\n\n{}\n{}\n",
            CLEAR_SCREEN, self.title, body, CONTROLS_HINT
        );
        let _ = stdout.flush();
    }
}

impl Observer<ArrayFrame> for Screen {
    fn publish(&mut self, frame: &ArrayFrame) {
        self.draw(&bars(frame));
    }
}

impl Observer<Grid> for Screen {
    fn publish(&mut self, snapshot: &Grid) {
        self.draw(&grid(snapshot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::grid::Position;
    use algoviz_core::observe::Discard;
    use algoviz_core::sort::sort_with;
    use algoviz_core::step::Instant;
    use std::collections::BTreeSet;
    use std::time::Duration;

    #[test]
    fn test_bars_scale_and_marks() {
        let frame = ArrayFrame {
            values: vec![10, 20],
            highlighted: vec![0],
            sorted: BTreeSet::from([1]),
        };
        let lines: Vec<String> = bars(&frame).lines().map(str::to_string).collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(&"*".repeat(20)));
        assert!(lines[1].ends_with(&"=".repeat(40)));
    }

    #[test]
    fn test_bars_scale_extreme_values() {
        let frame = ArrayFrame::new(vec![i64::MAX, i64::MIN, 1, 0]);
        let rendered = bars(&frame);
        let lines: Vec<&str> = rendered.lines().map(str::trim_end).collect();
        assert!(lines[0].ends_with(&"#".repeat(40)));
        assert!(lines[1].ends_with(&"#".repeat(40)));
        assert!(lines[2].ends_with(" #"));
        assert!(lines[3].ends_with(" 0"));
    }

    #[test]
    fn test_sort_table_labels_counters() {
        let run = |algorithm| {
            sort_with(algorithm, &[5, 3, 8, 1, 2], &mut Discard, &Instant, Duration::ZERO)
                .unwrap()
                .stats
        };
        let runs = [run(SortAlgorithm::Bubble), run(SortAlgorithm::Merge)];
        let table = sort_table(&runs);
        assert!(table.contains("       7 swaps "));
        assert!(table.contains("      12 copies"));
        assert_eq!(counter_label(SortAlgorithm::Insertion), "copies");
    }

    #[test]
    fn test_values_line() {
        assert_eq!(values_line(&[1, 2, 3, 5, 8]), "1 2 3 5 8");
        assert_eq!(values_line(&[]), "");
    }

    #[test]
    fn test_grid_characters() {
        let mut g = Grid::new(2, 3, Position::new(0, 0), Position::new(1, 2)).unwrap();
        g.toggle_wall(Position::new(0, 1)).unwrap();
        assert_eq!(grid(&g), "S#.\n..E\n");
    }
}

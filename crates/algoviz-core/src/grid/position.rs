use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VizError;

/// Row/column offsets in traversal order: right, down, left, up.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by `(d_row, d_col)`; `None` when that would go negative.
    pub fn step(self, (d_row, d_col): (isize, isize)) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Parses `row,col`, optionally wrapped in parentheses.
impl FromStr for Position {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed
            .split_once(',')
            .ok_or_else(|| VizError::invalid_value("position", s))?;
        let row = row
            .trim()
            .parse()
            .map_err(|_| VizError::invalid_value("position", s))?;
        let col = col
            .trim()
            .parse()
            .map_err(|_| VizError::invalid_value("position", s))?;
        Ok(Position { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_rejects_negative() {
        assert_eq!(Position::new(0, 0).step((-1, 0)), None);
        assert_eq!(Position::new(0, 0).step((0, -1)), None);
        assert_eq!(Position::new(0, 0).step((1, 0)), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_parse_position() {
        assert_eq!("3,4".parse::<Position>().unwrap(), Position::new(3, 4));
        assert_eq!(" (10, 2) ".parse::<Position>().unwrap(), Position::new(10, 2));
        assert!("3".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
        assert!("-1,2".parse::<Position>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let pos = Position::new(15, 15);
        assert_eq!(pos.to_string(), "(15,15)");
        assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Position::new(5, 5).manhattan(Position::new(15, 15)), 20);
        assert_eq!(Position::new(3, 9).manhattan(Position::new(3, 9)), 0);
    }
}

use std::str::FromStr;

use clap::Args;

use super::parse::{parse_position, parse_values};
use algoviz_core::error::VizError;
use algoviz_core::grid::Position;
use algoviz_core::pathfind::Traversal;
use algoviz_core::sort::SortAlgorithm;

/// One sorting algorithm, or all six in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortTarget {
    One(SortAlgorithm),
    All,
}

impl SortTarget {
    pub fn algorithms(self) -> Vec<SortAlgorithm> {
        match self {
            SortTarget::One(algorithm) => vec![algorithm],
            SortTarget::All => SortAlgorithm::ALL.to_vec(),
        }
    }
}

impl FromStr for SortTarget {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(SortTarget::All)
        } else {
            s.parse().map(SortTarget::One)
        }
    }
}

/// One traversal, or all three in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathTarget {
    One(Traversal),
    All,
}

impl PathTarget {
    pub fn traversals(self) -> Vec<Traversal> {
        match self {
            PathTarget::One(kind) => vec![kind],
            PathTarget::All => Traversal::ALL.to_vec(),
        }
    }
}

impl FromStr for PathTarget {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(PathTarget::All)
        } else {
            s.parse().map(PathTarget::One)
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct SortArgs {
    /// Algorithm: bubble, merge, quick, insertion, selection, heap, or all
    #[arg(value_parser = parse_target::<SortTarget>)]
    pub algorithm: SortTarget,

    /// Length of the generated array (10-100, default from config)
    #[arg(long, short = 'n')]
    pub size: Option<usize>,

    /// Seed for the generated array
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sort these comma-separated values instead of a generated array
    #[arg(long, value_parser = parse_values, conflicts_with_all = ["size", "seed"])]
    pub values: Option<::std::vec::Vec<i64>>,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Algorithm: bfs, dfs, dijkstra, or all
    #[arg(value_parser = parse_target::<PathTarget>)]
    pub algorithm: PathTarget,

    /// Start cell as row,col
    #[arg(long, value_parser = parse_position)]
    pub start: Option<Position>,

    /// End cell as row,col
    #[arg(long, value_parser = parse_position)]
    pub end: Option<Position>,

    /// Toggle a wall at row,col (can be specified multiple times)
    #[arg(long, value_parser = parse_position, action = clap::ArgAction::Append)]
    pub wall: Vec<Position>,

    /// Number of grid rows (default from config)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Number of grid columns (default from config)
    #[arg(long)]
    pub cols: Option<usize>,
}

fn parse_target<T>(s: &str) -> Result<T, String>
where
    T: FromStr<Err = VizError>,
{
    s.parse::<T>().map_err(|e| e.to_string())
}

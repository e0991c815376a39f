//! CLI commands for algoviz

pub mod config;
pub mod control;
pub mod dispatch;
pub mod path;
pub mod render;
pub mod sort;

//! Error types and exit codes for algoviz
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (IO, interrupted run)
//! - 2: Usage error (bad flags/args, out-of-range values)
//! - 3: Data error (coordinates outside the grid, conflicting cell edits)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::grid::Position;

/// Exit codes for the algoviz CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid grid edits (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around the visualizer engines
#[derive(Error, Debug)]
pub enum VizError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{context} out of range: {value} (expected {min}..={max})")]
    OutOfRange {
        context: String,
        value: u64,
        min: u64,
        max: u64,
    },

    // Data errors (exit code 3)
    #[error("cell {position} is outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    #[error("cell {position} is the {role} node and cannot become a wall")]
    ReservedCell {
        position: Position,
        role: &'static str,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("{0}")]
    Other(String),

    #[error("run interrupted")]
    Interrupted,
}

impl VizError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        VizError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a numeric value outside its allowed range
    pub fn out_of_range(context: &str, value: u64, min: u64, max: u64) -> Self {
        VizError::OutOfRange {
            context: context.to_string(),
            value,
            min,
            max,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            VizError::UnknownFormat(_)
            | VizError::UsageError(_)
            | VizError::InvalidValue { .. }
            | VizError::OutOfRange { .. } => ExitCode::Usage,

            VizError::OutOfBounds { .. } | VizError::ReservedCell { .. } => ExitCode::Data,

            VizError::Io(_)
            | VizError::Json(_)
            | VizError::InvalidConfig { .. }
            | VizError::Other(_)
            | VizError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            VizError::UnknownFormat(_) => "unknown_format",
            VizError::UsageError(_) => "usage_error",
            VizError::InvalidValue { .. } => "invalid_value",
            VizError::OutOfRange { .. } => "out_of_range",
            VizError::OutOfBounds { .. } => "out_of_bounds",
            VizError::ReservedCell { .. } => "reserved_cell",
            VizError::Io(_) => "io_error",
            VizError::Json(_) => "json_error",
            VizError::InvalidConfig { .. } => "invalid_config",
            VizError::Other(_) => "other",
            VizError::Interrupted => "interrupted",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for algoviz operations
pub type Result<T> = std::result::Result<T, VizError>;

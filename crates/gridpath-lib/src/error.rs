use std::fmt;

use thiserror::Error;

use crate::grid::GridCoord;

/// Convenient result alias for the gridpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Identifies which search endpoint a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Endpoint::Start => "start",
            Endpoint::Goal => "goal",
        };
        f.write_str(value)
    }
}

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a start or goal coordinate lies outside the grid.
    #[error("{endpoint} coordinate {coord} lies outside the {width}x{height} grid")]
    InvalidCoordinate {
        endpoint: Endpoint,
        coord: GridCoord,
        width: usize,
        height: usize,
    },

    /// Raised when a start or goal coordinate lands on a blocked cell.
    #[error("{endpoint} coordinate {coord} is on a blocked cell")]
    BlockedStartOrGoal { endpoint: Endpoint, coord: GridCoord },

    /// Raised when the frontier empties without reaching the goal.
    #[error("no path found between {start} and {goal}")]
    GoalUnreachable { start: GridCoord, goal: GridCoord },

    /// Raised when map input cannot form a usable occupancy grid.
    #[error("invalid map: {message}")]
    InvalidMap { message: String },

    /// Raised when a computed path plan lacks any steps.
    #[error("path plan was empty")]
    EmptyPathPlan,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for image decoding and encoding errors.
    #[error(transparent)]
    Image(#[from] image::ImageError),
}

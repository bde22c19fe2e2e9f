//! Failure conditions of a mission run.
//!
//! The `Display` strings are stable: callers match on them.

use crate::heading::Heading;
use thiserror::Error;

/// Any failure that aborts a mission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissionError {
    /// Heading token outside {N, E, S, W}. Carries `undefined` when the token is absent.
    #[error("Unrecognised direction: {0}")]
    InvalidHeading(String),

    /// A forward move would have left the grid.
    #[error("At edge of the grid cannot move {heading}")]
    BoundaryViolation { heading: Heading },

    /// A command script symbol with no registered operation.
    #[error("Unrecognised action: {0}")]
    UnrecognisedAction(char),

    /// The input blob does not have the expected line structure.
    #[error(transparent)]
    MalformedInput(#[from] MalformedInput),
}

/// Line-structure problems detected while parsing a mission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("Missing grid size line")]
    MissingGridSize,

    #[error("Invalid grid size: {0}")]
    InvalidGridSize(String),

    #[error("Missing direction from starting position")]
    MissingStartPosition,

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Starting position outside the grid: {x} {y}")]
    StartOutsideGrid { x: i32, y: i32 },

    #[error("Missing action line")]
    MissingActionLine,
}

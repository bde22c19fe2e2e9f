//! Rover state and the transitions a command can apply to it.

use crate::error::{MalformedInput, MissionError};
use crate::heading::Heading;
use glam::{I64Vec2, IVec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive grid region `[0, right_edge] x [0, upper_edge]`.
///
/// Fixed for a mission and shared read-only by every rover in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    /// Largest valid `x` coordinate.
    pub right_edge: i32,

    /// Largest valid `y` coordinate.
    pub upper_edge: i32,
}

impl GridBounds {
    pub fn new(right_edge: i32, upper_edge: i32) -> Self {
        Self {
            right_edge,
            upper_edge,
        }
    }

    /// Whether `position` lies on the grid.
    pub fn contains(&self, position: IVec2) -> bool {
        self.contains_wide(position.as_i64vec2())
    }

    /// Containment in `i64`, so a step past an `i32::MAX` edge cannot overflow.
    fn contains_wide(&self, position: I64Vec2) -> bool {
        let max = IVec2::new(self.right_edge, self.upper_edge).as_i64vec2();
        position.cmpge(I64Vec2::ZERO).all() && position.cmple(max).all()
    }
}

/// Where a rover is and which way it faces.
///
/// The textual form `"<x> <y> <heading>"` is both the start-state line and the final report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoverState {
    /// Grid cell the rover occupies.
    pub position: IVec2,

    /// Direction the next forward move goes.
    pub heading: Heading,
}

impl RoverState {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

impl FromStr for RoverState {
    type Err = MissionError;

    /// Parses a start-state line. The heading is checked before the coordinates.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            return Err(MalformedInput::MissingStartPosition.into());
        }

        let heading: Heading = fields.get(2).copied().unwrap_or("undefined").parse()?;

        let coord = |idx: usize| -> Result<i32, MissionError> {
            let token = fields.get(idx).copied().unwrap_or("undefined");
            token
                .parse::<i32>()
                .map_err(|_| MalformedInput::InvalidCoordinate(token.to_string()).into())
        };

        Ok(RoverState::new(coord(0)?, coord(1)?, heading))
    }
}

/// Commands a rover understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoverOp {
    /// Rotate clockwise in place (`R`).
    TurnRight,
    /// Rotate counter-clockwise in place (`L`).
    TurnLeft,
    /// Step one cell along the current heading (`M`).
    MoveForward,
}

/// A rover on a bounded grid.
///
/// Its position stays inside `bounds` after every transition: a rejected move leaves the
/// state untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rover {
    state: RoverState,
    bounds: GridBounds,
}

impl Rover {
    /// Places a rover on the grid. Fails when `state` lies outside `bounds`.
    pub fn new(state: RoverState, bounds: GridBounds) -> Result<Self, MissionError> {
        if !bounds.contains(state.position) {
            return Err(MalformedInput::StartOutsideGrid {
                x: state.position.x,
                y: state.position.y,
            }
            .into());
        }
        Ok(Self { state, bounds })
    }

    pub fn state(&self) -> RoverState {
        self.state
    }

    pub fn position(&self) -> IVec2 {
        self.state.position
    }

    pub fn heading(&self) -> Heading {
        self.state.heading
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn turn_right(&mut self) {
        self.state.heading = self.state.heading.turn_right();
    }

    pub fn turn_left(&mut self) {
        self.state.heading = self.state.heading.turn_left();
    }

    /// Steps one cell forward, or fails with `BoundaryViolation` if that would leave the grid.
    pub fn move_forward(&mut self) -> Result<(), MissionError> {
        let candidate =
            self.state.position.as_i64vec2() + self.state.heading.delta().as_i64vec2();
        if !self.bounds.contains_wide(candidate) {
            return Err(MissionError::BoundaryViolation {
                heading: self.state.heading,
            });
        }
        // In bounds, so both axes fit back into `i32`.
        self.state.position = candidate.as_ivec2();
        Ok(())
    }

    /// Applies a single command.
    pub fn apply(&mut self, op: RoverOp) -> Result<(), MissionError> {
        match op {
            RoverOp::TurnRight => self.turn_right(),
            RoverOp::TurnLeft => self.turn_left(),
            RoverOp::MoveForward => self.move_forward()?,
        }
        Ok(())
    }

    /// The `"<x> <y> <heading>"` position report.
    pub fn report(&self) -> String {
        self.state.to_string()
    }
}

//! Missions: a grid plus the rovers deployed on it.
//!
//! A mission is read from a newline-separated blob:
//!
//! ```text
//! 5 5          <- right edge, upper edge
//! 1 2 N        <- rover 1 start state
//! LMLMLMLMM    <- rover 1 command script (may be empty)
//! 3 3 E        <- rover 2 ...
//! MMRMMRMRRM
//! ```
//!
//! The whole blob is validated before any rover moves. Rovers then run one after another in
//! input order; the first failure rejects the mission.

use crate::error::{MalformedInput, MissionError};
use crate::interpreter::RoverInterpreter;
use crate::rover::{GridBounds, Rover, RoverState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One rover's start state and the script it will run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoverPlan {
    /// Position and heading before the first command.
    pub start: RoverState,

    /// Command symbols, replayed left to right.
    pub script: String,
}

/// A parsed, validated mission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mission {
    /// The grid every rover in the mission shares.
    pub bounds: GridBounds,

    /// Rovers in input order.
    pub plans: Vec<RoverPlan>,
}

impl Mission {
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            bounds,
            plans: Vec::new(),
        }
    }

    /// Adds a rover, rejecting a start state off the grid.
    pub fn add_rover(
        &mut self,
        start: RoverState,
        script: impl Into<String>,
    ) -> Result<(), MissionError> {
        Rover::new(start, self.bounds)?;
        self.plans.push(RoverPlan {
            start,
            script: script.into(),
        });
        Ok(())
    }

    /// Parses the grid line and every start-state/script pair.
    ///
    /// Lines may end in `\r\n`. One trailing empty line after the last script is tolerated.
    pub fn parse(input: &str) -> Result<Self, MissionError> {
        let mut lines = input
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line));

        let grid_line = lines
            .next()
            .filter(|line| !line.trim().is_empty())
            .ok_or(MalformedInput::MissingGridSize)?;
        let mut mission = Mission::new(parse_grid(grid_line)?);

        let rest: Vec<&str> = lines.collect();
        let mut idx = 0;
        while let Some(start_line) = rest.get(idx) {
            let is_trailing_newline = idx + 1 == rest.len() && !mission.plans.is_empty();
            if is_trailing_newline && start_line.is_empty() {
                break;
            }

            let start: RoverState = start_line.parse()?;
            let script = rest
                .get(idx + 1)
                .ok_or(MalformedInput::MissingActionLine)?;
            mission.add_rover(start, *script)?;
            idx += 2;
        }

        if mission.plans.is_empty() {
            return Err(MalformedInput::MissingStartPosition.into());
        }

        tracing::debug!(
            right_edge = mission.bounds.right_edge,
            upper_edge = mission.bounds.upper_edge,
            rovers = mission.plans.len(),
            "parsed mission"
        );
        Ok(mission)
    }

    /// Runs every rover in order and collects their final states.
    pub fn run(&self, interpreter: &RoverInterpreter) -> Result<MissionReport, MissionError> {
        let mut report = MissionReport::default();
        for (index, plan) in self.plans.iter().enumerate() {
            let _span = tracing::debug_span!("rover", index).entered();
            let mut rover = Rover::new(plan.start, self.bounds)?;
            interpreter.run(&mut rover, &plan.script)?;
            report.rovers.push(rover.state());
        }
        Ok(report)
    }
}

fn parse_grid(line: &str) -> Result<GridBounds, MissionError> {
    let invalid = || MalformedInput::InvalidGridSize(line.trim().to_string());
    let edges = line
        .split_whitespace()
        .map(|token| token.parse::<i32>().ok().filter(|edge| *edge >= 0))
        .collect::<Option<Vec<i32>>>()
        .ok_or_else(invalid)?;

    match edges.as_slice() {
        [right_edge, upper_edge] => Ok(GridBounds::new(*right_edge, *upper_edge)),
        _ => Err(invalid().into()),
    }
}

/// Final rover states, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MissionReport {
    /// Final state of each rover, in the order the rovers were given.
    pub rovers: Vec<RoverState>,
}

impl fmt::Display for MissionReport {
    /// One `"<x> <y> <heading>"` line per rover, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, state) in self.rovers.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{state}")?;
        }
        Ok(())
    }
}

/// Parses `input`, runs it with the standard `R`/`L`/`M` commands and returns the report text.
pub fn run_mission(input: &str) -> Result<String, MissionError> {
    let mission = Mission::parse(input)?;
    let report = mission.run(&RoverInterpreter::standard())?;
    Ok(report.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heading::Heading;

    #[test]
    fn parses_grid_and_pairs() {
        let mission = Mission::parse("5 5\n1 2 N\nLM\n3 3 E\n").unwrap();
        assert_eq!(mission.bounds, GridBounds::new(5, 5));
        assert_eq!(
            mission.plans,
            vec![
                RoverPlan {
                    start: RoverState::new(1, 2, Heading::N),
                    script: "LM".into(),
                },
                RoverPlan {
                    start: RoverState::new(3, 3, Heading::E),
                    script: String::new(),
                },
            ]
        );
    }

    #[test]
    fn crlf_lines() {
        let mission = Mission::parse("5 5\r\n1 2 N\r\nMM\r\n").unwrap();
        assert_eq!(mission.plans[0].script, "MM");
    }

    #[test]
    fn grid_line_must_be_two_non_negative_integers() {
        for bad in ["5", "5 5 5", "5 x", "-1 3"] {
            let err = Mission::parse(&format!("{bad}\n1 2 N\n")).unwrap_err();
            assert_eq!(
                err,
                MissionError::MalformedInput(MalformedInput::InvalidGridSize(bad.into())),
                "{bad}"
            );
        }
    }

    #[test]
    fn zero_sized_grid_is_a_single_cell() {
        let mission = Mission::parse("0 0\n0 0 W\nRRRR").unwrap();
        let report = mission.run(&RoverInterpreter::standard()).unwrap();
        assert_eq!(report.to_string(), "0 0 W");
    }

    #[test]
    fn blank_start_line_mid_mission() {
        let err = Mission::parse("5 5\n1 2 N\nM\n\nM").unwrap_err();
        assert_eq!(err.to_string(), "Missing direction from starting position");
    }

    #[test]
    fn report_display_has_no_trailing_newline() {
        let report = MissionReport {
            rovers: vec![
                RoverState::new(1, 3, Heading::N),
                RoverState::new(5, 1, Heading::E),
            ],
        };
        assert_eq!(report.to_string(), "1 3 N\n5 1 E");
        assert_eq!(MissionReport::default().to_string(), "");
    }
}

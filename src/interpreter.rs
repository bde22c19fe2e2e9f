//! Interpreter that replays a command script against a [`Rover`].
//!
//! The entry point is [`RoverInterpreter`]. Register symbol-to-operation mappings via
//! [`RoverInterpreter::set_op`] or [`RoverInterpreter::populate_standard_symbols`] (or take
//! [`RoverInterpreter::standard`]), then call [`RoverInterpreter::run`].

use crate::error::MissionError;
use crate::rover::{Rover, RoverOp};
use std::collections::HashMap;

/// Maps script symbols to rover commands and executes scripts.
#[derive(Clone, Debug, Default)]
pub struct RoverInterpreter {
    op_map: HashMap<char, RoverOp>,
}

impl RoverInterpreter {
    /// Creates an interpreter with an empty symbol map. Every symbol is unrecognised until
    /// registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// An interpreter with the `R`, `L`, `M` mappings.
    pub fn standard() -> Self {
        let mut interpreter = Self::new();
        interpreter.populate_standard_symbols();
        interpreter
    }

    /// Replaces the entire symbol map in one step (builder pattern).
    pub fn with_map(mut self, map: HashMap<char, RoverOp>) -> Self {
        self.op_map = map;
        self
    }

    /// Assigns a single [`RoverOp`] to a symbol, replacing any previous mapping.
    pub fn set_op(&mut self, symbol: char, op: RoverOp) {
        self.op_map.insert(symbol, op);
    }

    /// Registers the conventional mappings.
    pub fn populate_standard_symbols(&mut self) {
        let mappings = [
            ('R', RoverOp::TurnRight),
            ('L', RoverOp::TurnLeft),
            ('M', RoverOp::MoveForward),
        ];

        for (symbol, op) in mappings {
            self.set_op(symbol, op);
        }
    }

    /// Looks up the operation registered for `symbol`.
    pub fn op_for(&self, symbol: char) -> Result<RoverOp, MissionError> {
        self.op_map
            .get(&symbol)
            .copied()
            .ok_or(MissionError::UnrecognisedAction(symbol))
    }

    /// Replays `script` against `rover`, left to right.
    ///
    /// Each command commits on its own. The first unrecognised symbol or rejected move stops
    /// the run; commands before it stay applied and the rest are never looked at.
    pub fn run(&self, rover: &mut Rover, script: &str) -> Result<(), MissionError> {
        tracing::debug!(start = %rover.state(), script, "running rover");

        for (step, symbol) in script.chars().enumerate() {
            let outcome = self.op_for(symbol).and_then(|op| {
                rover.apply(op)?;
                tracing::trace!(step, ?op, state = %rover.state(), "applied");
                Ok(())
            });

            if let Err(err) = outcome {
                tracing::warn!(step, %symbol, state = %rover.state(), "rover run aborted: {err}");
                return Err(err);
            }
        }

        tracing::debug!(end = %rover.state(), "rover finished");
        Ok(())
    }
}

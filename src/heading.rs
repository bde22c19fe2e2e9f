//! Compass headings and the rotation tables between them.

use crate::error::MissionError;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The direction a rover faces.
///
/// Discriminants index the rotation and displacement tables below, in clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    N = 0,
    E = 1,
    S = 2,
    W = 3,
}

const RIGHT_OF: [Heading; 4] = [Heading::E, Heading::S, Heading::W, Heading::N];
const LEFT_OF: [Heading; 4] = [Heading::W, Heading::N, Heading::E, Heading::S];
const DELTA: [IVec2; 4] = [IVec2::Y, IVec2::X, IVec2::NEG_Y, IVec2::NEG_X];

impl Heading {
    /// Every heading, clockwise from north.
    pub const ALL: [Heading; 4] = [Heading::N, Heading::E, Heading::S, Heading::W];

    /// The next heading clockwise.
    pub fn turn_right(self) -> Heading {
        RIGHT_OF[self as usize]
    }

    /// The next heading counter-clockwise.
    pub fn turn_left(self) -> Heading {
        LEFT_OF[self as usize]
    }

    /// Unit displacement of one forward step: N is `+y`, E is `+x`.
    pub fn delta(self) -> IVec2 {
        DELTA[self as usize]
    }

    /// The single-letter form used in start lines and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Heading::N => "N",
            Heading::E => "E",
            Heading::S => "S",
            Heading::W => "W",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heading {
    type Err = MissionError;

    /// Exact, case-sensitive match on `N`, `E`, `S` or `W`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Heading::N),
            "E" => Ok(Heading::E),
            "S" => Ok(Heading::S),
            "W" => Ok(Heading::W),
            other => Err(MissionError::InvalidHeading(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_turns_return_to_start() {
        for h in Heading::ALL {
            assert_eq!(h.turn_right().turn_right().turn_right().turn_right(), h);
            assert_eq!(h.turn_left().turn_left().turn_left().turn_left(), h);
        }
    }

    #[test]
    fn left_undoes_right() {
        for h in Heading::ALL {
            assert_eq!(h.turn_right().turn_left(), h);
            assert_eq!(h.turn_left().turn_right(), h);
        }
    }

    #[test]
    fn rotation_table() {
        assert_eq!(Heading::N.turn_right(), Heading::E);
        assert_eq!(Heading::E.turn_right(), Heading::S);
        assert_eq!(Heading::S.turn_right(), Heading::W);
        assert_eq!(Heading::W.turn_right(), Heading::N);
        assert_eq!(Heading::N.turn_left(), Heading::W);
        assert_eq!(Heading::W.turn_left(), Heading::S);
    }

    #[test]
    fn deltas_are_unit_steps() {
        assert_eq!(Heading::N.delta(), IVec2::new(0, 1));
        assert_eq!(Heading::E.delta(), IVec2::new(1, 0));
        assert_eq!(Heading::S.delta(), IVec2::new(0, -1));
        assert_eq!(Heading::W.delta(), IVec2::new(-1, 0));
        // Opposite headings cancel.
        for h in Heading::ALL {
            assert_eq!(h.delta() + h.turn_right().turn_right().delta(), IVec2::ZERO);
        }
    }

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        for h in Heading::ALL {
            assert_eq!(h.as_str().parse::<Heading>(), Ok(h));
        }
        assert_eq!(
            "n".parse::<Heading>(),
            Err(MissionError::InvalidHeading("n".into()))
        );
        assert_eq!(
            "NE".parse::<Heading>().unwrap_err().to_string(),
            "Unrecognised direction: NE"
        );
    }
}

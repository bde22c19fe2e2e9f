//! # mars-rover
//!
//! Simulates rovers on a bounded rectangular grid. Each rover starts at a position and
//! heading, replays a script of `R` (turn right), `L` (turn left) and `M` (move forward)
//! commands, and reports where it ended up.
//!
//! The core is [`Rover`]: a position/heading pair whose moves are checked against the
//! [`GridBounds`] before they commit. [`RoverInterpreter`] maps script symbols onto rover
//! commands, and [`Mission`] handles the text format around them.
//!
//! ```
//! let report = mars_rover::run_mission("5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM").unwrap();
//! assert_eq!(report, "1 3 N\n5 1 E");
//! ```

pub mod error;
pub mod heading;
pub mod interpreter;
pub mod mission;
pub mod rover;

pub use error::*;
pub use heading::*;
pub use interpreter::*;
pub use mission::*;
pub use rover::*;

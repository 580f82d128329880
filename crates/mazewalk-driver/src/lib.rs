//! The driving side of mazewalk: pick a strategy by name, pull its events at
//! a chosen pace, and reduce them into a visited set, a final path and
//! summary statistics.
//!
//! ```no_run
//! use std::time::Duration;
//! use mazewalk_core::{Puzzle, Stepper};
//! use mazewalk_driver::{Player, SolveConfig, Solver};
//!
//! let puzzle = Puzzle::parse("#S..E#").unwrap();
//! let config = SolveConfig::default();
//! let solver = Solver::for_puzzle(&config, &puzzle).unwrap();
//! let playback = Player::new(Duration::from_millis(20)).run(solver.solve(), |ev| {
//!     println!("{ev:?}");
//! });
//! assert!(playback.trace.is_finished());
//! ```

pub mod algorithm;
pub mod error;
pub mod player;
pub mod render;
pub mod solver;
pub mod stats;
pub mod trace;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use error::DriverError;
pub use player::{CancelToken, Playback, Player};
pub use render::render;
pub use solver::{SolveConfig, Solver};
pub use stats::{MazeStats, TraceStats, format_duration};
pub use trace::{Outcome, Trace};

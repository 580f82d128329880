//! **mazewalk-core**: maze grid model and the stepwise solver contract.
//!
//! This crate provides the types shared by every *mazewalk* solver: grid
//! positions and the fixed move order, the read-only [`Maze`], the
//! [`Event`] vocabulary, and the [`Stepper`] / [`Solve`] lazy-stream
//! contract.

pub mod event;
pub mod geom;
pub mod maze;
pub mod stream;

pub use event::{Event, Path, path_is_valid};
pub use geom::{DIRECTIONS, Direction, Pos};
pub use maze::{Endpoint, Maze, MazeError, Puzzle, Tile};
pub use stream::{Solve, Stepper};

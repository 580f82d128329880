//! Stepwise search solvers for mazes.
//!
//! Each solver borrows a [`Maze`](mazewalk_core::Maze), validates the start
//! and end cells on construction, and implements
//! [`Stepper`](mazewalk_core::Stepper) so that callers can pull one event
//! per unit of work:
//!
//! - **BFS** ([`Bfs`]): FIFO frontier, fewest-steps paths
//! - **DFS** ([`Dfs`]): LIFO frontier, any valid path
//! - **Dijkstra** ([`Dijkstra`]): explicit distance relaxation, unit weights
//! - **A\*** ([`Astar`]): Manhattan-guided shortest paths
//!
//! All four expand neighbours in the fixed
//! [`DIRECTIONS`](mazewalk_core::DIRECTIONS) order and emit a `Visit` for
//! every expanded cell before the terminal event.

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod neighbors;

#[cfg(test)]
mod testutil;

pub use astar::{Astar, OpenEntry};
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::{Dijkstra, UNREACHABLE};
pub use distance::manhattan;
pub use neighbors::open_neighbors;

//! Exhaustive dispatch over the five strategies.

use std::time::Duration;

use mazewalk_core::{Event, Maze, Pos, Puzzle, Stepper};
use mazewalk_paths::{Astar, Bfs, Dfs, Dijkstra};
use mazewalk_rl::{QLearning, QLearningConfig};

use crate::algorithm::Algorithm;
use crate::error::DriverError;

/// Everything needed to select and pace a solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveConfig {
    pub algorithm: Algorithm,
    /// Wait between two pulls of the event stream.
    pub delay: Duration,
    /// Seed for Q-learning exploration. `None` draws a fresh one per solve.
    pub seed: Option<u64>,
    pub qlearning: QLearningConfig,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bfs,
            delay: Duration::from_millis(50),
            seed: None,
            qlearning: QLearningConfig::default(),
        }
    }
}

/// A constructed strategy, ready to be pulled.
pub enum Solver<'a> {
    Bfs(Bfs<'a>),
    Dfs(Dfs<'a>),
    Astar(Astar<'a>),
    Dijkstra(Dijkstra<'a>),
    QLearning(QLearning<'a>),
}

impl<'a> Solver<'a> {
    /// Build `algorithm` with default learning parameters.
    pub fn new(
        algorithm: Algorithm,
        maze: &'a Maze,
        start: Pos,
        end: Pos,
    ) -> Result<Self, DriverError> {
        let config = SolveConfig {
            algorithm,
            ..Default::default()
        };
        Self::with_config(&config, maze, start, end)
    }

    /// Build a strategy from its string identifier.
    ///
    /// Unknown identifiers fail before any maze validation.
    pub fn by_name(name: &str, maze: &'a Maze, start: Pos, end: Pos) -> Result<Self, DriverError> {
        let algorithm: Algorithm = name.parse()?;
        Self::new(algorithm, maze, start, end)
    }

    /// Build the strategy selected by `config`.
    pub fn with_config(
        config: &SolveConfig,
        maze: &'a Maze,
        start: Pos,
        end: Pos,
    ) -> Result<Self, DriverError> {
        log::debug!(
            "driver: {} on {}x{} maze, {start} -> {end}",
            config.algorithm,
            maze.rows(),
            maze.cols()
        );
        let solver = match config.algorithm {
            Algorithm::Bfs => Self::Bfs(Bfs::new(maze, start, end)?),
            Algorithm::Dfs => Self::Dfs(Dfs::new(maze, start, end)?),
            Algorithm::Astar => Self::Astar(Astar::new(maze, start, end)?),
            Algorithm::Dijkstra => Self::Dijkstra(Dijkstra::new(maze, start, end)?),
            Algorithm::QLearning => {
                let seed = config.seed.unwrap_or_else(rand::random);
                Self::QLearning(QLearning::with_seed(
                    maze,
                    start,
                    end,
                    config.qlearning.clone(),
                    seed,
                )?)
            }
        };
        Ok(solver)
    }

    /// Build the strategy selected by `config` for a parsed puzzle.
    pub fn for_puzzle(config: &SolveConfig, puzzle: &'a Puzzle) -> Result<Self, DriverError> {
        Self::with_config(config, &puzzle.maze, puzzle.start, puzzle.end)
    }

    /// Which strategy this is.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::Bfs(_) => Algorithm::Bfs,
            Self::Dfs(_) => Algorithm::Dfs,
            Self::Astar(_) => Algorithm::Astar,
            Self::Dijkstra(_) => Algorithm::Dijkstra,
            Self::QLearning(_) => Algorithm::QLearning,
        }
    }
}

impl Stepper for Solver<'_> {
    fn step(&mut self) -> Option<Event> {
        match self {
            Self::Bfs(s) => s.step(),
            Self::Dfs(s) => s.step(),
            Self::Astar(s) => s.step(),
            Self::Dijkstra(s) => s.step(),
            Self::QLearning(s) => s.step(),
        }
    }
}

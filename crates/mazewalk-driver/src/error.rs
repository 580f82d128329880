use std::fmt;

use mazewalk_core::MazeError;
use mazewalk_rl::{ConfigError, QLearningError};

use crate::algorithm::UnknownAlgorithm;

/// Anything that stops a solve before its first event.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverError {
    /// The maze or its endpoints are unusable.
    Maze(MazeError),
    /// Learning parameters are out of range.
    Config(ConfigError),
    /// The strategy identifier names no strategy.
    UnknownAlgorithm(UnknownAlgorithm),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => e.fmt(f),
            Self::Config(e) => e.fmt(f),
            Self::UnknownAlgorithm(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::UnknownAlgorithm(e) => Some(e),
        }
    }
}

impl From<MazeError> for DriverError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

impl From<ConfigError> for DriverError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<UnknownAlgorithm> for DriverError {
    fn from(e: UnknownAlgorithm) -> Self {
        Self::UnknownAlgorithm(e)
    }
}

impl From<QLearningError> for DriverError {
    fn from(e: QLearningError) -> Self {
        match e {
            QLearningError::Maze(e) => Self::Maze(e),
            QLearningError::Config(e) => Self::Config(e),
        }
    }
}

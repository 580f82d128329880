//! Reinforcement-learning maze solver for mazewalk: a tabular Q-learning
//! agent with epsilon-greedy exploration and a greedy final rollout.

pub mod config;
pub mod qlearning;
pub mod qtable;

pub use config::{ConfigError, QLearningConfig};
pub use qlearning::{EpisodeEnd, QLearning, QLearningError};
pub use qtable::{ACTIONS, QTable};

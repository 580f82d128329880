//! Training parameters for [`QLearning`](crate::QLearning).

use std::fmt;

/// Hyper-parameters and reward shaping for Q-learning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QLearningConfig {
    /// Training episodes run before the greedy rollout.
    pub episodes: usize,
    /// Probability of a uniformly random valid action while training.
    pub epsilon: f64,
    /// Learning rate.
    pub alpha: f64,
    /// Discount factor.
    pub gamma: f64,
    /// A progress message is emitted after every episode whose index is a
    /// multiple of this. `0` disables episode messages.
    pub progress_every: usize,
    /// Reward for stepping onto the end cell.
    pub goal_reward: f64,
    /// Reward for a move onto a blocked or already visited cell.
    pub penalty: f64,
    /// Reward for any other move.
    pub step_cost: f64,
}

impl Default for QLearningConfig {
    fn default() -> Self {
        Self {
            episodes: 50,
            epsilon: 0.30,
            alpha: 0.10,
            gamma: 0.90,
            progress_every: 10,
            goal_reward: 100.0,
            penalty: -10.0,
            step_cost: -0.1,
        }
    }
}

impl QLearningConfig {
    /// Check that the probabilities and rates are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unit = |name: &'static str, value: f64| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::OutOfRange { name, value })
            }
        };
        unit("epsilon", self.epsilon)?;
        unit("alpha", self.alpha)?;
        unit("gamma", self.gamma)?;
        for (name, value) in [
            ("goal_reward", self.goal_reward),
            ("penalty", self.penalty),
            ("step_cost", self.step_cost),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        Ok(())
    }
}

/// A rejected [`QLearningConfig`] value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A probability or rate outside `[0, 1]`.
    OutOfRange { name: &'static str, value: f64 },
    /// A reward that is NaN or infinite.
    NotFinite { name: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { name, value } => {
                write!(f, "q-learning: {name} must be within [0, 1], got {value}")
            }
            Self::NotFinite { name, value } => {
                write!(f, "q-learning: {name} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let c: QLearningConfig = serde_json::from_str(r#"{"episodes": 200}"#).unwrap();
        assert_eq!(c.episodes, 200);
        assert_eq!(c.epsilon, 0.30);
    }
}

//! The closed set of solving strategies and their string identifiers.

use std::fmt;
use std::str::FromStr;

/// One of the five solving strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "BFS"))]
    Bfs,
    #[cfg_attr(feature = "serde", serde(rename = "DFS"))]
    Dfs,
    #[cfg_attr(feature = "serde", serde(rename = "A*"))]
    Astar,
    #[cfg_attr(feature = "serde", serde(rename = "Dijkstra"))]
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(rename = "Q-Learning"))]
    QLearning,
}

impl Algorithm {
    /// Every strategy, in picker order.
    pub const ALL: [Algorithm; 5] = [
        Self::Bfs,
        Self::Dfs,
        Self::Astar,
        Self::Dijkstra,
        Self::QLearning,
    ];

    /// The identifier accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::Astar => "A*",
            Self::Dijkstra => "Dijkstra",
            Self::QLearning => "Q-Learning",
        }
    }

    /// Human-readable name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bfs => "Breadth-First Search",
            Self::Dfs => "Depth-First Search",
            Self::Astar => "A* Algorithm",
            Self::Dijkstra => "Dijkstra's Algorithm",
            Self::QLearning => "Q-Learning",
        }
    }

    /// One-line summary of how the strategy explores.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Bfs => "Explores level by level",
            Self::Dfs => "Explores as far as possible",
            Self::Astar => "Heuristic-based optimal search",
            Self::Dijkstra => "Shortest path algorithm",
            Self::QLearning => "Reinforcement learning agent",
        }
    }

    /// Asymptotic cost of a textbook implementation.
    pub const fn complexity(self) -> &'static str {
        match self {
            Self::Bfs | Self::Dfs => "O(V+E)",
            Self::Astar => "O(b^d)",
            Self::Dijkstra => "O((V+E)logV)",
            Self::QLearning => "Variable",
        }
    }

    /// Whether two runs on the same input always produce the same events.
    pub const fn is_deterministic(self) -> bool {
        !matches!(self, Self::QLearning)
    }

    /// Whether a found path is guaranteed to be a shortest one.
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::Bfs | Self::Astar | Self::Dijkstra)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parse an identifier. Matching ignores ASCII case, and `astar` is
    /// accepted for `A*`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("astar") {
            return Ok(Self::Astar);
        }
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// An identifier that names none of the five strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown strategy \u{201c}{}\u{201d} (expected one of: ", self.0)?;
        for (i, a) in Algorithm::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(a.name())?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for UnknownAlgorithm {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
            assert_eq!(a.to_string(), a.name());
        }
    }

    #[test]
    fn lenient_parsing() {
        assert_eq!("bfs".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(" dijkstra ".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!("astar".parse::<Algorithm>(), Ok(Algorithm::Astar));
        assert_eq!("q-learning".parse::<Algorithm>(), Ok(Algorithm::QLearning));
    }

    #[test]
    fn unknown_identifier() {
        let err = "Greedy".parse::<Algorithm>().unwrap_err();
        assert_eq!(err, UnknownAlgorithm("Greedy".into()));
        let msg = err.to_string();
        assert!(msg.starts_with("unknown strategy"));
        assert!(msg.contains("Q-Learning"));
    }

    #[test]
    fn metadata() {
        assert!(Algorithm::Astar.is_optimal());
        assert!(!Algorithm::Dfs.is_optimal());
        assert!(!Algorithm::QLearning.is_deterministic());
        assert_eq!(Algorithm::Bfs.complexity(), "O(V+E)");
        assert_eq!(Algorithm::default(), Algorithm::Bfs);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serialized_as_identifier() {
        let json = serde_json::to_string(&Algorithm::Astar).unwrap();
        assert_eq!(json, "\"A*\"");
        let back: Algorithm = serde_json::from_str("\"Q-Learning\"").unwrap();
        assert_eq!(back, Algorithm::QLearning);
    }
}

//! Tabular action-value estimates.

use std::collections::HashMap;

use mazewalk_core::{DIRECTIONS, Pos};

/// Number of actions per state: one per entry of [`DIRECTIONS`].
pub const ACTIONS: usize = DIRECTIONS.len();

/// Mapping from `(state, action)` to an estimated discounted return.
///
/// States are maze positions and actions are indices into [`DIRECTIONS`].
/// Entries that were never written read as `0.0`.
#[derive(Debug, Clone, Default)]
pub struct QTable {
    values: HashMap<Pos, [f64; ACTIONS]>,
}

impl QTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate for taking `action` in `state`.
    pub fn get(&self, state: Pos, action: usize) -> f64 {
        self.values
            .get(&state)
            .and_then(|row| row.get(action))
            .copied()
            .unwrap_or(0.0)
    }

    /// Overwrite the estimate for `(state, action)`. Out-of-range actions
    /// are ignored.
    pub fn set(&mut self, state: Pos, action: usize, value: f64) {
        if action >= ACTIONS {
            return;
        }
        self.values.entry(state).or_insert([0.0; ACTIONS])[action] = value;
    }

    /// The action in `actions` with the highest estimate.
    ///
    /// Ties go to the earliest entry of `actions`. Returns `None` when
    /// `actions` is empty.
    pub fn best_action(&self, state: Pos, actions: &[usize]) -> Option<usize> {
        let (&first, rest) = actions.split_first()?;
        let mut best = first;
        let mut best_q = self.get(state, first);
        for &a in rest {
            let q = self.get(state, a);
            if q > best_q {
                best = a;
                best_q = q;
            }
        }
        Some(best)
    }

    /// Highest estimate among `actions`, or `0.0` when there are none.
    pub fn max_value(&self, state: Pos, actions: &[usize]) -> f64 {
        self.best_action(state, actions)
            .map_or(0.0, |a| self.get(state, a))
    }

    /// Number of states with at least one written estimate.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

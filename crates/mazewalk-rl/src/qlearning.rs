//! A tabular Q-learning maze solver.
//!
//! The solver trains an action-value table over simulated episodes, then
//! walks the table greedily once. Unlike the search solvers it never emits
//! `Visit` events: training only produces `TrainingProgress` messages and the
//! whole rollout path is revealed at once by the terminal `Solution`.

use std::fmt;

use mazewalk_core::{DIRECTIONS, Event, Maze, MazeError, Path, Pos, Stepper};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

use crate::config::{ConfigError, QLearningConfig};
use crate::qtable::QTable;

/// How a simulated episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeEnd {
    /// Stepped onto the end cell after this many moves.
    Reached(usize),
    /// Tried to move onto an already visited cell.
    Revisited(usize),
    /// No open neighbour to move to.
    Stuck(usize),
    /// Ran out of the `rows * cols` step budget.
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Announce,
    Training { next_episode: usize },
    Rollout,
    Done,
}

/// Q-learning solver over a borrowed maze.
///
/// Each pull of the event stream does one of: announce training, run
/// training episodes up to the next progress report (at most
/// `progress_every` episodes), or run the greedy rollout and emit the
/// terminal event.
pub struct QLearning<'a, R: Rng = StdRng> {
    maze: &'a Maze,
    start: Pos,
    end: Pos,
    config: QLearningConfig,
    q: QTable,
    rng: R,
    phase: Phase,
    successes: usize,
}

impl<'a> QLearning<'a, StdRng> {
    /// Create a solver with default parameters and a fresh random seed.
    pub fn new(maze: &'a Maze, start: Pos, end: Pos) -> Result<Self, QLearningError> {
        Self::with_seed(maze, start, end, QLearningConfig::default(), rand::random())
    }

    /// Create a reproducible solver.
    pub fn with_seed(
        maze: &'a Maze,
        start: Pos,
        end: Pos,
        config: QLearningConfig,
        seed: u64,
    ) -> Result<Self, QLearningError> {
        log::debug!("qlearning: seed {seed}");
        Self::with_rng(maze, start, end, config, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> QLearning<'a, R> {
    /// Create a solver drawing exploration decisions from `rng`.
    pub fn with_rng(
        maze: &'a Maze,
        start: Pos,
        end: Pos,
        config: QLearningConfig,
        rng: R,
    ) -> Result<Self, QLearningError> {
        maze.check_endpoints(start, end)?;
        config.validate()?;
        Ok(Self {
            maze,
            start,
            end,
            config,
            q: QTable::new(),
            rng,
            phase: Phase::Announce,
            successes: 0,
        })
    }

    /// The action-value table learned so far.
    pub fn q_table(&self) -> &QTable {
        &self.q
    }

    /// The parameters in use.
    pub fn config(&self) -> &QLearningConfig {
        &self.config
    }

    /// Training episodes that reached the end.
    pub fn successful_episodes(&self) -> usize {
        self.successes
    }

    fn step_budget(&self) -> usize {
        self.maze.len()
    }

    /// Indices of moves from `p` that land on an open cell.
    fn valid_actions(&self, p: Pos) -> Vec<usize> {
        DIRECTIONS
            .iter()
            .enumerate()
            .filter(|(_, d)| self.maze.is_open(p.step(**d)))
            .map(|(i, _)| i)
            .collect()
    }

    /// Epsilon-greedy choice among the valid actions of `state`.
    fn choose_action(&mut self, state: Pos) -> Option<usize> {
        let actions = self.valid_actions(state);
        if actions.is_empty() {
            return None;
        }
        if self.rng.random::<f64>() < self.config.epsilon {
            let k = self.rng.random_range(0..actions.len());
            return Some(actions[k]);
        }
        self.q.best_action(state, &actions)
    }

    fn reward(&self, next: Pos, visited: &[bool]) -> f64 {
        if next == self.end {
            self.config.goal_reward
        } else if !self.maze.is_open(next) || self.is_marked(visited, next) {
            self.config.penalty
        } else {
            self.config.step_cost
        }
    }

    fn update(&mut self, state: Pos, action: usize, reward: f64, next: Pos) {
        let current = self.q.get(state, action);
        let next_actions = self.valid_actions(next);
        let max_next = self.q.max_value(next, &next_actions);
        let value =
            current + self.config.alpha * (reward + self.config.gamma * max_next - current);
        self.q.set(state, action, value);
    }

    fn is_marked(&self, visited: &[bool], p: Pos) -> bool {
        self.maze.index(p).is_some_and(|i| visited[i])
    }

    /// Walk from the start, choosing actions with `choose` and optionally
    /// learning from each move. Returns the walked path and how it ended.
    fn walk(
        &mut self,
        learn: bool,
        mut choose: impl FnMut(&mut Self, Pos) -> Option<usize>,
    ) -> (Path, EpisodeEnd) {
        let mut current = self.start;
        let mut path = vec![current];
        if current == self.end {
            return (path, EpisodeEnd::Reached(0));
        }
        let mut visited = vec![false; self.maze.len()];
        if let Some(i) = self.maze.index(current) {
            visited[i] = true;
        }

        for step in 0..self.step_budget() {
            let Some(action) = choose(self, current) else {
                return (path, EpisodeEnd::Stuck(step));
            };
            let next = current.step(DIRECTIONS[action]);

            if learn {
                let reward = self.reward(next, &visited);
                self.update(current, action, reward, next);
            }

            let Some(ni) = self.maze.index(next).filter(|_| self.maze.is_open(next)) else {
                return (path, EpisodeEnd::Stuck(step));
            };
            if visited[ni] {
                return (path, EpisodeEnd::Revisited(step));
            }
            visited[ni] = true;
            current = next;
            path.push(current);
            if current == self.end {
                return (path, EpisodeEnd::Reached(step + 1));
            }
        }
        (path, EpisodeEnd::Exhausted)
    }

    /// Run one exploring, learning episode.
    pub fn train_episode(&mut self) -> EpisodeEnd {
        let (_, end) = self.walk(true, |s, p| s.choose_action(p));
        if matches!(end, EpisodeEnd::Reached(_)) {
            self.successes += 1;
        }
        end
    }

    /// Walk the learned table greedily without learning.
    ///
    /// Returns the path if it reaches the end.
    pub fn rollout(&mut self) -> Option<Path> {
        let (path, end) = self.walk(false, |s, p| {
            let actions = s.valid_actions(p);
            s.q.best_action(p, &actions)
        });
        log::debug!("qlearning: rollout ended {end:?} after {} cells", path.len());
        match end {
            EpisodeEnd::Reached(_) => Some(path),
            _ => None,
        }
    }

    fn report_due(&self, episode: usize) -> bool {
        self.config.progress_every > 0 && episode % self.config.progress_every == 0
    }
}

fn progress(message: impl Into<String>) -> Event {
    Event::TrainingProgress {
        message: message.into(),
    }
}

impl<R: Rng> Stepper for QLearning<'_, R> {
    fn step(&mut self) -> Option<Event> {
        match self.phase {
            Phase::Announce => {
                self.phase = Phase::Training { next_episode: 0 };
                Some(progress("Training Q-Learning agent..."))
            }
            Phase::Training { mut next_episode } => {
                let total = self.config.episodes;
                while next_episode < total {
                    let episode = next_episode;
                    let end = self.train_episode();
                    log::trace!("qlearning: episode {episode} ended {end:?}");
                    next_episode += 1;
                    if self.report_due(episode) {
                        self.phase = Phase::Training { next_episode };
                        return Some(progress(format!("Episode {episode}/{total}")));
                    }
                }
                log::debug!(
                    "qlearning: trained {total} episodes, {} reached the end, {} states learned",
                    self.successes,
                    self.q.len()
                );
                self.phase = Phase::Rollout;
                Some(progress("Running final solution..."))
            }
            Phase::Rollout => {
                self.phase = Phase::Done;
                match self.rollout() {
                    Some(path) => Some(Event::Solution { path }),
                    None => Some(Event::NoSolution),
                }
            }
            Phase::Done => None,
        }
    }
}

/// Errors raised while constructing a [`QLearning`] solver.
#[derive(Debug, Clone, PartialEq)]
pub enum QLearningError {
    Maze(MazeError),
    Config(ConfigError),
}

impl fmt::Display for QLearningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => e.fmt(f),
            Self::Config(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for QLearningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

impl From<MazeError> for QLearningError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

impl From<ConfigError> for QLearningError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

//! Reduce an event stream into what a display needs.

use std::collections::HashSet;

use mazewalk_core::{Event, Path, Pos};

/// How a solve has ended so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// No terminal event yet.
    #[default]
    Pending,
    Solved,
    Unsolved,
}

/// Accumulated state of a solve: visited cells, the latest frontier path,
/// the final path and any training messages.
#[derive(Debug, Clone, Default)]
pub struct Trace {
    visited: HashSet<Pos>,
    order: Vec<Pos>,
    current: Path,
    path: Path,
    messages: Vec<String>,
    outcome: Outcome,
    events: usize,
}

impl Trace {
    /// An empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event into the trace.
    ///
    /// Events after the terminal one are counted but otherwise ignored.
    pub fn apply(&mut self, ev: &Event) {
        self.events += 1;
        if self.outcome != Outcome::Pending {
            return;
        }
        match ev {
            Event::Visit { pos, path } => {
                if self.visited.insert(*pos) {
                    self.order.push(*pos);
                }
                self.current.clone_from(path);
            }
            Event::Solution { path } => {
                self.path.clone_from(path);
                self.outcome = Outcome::Solved;
            }
            Event::NoSolution => self.outcome = Outcome::Unsolved,
            Event::TrainingProgress { message } => self.messages.push(message.clone()),
        }
    }

    /// Whether `p` has been visited.
    pub fn is_visited(&self, p: Pos) -> bool {
        self.visited.contains(&p)
    }

    /// Distinct visited cells, in first-visit order.
    pub fn visit_order(&self) -> &[Pos] {
        &self.order
    }

    /// Number of distinct visited cells.
    pub fn visited_count(&self) -> usize {
        self.order.len()
    }

    /// Path of the most recent `Visit`.
    pub fn current_path(&self) -> &[Pos] {
        &self.current
    }

    /// The solution path, empty unless solved.
    pub fn path(&self) -> &[Pos] {
        &self.path
    }

    /// Training messages in arrival order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether a terminal event has been seen.
    pub fn is_finished(&self) -> bool {
        self.outcome != Outcome::Pending
    }

    /// Events applied, including any after the terminal one.
    pub fn events(&self) -> usize {
        self.events
    }
}

impl<'e> Extend<&'e Event> for Trace {
    fn extend<I: IntoIterator<Item = &'e Event>>(&mut self, iter: I) {
        for ev in iter {
            self.apply(ev);
        }
    }
}

impl Extend<Event> for Trace {
    fn extend<I: IntoIterator<Item = Event>>(&mut self, iter: I) {
        for ev in iter {
            self.apply(&ev);
        }
    }
}

impl FromIterator<Event> for Trace {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}

use mazewalk_core::{Event, Maze, MazeError, Path, Pos, Stepper};

use crate::distance::manhattan;
use crate::neighbors::open_neighbors;

/// A candidate on the A* open list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenEntry {
    pub pos: Pos,
    /// Cost so far.
    pub g: u32,
    /// Manhattan estimate to the end.
    pub h: u32,
    /// `g + h`.
    pub f: u32,
    pub path: Path,
}

/// A* search guided by Manhattan distance.
///
/// The heuristic is admissible and consistent on a unit-cost 4-connected
/// grid, so the first time the end is closed its path is a shortest one.
///
/// The open list is a plain vector stably sorted by `f` before every pop, so
/// among equal `f` the entry that has been in the list longest (or was
/// replaced in place there) comes first. Improving an entry overwrites it
/// where it sits instead of appending a duplicate. Callers should not rely on
/// the tie order.
pub struct Astar<'a> {
    maze: &'a Maze,
    end: Pos,
    open: Vec<OpenEntry>,
    closed: Vec<bool>,
    g_score: Vec<Option<u32>>,
    pending: Option<Event>,
    finished: bool,
    expanded: usize,
}

impl<'a> Astar<'a> {
    /// Create a solver for `start -> end` on `maze`.
    pub fn new(maze: &'a Maze, start: Pos, end: Pos) -> Result<Self, MazeError> {
        maze.check_endpoints(start, end)?;
        let h = manhattan(start, end);
        let mut g_score = vec![None; maze.len()];
        if let Some(si) = maze.index(start) {
            g_score[si] = Some(0);
        }
        Ok(Self {
            maze,
            end,
            open: vec![OpenEntry {
                pos: start,
                g: 0,
                h,
                f: h,
                path: vec![start],
            }],
            closed: vec![false; maze.len()],
            g_score,
            pending: None,
            finished: false,
            expanded: 0,
        })
    }

    /// The current open list.
    pub fn open_list(&self) -> &[OpenEntry] {
        &self.open
    }

    /// Number of cells closed so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn relax(&mut self, current: &OpenEntry) {
        let tentative = current.g + 1;
        for n in open_neighbors(self.maze, current.pos) {
            let Some(ni) = self.maze.index(n) else {
                continue;
            };
            if self.closed[ni] {
                continue;
            }
            if self.g_score[ni].is_some_and(|g| tentative >= g) {
                continue;
            }
            self.g_score[ni] = Some(tentative);

            let h = manhattan(n, self.end);
            let mut path = current.path.clone();
            path.push(n);
            let entry = OpenEntry {
                pos: n,
                g: tentative,
                h,
                f: tentative + h,
                path,
            };
            match self.open.iter().position(|e| e.pos == n) {
                Some(k) => self.open[k] = entry,
                None => self.open.push(entry),
            }
        }
    }
}

impl Stepper for Astar<'_> {
    fn step(&mut self) -> Option<Event> {
        if let Some(ev) = self.pending.take() {
            return Some(ev);
        }
        if self.finished {
            return None;
        }

        while !self.open.is_empty() {
            // Stable: equal f keeps list order.
            self.open.sort_by_key(|e| e.f);
            let current = self.open.remove(0);
            let Some(ci) = self.maze.index(current.pos) else {
                continue;
            };
            if self.closed[ci] {
                continue;
            }
            self.closed[ci] = true;
            self.expanded += 1;
            log::trace!(
                "astar: close {} g={} h={} f={}",
                current.pos,
                current.g,
                current.h,
                current.f
            );

            if current.pos == self.end {
                log::debug!(
                    "astar: reached {} after {} expansions, cost {}",
                    current.pos,
                    self.expanded,
                    current.g
                );
                self.finished = true;
                self.pending = Some(Event::Solution {
                    path: current.path.clone(),
                });
                return Some(Event::Visit {
                    pos: current.pos,
                    path: current.path,
                });
            }

            self.relax(&current);
            return Some(Event::Visit {
                pos: current.pos,
                path: current.path,
            });
        }

        log::debug!("astar: open list exhausted after {} expansions", self.expanded);
        self.finished = true;
        Some(Event::NoSolution)
    }
}

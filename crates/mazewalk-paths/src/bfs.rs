use std::collections::VecDeque;

use mazewalk_core::{Event, Maze, MazeError, Path, Pos, Stepper};

use crate::neighbors::open_neighbors;

/// Breadth-first search over the 4-connected open cells.
///
/// The frontier is a FIFO queue of `(position, path)` entries seeded with the
/// start. A cell is marked visited when it is dequeued, not when it is
/// enqueued, so the queue may briefly hold duplicates; they are dropped on
/// dequeue. The first dequeue of a cell carries a fewest-steps path to it.
pub struct Bfs<'a> {
    maze: &'a Maze,
    end: Pos,
    queue: VecDeque<(Pos, Path)>,
    visited: Vec<bool>,
    pending: Option<Event>,
    finished: bool,
    expanded: usize,
}

impl<'a> Bfs<'a> {
    /// Create a solver for `start -> end` on `maze`.
    ///
    /// Fails if either endpoint is out of bounds or on a wall. Reachability
    /// is only discovered by solving.
    pub fn new(maze: &'a Maze, start: Pos, end: Pos) -> Result<Self, MazeError> {
        maze.check_endpoints(start, end)?;
        let mut queue = VecDeque::new();
        queue.push_back((start, vec![start]));
        Ok(Self {
            maze,
            end,
            queue,
            visited: vec![false; maze.len()],
            pending: None,
            finished: false,
            expanded: 0,
        })
    }

    /// Number of cells expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    fn is_visited(&self, p: Pos) -> bool {
        self.maze.index(p).is_some_and(|i| self.visited[i])
    }
}

impl Stepper for Bfs<'_> {
    fn step(&mut self) -> Option<Event> {
        if let Some(ev) = self.pending.take() {
            return Some(ev);
        }
        if self.finished {
            return None;
        }

        while let Some((pos, path)) = self.queue.pop_front() {
            let Some(i) = self.maze.index(pos) else {
                continue;
            };
            // Stale duplicate.
            if self.visited[i] {
                continue;
            }
            self.visited[i] = true;
            self.expanded += 1;
            log::trace!("bfs: visit {pos} (depth {})", path.len() - 1);

            if pos == self.end {
                log::debug!(
                    "bfs: reached {pos} after {} expansions, path length {}",
                    self.expanded,
                    path.len()
                );
                self.finished = true;
                self.pending = Some(Event::Solution { path: path.clone() });
                return Some(Event::Visit { pos, path });
            }

            for n in open_neighbors(self.maze, pos) {
                if self.is_visited(n) {
                    continue;
                }
                let mut next = path.clone();
                next.push(n);
                self.queue.push_back((n, next));
            }
            return Some(Event::Visit { pos, path });
        }

        log::debug!("bfs: frontier exhausted after {} expansions", self.expanded);
        self.finished = true;
        Some(Event::NoSolution)
    }
}

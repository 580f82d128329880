use mazewalk_core::{Event, Maze, MazeError, Path, Pos, Stepper};

use crate::neighbors::open_neighbors;

/// Sentinel distance meaning "not reached yet".
pub const UNREACHABLE: u32 = u32::MAX;

/// Dijkstra's algorithm with uniform unit edge weights.
///
/// Every open cell starts at [`UNREACHABLE`] except the start at 0. Each step
/// settles the unvisited cell with the smallest finite distance, rebuilds its
/// path from the predecessor links, and relaxes its open unvisited
/// neighbours. Among equal distances the cell found first in a row-major scan
/// wins; callers should not rely on that order.
///
/// The selection is a linear scan and the path is rebuilt on every visit, so
/// each step is `O(cells + path length)`.
pub struct Dijkstra<'a> {
    maze: &'a Maze,
    end: Pos,
    dist: Vec<u32>,
    prev: Vec<Option<usize>>,
    visited: Vec<bool>,
    pending: Option<Event>,
    finished: bool,
    settled: usize,
}

impl<'a> Dijkstra<'a> {
    /// Create a solver for `start -> end` on `maze`.
    pub fn new(maze: &'a Maze, start: Pos, end: Pos) -> Result<Self, MazeError> {
        maze.check_endpoints(start, end)?;
        let mut dist = vec![UNREACHABLE; maze.len()];
        if let Some(si) = maze.index(start) {
            dist[si] = 0;
        }
        // Walls are never candidates: mark them visited up front.
        let visited = maze.iter().map(|(_, t)| !t.is_open()).collect();
        Ok(Self {
            maze,
            end,
            dist,
            prev: vec![None; maze.len()],
            visited,
            pending: None,
            finished: false,
            settled: 0,
        })
    }

    /// Distance recorded so far for `p`, or [`UNREACHABLE`].
    pub fn distance(&self, p: Pos) -> u32 {
        self.maze.index(p).map_or(UNREACHABLE, |i| self.dist[i])
    }

    /// Number of cells settled so far.
    pub fn settled(&self) -> usize {
        self.settled
    }

    fn closest_unvisited(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &d) in self.dist.iter().enumerate() {
            if self.visited[i] || d == UNREACHABLE {
                continue;
            }
            if best.is_none_or(|b| d < self.dist[b]) {
                best = Some(i);
            }
        }
        best
    }

    fn path_to(&self, idx: usize) -> Path {
        let mut path = Vec::new();
        let mut cur = Some(idx);
        while let Some(i) = cur {
            path.push(self.maze.pos(i));
            cur = self.prev[i];
        }
        path.reverse();
        path
    }
}

impl Stepper for Dijkstra<'_> {
    fn step(&mut self) -> Option<Event> {
        if let Some(ev) = self.pending.take() {
            return Some(ev);
        }
        if self.finished {
            return None;
        }

        let Some(ci) = self.closest_unvisited() else {
            log::debug!("dijkstra: no reachable cells left after {} settled", self.settled);
            self.finished = true;
            return Some(Event::NoSolution);
        };

        self.visited[ci] = true;
        self.settled += 1;
        let pos = self.maze.pos(ci);
        let path = self.path_to(ci);
        log::trace!("dijkstra: settle {pos} at distance {}", self.dist[ci]);

        if pos == self.end {
            log::debug!(
                "dijkstra: reached {pos} after {} settled, distance {}",
                self.settled,
                self.dist[ci]
            );
            self.finished = true;
            self.pending = Some(Event::Solution { path: path.clone() });
            return Some(Event::Visit { pos, path });
        }

        let candidate = self.dist[ci] + 1;
        for n in open_neighbors(self.maze, pos) {
            let Some(ni) = self.maze.index(n) else {
                continue;
            };
            if self.visited[ni] {
                continue;
            }
            if candidate < self.dist[ni] {
                self.dist[ni] = candidate;
                self.prev[ni] = Some(ci);
            }
        }

        Some(Event::Visit { pos, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;
    use mazewalk_core::path_is_valid;

    #[test]
    fn open_room_shortest() {
        let p = puzzle(OPEN_5X5);
        let events = drain(Dijkstra::new(&p.maze, p.start, p.end).unwrap());
        assert_single_terminal(&events);
        let path = solution(&events).unwrap();
        assert_eq!(path.len(), 5);
        assert!(path_is_valid(&p.maze, path, p.start, p.end));
    }

    #[test]
    fn corridor_matches_oracle() {
        let p = puzzle(CORRIDOR);
        let events = drain(Dijkstra::new(&p.maze, p.start, p.end).unwrap());
        let path = solution(&events).unwrap();
        assert_eq!(Some(path.len()), shortest_len(&p.maze, p.start, p.end));
    }

    #[test]
    fn visits_settle_in_distance_order() {
        let p = puzzle(CORRIDOR);
        let events = drain(Dijkstra::new(&p.maze, p.start, p.end).unwrap());
        let mut last = 0;
        for e in &events {
            if let Event::Visit { pos, path } = e {
                assert_eq!(path.first(), Some(&p.start));
                assert_eq!(path.last(), Some(pos));
                assert!(path_is_valid(&p.maze, path, p.start, *pos));
                assert!(path.len() >= last);
                last = path.len();
            }
        }
    }

    #[test]
    fn distances_are_relaxed() {
        let p = puzzle(OPEN_5X5);
        let mut d = Dijkstra::new(&p.maze, p.start, p.end).unwrap();
        assert_eq!(d.distance(p.start), 0);
        assert_eq!(d.distance(Pos::new(2, 1)), UNREACHABLE);
        d.step();
        assert_eq!(d.settled(), 1);
        assert_eq!(d.distance(Pos::new(2, 1)), 1);
        assert_eq!(d.distance(Pos::new(1, 2)), 1);
        assert_eq!(d.distance(Pos::new(0, 0)), UNREACHABLE);
    }

    #[test]
    fn sealed_pocket_has_no_solution() {
        let p = puzzle(POCKET);
        let events = drain(Dijkstra::new(&p.maze, p.start, p.end).unwrap());
        assert_single_terminal(&events);
        assert_eq!(events.last(), Some(&Event::NoSolution));
        assert_eq!(visits(&events).len(), p.maze.open_count() - 1);
    }

    #[test]
    fn start_is_end() {
        let p = puzzle(OPEN_5X5);
        let events = drain(Dijkstra::new(&p.maze, p.end, p.end).unwrap());
        assert_eq!(events.len(), 2);
        assert_eq!(solution(&events), Some(&[p.end][..]));
    }

    #[test]
    fn no_work_before_first_pull() {
        let p = puzzle(CORRIDOR);
        let mut d = Dijkstra::new(&p.maze, p.start, p.end).unwrap();
        assert_eq!(d.settled(), 0);
        assert_eq!(d.distance(Pos::new(2, 1)), UNREACHABLE);
        assert!(matches!(d.step(), Some(Event::Visit { pos, .. }) if pos == p.start));
        assert_eq!(d.settled(), 1);
    }
}

use mazewalk_core::{Event, Maze, MazeError, Path, Pos, Stepper};

use crate::neighbors::open_neighbors;

/// Depth-first search over the 4-connected open cells.
///
/// Identical to [`Bfs`](crate::Bfs) except the frontier is a LIFO stack.
/// Neighbours are pushed in reverse direction order so they are popped in
/// forward order. The reported path is the first one DFS commits to, not
/// necessarily a shortest one.
pub struct Dfs<'a> {
    maze: &'a Maze,
    end: Pos,
    stack: Vec<(Pos, Path)>,
    visited: Vec<bool>,
    pending: Option<Event>,
    finished: bool,
    expanded: usize,
}

impl<'a> Dfs<'a> {
    /// Create a solver for `start -> end` on `maze`.
    pub fn new(maze: &'a Maze, start: Pos, end: Pos) -> Result<Self, MazeError> {
        maze.check_endpoints(start, end)?;
        Ok(Self {
            maze,
            end,
            stack: vec![(start, vec![start])],
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
}

impl Stepper for Dfs<'_> {
    fn step(&mut self) -> Option<Event> {
        if let Some(ev) = self.pending.take() {
            return Some(ev);
        }
        if self.finished {
            return None;
        }

        while let Some((pos, path)) = self.stack.pop() {
            let Some(i) = self.maze.index(pos) else {
                continue;
            };
            if self.visited[i] {
                continue;
            }
            self.visited[i] = true;
            self.expanded += 1;
            log::trace!("dfs: visit {pos} (depth {})", path.len() - 1);

            if pos == self.end {
                log::debug!(
                    "dfs: reached {pos} after {} expansions, path length {}",
                    self.expanded,
                    path.len()
                );
                self.finished = true;
                self.pending = Some(Event::Solution { path: path.clone() });
                return Some(Event::Visit { pos, path });
            }

            let maze = self.maze;
            let visited = &self.visited;
            for n in open_neighbors(maze, pos).rev() {
                if maze.index(n).is_some_and(|ni| visited[ni]) {
                    continue;
                }
                let mut next = path.clone();
                next.push(n);
                self.stack.push((n, next));
            }
            return Some(Event::Visit { pos, path });
        }

        log::debug!("dfs: frontier exhausted after {} expansions", self.expanded);
        self.finished = true;
        Some(Event::NoSolution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;
    use mazewalk_core::path_is_valid;

    #[test]
    fn open_room_valid_path() {
        let p = puzzle(OPEN_5X5);
        let events = drain(Dfs::new(&p.maze, p.start, p.end).unwrap());
        assert_single_terminal(&events);
        let path = solution(&events).unwrap();
        assert!(path.len() >= 5);
        assert!(path_is_valid(&p.maze, path, p.start, p.end));
    }

    #[test]
    fn pops_in_forward_direction_order() {
        // From (1,1) north and west are walls; south is tried before east.
        let p = puzzle(OPEN_5X5);
        let order = visits(&drain(Dfs::new(&p.maze, p.start, p.end).unwrap()));
        assert_eq!(
            &order[..4],
            &[Pos::new(1, 1), Pos::new(2, 1), Pos::new(3, 1), Pos::new(3, 2)]
        );
    }

    #[test]
    fn corridor_valid_path() {
        let p = puzzle(CORRIDOR);
        let events = drain(Dfs::new(&p.maze, p.start, p.end).unwrap());
        let path = solution(&events).unwrap();
        assert!(path_is_valid(&p.maze, path, p.start, p.end));
        assert!(path.len() >= shortest_len(&p.maze, p.start, p.end).unwrap());
    }

    #[test]
    fn sealed_pocket_has_no_solution() {
        let p = puzzle(POCKET);
        let events = drain(Dfs::new(&p.maze, p.start, p.end).unwrap());
        assert_single_terminal(&events);
        assert_eq!(events.last(), Some(&Event::NoSolution));
        // Every open cell of the start's component is expanded once.
        assert_eq!(visits(&events).len(), p.maze.open_count() - 1);
    }

    #[test]
    fn deterministic() {
        let p = puzzle(CORRIDOR);
        let a = drain(Dfs::new(&p.maze, p.start, p.end).unwrap());
        let b = drain(Dfs::new(&p.maze, p.start, p.end).unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn no_work_before_first_pull() {
        let p = puzzle(CORRIDOR);
        let mut dfs = Dfs::new(&p.maze, p.start, p.end).unwrap();
        assert_eq!(dfs.expanded(), 0);
        assert_eq!(
            dfs.step(),
            Some(Event::Visit {
                pos: p.start,
                path: vec![p.start],
            })
        );
        assert_eq!(dfs.expanded(), 1);
    }
}

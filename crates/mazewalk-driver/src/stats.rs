//! Summary numbers for a maze and for a finished solve.

use std::fmt;
use std::time::Duration;

use mazewalk_core::Maze;

use crate::algorithm::Algorithm;
use crate::trace::{Outcome, Trace};

/// Shape and occupancy of a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeStats {
    pub rows: i32,
    pub cols: i32,
    pub total_cells: usize,
    pub wall_count: usize,
    pub open_count: usize,
}

impl MazeStats {
    pub fn new(maze: &Maze) -> Self {
        let open_count = maze.open_count();
        Self {
            rows: maze.rows(),
            cols: maze.cols(),
            total_cells: maze.len(),
            wall_count: maze.len() - open_count,
            open_count,
        }
    }

    /// Fraction of cells that are walls.
    pub fn wall_ratio(&self) -> f64 {
        ratio(self.wall_count, self.total_cells)
    }

    /// Fraction of cells that are open.
    pub fn open_ratio(&self) -> f64 {
        ratio(self.open_count, self.total_cells)
    }
}

impl fmt::Display for MazeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} maze, {} cells ({:.1}% wall, {:.1}% open)",
            self.rows,
            self.cols,
            self.total_cells,
            self.wall_ratio() * 100.0,
            self.open_ratio() * 100.0
        )
    }
}

/// Performance figures of one solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceStats {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    /// Distinct cells reported by `Visit` events.
    pub nodes_visited: usize,
    /// Cells on the solution path, endpoints included; 0 if unsolved.
    pub path_len: usize,
    /// Cells in the maze.
    pub total_cells: usize,
    /// Events pulled from the stream.
    pub events: usize,
    /// Wall-clock time of the playback, pacing included.
    pub elapsed: Duration,
}

impl TraceStats {
    pub fn new(algorithm: Algorithm, maze: &Maze, trace: &Trace, elapsed: Duration) -> Self {
        Self {
            algorithm,
            outcome: trace.outcome(),
            nodes_visited: trace.visited_count(),
            path_len: trace.path().len(),
            total_cells: maze.len(),
            events: trace.events(),
            elapsed,
        }
    }

    /// Moves along the solution path.
    pub fn steps(&self) -> usize {
        self.path_len.saturating_sub(1)
    }

    /// Visited cells as a fraction of all cells.
    pub fn efficiency(&self) -> f64 {
        ratio(self.nodes_visited, self.total_cells)
    }
}

impl fmt::Display for TraceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self.outcome {
            Outcome::Solved => "solved",
            Outcome::Unsolved => "no solution",
            Outcome::Pending => "unfinished",
        };
        write!(
            f,
            "{:<10} {:<11} {:>4} steps  {:>4} visited ({:>5.1}%)  {}",
            self.algorithm.name(),
            outcome,
            self.steps(),
            self.nodes_visited,
            self.efficiency() * 100.0,
            format_duration(self.elapsed)
        )
    }
}

fn ratio(n: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        n as f64 / total as f64
    }
}

/// `850ms`, `1.25s`.
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_secs(1) {
        format!("{}ms", d.as_millis())
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::{Event, Pos, Puzzle};

    #[test]
    fn maze_stats() {
        let p = Puzzle::parse("#S.#\n#.E#").unwrap();
        let s = MazeStats::new(&p.maze);
        assert_eq!(s.total_cells, 8);
        assert_eq!(s.wall_count, 4);
        assert_eq!(s.open_count, 4);
        assert!((s.wall_ratio() - 0.5).abs() < 1e-9);
        assert_eq!(s.to_string(), "2x4 maze, 8 cells (50.0% wall, 50.0% open)");
    }

    #[test]
    fn trace_stats() {
        let p = Puzzle::parse("#S.E#").unwrap();
        let path = vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)];
        let mut t = Trace::new();
        for (i, &pos) in path.iter().enumerate() {
            t.apply(&Event::Visit {
                pos,
                path: path[..=i].to_vec(),
            });
        }
        t.apply(&Event::Solution { path: path.clone() });
        let s = TraceStats::new(Algorithm::Bfs, &p.maze, &t, Duration::from_millis(12));
        assert_eq!(s.outcome, Outcome::Solved);
        assert_eq!(s.nodes_visited, 3);
        assert_eq!(s.path_len, 3);
        assert_eq!(s.steps(), 2);
        assert_eq!(s.events, 4);
        assert!((s.efficiency() - 0.6).abs() < 1e-9);
        assert!(s.to_string().contains("12ms"));
    }

    #[test]
    fn durations() {
        assert_eq!(format_duration(Duration::from_millis(850)), "850ms");
        assert_eq!(format_duration(Duration::from_millis(1250)), "1.25s");
    }
}

//! Progress events emitted by solvers.

use crate::geom::Pos;
use crate::maze::Maze;

/// An ordered route of positions, start to goal inclusive.
pub type Path = Vec<Pos>;

/// One item of a solver's event stream.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum Event {
    /// `pos` was just expanded; `path` runs from the start to `pos` along the
    /// route currently believed best.
    Visit { pos: Pos, path: Path },
    /// Terminal: a route from start to end.
    Solution { path: Path },
    /// Terminal: the end cannot be reached.
    NoSolution,
    /// Informational message from a learning solver.
    TrainingProgress { message: String },
}

impl Event {
    /// Whether this event ends the stream.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Solution { .. } | Self::NoSolution)
    }

    /// The path carried by a `Visit` or `Solution`.
    pub fn path(&self) -> Option<&[Pos]> {
        match self {
            Self::Visit { path, .. } | Self::Solution { path } => Some(path),
            _ => None,
        }
    }
}

/// Check that `path` is a walkable route from `start` to `end` in `maze`.
///
/// Every position must be open and every consecutive pair exactly one
/// 4-connected step apart.
pub fn path_is_valid(maze: &Maze, path: &[Pos], start: Pos, end: Pos) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };
    first == start
        && last == end
        && path.iter().all(|&p| maze.is_open(p))
        && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Puzzle;

    #[test]
    fn terminal_events() {
        assert!(Event::NoSolution.is_terminal());
        assert!(Event::Solution { path: vec![] }.is_terminal());
        assert!(
            !Event::Visit {
                pos: Pos::ZERO,
                path: vec![Pos::ZERO]
            }
            .is_terminal()
        );
        assert!(
            !Event::TrainingProgress {
                message: "x".into()
            }
            .is_terminal()
        );
    }

    #[test]
    fn path_accessor() {
        let e = Event::Solution {
            path: vec![Pos::new(0, 0), Pos::new(0, 1)],
        };
        assert_eq!(e.path().map(<[Pos]>::len), Some(2));
        assert_eq!(Event::NoSolution.path(), None);
    }

    #[test]
    fn path_validation() {
        let p = Puzzle::parse("S.#\n#.E").unwrap();
        let good = [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 1), Pos::new(1, 2)];
        assert!(path_is_valid(&p.maze, &good, p.start, p.end));

        let jump = [Pos::new(0, 0), Pos::new(1, 1), Pos::new(1, 2)];
        assert!(!path_is_valid(&p.maze, &jump, p.start, p.end));

        let through_wall = [Pos::new(0, 0), Pos::new(1, 0)];
        assert!(!path_is_valid(&p.maze, &through_wall, p.start, Pos::new(1, 0)));

        assert!(!path_is_valid(&p.maze, &[], p.start, p.end));
        assert!(!path_is_valid(&p.maze, &good[..2], p.start, p.end));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn event_is_tagged() {
        let e = Event::Visit {
            pos: Pos::new(1, 2),
            path: vec![Pos::new(1, 2)],
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["type"], "visit");
        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, e);

        let json = serde_json::to_value(Event::NoSolution).unwrap();
        assert_eq!(json["type"], "no-solution");
    }
}

use std::collections::HashSet;

use mazewalk_core::{Maze, Pos, Tile};

use crate::trace::Trace;

/// Draw `maze` with the state of `trace` overlaid.
///
/// `#` wall, `S`/`E` endpoints, `*` solution path, `.` visited, space for
/// untouched open cells. Rows are separated by `\n`.
pub fn render(maze: &Maze, trace: &Trace, start: Pos, end: Pos) -> String {
    let on_path: HashSet<Pos> = trace.path().iter().copied().collect();
    let mut out = String::with_capacity(maze.len() + maze.rows() as usize);
    for r in 0..maze.rows() {
        if r > 0 {
            out.push('\n');
        }
        for c in 0..maze.cols() {
            let p = Pos::new(r, c);
            let ch = if p == start {
                'S'
            } else if p == end {
                'E'
            } else if maze.tile(p) == Some(Tile::Wall) {
                '#'
            } else if on_path.contains(&p) {
                '*'
            } else if trace.is_visited(p) {
                '.'
            } else {
                ' '
            };
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazewalk_core::{Event, Puzzle};

    #[test]
    fn overlays_path_and_visits() {
        let p = Puzzle::parse("#####\n#S.E#\n#...#\n#####").unwrap();
        let mut t = Trace::new();
        let route = vec![Pos::new(1, 1), Pos::new(1, 2), Pos::new(1, 3)];
        t.apply(&Event::Visit {
            pos: Pos::new(2, 1),
            path: vec![Pos::new(1, 1), Pos::new(2, 1)],
        });
        t.apply(&Event::Solution { path: route });
        assert_eq!(
            render(&p.maze, &t, p.start, p.end),
            "#####\n#S*E#\n#.  #\n#####"
        );
    }
}

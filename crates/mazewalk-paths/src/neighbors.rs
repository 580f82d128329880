use mazewalk_core::{DIRECTIONS, Maze, Pos};

/// Open, in-bounds 4-connected neighbours of `p`, in [`DIRECTIONS`] order.
///
/// The iterator is double-ended so depth-first search can walk it in
/// reverse.
pub fn open_neighbors(maze: &Maze, p: Pos) -> impl DoubleEndedIterator<Item = Pos> + '_ {
    DIRECTIONS
        .into_iter()
        .map(move |d| p.step(d))
        .filter(|&n| maze.is_open(n))
}

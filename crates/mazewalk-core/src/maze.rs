//! The read-only occupancy grid every solver works on.
//!
//! A [`Maze`] is a rectangular, non-empty matrix of [`Tile`]s. It can be
//! built from nested rows, from the `0 = open / 1 = wall` integer encoding
//! that maze services hand out, or parsed from ASCII art via
//! [`Puzzle::parse`].

use std::fmt;

use crate::geom::Pos;

/// Occupancy of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Open,
    Wall,
}

impl Tile {
    /// Whether the tile can be walked on.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Which endpoint of a solve a position was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// A rectangular grid of [`Tile`]s stored in row-major order.
///
/// With the `serde` feature a maze travels as nested rows and is rebuilt
/// through [`Maze::new`] on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")
)]
pub struct Maze {
    tiles: Vec<Tile>,
    rows: i32,
    cols: i32,
}

impl Maze {
    /// Build a maze from rows of tiles.
    ///
    /// Fails if there are no rows, the first row is empty, or any row has a
    /// different length from the first.
    pub fn new(rows: Vec<Vec<Tile>>) -> Result<Self, MazeError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(MazeError::Empty);
        }
        let mut tiles = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(MazeError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            tiles.extend_from_slice(row);
        }
        Ok(Self {
            tiles,
            rows: rows.len() as i32,
            cols: cols as i32,
        })
    }

    /// Build a maze from the integer encoding: `0` is open, anything else a
    /// wall.
    pub fn from_occupancy(cells: &[Vec<u8>]) -> Result<Self, MazeError> {
        let rows = cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&c| if c == 0 { Tile::Open } else { Tile::Wall })
                    .collect()
            })
            .collect();
        Self::new(rows)
    }

    /// The grid as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.tiles
            .chunks(self.cols as usize)
            .map(<[Tile]>::to_vec)
            .collect()
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row >= 0 && p.row < self.rows && p.col >= 0 && p.col < self.cols
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row * self.cols + p.col) as usize)
    }

    /// Position of flat index `idx`.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn tile(&self, p: Pos) -> Option<Tile> {
        self.index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and open.
    #[inline]
    pub fn is_open(&self, p: Pos) -> bool {
        self.tile(p).is_some_and(Tile::is_open)
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_open()).count()
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.tiles.len() - self.open_count()
    }

    /// Iterate over `(Pos, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &t)| (self.pos(i), t))
    }

    /// Check that `p` is usable as the given endpoint of a solve.
    pub fn check_endpoint(&self, what: Endpoint, p: Pos) -> Result<(), MazeError> {
        match self.tile(p) {
            None => Err(MazeError::OutOfBounds { what, pos: p }),
            Some(Tile::Wall) => Err(MazeError::Blocked { what, pos: p }),
            Some(Tile::Open) => Ok(()),
        }
    }

    /// Check both endpoints of a solve.
    pub fn check_endpoints(&self, start: Pos, end: Pos) -> Result<(), MazeError> {
        self.check_endpoint(Endpoint::Start, start)?;
        self.check_endpoint(Endpoint::End, end)
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Maze {
    type Error = MazeError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<Maze> for Vec<Vec<Tile>> {
    fn from(maze: Maze) -> Self {
        maze.to_rows()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            for c in 0..self.cols {
                let ch = match self.tile(Pos::new(r, c)) {
                    Some(Tile::Wall) => '#',
                    _ => '.',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Puzzle
// ---------------------------------------------------------------------------

/// A maze together with the start and end cells of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPuzzle"))]
pub struct Puzzle {
    pub maze: Maze,
    pub start: Pos,
    pub end: Pos,
}

impl Puzzle {
    /// Bundle a maze with validated endpoints.
    pub fn new(maze: Maze, start: Pos, end: Pos) -> Result<Self, MazeError> {
        maze.check_endpoints(start, end)?;
        Ok(Self { maze, start, end })
    }

    /// Parse an ASCII maze.
    ///
    /// `#` is a wall, `.` or a space is open, `S` marks the start and `E` the
    /// end (both open). Surrounding blank lines are ignored; every remaining
    /// line must have the same width.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim_matches('\n');
        let mut rows = Vec::new();
        let mut start = None;
        let mut end = None;

        for (r, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let pos = Pos::new(r as i32, c as i32);
                let tile = match ch {
                    '#' => Tile::Wall,
                    '.' | ' ' => Tile::Open,
                    'S' => {
                        if start.replace(pos).is_some() {
                            return Err(MazeError::DuplicateMarker(Endpoint::Start));
                        }
                        Tile::Open
                    }
                    'E' => {
                        if end.replace(pos).is_some() {
                            return Err(MazeError::DuplicateMarker(Endpoint::End));
                        }
                        Tile::Open
                    }
                    _ => return Err(MazeError::InvalidChar { ch, pos }),
                };
                row.push(tile);
            }
            rows.push(row);
        }

        let maze = Maze::new(rows)?;
        let start = start.ok_or(MazeError::MissingMarker(Endpoint::Start))?;
        let end = end.ok_or(MazeError::MissingMarker(Endpoint::End))?;
        Ok(Self { maze, start, end })
    }
}

/// Unchecked wire form of a [`Puzzle`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPuzzle {
    maze: Maze,
    start: Pos,
    end: Pos,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPuzzle> for Puzzle {
    type Error = MazeError;

    fn try_from(raw: RawPuzzle) -> Result<Self, Self::Error> {
        Self::new(raw.maze, raw.start, raw.end)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised while building a maze or validating solve endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The grid has no rows or no columns.
    Empty,
    /// A row's length differs from the first row's.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An endpoint lies outside the grid.
    OutOfBounds { what: Endpoint, pos: Pos },
    /// An endpoint lies on a wall.
    Blocked { what: Endpoint, pos: Pos },
    /// An ASCII maze contains a character with no tile meaning.
    InvalidChar { ch: char, pos: Pos },
    /// An ASCII maze has no marker for an endpoint.
    MissingMarker(Endpoint),
    /// An ASCII maze marks an endpoint more than once.
    DuplicateMarker(Endpoint),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze: grid is empty"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
            Self::OutOfBounds { what, pos } => {
                write!(f, "maze: {what} position {pos} is out of bounds")
            }
            Self::Blocked { what, pos } => write!(f, "maze: {what} position {pos} is a wall"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "maze: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::MissingMarker(what) => write!(f, "maze: no {what} marker"),
            Self::DuplicateMarker(what) => write!(f, "maze: more than one {what} marker"),
        }
    }
}

impl std::error::Error for MazeError {}

//! The maze [`Grid`]: a 2D array of [`Tile`]s.
//!
//! A `Grid` owns its tiles. Cloning copies them, so a grid handed out to a
//! renderer keeps showing the same maze no matter what happens to the grid
//! it was cloned from.
//!
//! The text form is one line per row, `1` for a wall and `0` for an open
//! tile:
//!
//! ```
//! use mazerace_core::{Grid, Point, Tile};
//!
//! let g: Grid = "111\n101\n111".parse().unwrap();
//! assert_eq!(g.at(Point::new(1, 1)), Some(Tile::Open));
//! assert_eq!(g.to_string(), "111\n101\n111");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::geom::{Point, Range};

/// A single maze tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Wall,
    Open,
}

impl Tile {
    /// The tile's character in the text form.
    pub const fn as_char(self) -> char {
        match self {
            Tile::Wall => '1',
            Tile::Open => '0',
        }
    }

    /// Parse a text-form character.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Tile::Wall),
            '0' => Some(Tile::Open),
            _ => None,
        }
    }
}

/// A `height × width` grid of tiles stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    tiles: Vec<Tile>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a new grid filled with `fill`.
    pub fn new(width: i32, height: i32, fill: Tile) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            tiles: vec![fill; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The range covering every tile.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::of_size(self.height, self.width)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The tile at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        self.bounds().index(p).map(|i| self.tiles[i])
    }

    /// Whether `p` is in bounds and open. Out-of-bounds counts as wall.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p) == Some(Tile::Open)
    }

    /// Set the tile at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, tile: Tile) {
        if let Some(i) = self.bounds().index(p) {
            self.tiles[i] = tile;
        }
    }

    /// Count the tiles equal to `tile`.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Number of open tiles.
    pub fn open_count(&self) -> usize {
        self.count(Tile::Open)
    }

    /// The 4-adjacent open neighbours of `p`, in Up, Down, Left, Right order.
    ///
    /// Out-of-bounds and wall neighbours are skipped; an out-of-bounds `p`
    /// has no neighbours.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        if !self.contains(p) {
            return Vec::new();
        }
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.is_open(n))
            .collect()
    }

    /// Iterate over `(Point, Tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Tile)> + '_ {
        self.bounds().iter().zip(self.tiles.iter().copied())
    }

    /// Iterate over the open points in row-major order.
    pub fn open_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter()
            .filter(|&(_, t)| t == Tile::Open)
            .map(|(p, _)| p)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tiles.chunks(self.width.max(1) as usize).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for t in row {
                write!(f, "{}", t.as_char())?;
            }
        }
        Ok(())
    }
}

/// Errors from parsing a grid's text form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("grid: no rows")]
    Empty,
    #[error("grid: row {row} has width {found}, expected {expected}")]
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid: invalid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Point },
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parse the `0`/`1` text form. Surrounding whitespace is trimmed, as
    /// is trailing whitespace on each line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim_end).collect();
        let width = match lines.first() {
            Some(first) if !first.is_empty() => first.chars().count(),
            _ => return Err(GridParseError::Empty),
        };

        let mut tiles = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridParseError::InconsistentWidth {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(GridParseError::InvalidChar {
                    ch,
                    pos: Point::new(row as i32, col as i32),
                })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            width: width as i32,
            height: lines.len() as i32,
        })
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g: Grid = "111\n101\n111".parse().unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
    }
}

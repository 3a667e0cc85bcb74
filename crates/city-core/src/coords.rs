//! Integer grid coordinates and cardinal directions.
//!
//! Coordinates are signed so that neighbours of edge cells can be expressed
//! (and then rejected by the grid) without wrapping.  `x` runs east, `z`
//! runs south, matching the row-major `index = z * width + x` layout.

use std::fmt;

/// A cell coordinate.  May lie outside any particular grid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub z: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The neighbouring cell one step in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Cell {
        let (dx, dz) = dir.delta();
        Cell::new(self.x + dx, self.z + dz)
    }

    /// The four edge-sharing neighbours in `Direction::ALL` order.
    #[inline]
    pub fn neighbors4(self) -> [Cell; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Chebyshev (king-move) distance.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x).max(self.z.abs_diff(other.z))
    }

    /// Offset by an arbitrary delta.
    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Cell {
        Cell::new(self.x + dx, self.z + dz)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// One of the four axis-aligned headings.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// +x
    East,
    /// -x
    West,
    /// +z
    South,
    /// -z
    North,
}

impl Direction {
    /// Neighbour evaluation order used by traffic turn decisions.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::South,
        Direction::North,
    ];

    /// Unit step `(dx, dz)`.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East  => (1, 0),
            Direction::West  => (-1, 0),
            Direction::South => (0, 1),
            Direction::North => (0, -1),
        }
    }

    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::East  => Direction::West,
            Direction::West  => Direction::East,
            Direction::South => Direction::North,
            Direction::North => Direction::South,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::East  => "east",
            Direction::West  => "west",
            Direction::South => "south",
            Direction::North => "north",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

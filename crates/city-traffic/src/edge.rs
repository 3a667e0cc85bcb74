//! Grid borders vehicles spawn from.

use city_core::{Cell, Direction};
use city_grid::Grid;
use rand::Rng;

/// One side of the grid.  New vehicles face inward.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Edge {
    /// z = 0
    Top,
    /// z = height - 1
    Bottom,
    /// x = 0
    Left,
    /// x = width - 1
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub fn random<R: Rng>(rng: &mut R) -> Edge {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Heading of a vehicle entering from this edge.
    #[inline]
    pub fn inward(self) -> Direction {
        match self {
            Edge::Top    => Direction::South,
            Edge::Bottom => Direction::North,
            Edge::Left   => Direction::East,
            Edge::Right  => Direction::West,
        }
    }

    /// Number of cells along this edge.
    #[inline]
    pub fn span(self, grid: &Grid) -> usize {
        match self {
            Edge::Top | Edge::Bottom => grid.width(),
            Edge::Left | Edge::Right => grid.height(),
        }
    }

    /// The cell `offset` steps along this edge.
    pub fn cell(self, grid: &Grid, offset: i32) -> Cell {
        let last_x = grid.width() as i32 - 1;
        let last_z = grid.height() as i32 - 1;
        match self {
            Edge::Top    => Cell::new(offset, 0),
            Edge::Bottom => Cell::new(offset, last_z),
            Edge::Left   => Cell::new(0, offset),
            Edge::Right  => Cell::new(last_x, offset),
        }
    }
}

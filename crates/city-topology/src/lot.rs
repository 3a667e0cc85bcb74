//! Greedy lot subdivision along road frontage.

use city_core::Cell;
use city_grid::Grid;
use rustc_hash::FxHashSet;

use crate::Block;

/// A rectangular parcel inside one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lot {
    /// Covered cells; the first is the seed next to the road.
    pub cells:         Vec<Cell>,
    pub width:         u8,
    pub depth:         u8,
    /// Cells between the lot and its fronting road.  Always 0: every lot
    /// is seeded on a road-adjacent cell.
    pub road_distance: u32,
}

impl Lot {
    #[inline]
    pub fn origin(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }
}

/// Offsets of a 2×2 lot from its seed.
const SQUARE: [(i32, i32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Carve `block` into lots.
///
/// Walks the block's cells in order; each unconsumed cell with a road
/// 4-neighbour seeds a lot.  The lot is 2×2 toward +x/+z when all four
/// cells belong to the block and are unconsumed, otherwise 1×1.  Interior
/// cells never seed a lot.
pub fn generate_lots(grid: &Grid, block: &Block) -> Vec<Lot> {
    let members: FxHashSet<Cell> = block.cells.iter().copied().collect();
    let mut consumed: FxHashSet<Cell> = FxHashSet::default();
    let mut lots = Vec::new();

    for &cell in &block.cells {
        if consumed.contains(&cell) || !grid.touches_road(cell.x, cell.z) {
            continue;
        }

        let square = SQUARE.map(|(dx, dz)| cell.offset(dx, dz));
        let fits = square.iter().all(|c| members.contains(c) && !consumed.contains(c));

        let lot = if fits {
            consumed.extend(square);
            Lot { cells: square.to_vec(), width: 2, depth: 2, road_distance: 0 }
        } else {
            consumed.insert(cell);
            Lot { cells: vec![cell], width: 1, depth: 1, road_distance: 0 }
        };
        lots.push(lot);
    }
    lots
}

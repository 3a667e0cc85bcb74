//! Placement and amenity rules, independent of timing.

use city_core::Cell;
use city_grid::{CellType, Footprint, Grid};
use rand::Rng;

/// Footprint sizes a spawned building can take, as `(width, depth)`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FootprintSize {
    /// 1×1, 50 %
    Single,
    /// 1×2 (deep along z), 20 %
    Deep,
    /// 2×1 (wide along x), 20 %
    Wide,
    /// 2×2, 10 %
    Square,
}

impl FootprintSize {
    /// Draw from the fixed 50/20/20/10 distribution.
    pub fn sample<R: Rng>(rng: &mut R) -> FootprintSize {
        Self::from_roll(rng.r#gen::<f64>())
    }

    /// Map a uniform roll in `[0, 1)` onto the distribution.
    pub fn from_roll(roll: f64) -> FootprintSize {
        if roll < 0.5 {
            FootprintSize::Single
        } else if roll < 0.7 {
            FootprintSize::Deep
        } else if roll < 0.9 {
            FootprintSize::Wide
        } else {
            FootprintSize::Square
        }
    }

    #[inline]
    pub fn dims(self) -> (u8, u8) {
        match self {
            FootprintSize::Single => (1, 1),
            FootprintSize::Deep   => (1, 2),
            FootprintSize::Wide   => (2, 1),
            FootprintSize::Square => (2, 2),
        }
    }

    pub fn at(self, origin: Cell) -> Footprint {
        let (w, d) = self.dims();
        Footprint::new(origin, w, d)
    }
}

/// A footprint is buildable iff it lies inside the grid, every cell is
/// `Empty`, and at least one cell has a road among its 4-neighbours.
pub fn can_build(grid: &Grid, footprint: Footprint) -> bool {
    if !grid.footprint_fits(footprint) {
        return false;
    }
    let mut touches_road = false;
    for cell in footprint.cells() {
        if grid.get_cell(cell) != Some(CellType::Empty) {
            return false;
        }
        touches_road = touches_road || grid.touches_road(cell.x, cell.z);
    }
    touches_road
}

/// `true` if the square of Chebyshev `radius` around `center` (clipped to
/// the grid) contains at least one park cell and at least one school cell.
pub fn is_amenity_served(grid: &Grid, center: Cell, radius: u32) -> bool {
    let r = radius.min(i32::MAX as u32) as i32;
    let x_min = center.x.saturating_sub(r).max(0);
    let z_min = center.z.saturating_sub(r).max(0);
    let x_max = center.x.saturating_add(r).min(grid.width() as i32 - 1);
    let z_max = center.z.saturating_add(r).min(grid.height() as i32 - 1);

    let mut has_park = false;
    let mut has_school = false;
    for x in x_min..=x_max {
        for z in z_min..=z_max {
            match grid.get(x, z) {
                Some(CellType::Park)   => has_park = true,
                Some(CellType::School) => has_school = true,
                _ => continue,
            }
            if has_park && has_school {
                return true;
            }
        }
    }
    false
}

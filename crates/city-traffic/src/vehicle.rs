//! Per-vehicle movement state.

use city_core::{Cell, Direction, VehicleId};

/// Round half-up, so `x.5` always moves to the next cell along +axis.
#[inline]
pub(crate) fn round_half_up(v: f32) -> i32 {
    (v + 0.5).floor() as i32
}

/// One vehicle on the road network.
///
/// `grid_x`/`grid_z` is the last cell the vehicle was registered in;
/// `exact_x`/`exact_z` is its continuous position in cell units, where
/// integer values are cell centres.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id:      VehicleId,
    pub grid_x:  i32,
    pub grid_z:  i32,
    pub exact_x: f32,
    pub exact_z: f32,
    pub dir:     Direction,
    /// Where the vehicle entered the grid.
    pub spawn:   Cell,
}

impl Vehicle {
    /// A vehicle parked at the centre of `cell`.
    pub fn new(id: VehicleId, cell: Cell, dir: Direction) -> Self {
        Self {
            id,
            grid_x:  cell.x,
            grid_z:  cell.z,
            exact_x: cell.x as f32,
            exact_z: cell.z as f32,
            dir,
            spawn:   cell,
        }
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        Cell::new(self.grid_x, self.grid_z)
    }

    /// The cell the continuous position currently rounds to.
    #[inline]
    pub fn rounded_cell(&self) -> Cell {
        Cell::new(round_half_up(self.exact_x), round_half_up(self.exact_z))
    }

    /// Slide `distance` cells along the current heading.
    #[inline]
    pub fn advance(&mut self, distance: f32) {
        let (dx, dz) = self.dir.delta();
        self.exact_x += dx as f32 * distance;
        self.exact_z += dz as f32 * distance;
    }

    pub fn snap_to(&mut self, cell: Cell) {
        self.exact_x = cell.x as f32;
        self.exact_z = cell.z as f32;
    }

    /// Yaw in radians for renderers, `atan2(dx, dz)`: 0 faces +z.
    pub fn heading_radians(&self) -> f32 {
        let (dx, dz) = self.dir.delta();
        (dx as f32).atan2(dz as f32)
    }

    /// Continuous position shifted `offset` cells to the right of the
    /// heading, for drawing right-hand traffic lanes.
    pub fn lane_position(&self, offset: f32) -> (f32, f32) {
        let (dx, dz) = self.dir.delta();
        (
            self.exact_x - dz as f32 * offset,
            self.exact_z + dx as f32 * offset,
        )
    }
}

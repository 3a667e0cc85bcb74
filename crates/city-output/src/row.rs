//! Plain data row types written by output backends.

use city_core::{Direction, SimDate, SimSpeed};
use city_grid::{CellType, Grid};
use city_sim::FrameReport;
use city_traffic::Vehicle;

/// City-wide statistics at one snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummaryRow {
    pub frame:              u64,
    pub year:               u32,
    pub day:                u32,
    /// Speed multiplier (0 while paused).
    pub speed:              u32,
    pub population:         u64,
    /// Cells of type `Building`.
    pub building_cells:     u64,
    /// Building pivots, i.e. distinct structures.
    pub buildings:          u64,
    pub vehicles:           u64,
    /// Buildings spawned by this frame's growth tick.
    pub spawned:            u32,
    /// Buildings upgraded by this frame's growth tick.
    pub upgraded:           u32,
    pub vehicles_spawned:   u32,
    pub vehicles_despawned: u32,
}

impl FrameSummaryRow {
    pub fn new(report: &FrameReport, grid: &Grid) -> Self {
        let SimDate { year, day } = report.date;
        Self {
            frame:              report.frame,
            year,
            day,
            speed:              report.speed.multiplier(),
            population:         report.population,
            building_cells:     grid.count(CellType::Building) as u64,
            buildings:          grid.pivot_indices(CellType::Building).len() as u64,
            vehicles:           report.vehicles as u64,
            spawned:            report.growth.spawned,
            upgraded:           report.growth.upgraded,
            vehicles_spawned:   report.traffic.spawned,
            vehicles_despawned: report.traffic.despawned,
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.speed == SimSpeed::Paused.multiplier()
    }
}

/// One vehicle's position at a snapshot frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleSnapshotRow {
    pub frame:      u64,
    pub vehicle_id: u32,
    pub grid_x:     i32,
    pub grid_z:     i32,
    pub exact_x:    f32,
    pub exact_z:    f32,
    pub heading:    Direction,
}

impl VehicleSnapshotRow {
    pub fn new(frame: u64, v: &Vehicle) -> Self {
        Self {
            frame,
            vehicle_id: v.id.0,
            grid_x:     v.grid_x,
            grid_z:     v.grid_z,
            exact_x:    v.exact_x,
            exact_z:    v.exact_z,
            heading:    v.dir,
        }
    }
}

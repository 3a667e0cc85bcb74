//! The `TrafficSimulator` and its per-frame update.

use city_core::{Cell, Direction, IntervalTimer, TickContext, TrafficConfig, VehicleId};
use city_grid::Grid;
use rand::Rng;
use tracing::{debug, trace};

use crate::{Edge, Vehicle};

/// What one call to [`TrafficSimulator::tick`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TrafficReport {
    pub spawned:   u32,
    pub despawned: u32,
}

/// Why a vehicle left the pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Exit {
    OffGrid,
    OffRoad,
}

/// Bounded, unordered pool of vehicles plus the edge-spawn timer.
#[derive(Clone, Debug)]
pub struct TrafficSimulator {
    pub config:  TrafficConfig,
    vehicles:    Vec<Vehicle>,
    spawn_timer: IntervalTimer,
    next_id:     VehicleId,
}

impl TrafficSimulator {
    pub fn new(config: TrafficConfig) -> Self {
        let spawn_timer = IntervalTimer::strict(config.spawn_interval_ms);
        Self {
            config,
            vehicles: Vec::new(),
            spawn_timer,
            next_id: VehicleId(0),
        }
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.vehicles.len() >= self.config.max_vehicles
    }

    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    /// Scaled milliseconds accrued toward the next spawn attempt.
    #[inline]
    pub fn spawn_timer_ms(&self) -> f64 {
        self.spawn_timer.accumulated_ms
    }

    /// Remove every vehicle, e.g. after the road network was rebuilt.
    pub fn clear(&mut self) {
        self.vehicles.clear();
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance every vehicle, then run the spawn timer.  Fully inert while
    /// paused.
    pub fn tick<R: Rng>(&mut self, grid: &Grid, ctx: &TickContext, rng: &mut R) -> TrafficReport {
        if ctx.is_paused() {
            return TrafficReport::default();
        }

        let distance = self.config.base_speed
            * (ctx.delta_ms / 1_000.0) as f32
            * ctx.speed.multiplier() as f32;

        let mut report = TrafficReport::default();

        // Reverse order so swap_remove only pulls in already-updated vehicles.
        let mut i = self.vehicles.len();
        while i > 0 {
            i -= 1;
            if let Some(exit) = step_vehicle(&mut self.vehicles[i], grid, distance, rng) {
                let v = self.vehicles.swap_remove(i);
                trace!(id = %v.id, cell = %v.cell(), ?exit, "vehicle despawned");
                report.despawned += 1;
            }
        }

        if self.spawn_timer.advance(ctx.scaled_delta_ms())
            && !self.is_full()
            && self.try_spawn_from_edge(grid, rng).is_some()
        {
            report.spawned += 1;
        }

        if report.spawned > 0 || report.despawned > 0 {
            debug!(
                spawned = report.spawned,
                despawned = report.despawned,
                live = self.vehicles.len(),
                "traffic tick"
            );
        }
        report
    }

    // ── Spawning ──────────────────────────────────────────────────────────

    /// Place a vehicle at the centre of `cell` heading `dir`.
    ///
    /// Returns `None` when the pool is full.  The cell is not checked; use
    /// [`try_spawn_from_edge`](Self::try_spawn_from_edge) for rule-based
    /// placement.
    pub fn spawn_at(&mut self, cell: Cell, dir: Direction) -> Option<VehicleId> {
        if self.is_full() {
            return None;
        }
        let id = self.next_id;
        self.next_id = id.next();
        self.vehicles.push(Vehicle::new(id, cell, dir));
        trace!(%id, %cell, %dir, "vehicle spawned");
        Some(id)
    }

    /// Pick a random edge and try up to `spawn_retries` random offsets along
    /// it; spawn on the first road cell, heading inward.
    pub fn try_spawn_from_edge<R: Rng>(&mut self, grid: &Grid, rng: &mut R) -> Option<VehicleId> {
        if self.is_full() {
            return None;
        }
        let edge = Edge::random(rng);
        let span = edge.span(grid) as i32;

        for _ in 0..self.config.spawn_retries {
            let cell = edge.cell(grid, rng.gen_range(0..span));
            if grid.is_road(cell.x, cell.z) {
                return self.spawn_at(cell, edge.inward());
            }
        }
        trace!(?edge, "no edge road found");
        None
    }
}

impl Default for TrafficSimulator {
    fn default() -> Self {
        TrafficSimulator::new(TrafficConfig::default())
    }
}

/// Move one vehicle and resolve a cell crossing.  `Some` means it must be
/// removed.
fn step_vehicle<R: Rng>(v: &mut Vehicle, grid: &Grid, distance: f32, rng: &mut R) -> Option<Exit> {
    v.advance(distance);

    let cell = v.rounded_cell();
    if cell == v.cell() {
        return None;
    }
    v.grid_x = cell.x;
    v.grid_z = cell.z;

    match grid.get_cell(cell) {
        None => return Some(Exit::OffGrid),
        Some(kind) if !kind.is_road() => return Some(Exit::OffRoad),
        Some(_) => {}
    }

    let behind = v.dir.reverse();
    let mut options = [Direction::East; 4];
    let mut n = 0;
    for dir in Direction::ALL {
        if dir == behind {
            continue;
        }
        let next = cell.step(dir);
        if !grid.contains(next.x, next.z) || grid.is_road(next.x, next.z) {
            options[n] = dir;
            n += 1;
        }
    }

    if n == 0 {
        v.dir = behind;
    } else {
        v.dir = options[rng.gen_range(0..n)];
        v.snap_to(cell);
    }
    None
}

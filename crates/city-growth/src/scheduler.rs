//! The `GrowthScheduler` and its tick.

use city_core::{Cell, GrowthConfig, IntervalTimer, TickContext};
use city_grid::{BuildingSubtype, CellType, Grid, PALETTE, StructureMeta};
use rand::Rng;
use tracing::{debug, trace};

use crate::{FootprintSize, can_build, is_amenity_served};

/// What one call to [`GrowthScheduler::tick`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GrowthReport {
    /// `true` if the interval elapsed and both phases ran.
    pub fired:    bool,
    pub spawned:  u32,
    pub upgraded: u32,
}

impl GrowthReport {
    /// Anything visible changed; the driver should resynchronize visuals
    /// and population.
    #[inline]
    pub fn changed(&self) -> bool {
        self.spawned > 0 || self.upgraded > 0
    }
}

/// Accumulates scaled time and runs the spawn and upgrade phases once per
/// elapsed interval.
#[derive(Clone, Debug)]
pub struct GrowthScheduler {
    pub config: GrowthConfig,
    timer:      IntervalTimer,
}

impl GrowthScheduler {
    pub fn new(config: GrowthConfig) -> Self {
        let timer = IntervalTimer::new(config.interval_ms);
        Self { config, timer }
    }

    /// Scaled milliseconds accrued toward the next growth tick.
    #[inline]
    pub fn accumulated_ms(&self) -> f64 {
        self.timer.accumulated_ms
    }

    /// Advance by one frame.  Fully inert while paused.
    pub fn tick<R: Rng>(&mut self, grid: &mut Grid, ctx: &TickContext, rng: &mut R) -> GrowthReport {
        if ctx.is_paused() || !self.timer.advance(ctx.scaled_delta_ms()) {
            return GrowthReport::default();
        }

        let spawned = self.spawn_phase(grid, rng);
        let upgraded = self.upgrade_phase(grid, rng);
        debug!(date = %ctx.date, spawned, upgraded, "growth tick");

        GrowthReport { fired: true, spawned, upgraded }
    }

    /// Run `spawn_attempts` placement attempts.  Returns how many succeeded.
    pub fn spawn_phase<R: Rng>(&self, grid: &mut Grid, rng: &mut R) -> u32 {
        let mut spawned = 0;
        for _ in 0..self.config.spawn_attempts {
            let origin = Cell::new(
                rng.gen_range(0..grid.width() as i32),
                rng.gen_range(0..grid.height() as i32),
            );
            let footprint = FootprintSize::sample(rng).at(origin);

            if !can_build(grid, footprint) {
                trace!(%origin, w = footprint.width, d = footprint.depth, "spawn attempt rejected");
                continue;
            }

            let subtype = if rng.gen_bool(0.5) {
                BuildingSubtype::Commercial
            } else {
                BuildingSubtype::Residential
            };
            let color = PALETTE[rng.gen_range(0..PALETTE.len())];
            let meta = StructureMeta::building(footprint, self.config.initial_height, color, subtype);

            if grid.place_structure(CellType::Building, meta) {
                spawned += 1;
            }
        }
        spawned
    }

    /// Roll every building pivot for an upgrade.  Returns how many grew.
    pub fn upgrade_phase<R: Rng>(&self, grid: &mut Grid, rng: &mut R) -> u32 {
        let cfg = &self.config;
        let mut upgraded = 0;

        for index in grid.pivot_indices(CellType::Building) {
            if !rng.gen_bool(cfg.upgrade_chance.clamp(0.0, 1.0)) {
                continue;
            }
            let Some(pivot) = grid.coords_of(index) else { continue };
            let served = is_amenity_served(grid, pivot, cfg.amenity_radius);

            let Some(meta) = grid.meta_at_mut(index) else { continue };
            meta.max_potential.get_or_insert_with(|| 10.0 + rng.r#gen::<f32>() * 10.0);

            let cap = if served {
                cfg.served_cap
            } else {
                *meta.low_tier_limit.get_or_insert_with(|| roll_low_tier(cfg, rng))
            };

            if meta.height < cap {
                meta.height += cfg.growth_step;
                upgraded += 1;
                trace!(%pivot, height = meta.height, cap, served, "building upgraded");
            }
        }
        upgraded
    }
}

/// Integer cap drawn uniformly from `[low_tier_min, low_tier_max)`.
fn roll_low_tier<R: Rng>(cfg: &GrowthConfig, rng: &mut R) -> f32 {
    if cfg.low_tier_min >= cfg.low_tier_max {
        return cfg.low_tier_min as f32;
    }
    rng.gen_range(cfg.low_tier_min..cfg.low_tier_max) as f32
}

impl Default for GrowthScheduler {
    fn default() -> Self {
        GrowthScheduler::new(GrowthConfig::default())
    }
}

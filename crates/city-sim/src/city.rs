//! The `City` struct and its frame loop.

use city_core::{Cell, CityConfig, SimClock, SimDate, SimRng, SimSpeed, TickContext};
use city_grid::{EditIntent, Grid, apply_edit};
use city_growth::{GrowthReport, GrowthScheduler};
use city_topology::TopologyUpdater;
use city_traffic::{TrafficReport, TrafficSimulator};
use tracing::{debug, info};

use crate::{CityObserver, SimResult};

/// Child-RNG offsets, one per subsystem.
const GROWTH_STREAM:  u64 = 1;
const TRAFFIC_STREAM: u64 = 2;

// ── FrameReport ───────────────────────────────────────────────────────────────

/// Everything one call to [`City::frame`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Zero-based frame counter.
    pub frame:      u64,
    pub delta_ms:   f64,
    pub speed:      SimSpeed,
    /// Date after the clock advanced.
    pub date:       SimDate,
    /// Days that rolled over during this frame.
    pub days:       u32,
    pub growth:     GrowthReport,
    pub traffic:    TrafficReport,
    pub population: u64,
    /// Live vehicles at the end of the frame.
    pub vehicles:   usize,
}

// ── City ──────────────────────────────────────────────────────────────────────

/// The simulation state engine.
///
/// Owns the grid (the single source of truth for layout), both schedulers,
/// the topology hook and the calendar.  Renderers read through the public
/// fields; all mutation goes through [`frame`](Self::frame) and
/// [`apply_edit`](Self::apply_edit).
///
/// Create via [`CityBuilder`][crate::CityBuilder].
pub struct City {
    pub config:   CityConfig,
    pub grid:     Grid,
    pub growth:   GrowthScheduler,
    pub traffic:  TrafficSimulator,
    pub topology: TopologyUpdater,
    pub clock:    SimClock,

    speed:             SimSpeed,
    growth_rng:        SimRng,
    traffic_rng:       SimRng,
    population:        u64,
    frame:             u64,
    snapshot_interval: u64,
}

impl City {
    pub(crate) fn from_parts(
        config:            CityConfig,
        grid:              Grid,
        mut rng:           SimRng,
        speed:             SimSpeed,
        snapshot_interval: u64,
    ) -> Self {
        let population = grid.population();
        Self {
            growth:      GrowthScheduler::new(config.growth.clone()),
            traffic:     TrafficSimulator::new(config.traffic.clone()),
            topology:    TopologyUpdater::new(config.topology.clone()),
            clock:       SimClock::new(config.day_length_ms),
            growth_rng:  rng.child(GROWTH_STREAM),
            traffic_rng: rng.child(TRAFFIC_STREAM),
            config,
            grid,
            speed,
            population,
            frame: 0,
            snapshot_interval,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn speed(&self) -> SimSpeed {
        self.speed
    }

    pub fn set_speed(&mut self, speed: SimSpeed) {
        if speed != self.speed {
            debug!(from = %self.speed, to = %speed, "speed changed");
            self.speed = speed;
        }
    }

    /// Set the speed from a raw multiplier in {0, 1, 2, 4, 10}.
    pub fn set_multiplier(&mut self, multiplier: u32) -> SimResult<()> {
        self.set_speed(SimSpeed::try_from(multiplier)?);
        Ok(())
    }

    #[inline]
    pub fn date(&self) -> SimDate {
        self.clock.date
    }

    /// Population as of the last growth change or edit.
    #[inline]
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Frames processed so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// The context the next frame would run with.
    pub fn tick_context(&self, delta_ms: f64) -> TickContext {
        TickContext {
            delta_ms,
            speed:      self.speed,
            date:       self.clock.date,
            population: self.population,
        }
    }

    // ── Edits ─────────────────────────────────────────────────────────────

    /// Apply one user edit.  Topology and population are refreshed only
    /// when the grid actually changed.
    pub fn apply_edit(&mut self, intent: &EditIntent) -> bool {
        self.apply_edits(std::slice::from_ref(intent))
    }

    /// Apply a batch of edits, notifying the topology hook once at the end.
    pub fn apply_edits(&mut self, intents: &[EditIntent]) -> bool {
        let mut changed = false;
        for intent in intents {
            changed |= apply_edit(&mut self.grid, intent);
        }
        if changed {
            self.topology.on_topology_changed(&self.grid);
            self.population = self.grid.population();
        }
        changed
    }

    /// Parse `tool` (e.g. `"road_major"`, `"park:2:2"`) and apply it over
    /// the rectangle `start..=end`.
    pub fn edit(&mut self, tool: &str, start: Cell, end: Cell) -> SimResult<bool> {
        let intent = EditIntent::parse(tool, start, end)?;
        Ok(self.apply_edit(&intent))
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance the city by one rendered frame of `delta_ms` real time.
    pub fn frame<O: CityObserver>(&mut self, delta_ms: f64, observer: &mut O) -> FrameReport {
        let frame = self.frame;
        observer.on_frame_start(frame, &self.tick_context(delta_ms));

        // ── ① Calendar ────────────────────────────────────────────────────
        let year_before = self.clock.date.year;
        let days = self.clock.advance(delta_ms, self.speed);
        if days > 0 {
            let date = self.clock.date;
            if date.year != year_before {
                info!(year = date.year, population = self.population, "new year");
            }
            observer.on_day(date, days);
        }

        // ── ② Context ─────────────────────────────────────────────────────
        let ctx = self.tick_context(delta_ms);

        // ── ③ Growth ──────────────────────────────────────────────────────
        let growth = self.growth.tick(&mut self.grid, &ctx, &mut self.growth_rng);
        if growth.changed() {
            self.population = self.grid.population();
            observer.on_growth(ctx.date, &growth, self.population);
        }

        // ── ④ Traffic ─────────────────────────────────────────────────────
        let traffic = self.traffic.tick(&self.grid, &ctx, &mut self.traffic_rng);

        // ── ⑤ Observers ───────────────────────────────────────────────────
        let report = FrameReport {
            frame,
            delta_ms,
            speed: self.speed,
            date: self.clock.date,
            days,
            growth,
            traffic,
            population: self.population,
            vehicles: self.traffic.len(),
        };
        observer.on_frame_end(&report);
        if self.snapshot_interval > 0 && frame.is_multiple_of(self.snapshot_interval) {
            observer.on_snapshot(&report, self);
        }

        self.frame += 1;
        report
    }

    /// Run `n` frames of fixed `delta_ms`, then call `on_run_end`.
    pub fn run_frames<O: CityObserver>(&mut self, n: u64, delta_ms: f64, observer: &mut O) {
        for _ in 0..n {
            self.frame(delta_ms, observer);
        }
        observer.on_run_end(self.frame);
        info!(
            frames = self.frame,
            date = %self.clock.date,
            population = self.population,
            vehicles = self.traffic.len(),
            "run finished"
        );
    }
}

//! Top-level simulation configuration.
//!
//! Every tunable constant of the growth and traffic rules lives here with its
//! default, so tests can force probabilities (e.g. `upgrade_chance = 1.0`)
//! instead of hunting for lucky seeds.  Applications typically load a
//! `CityConfig` from JSON with the `serde` feature enabled.

use crate::{CityError, CityResult};

// ── GrowthConfig ──────────────────────────────────────────────────────────────

/// Building spawn and upgrade rules.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GrowthConfig {
    /// Scaled milliseconds between growth ticks.
    pub interval_ms:       f64,
    /// Placement attempts per tick.  Failed attempts are not retried.
    pub spawn_attempts:    u32,
    /// Per-tick probability that a building pivot rolls for an upgrade.
    pub upgrade_chance:    f64,
    /// Chebyshev radius of the park/school amenity scan.
    pub amenity_radius:    u32,
    /// Height cap for amenity-served buildings.
    pub served_cap:        f32,
    /// Half-open integer range the unserved cap is drawn from.
    pub low_tier_min:      u32,
    pub low_tier_max:      u32,
    /// Floors added per successful upgrade.
    pub growth_step:       f32,
    /// Starting height of a freshly spawned building.
    pub initial_height:    f32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            interval_ms:    5_000.0,
            spawn_attempts: 10,
            upgrade_chance: 0.05,
            amenity_radius: 5,
            served_cap:     20.0,
            low_tier_min:   1,
            low_tier_max:   10,
            growth_step:    0.5,
            initial_height: 1.0,
        }
    }
}

// ── TrafficConfig ─────────────────────────────────────────────────────────────

/// Vehicle pool, movement, and edge-spawn rules.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrafficConfig {
    /// Hard cap on live vehicles.
    pub max_vehicles:      usize,
    /// Cells per simulated second at 1x.
    pub base_speed:        f32,
    /// Scaled milliseconds between spawn attempts.
    pub spawn_interval_ms: f64,
    /// Random offsets tried along the chosen edge before giving up.
    pub spawn_retries:     u32,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            max_vehicles:      50,
            base_speed:        2.0,
            spawn_interval_ms: 1_000.0,
            spawn_retries:     10,
        }
    }
}

// ── TopologyConfig ────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TopologyConfig {
    /// Re-run block detection after every edit batch.  Off by default: the
    /// live tick path does not depend on blocks.
    pub detect_blocks_on_change: bool,
}

// ── CityConfig ────────────────────────────────────────────────────────────────

/// Everything needed to build a city.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CityConfig {
    pub grid_width:    usize,
    pub grid_height:   usize,
    /// Scaled milliseconds per calendar day.
    pub day_length_ms: f64,
    /// Fixed RNG seed.  `None` seeds from OS entropy.
    pub seed:          Option<u64>,
    pub growth:        GrowthConfig,
    pub traffic:       TrafficConfig,
    pub topology:      TopologyConfig,
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            grid_width:    40,
            grid_height:   40,
            day_length_ms: 1_000.0,
            seed:          None,
            growth:        GrowthConfig::default(),
            traffic:       TrafficConfig::default(),
            topology:      TopologyConfig::default(),
        }
    }
}

impl CityConfig {
    /// Reject values the schedulers cannot run with.
    pub fn validate(&self) -> CityResult<()> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(CityError::Config(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.grid_width, self.grid_height
            )));
        }
        if i32::try_from(self.grid_width).is_err() || i32::try_from(self.grid_height).is_err() {
            return Err(CityError::Config("grid dimensions exceed i32 range".into()));
        }
        positive("day_length_ms", self.day_length_ms)?;
        positive("growth.interval_ms", self.growth.interval_ms)?;
        positive("traffic.spawn_interval_ms", self.traffic.spawn_interval_ms)?;

        if !(0.0..=1.0).contains(&self.growth.upgrade_chance) {
            return Err(CityError::Config(format!(
                "growth.upgrade_chance must be within [0, 1], got {}",
                self.growth.upgrade_chance
            )));
        }
        if self.growth.low_tier_min == 0 || self.growth.low_tier_min >= self.growth.low_tier_max {
            return Err(CityError::Config(format!(
                "growth low-tier range [{}, {}) is empty or starts at zero",
                self.growth.low_tier_min, self.growth.low_tier_max
            )));
        }
        if self.growth.growth_step <= 0.0 {
            return Err(CityError::Config("growth.growth_step must be positive".into()));
        }
        if self.traffic.base_speed < 0.0 {
            return Err(CityError::Config("traffic.base_speed must not be negative".into()));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f64) -> CityResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(CityError::Config(format!("{name} must be positive, got {value}")))
    }
}

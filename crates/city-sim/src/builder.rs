//! Fluent builder for constructing a [`City`].

use city_core::{CityConfig, SimRng, SimSpeed};
use city_grid::Grid;
use tracing::info;

use crate::{City, SimError, SimResult};

/// Fluent builder for [`City`].
///
/// # Optional inputs (have defaults)
///
/// | Method                    | Default                                   |
/// |---------------------------|-------------------------------------------|
/// | `.seed(s)`                | `config.seed`, else OS entropy            |
/// | `.grid(g)`                | all-`Empty` grid of the configured size   |
/// | `.speed(s)`               | `SimSpeed::Normal`                        |
/// | `.snapshot_interval(n)`   | 0 (no snapshots)                          |
///
/// # Example
///
/// ```rust,ignore
/// let city = CityBuilder::new(CityConfig::default())
///     .seed(42)
///     .snapshot_interval(60)
///     .build()?;
/// ```
pub struct CityBuilder {
    config:            CityConfig,
    grid:              Option<Grid>,
    speed:             SimSpeed,
    snapshot_interval: u64,
}

impl CityBuilder {
    pub fn new(config: CityConfig) -> Self {
        Self {
            config,
            grid:              None,
            speed:             SimSpeed::Normal,
            snapshot_interval: 0,
        }
    }

    /// Fix the RNG seed, overriding `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Start from a pre-built layout.  Its dimensions must match the
    /// configuration.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    pub fn speed(mut self, speed: SimSpeed) -> Self {
        self.speed = speed;
        self
    }

    /// Call `CityObserver::on_snapshot` every `frames` frames; 0 disables.
    pub fn snapshot_interval(mut self, frames: u64) -> Self {
        self.snapshot_interval = frames;
        self
    }

    /// Validate the configuration and return a ready-to-run [`City`].
    pub fn build(self) -> SimResult<City> {
        self.config.validate()?;

        let (w, h) = (self.config.grid_width, self.config.grid_height);
        let grid = match self.grid {
            Some(g) => {
                if g.width() != w || g.height() != h {
                    return Err(SimError::GridMismatch {
                        expected_w: w,
                        expected_h: h,
                        got_w:      g.width(),
                        got_h:      g.height(),
                    });
                }
                g
            }
            None => Grid::new(w, h),
        };

        let rng = SimRng::from_seed_option(self.config.seed);
        info!(width = w, height = h, seed = ?self.config.seed, "city built");

        Ok(City::from_parts(self.config, grid, rng, self.speed, self.snapshot_interval))
    }
}

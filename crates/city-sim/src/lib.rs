//! `city-sim`: the per-frame driver.
//!
//! # Frame order
//!
//! ```text
//! every frame(delta_ms):
//!   ① Clock   : SimClock accrues delta * multiplier; whole days roll over.
//!   ② Context : TickContext { delta, speed, date, population } is frozen.
//!   ③ Growth  : GrowthScheduler::tick; on change, population is recounted.
//!   ④ Traffic : TrafficSimulator::tick against the updated grid.
//!   ⑤ Observe : on_frame_end every frame, on_snapshot every N frames.
//!
//! between frames:
//!   apply_edit(s) → Grid mutation → TopologyUpdater::on_topology_changed
//!                 → population recount (only when something changed)
//! ```
//!
//! At `SimSpeed::Paused` steps ① to ④ are inert; the frame counter still
//! advances and observers are still called.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use city_core::{Cell, CityConfig};
//! use city_grid::{EditIntent, EditTool};
//! use city_sim::{CityBuilder, NoopObserver};
//!
//! let mut city = CityBuilder::new(CityConfig::default()).seed(7).build()?;
//! city.apply_edit(&EditIntent::new(EditTool::RoadMajor, Cell::new(0, 20), Cell::new(39, 20)));
//! city.run_frames(600, 16.0, &mut NoopObserver);
//! ```

pub mod builder;
pub mod city;
pub mod error;
pub mod observer;


pub use builder::CityBuilder;
pub use city::{City, FrameReport};
pub use error::{SimError, SimResult};
pub use observer::{CityObserver, NoopObserver};

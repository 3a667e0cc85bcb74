//! `city-core`: foundational types for the city sandbox simulation.
//!
//! This crate is a dependency of every other `city-*` crate.  It has no
//! `city-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`coords`]      | `Cell`, `Direction`, Chebyshev distance               |
//! | [`ids`]         | `VehicleId`, `BlockId`                                |
//! | [`time`]        | `SimSpeed`, `SimDate`, `SimClock`, `IntervalTimer`, `TickContext` |
//! | [`rng`]         | `SimRng` (seedable or entropy-backed)                 |
//! | [`config`]      | `CityConfig` and its per-subsystem sections           |
//! | [`error`]       | `CityError`, `CityResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and value types.  |

pub mod config;
pub mod coords;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CityConfig, GrowthConfig, TopologyConfig, TrafficConfig};
pub use coords::{Cell, Direction};
pub use error::{CityError, CityResult};
pub use ids::{BlockId, VehicleId};
pub use rng::SimRng;
pub use time::{IntervalTimer, SimClock, SimDate, SimSpeed, TickContext};

//! `city-growth`: procedural building growth.
//!
//! # Two-phase growth tick
//!
//! ```text
//! every interval_ms of scaled time:
//!   ① Spawn   : spawn_attempts random (origin, footprint size) draws;
//!                place a BUILDING where the footprint is empty, inside the
//!                grid, and touches a road.  Failures are dropped.
//!   ② Upgrade : each building pivot rolls upgrade_chance; on success it
//!                grows by growth_step floors unless at its cap:
//!                  served_cap      if a park AND a school lie within
//!                                  amenity_radius (Chebyshev)
//!                  low_tier_limit  otherwise (rolled once per building)
//! ```
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`rules`]     | `FootprintSize`, `can_build`, `is_amenity_served`       |
//! | [`scheduler`] | `GrowthScheduler`, `GrowthReport`                       |

pub mod rules;
pub mod scheduler;


pub use rules::{FootprintSize, can_build, is_amenity_served};
pub use scheduler::{GrowthReport, GrowthScheduler};

//! `city-topology`: blocks, lots, and the post-edit hook.
//!
//! A **block** is a 4-connected region of cells bounded by roads, parks,
//! schools and the grid edge.  A **lot** is a small rectangle carved from a
//! block along its road frontage.
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`block`]   | `Block`, `detect_blocks`                            |
//! | [`lot`]     | `Lot`, `generate_lots`                              |
//! | [`updater`] | `TopologyUpdater`: called after every edit batch   |
//!
//! Detection and subdivision are pure functions of the grid.  The updater
//! only runs them when `TopologyConfig::detect_blocks_on_change` is set.

pub mod block;
pub mod lot;
pub mod updater;

#[cfg(test)]
mod tests;

pub use block::{Block, detect_blocks};
pub use lot::{Lot, generate_lots};
pub use updater::TopologyUpdater;

//! `city-traffic`: vehicles wandering the road network.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`vehicle`]   | `Vehicle`: per-vehicle position and heading              |
//! | [`edge`]      | `Edge`: grid border a vehicle can enter from             |
//! | [`simulator`] | `TrafficSimulator`, `TrafficReport`                       |
//!
//! # Movement model (greedy cell-boundary turns)
//!
//! Each frame every vehicle slides along its heading by
//! `base_speed * delta_seconds * multiplier` cells.  When the half-up rounded
//! position lands in a new cell:
//!
//! 1. Off-grid or non-road cell → the vehicle despawns.
//! 2. Otherwise the four neighbours except the one behind are checked in
//!    `Direction::ALL` order; a neighbour qualifies if it is a road or lies
//!    off-grid (an exit).
//! 3. One qualifying direction is drawn uniformly and the vehicle snaps to
//!    the cell centre.  With none, it reverses in place.
//!
//! Vehicles never write to the grid.

pub mod edge;
pub mod simulator;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use edge::Edge;
pub use simulator::{TrafficReport, TrafficSimulator};
pub use vehicle::Vehicle;

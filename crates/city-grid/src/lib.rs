//! `city-grid`: the layout model every other subsystem reads.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`cell`]    | `CellType`: one small integer code per cell                      |
//! | [`meta`]    | `CellMeta`, `StructureMeta`, `Footprint`, palette                 |
//! | [`grid`]    | `Grid`: flat cell array + parallel metadata slots                |
//! | [`edit`]    | `EditTool`, `EditIntent`, `apply_edit`: user painting            |
//! | [`error`]   | `EditError`, `EditResult<T>`                                      |
//!
//! # Structures and pivots
//!
//! A structure (building, park, civic service) covers a rectangular
//! [`Footprint`] of one or more cells, all of the same [`CellType`].  Its
//! top-left cell is the *pivot* and owns the [`StructureMeta`] record; every
//! other footprint cell stores only the pivot's coordinates so the whole
//! group can be found and removed from any of its cells.
//!
//! # Bounds policy
//!
//! Every accessor validates `(x, z)`.  Out-of-range reads return `None`,
//! out-of-range writes return `false`, and neither touches any slot.

pub mod cell;
pub mod edit;
pub mod error;
pub mod grid;
pub mod meta;


pub use cell::CellType;
pub use edit::{EditIntent, EditTool, apply_edit};
pub use error::{EditError, EditResult};
pub use grid::Grid;
pub use meta::{BuildingSubtype, CellMeta, Footprint, PALETTE, StructureMeta};

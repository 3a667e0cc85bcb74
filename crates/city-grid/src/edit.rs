//! User edit intents: a tool applied to a dragged rectangle of cells.
//!
//! # Replacement rules
//!
//! | Tool             | Skips                         | Replaces                     |
//! |------------------|-------------------------------|------------------------------|
//! | `road_major`     | existing major road           | anything else                |
//! | `road_minor`     | any road                      | anything else                |
//! | `school` etc.    | roads, same service           | anything else                |
//! | `park:W:D`       | stamps touching a road or the edge, or already all park | anything else |
//! | `delete`         | empty cells                   | everything                   |
//!
//! Replacing or deleting any cell of a multi-cell structure removes the
//! whole structure, so no footprint is ever left half-built.

use std::fmt;
use std::str::FromStr;

use city_core::Cell;
use tracing::debug;

use crate::meta::{FIRE_STATION_COLOR, HOSPITAL_COLOR, PARK_COLOR, SCHOOL_COLOR};
use crate::{CellType, EditError, EditResult, Footprint, Grid, StructureMeta};

/// Largest park footprint, in cells.
pub const MAX_PARK_CELLS: u32 = 4;

/// A painting tool from the toolbar.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditTool {
    RoadMajor,
    RoadMinor,
    /// Stamp `width × depth` parks.
    Park { width: u8, depth: u8 },
    School,
    Hospital,
    FireStation,
    Delete,
}

impl EditTool {
    /// Single-cell civic services and their record color.
    fn civic(self) -> Option<(CellType, u32)> {
        match self {
            EditTool::School      => Some((CellType::School, SCHOOL_COLOR)),
            EditTool::Hospital    => Some((CellType::Hospital, HOSPITAL_COLOR)),
            EditTool::FireStation => Some((CellType::FireStation, FIRE_STATION_COLOR)),
            _ => None,
        }
    }
}

impl FromStr for EditTool {
    type Err = EditError;

    /// Parses toolbar ids: `road_major`, `road_minor`, `park` (1×1),
    /// `park:W:D`, `school`, `hospital`, `fire_station`, `delete`.
    fn from_str(s: &str) -> EditResult<Self> {
        match s {
            "road_major"   => return Ok(EditTool::RoadMajor),
            "road_minor"   => return Ok(EditTool::RoadMinor),
            "park"         => return Ok(EditTool::Park { width: 1, depth: 1 }),
            "school"       => return Ok(EditTool::School),
            "hospital"     => return Ok(EditTool::Hospital),
            "fire_station" => return Ok(EditTool::FireStation),
            "delete"       => return Ok(EditTool::Delete),
            _ => {}
        }

        let Some(dims) = s.strip_prefix("park:") else {
            return Err(EditError::UnknownTool(s.to_owned()));
        };
        let malformed = || EditError::MalformedPark(s.to_owned());
        let (w, d) = dims.split_once(':').ok_or_else(malformed)?;
        let width: u32 = w.parse().map_err(|_| malformed())?;
        let depth: u32 = d.parse().map_err(|_| malformed())?;

        if width == 0 || depth == 0 || width * depth > MAX_PARK_CELLS {
            return Err(EditError::InvalidParkSize { width, depth, max: MAX_PARK_CELLS });
        }
        Ok(EditTool::Park { width: width as u8, depth: depth as u8 })
    }
}

impl fmt::Display for EditTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditTool::RoadMajor              => f.write_str("road_major"),
            EditTool::RoadMinor              => f.write_str("road_minor"),
            EditTool::Park { width, depth }  => write!(f, "park:{width}:{depth}"),
            EditTool::School                 => f.write_str("school"),
            EditTool::Hospital               => f.write_str("hospital"),
            EditTool::FireStation            => f.write_str("fire_station"),
            EditTool::Delete                 => f.write_str("delete"),
        }
    }
}

/// A tool dragged from `start` to `end` (inclusive, any corner order).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditIntent {
    pub tool:  EditTool,
    pub start: Cell,
    pub end:   Cell,
}

impl EditIntent {
    pub fn new(tool: EditTool, start: Cell, end: Cell) -> Self {
        Self { tool, start, end }
    }

    /// Single-cell click.
    pub fn at(tool: EditTool, cell: Cell) -> Self {
        Self::new(tool, cell, cell)
    }

    /// Parse the tool id and build an intent.
    pub fn parse(tool: &str, start: Cell, end: Cell) -> EditResult<Self> {
        Ok(Self::new(tool.parse()?, start, end))
    }

    /// `(min corner, max corner)`.
    pub fn bounds(&self) -> (Cell, Cell) {
        (
            Cell::new(self.start.x.min(self.end.x), self.start.z.min(self.end.z)),
            Cell::new(self.start.x.max(self.end.x), self.start.z.max(self.end.z)),
        )
    }
}

/// Apply `intent` to `grid`.  Returns `true` if any cell changed.
///
/// Out-of-bounds parts of the rectangle are ignored.
pub fn apply_edit(grid: &mut Grid, intent: &EditIntent) -> bool {
    let (min, max) = intent.bounds();

    let changed = match (intent.tool, clip_to_grid(grid, min, max)) {
        (_, None) => false,
        (EditTool::Park { width, depth }, Some(clip)) => stamp_parks(grid, min, clip, width, depth),
        (tool, Some((lo, hi))) => {
            let mut changed = false;
            for x in lo.x..=hi.x {
                for z in lo.z..=hi.z {
                    changed |= paint_cell(grid, tool, x, z);
                }
            }
            changed
        }
    };

    debug!(tool = %intent.tool, start = %intent.start, end = %intent.end, changed, "applied edit");
    changed
}

fn paint_cell(grid: &mut Grid, tool: EditTool, x: i32, z: i32) -> bool {
    let Some(current) = grid.get(x, z) else { return false };

    match tool {
        EditTool::RoadMajor | EditTool::RoadMinor => {
            let road = if tool == EditTool::RoadMajor { CellType::RoadMajor } else { CellType::RoadMinor };
            let blocked = match tool {
                EditTool::RoadMajor => current == CellType::RoadMajor,
                _ => current.is_road(),
            };
            if blocked {
                return false;
            }
            grid.demolish(x, z);
            grid.set(x, z, road)
        }
        EditTool::Delete => grid.demolish(x, z) > 0,
        _ => {
            let Some((kind, color)) = tool.civic() else { return false };
            if current.is_road() || current == kind {
                return false;
            }
            grid.demolish(x, z);
            grid.place_structure(kind, StructureMeta::fixed(Footprint::single(Cell::new(x, z)), color))
        }
    }
}

/// The part of the `min..=max` rectangle that lies on the grid, or `None` if
/// they do not overlap.
fn clip_to_grid(grid: &Grid, min: Cell, max: Cell) -> Option<(Cell, Cell)> {
    let x_hi = (max.x as i64).min(grid.width() as i64 - 1);
    let z_hi = (max.z as i64).min(grid.height() as i64 - 1);
    let x_lo = (min.x as i64).max(0);
    let z_lo = (min.z as i64).max(0);
    if x_lo > x_hi || z_lo > z_hi {
        return None;
    }
    Some((Cell::new(x_lo as i32, z_lo as i32), Cell::new(x_hi as i32, z_hi as i32)))
}

/// First stamp origin at or after `lo` on the lattice `anchor + k * step`.
fn first_on_lattice(anchor: i32, lo: i32, step: i64) -> i64 {
    let (anchor, lo) = (anchor as i64, lo as i64);
    if anchor >= lo {
        return anchor;
    }
    anchor + (lo - anchor + step - 1) / step * step
}

/// Tile `width × depth` parks across the clipped rectangle.  Stamps stay on
/// the lattice anchored at the intent's min corner, even when that corner is
/// off the grid.
fn stamp_parks(grid: &mut Grid, anchor: Cell, (lo, hi): (Cell, Cell), width: u8, depth: u8) -> bool {
    let mut changed = false;
    let step_x = width.max(1) as i64;
    let step_z = depth.max(1) as i64;
    let start_x = first_on_lattice(anchor.x, lo.x, step_x);
    let start_z = first_on_lattice(anchor.z, lo.z, step_z);

    for ox in (start_x..=hi.x as i64).step_by(step_x as usize) {
        for oz in (start_z..=hi.z as i64).step_by(step_z as usize) {
            let footprint = Footprint::new(Cell::new(ox as i32, oz as i32), width, depth);
            if !grid.footprint_fits(footprint) {
                continue;
            }
            let kinds: Vec<CellType> = footprint.cells().filter_map(|c| grid.get_cell(c)).collect();
            if kinds.iter().any(|k| k.is_road()) || kinds.iter().all(|&k| k == CellType::Park) {
                continue;
            }
            for cell in footprint.cells() {
                grid.demolish(cell.x, cell.z);
            }
            changed |= grid.place_structure(CellType::Park, StructureMeta::fixed(footprint, PARK_COLOR));
        }
    }
    changed
}

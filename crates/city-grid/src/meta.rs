//! Per-cell metadata slots and structure records.

use city_core::Cell;

/// Building colors, indexed uniformly at random on spawn.
pub const PALETTE: [u32; 18] = [
    0xe63946, 0xf1faee, 0xa8dadc, 0x457b9d, 0x1d3557,
    0x2a9d8f, 0xe9c46a, 0xf4a261, 0xe76f51,
    0xd8e2dc, 0xffe5d9, 0xffcad4, 0xf4acb7, 0x9d8189,
    0x8d99ae, 0xedf2f4, 0xef233c, 0xd90429,
];

pub const PARK_COLOR:         u32 = 0x2d4c1e;
pub const SCHOOL_COLOR:       u32 = 0xffff00;
pub const HOSPITAL_COLOR:     u32 = 0xffffff;
pub const FIRE_STATION_COLOR: u32 = 0xb93a32;

// ── Footprint ─────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle of cells anchored at its top-left `origin`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Footprint {
    pub origin: Cell,
    /// Extent along x.
    pub width:  u8,
    /// Extent along z.
    pub depth:  u8,
}

impl Footprint {
    #[inline]
    pub fn new(origin: Cell, width: u8, depth: u8) -> Self {
        Self { origin, width, depth }
    }

    #[inline]
    pub fn single(origin: Cell) -> Self {
        Self::new(origin, 1, 1)
    }

    #[inline]
    pub fn area(&self) -> u32 {
        self.width as u32 * self.depth as u32
    }

    /// All covered cells, x-major (column by column), origin first.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        let Footprint { origin, width, depth } = self;
        (0..width as i32)
            .flat_map(move |dx| (0..depth as i32).map(move |dz| origin.offset(dx, dz)))
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.origin.x
            && cell.z >= self.origin.z
            && cell.x < self.origin.x + self.width as i32
            && cell.z < self.origin.z + self.depth as i32
    }
}

// ── StructureMeta ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BuildingSubtype {
    Residential,
    Commercial,
}

/// The full record owned by a structure's pivot cell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructureMeta {
    pub footprint:      Footprint,
    /// Continuous growth counter, in floors.
    pub height:         f32,
    pub color:          u32,
    /// `Some` for grown buildings, `None` for parks and civic services.
    pub subtype:        Option<BuildingSubtype>,
    /// Random growth potential, rolled on the first upgrade roll and kept.
    pub max_potential:  Option<f32>,
    /// Height cap while not amenity-served, rolled once and kept.
    pub low_tier_limit: Option<f32>,
}

impl StructureMeta {
    pub fn building(footprint: Footprint, height: f32, color: u32, subtype: BuildingSubtype) -> Self {
        Self {
            footprint,
            height,
            color,
            subtype: Some(subtype),
            max_potential: None,
            low_tier_limit: None,
        }
    }

    /// A non-growing structure (park or civic service).
    pub fn fixed(footprint: Footprint, color: u32) -> Self {
        Self {
            footprint,
            height: 1.0,
            color,
            subtype: None,
            max_potential: None,
            low_tier_limit: None,
        }
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.footprint.width
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.footprint.depth
    }

    /// Residents housed: `floor(height * 50 * width * depth)`.
    #[inline]
    pub fn population(&self) -> u64 {
        (self.height * 50.0 * self.footprint.area() as f32).floor() as u64
    }
}

// ── CellMeta ──────────────────────────────────────────────────────────────────

/// One metadata slot per cell.
///
/// Empty cells, roads and plain lots hold [`CellMeta::None`].
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellMeta {
    #[default]
    None,
    /// The structure's top-left cell; owns the record.
    Pivot(StructureMeta),
    /// Any other footprint cell; points back at the pivot.
    Member { root: Cell },
}

impl CellMeta {
    #[inline]
    pub fn is_pivot(&self) -> bool {
        matches!(self, CellMeta::Pivot(_))
    }

    /// The pivot record, if this slot holds one.
    #[inline]
    pub fn structure(&self) -> Option<&StructureMeta> {
        match self {
            CellMeta::Pivot(m) => Some(m),
            _ => None,
        }
    }

    #[inline]
    pub fn structure_mut(&mut self) -> Option<&mut StructureMeta> {
        match self {
            CellMeta::Pivot(m) => Some(m),
            _ => None,
        }
    }
}

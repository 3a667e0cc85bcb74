//! The `Grid`: flat cell array plus parallel metadata slots.

use city_core::Cell;
use tracing::trace;

use crate::{CellMeta, CellType, Footprint, StructureMeta};

/// Fixed-size layout store.
///
/// `cells` and `metadata` are always `width * height` long and indexed
/// row-major: `index = z * width + x`.  The arrays are private so the
/// length invariant and bounds policy cannot be bypassed; readers get
/// slices through [`cells`](Self::cells) and [`metadata`](Self::metadata).
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width:    usize,
    height:   usize,
    cells:    Vec<CellType>,
    metadata: Vec<CellMeta>,
}

impl Grid {
    /// An all-`Empty` grid.
    ///
    /// # Panics
    /// Panics if either dimension is zero or exceeds `i32::MAX`; validate
    /// external input with `CityConfig::validate` first.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        assert!(
            i32::try_from(width).is_ok() && i32::try_from(height).is_ok(),
            "grid dimensions exceed i32 range"
        );
        let n = width * height;
        Self {
            width,
            height,
            cells:    vec![CellType::Empty; n],
            metadata: vec![CellMeta::None; n],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Read-only cell array for renderers.
    #[inline]
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    /// Read-only metadata array for renderers.
    #[inline]
    pub fn metadata(&self) -> &[CellMeta] {
        &self.metadata
    }

    // ── Coordinates ───────────────────────────────────────────────────────

    /// Flat index of `(x, z)`, or `None` outside `[0,width)×[0,height)`.
    #[inline]
    pub fn index_of(&self, x: i32, z: i32) -> Option<usize> {
        if x < 0 || z < 0 {
            return None;
        }
        let (x, z) = (x as usize, z as usize);
        if x >= self.width || z >= self.height {
            return None;
        }
        Some(z * self.width + x)
    }

    #[inline]
    pub fn index_of_cell(&self, cell: Cell) -> Option<usize> {
        self.index_of(cell.x, cell.z)
    }

    /// Inverse of [`index_of`](Self::index_of); `None` past the end.
    #[inline]
    pub fn coords_of(&self, index: usize) -> Option<Cell> {
        if index >= self.cells.len() {
            return None;
        }
        Some(Cell::new((index % self.width) as i32, (index / self.width) as i32))
    }

    #[inline]
    pub fn contains(&self, x: i32, z: i32) -> bool {
        self.index_of(x, z).is_some()
    }

    // ── Cell access ───────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, x: i32, z: i32) -> Option<CellType> {
        self.index_of(x, z).map(|i| self.cells[i])
    }

    #[inline]
    pub fn get_cell(&self, cell: Cell) -> Option<CellType> {
        self.get(cell.x, cell.z)
    }

    /// Overwrite one cell's type.  The metadata slot is left untouched; use
    /// [`clear`](Self::clear) or [`demolish`](Self::demolish) when replacing
    /// structures.
    #[inline]
    pub fn set(&mut self, x: i32, z: i32, kind: CellType) -> bool {
        match self.index_of(x, z) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Reset a cell to `Empty` with no metadata.
    pub fn clear(&mut self, x: i32, z: i32) -> bool {
        match self.index_of(x, z) {
            Some(i) => {
                self.cells[i] = CellType::Empty;
                self.metadata[i] = CellMeta::None;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn is_road(&self, x: i32, z: i32) -> bool {
        self.get(x, z).is_some_and(CellType::is_road)
    }

    /// `true` if any in-bounds 4-neighbour of `(x, z)` is a road.
    pub fn touches_road(&self, x: i32, z: i32) -> bool {
        Cell::new(x, z)
            .neighbors4()
            .into_iter()
            .any(|n| self.is_road(n.x, n.z))
    }

    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    // ── Metadata access ───────────────────────────────────────────────────

    #[inline]
    pub fn slot(&self, x: i32, z: i32) -> Option<&CellMeta> {
        self.index_of(x, z).map(|i| &self.metadata[i])
    }

    pub fn set_slot(&mut self, x: i32, z: i32, slot: CellMeta) -> bool {
        match self.index_of(x, z) {
            Some(i) => {
                self.metadata[i] = slot;
                true
            }
            None => false,
        }
    }

    /// The structure record at `(x, z)`: only pivot cells have one.
    #[inline]
    pub fn meta(&self, x: i32, z: i32) -> Option<&StructureMeta> {
        self.slot(x, z).and_then(CellMeta::structure)
    }

    #[inline]
    pub fn meta_mut(&mut self, x: i32, z: i32) -> Option<&mut StructureMeta> {
        let i = self.index_of(x, z)?;
        self.metadata[i].structure_mut()
    }

    /// Pivot coordinates of the structure covering `(x, z)`.
    pub fn root_of(&self, x: i32, z: i32) -> Option<Cell> {
        match self.slot(x, z)? {
            CellMeta::Pivot(_)      => Some(Cell::new(x, z)),
            CellMeta::Member { root } => Some(*root),
            CellMeta::None          => None,
        }
    }

    /// Every pivot as `(pivot cell, cell type, record)`, row-major.
    pub fn pivots(&self) -> impl Iterator<Item = (Cell, CellType, &StructureMeta)> + '_ {
        self.metadata.iter().enumerate().filter_map(move |(i, slot)| {
            let meta = slot.structure()?;
            let cell = Cell::new((i % self.width) as i32, (i / self.width) as i32);
            Some((cell, self.cells[i], meta))
        })
    }

    /// Indices of all pivots of the given type, row-major.
    pub fn pivot_indices(&self, kind: CellType) -> Vec<usize> {
        self.metadata
            .iter()
            .enumerate()
            .filter(|(i, slot)| slot.is_pivot() && self.cells[*i] == kind)
            .map(|(i, _)| i)
            .collect()
    }

    /// Mutable record by flat index (pivot slots only).
    #[inline]
    pub fn meta_at_mut(&mut self, index: usize) -> Option<&mut StructureMeta> {
        self.metadata.get_mut(index).and_then(CellMeta::structure_mut)
    }

    // ── Structures ────────────────────────────────────────────────────────

    /// `true` if every footprint cell lies inside the grid.
    pub fn footprint_fits(&self, footprint: Footprint) -> bool {
        footprint.width > 0
            && footprint.depth > 0
            && footprint.cells().all(|c| self.contains(c.x, c.z))
    }

    /// Write a structure: every footprint cell becomes `kind`, the origin
    /// takes `meta` as pivot, the rest become members pointing at it.
    ///
    /// Returns `false` without writing anything if the footprint leaves the
    /// grid.  Existing occupants are overwritten; callers decide beforehand
    /// what may be replaced.
    pub fn place_structure(&mut self, kind: CellType, meta: StructureMeta) -> bool {
        let footprint = meta.footprint;
        if !self.footprint_fits(footprint) {
            return false;
        }
        let root = footprint.origin;
        for cell in footprint.cells() {
            let Some(i) = self.index_of_cell(cell) else { continue };
            self.cells[i] = kind;
            self.metadata[i] = CellMeta::Member { root };
        }
        if let Some(i) = self.index_of_cell(root) {
            self.metadata[i] = CellMeta::Pivot(meta);
        }
        trace!(%root, %kind, w = footprint.width, d = footprint.depth, "placed structure");
        true
    }

    /// Remove whatever occupies `(x, z)`.
    ///
    /// For a structure cell the whole group is cleared via its pivot; a
    /// member whose pivot is gone is cleared on its own.  Any other
    /// non-empty cell is reset to `Empty`.  Returns the number of cells
    /// cleared (0 when out of bounds or already empty).
    pub fn demolish(&mut self, x: i32, z: i32) -> usize {
        let Some(kind) = self.get(x, z) else { return 0 };
        if kind == CellType::Empty {
            return 0;
        }

        let root = self.root_of(x, z);
        let footprint = root.and_then(|r| self.meta(r.x, r.z).map(|m| m.footprint));

        let Some((root, footprint)) = root.zip(footprint) else {
            self.clear(x, z);
            return 1;
        };

        let mut cleared = 0;
        for cell in footprint.cells() {
            if self.root_of(cell.x, cell.z) == Some(root) {
                self.clear(cell.x, cell.z);
                cleared += 1;
            }
        }
        // A stale member outside its pivot's footprint still goes.
        if self.get(x, z) != Some(CellType::Empty) {
            self.clear(x, z);
            cleared += 1;
        }
        trace!(%root, cleared, "demolished structure");
        cleared
    }

    /// `floor(height * 50 * width * depth)` summed over building pivots.
    pub fn population(&self) -> u64 {
        self.pivots()
            .filter(|(_, kind, _)| *kind == CellType::Building)
            .map(|(_, _, meta)| meta.population())
            .sum()
    }
}

impl Default for Grid {
    /// The standard 40×40 sandbox.
    fn default() -> Self {
        Grid::new(40, 40)
    }
}

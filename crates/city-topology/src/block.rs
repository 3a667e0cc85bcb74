//! Block detection by flood fill.

use city_core::{BlockId, Cell};
use city_grid::Grid;

/// A connected region of non-boundary cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub id:    BlockId,
    /// Cells in discovery order; the first is the row-major seed.
    pub cells: Vec<Cell>,
}

impl Block {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn seed(&self) -> Option<Cell> {
        self.cells.first().copied()
    }
}

/// Partition every non-boundary cell into 4-connected blocks.
///
/// Seeds are taken in row-major order, so block ids are stable for a given
/// layout.  Every non-boundary cell lands in exactly one block.
pub fn detect_blocks(grid: &Grid) -> Vec<Block> {
    let mut visited = vec![false; grid.len()];
    let mut blocks = Vec::new();
    let mut next_id = BlockId(0);

    for (index, kind) in grid.cells().iter().enumerate() {
        if visited[index] || kind.is_block_boundary() {
            continue;
        }
        let Some(seed) = grid.coords_of(index) else { continue };
        let cells = flood_fill(grid, seed, &mut visited);
        blocks.push(Block { id: next_id, cells });
        next_id = next_id.next();
    }
    blocks
}

/// Depth-first fill from `seed`, marking `visited` as cells are pushed.
fn flood_fill(grid: &Grid, seed: Cell, visited: &mut [bool]) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut stack = vec![seed];
    if let Some(i) = grid.index_of_cell(seed) {
        visited[i] = true;
    }

    while let Some(cell) = stack.pop() {
        cells.push(cell);
        for n in cell.neighbors4() {
            let Some(i) = grid.index_of_cell(n) else { continue };
            if visited[i] || grid.cells()[i].is_block_boundary() {
                continue;
            }
            visited[i] = true;
            stack.push(n);
        }
    }
    cells
}

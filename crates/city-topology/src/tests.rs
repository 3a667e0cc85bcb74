//! Unit tests for city-topology.

use city_core::{BlockId, Cell, TopologyConfig};
use city_grid::{CellType, Grid};
use rustc_hash::FxHashSet;

use crate::{TopologyUpdater, detect_blocks, generate_lots};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `size`×`size` grid with a minor road around the border.
fn ringed(size: usize) -> Grid {
    let mut g = Grid::new(size, size);
    let last = size as i32 - 1;
    for i in 0..size as i32 {
        for (x, z) in [(i, 0), (i, last), (0, i), (last, i)] {
            g.set(x, z, CellType::RoadMinor);
        }
    }
    g
}

// ── Blocks ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod blocks {
    use super::*;

    #[test]
    fn empty_grid_is_one_block() {
        let blocks = detect_blocks(&Grid::new(5, 5));
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].len(), 25);
        assert_eq!(blocks[0].id, BlockId(0));
        assert_eq!(blocks[0].seed(), Some(Cell::new(0, 0)));
    }

    #[test]
    fn road_splits_grid() {
        let mut g = Grid::new(5, 5);
        for z in 0..5 {
            g.set(2, z, CellType::RoadMajor);
        }
        let blocks = detect_blocks(&g);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].seed(), Some(Cell::new(0, 0)));
        assert_eq!(blocks[1].seed(), Some(Cell::new(3, 0)));
        assert_eq!(blocks[1].id, BlockId(1));
        assert!(blocks.iter().all(|b| b.len() == 10));
    }

    #[test]
    fn parks_and_schools_bound_blocks_but_buildings_do_not() {
        let mut g = Grid::new(5, 1);
        g.set(1, 0, CellType::Park);
        g.set(3, 0, CellType::School);
        assert_eq!(detect_blocks(&g).len(), 3);

        g.set(1, 0, CellType::Building);
        g.set(3, 0, CellType::Hospital);
        assert_eq!(detect_blocks(&g).len(), 1);
    }

    #[test]
    fn diagonal_contact_does_not_connect() {
        let mut g = Grid::new(2, 2);
        g.set(1, 0, CellType::RoadMajor);
        g.set(0, 1, CellType::RoadMajor);
        assert_eq!(detect_blocks(&g).len(), 2);
    }

    #[test]
    fn blocks_partition_non_boundary_cells() {
        let mut g = ringed(12);
        for z in 0..12 {
            g.set(5, z, CellType::RoadMajor);
        }
        g.set(8, 3, CellType::Park);
        g.set(8, 4, CellType::School);
        g.set(2, 7, CellType::Building);

        let mut seen = FxHashSet::default();
        for block in detect_blocks(&g) {
            for cell in block.cells {
                assert!(!g.get_cell(cell).unwrap().is_block_boundary());
                assert!(seen.insert(cell), "{cell} in two blocks");
            }
        }
        let expected = g.cells().iter().filter(|c| !c.is_block_boundary()).count();
        assert_eq!(seen.len(), expected);
    }

    #[test]
    fn all_road_grid_has_no_blocks() {
        let mut g = Grid::new(3, 3);
        for x in 0..3 {
            for z in 0..3 {
                g.set(x, z, CellType::RoadMinor);
            }
        }
        assert!(detect_blocks(&g).is_empty());
    }
}

// ── Lots ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lots {
    use super::*;

    #[test]
    fn enclosed_square_becomes_one_lot() {
        let g = ringed(4);
        let blocks = detect_blocks(&g);
        assert_eq!(blocks.len(), 1);

        let lots = generate_lots(&g, &blocks[0]);
        assert_eq!(lots.len(), 1);
        assert_eq!((lots[0].width, lots[0].depth), (2, 2));
        assert_eq!(lots[0].origin(), Some(Cell::new(1, 1)));
        assert_eq!(lots[0].road_distance, 0);
    }

    #[test]
    fn one_deep_strip_falls_back_to_singles() {
        let mut g = Grid::new(3, 2);
        for x in 0..3 {
            g.set(x, 0, CellType::RoadMajor);
        }
        let blocks = detect_blocks(&g);
        let lots = generate_lots(&g, &blocks[0]);
        assert_eq!(lots.len(), 3);
        assert!(lots.iter().all(|l| l.width == 1 && l.depth == 1 && l.area() == 1));
    }

    #[test]
    fn lots_cover_frontage_without_overlap() {
        let mut g = Grid::new(6, 6);
        for x in 0..6 {
            g.set(x, 0, CellType::RoadMajor);
        }
        let blocks = detect_blocks(&g);
        assert_eq!(blocks.len(), 1);
        let block = &blocks[0];
        let members: FxHashSet<Cell> = block.cells.iter().copied().collect();

        let lots = generate_lots(&g, block);
        let mut used = FxHashSet::default();
        for lot in &lots {
            let seed = lot.origin().unwrap();
            assert!(g.touches_road(seed.x, seed.z), "lot seeded off the frontage");
            assert_eq!(lot.area(), lot.width as usize * lot.depth as usize);
            for &c in &lot.cells {
                assert!(members.contains(&c));
                assert!(used.insert(c), "{c} in two lots");
            }
        }
        for x in 0..6 {
            assert!(used.contains(&Cell::new(x, 1)), "frontage cell ({x}, 1) left out");
        }
        assert!(!used.contains(&Cell::new(0, 4)), "deep interior never consumed");
    }

    #[test]
    fn block_without_road_has_no_lots() {
        let g = Grid::new(4, 4);
        let blocks = detect_blocks(&g);
        assert!(generate_lots(&g, &blocks[0]).is_empty());
    }
}

// ── Updater ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod updater {
    use super::*;

    #[test]
    fn default_only_counts_revisions() {
        let g = ringed(6);
        let mut up = TopologyUpdater::default();
        up.on_topology_changed(&g);
        up.on_topology_changed(&g);
        assert_eq!(up.revision(), 2);
        assert!(up.blocks().is_empty());
        assert!(!up.is_current());

        assert_eq!(up.refresh(&g).len(), 1);
        assert!(up.is_current());

        up.on_topology_changed(&g);
        assert!(!up.is_current(), "edit after refresh leaves blocks stale");
    }

    #[test]
    fn opt_in_detects_on_every_change() {
        let mut g = ringed(6);
        let mut up = TopologyUpdater::new(TopologyConfig { detect_blocks_on_change: true });
        up.on_topology_changed(&g);
        assert!(up.is_current());
        assert_eq!(up.blocks().len(), 1);

        for z in 0..6 {
            g.set(3, z, CellType::RoadMajor);
        }
        up.on_topology_changed(&g);
        assert_eq!(up.blocks().len(), 2);
    }
}

//! The post-edit topology hook.

use city_core::TopologyConfig;
use city_grid::Grid;
use tracing::debug;

use crate::{Block, detect_blocks};

/// Receives a notification after every batch of grid edits.
///
/// With `detect_blocks_on_change` off (the default) the call only bumps
/// [`revision`](Self::revision); block data goes stale until
/// [`refresh`](Self::refresh) is called explicitly.
#[derive(Clone, Debug, Default)]
pub struct TopologyUpdater {
    pub config: TopologyConfig,
    revision:   u64,
    blocks:     Vec<Block>,
    /// Revision the cached blocks were computed at.
    blocks_rev: Option<u64>,
}

impl TopologyUpdater {
    pub fn new(config: TopologyConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Number of edit batches seen so far.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Blocks from the last detection run (possibly stale).
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// `true` if the cached blocks reflect the latest edit batch.
    #[inline]
    pub fn is_current(&self) -> bool {
        self.blocks_rev == Some(self.revision)
    }

    /// Called after any batch of edits has been applied to `grid`.
    pub fn on_topology_changed(&mut self, grid: &Grid) {
        self.revision += 1;
        if self.config.detect_blocks_on_change {
            self.refresh(grid);
        }
    }

    /// Re-run block detection now, regardless of configuration.
    pub fn refresh(&mut self, grid: &Grid) -> &[Block] {
        self.blocks = detect_blocks(grid);
        self.blocks_rev = Some(self.revision);
        debug!(revision = self.revision, blocks = self.blocks.len(), "blocks detected");
        &self.blocks
    }
}

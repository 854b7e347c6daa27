use std::collections::HashMap;

use crate::error::StoreError;
use crate::layout::block::Block;
use crate::retention::disk::{BlockStore, check_len};

/// MemStore keeps written blocks in memory; unwritten blocks read as zeros.
#[derive(Debug, Default)]
pub struct MemStore {
    blocks: HashMap<u64, Block>,
    block_size: usize,
}

impl MemStore {
    #[must_use]
    pub fn new(block_size: usize) -> Self {
        Self {
            blocks: HashMap::new(),
            block_size,
        }
    }

    /// Number of distinct blocks ever written.
    #[must_use]
    pub fn written_blocks(&self) -> usize {
        self.blocks.len()
    }
}

impl BlockStore for MemStore {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn write_block(&mut self, block: u64, data: &[u8]) -> Result<(), StoreError> {
        check_len(self.block_size, data.len())?;
        self.blocks.insert(block, Block::from(data));
        Ok(())
    }

    fn read_block(&self, block: u64) -> Result<Block, StoreError> {
        Ok(self
            .blocks
            .get(&block)
            .cloned()
            .unwrap_or_else(|| Block::zero(self.block_size)))
    }

    fn describe(&self) -> String {
        format!("memory ({} blocks)", self.blocks.len())
    }
}

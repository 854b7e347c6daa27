use memmap2::{MmapMut, MmapOptions};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::StoreError;
use crate::layout::block::Block;
use crate::retention::disk::{BlockStore, byte_offset, check_len};

/// MmapStore keeps one disk in a memory-mapped file that grows on demand.
pub struct MmapStore {
    path: PathBuf,
    file: File,
    map: MmapMut,
    len: u64,
    block_size: usize,
}

impl MmapStore {
    /// `create` starts a fresh image at `path` with room for `capacity_blocks` blocks.
    ///
    /// # Errors
    /// Returns an error if the image cannot be created, sized or mapped.
    pub fn create(
        path: impl AsRef<Path>,
        block_size: usize,
        capacity_blocks: u64,
    ) -> io::Result<Self> {
        Self::open_with(path.as_ref(), block_size, capacity_blocks, true)
    }

    /// `open` maps an existing image, extending it to at least `capacity_blocks` blocks.
    ///
    /// # Errors
    /// Returns an error if the image cannot be opened, sized or mapped.
    pub fn open(
        path: impl AsRef<Path>,
        block_size: usize,
        capacity_blocks: u64,
    ) -> io::Result<Self> {
        Self::open_with(path.as_ref(), block_size, capacity_blocks, false)
    }

    fn open_with(
        path: &Path,
        block_size: usize,
        capacity_blocks: u64,
        fresh: bool,
    ) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(fresh)
            .open(path)?;

        let prev_len = file.metadata()?.len();
        let want = capacity_blocks
            .max(1)
            .checked_mul(block_size as u64)
            .ok_or_else(|| io::Error::other("store capacity overflows u64"))?;
        let len = prev_len.max(want);
        file.set_len(len)?;
        let map = map_file(&file, len)?;

        Ok(Self {
            path: path.to_path_buf(),
            file,
            map,
            len,
            block_size,
        })
    }

    /// Mapped length in bytes.
    #[must_use]
    pub const fn mapped_len(&self) -> u64 {
        self.len
    }

    fn grow(&mut self, min_len: u64) -> io::Result<()> {
        let new_len = self.len.saturating_mul(2).max(min_len);
        debug!(path = %self.path.display(), from = self.len, to = new_len, "grow image");
        self.map.flush()?;
        self.file.set_len(new_len)?;
        self.map = map_file(&self.file, new_len)?;
        self.len = new_len;
        Ok(())
    }
}

fn map_file(file: &File, len: u64) -> io::Result<MmapMut> {
    let map_len = usize::try_from(len)
        .map_err(|_| io::Error::other(format!("image length {len} exceeds addressable size")))?;
    // The file is owned by the store and only mutated through this mapping.
    unsafe { MmapOptions::new().len(map_len).map_mut(file) }
}

impl BlockStore for MmapStore {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn write_block(&mut self, block: u64, data: &[u8]) -> Result<(), StoreError> {
        check_len(self.block_size, data.len())?;
        let off = byte_offset(block, self.block_size)?;
        let end = off + self.block_size as u64;
        if end > self.len {
            self.grow(end).map_err(|e| StoreError::io(block, e))?;
        }
        let start = usize::try_from(off).map_err(|_| StoreError::OutOfRange { block })?;
        self.map[start..start + data.len()].copy_from_slice(data);
        trace!(path = %self.path.display(), block, "write block");
        self.map
            .flush_range(start, data.len())
            .map_err(|e| StoreError::io(block, e))
    }

    fn read_block(&self, block: u64) -> Result<Block, StoreError> {
        let mut buf = Block::zero(self.block_size);
        let off = byte_offset(block, self.block_size)?;
        if off >= self.len {
            return Ok(buf);
        }
        let start = usize::try_from(off).map_err(|_| StoreError::OutOfRange { block })?;
        let end = start.saturating_add(self.block_size).min(self.map.len());
        let n = end - start;
        buf.as_bytes_mut()[..n].copy_from_slice(&self.map[start..end]);
        Ok(buf)
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        self.map.flush().map_err(StoreError::Sync)
    }

    fn describe(&self) -> String {
        format!("{} (mmap, {} bytes)", self.path.display(), self.len)
    }
}

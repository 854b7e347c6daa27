//! Block stores backing each disk of an array.

mod memory;
mod mmap;

pub use memory::MemStore;
pub use mmap::MmapStore;

use std::fs::{File, OpenOptions};
use std::io::{self, ErrorKind};
use std::os::unix::fs::FileExt;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::StoreError;
use crate::layout::block::Block;

/// BlockStore is fixed-size block storage addressed by block number.
///
/// Blocks that were never written read back as zeros.
pub trait BlockStore {
    /// block_size is the length every block read or written must have.
    fn block_size(&self) -> usize;

    /// write_block persists `data` at `block` before returning.
    ///
    /// # Errors
    /// Returns [`StoreError::SizeMismatch`] if `data` is not one block long, or the
    /// underlying I/O error.
    fn write_block(&mut self, block: u64, data: &[u8]) -> Result<(), StoreError>;

    /// read_block returns a full block, zero-filled where nothing was written.
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    fn read_block(&self, block: u64) -> Result<Block, StoreError>;

    /// sync flushes anything the store still buffers.
    ///
    /// # Errors
    /// Returns the underlying I/O error.
    fn sync(&mut self) -> Result<(), StoreError> {
        Ok(())
    }

    /// describe names the store for status output.
    fn describe(&self) -> String;
}

impl<S: BlockStore + ?Sized> BlockStore for Box<S> {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn write_block(&mut self, block: u64, data: &[u8]) -> Result<(), StoreError> {
        (**self).write_block(block, data)
    }

    fn read_block(&self, block: u64) -> Result<Block, StoreError> {
        (**self).read_block(block)
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        (**self).sync()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), StoreError> {
    if expected == actual {
        Ok(())
    } else {
        Err(StoreError::SizeMismatch { expected, actual })
    }
}

/// `byte_offset` is the first byte of `block`; the whole block must be addressable.
pub(crate) fn byte_offset(block: u64, block_size: usize) -> Result<u64, StoreError> {
    block
        .checked_mul(block_size as u64)
        .filter(|off| off.checked_add(block_size as u64).is_some())
        .ok_or(StoreError::OutOfRange { block })
}

/// FileStore keeps one disk in a regular file, one block after another.
pub struct FileStore {
    path: PathBuf,
    file: File,
    block_size: usize,
}

impl FileStore {
    /// `create` starts a fresh, empty store at `path`, discarding any previous file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be removed or created.
    pub fn create(path: impl AsRef<Path>, block_size: usize) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        match std::fs::remove_file(&path) {
            Err(e) if e.kind() != ErrorKind::NotFound => return Err(e),
            _ => {}
        }
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        Ok(Self {
            path,
            file,
            block_size,
        })
    }

    /// `open` reuses the file at `path`, creating it if missing.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>, block_size: usize) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)?;
        Ok(Self {
            path,
            file,
            block_size,
        })
    }

    /// Current length of the backing file in bytes.
    ///
    /// # Errors
    /// Returns an error if the file metadata cannot be read.
    pub fn file_len(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }
}

impl BlockStore for FileStore {
    fn block_size(&self) -> usize {
        self.block_size
    }

    fn write_block(&mut self, block: u64, data: &[u8]) -> Result<(), StoreError> {
        check_len(self.block_size, data.len())?;
        let off = byte_offset(block, self.block_size)?;
        trace!(path = %self.path.display(), block, "write block");
        self.file
            .write_all_at(data, off)
            .and_then(|()| self.file.sync_data())
            .map_err(|e| StoreError::io(block, e))
    }

    fn read_block(&self, block: u64) -> Result<Block, StoreError> {
        let off = byte_offset(block, self.block_size)?;
        let mut buf = Block::zero(self.block_size);
        let bytes = buf.as_bytes_mut();
        let mut filled = 0usize;
        while filled < bytes.len() {
            // Stop at end of file; the rest of the block stays zero.
            match self.file.read_at(&mut bytes[filled..], off + filled as u64) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(StoreError::io(block, e)),
            }
        }
        trace!(path = %self.path.display(), block, filled, "read block");
        Ok(buf)
    }

    fn sync(&mut self) -> Result<(), StoreError> {
        self.file.sync_all().map_err(StoreError::Sync)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

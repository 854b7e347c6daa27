//! Error types shared by block stores, the array and the factory.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::layout::Level;

/// Failure reported by a single backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("block size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("block {block}: {source}")]
    Io {
        block: u64,
        #[source]
        source: io::Error,
    },

    #[error("block {block} is beyond the addressable range")]
    OutOfRange { block: u64 },

    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("sync failed: {0}")]
    Sync(#[source] io::Error),
}

impl StoreError {
    pub(crate) fn io(block: u64, source: io::Error) -> Self {
        Self::Io { block, source }
    }
}

/// An array could not be assembled from the requested parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported RAID level: {0}")]
    UnknownLevel(String),

    #[error("{level} needs at least {min} disks, got {disks}")]
    TooFewDisks {
        level: Level,
        disks: usize,
        min: usize,
    },

    #[error("block size must be positive")]
    ZeroBlockSize,

    #[error("disk {disk} uses {actual}-byte blocks, array expects {expected}")]
    StoreBlockSize {
        disk: usize,
        expected: usize,
        actual: usize,
    },
}

/// Errors surfaced by [`crate::RaidArray`] reads and writes.
#[derive(Debug, Error)]
pub enum RaidError {
    #[error("block size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("disk {disk}: {source}")]
    Io {
        disk: usize,
        #[source]
        source: StoreError,
    },
}

impl RaidError {
    pub(crate) fn disk(disk: usize, source: StoreError) -> Self {
        Self::Io { disk, source }
    }
}

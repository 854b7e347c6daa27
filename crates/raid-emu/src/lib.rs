//! Block-level RAID emulation: layout arithmetic, parity and block stores.
#![allow(clippy::cargo_common_metadata)]

pub mod error;
pub mod factory;
pub mod layout;
pub mod metrics;
pub mod retention;

pub use error::{ConfigError, RaidError, StoreError};
pub use factory::{DEFAULT_BLOCK_SIZE, DISKS, create_array, create_array_with, disk_paths};
pub use layout::Level;
pub use layout::block::Block;
pub use retention::array::RaidArray;
pub use retention::disk::{BlockStore, FileStore, MemStore, MmapStore};

//! Array construction from a level identifier and a storage prefix.

use std::path::PathBuf;

use tracing::info;

use crate::error::{RaidError, StoreError};
use crate::layout::Level;
use crate::retention::array::{RaidArray, validate};
use crate::retention::disk::{BlockStore, FileStore};


/// Number of disks in every array the factory builds.
pub const DISKS: usize = 5;

pub const DEFAULT_BLOCK_SIZE: usize = 4096;

/// `disk_paths` names the backing file of each disk: `{prefix}_disk{i}.dat`.
#[must_use]
pub fn disk_paths(prefix: &str, disks: usize) -> Vec<PathBuf> {
    (0..disks)
        .map(|i| PathBuf::from(format!("{prefix}_disk{i}.dat")))
        .collect()
}

/// `create_array` builds a fresh file-backed array of [`DISKS`] disks.
///
/// # Arguments
/// * `level` - "0", "1", "4", "5" or a scheme name such as "rotating-parity".
/// * `prefix` - Path prefix for the disk files; existing files are replaced.
/// * `block_size` - Block length in bytes.
///
/// # Errors
/// Returns [`RaidError::Config`] for an unknown level or zero block size, in which case
/// no file is touched, or [`RaidError::Io`] if a disk file cannot be created.
pub fn create_array(
    level: &str,
    prefix: &str,
    block_size: usize,
) -> Result<RaidArray<FileStore>, RaidError> {
    let level: Level = level.parse()?;
    let paths = disk_paths(prefix, DISKS);
    create_array_with(level, DISKS, block_size, |disk| {
        let path = &paths[disk];
        FileStore::create(path, block_size).map_err(|source| StoreError::Open {
            path: path.clone(),
            source,
        })
    })
}

/// `create_array_with` validates the parameters, then opens each disk with `open`.
///
/// # Errors
/// Returns [`RaidError::Config`] before `open` is ever called if the parameters are
/// invalid, or [`RaidError::Io`] naming the disk whose `open` failed.
pub fn create_array_with<S, F>(
    level: Level,
    disks: usize,
    block_size: usize,
    mut open: F,
) -> Result<RaidArray<S>, RaidError>
where
    S: BlockStore,
    F: FnMut(usize) -> Result<S, StoreError>,
{
    validate(level, disks, block_size)?;
    let mut stores = Vec::with_capacity(disks);
    for disk in 0..disks {
        stores.push(open(disk).map_err(|e| RaidError::disk(disk, e))?);
    }
    let array = RaidArray::new(level, stores, block_size)?;
    info!(level = %level, disks, block_size, "array created");
    Ok(array)
}

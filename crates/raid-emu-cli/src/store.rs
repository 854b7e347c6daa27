use std::path::Path;

use anyhow::{Context, Result};
use raid_emu::{
    BlockStore, DISKS, FileStore, Level, MemStore, MmapStore, RaidArray, StoreError,
    create_array_with, disk_paths,
};

use crate::cli::{ArrayArgs, StoreKind};

/// Blocks preallocated per mmap image before it starts growing.
const MMAP_INITIAL_BLOCKS: u64 = 1024;

pub type DynArray = RaidArray<Box<dyn BlockStore>>;

/// `open_array` builds a fresh array for `level` named `{dir}/{name}_disk{i}.dat`.
pub fn open_array(level: Level, args: &ArrayArgs, name: &str) -> Result<DynArray> {
    if args.store != StoreKind::Mem {
        std::fs::create_dir_all(&args.dir)
            .with_context(|| format!("failed to create disk directory {}", args.dir.display()))?;
    }
    let prefix = args.dir.join(name).to_string_lossy().into_owned();
    let paths = disk_paths(&prefix, DISKS);
    let block_size = args.block_size;
    let kind = args.store;

    create_array_with(level, DISKS, block_size, |disk| {
        open_store(kind, &paths[disk], block_size)
    })
    .with_context(|| format!("failed to create {level} array at {prefix}"))
}

fn open_store(
    kind: StoreKind,
    path: &Path,
    block_size: usize,
) -> Result<Box<dyn BlockStore>, StoreError> {
    let open_err = |source| StoreError::Open {
        path: path.to_path_buf(),
        source,
    };
    let store: Box<dyn BlockStore> = match kind {
        StoreKind::File => Box::new(FileStore::create(path, block_size).map_err(open_err)?),
        StoreKind::Mmap => Box::new(
            MmapStore::create(path, block_size, MMAP_INITIAL_BLOCKS).map_err(open_err)?,
        ),
        StoreKind::Mem => Box::new(MemStore::new(block_size)),
    };
    Ok(store)
}

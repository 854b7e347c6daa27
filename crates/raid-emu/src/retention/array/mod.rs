//! RAID array: binds a layout to its disks and executes reads and writes.
//!
//! An array performs no locking. `write` takes `&mut self`, so a parity
//! read-modify-write can only interleave with other calls if the caller shares
//! the array behind its own synchronisation, which must then serialise calls.


use std::fmt::Write;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::error::{ConfigError, RaidError};
use crate::layout::block::Block;
use crate::layout::parity;
use crate::layout::stripe::raid1::mirrors;
use crate::layout::{Layout, Level, Location, ParityStripe, Stripe, WritePlan};
use crate::metrics::{DiskOp, IoOpType, MetricsSink, RaidOp};
use crate::retention::disk::BlockStore;

pub struct RaidArray<S: BlockStore> {
    layout: Layout,
    stores: Vec<S>,
    block_size: usize,
    metrics: Option<Arc<dyn MetricsSink>>,
}

impl<S: BlockStore> RaidArray<S> {
    /// `new` binds `stores` to the layout for `level`.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if the block size is zero, the disk count does not
    /// suit the level, or a store uses a different block size.
    pub fn new(level: Level, stores: Vec<S>, block_size: usize) -> Result<Self, ConfigError> {
        let layout = validate(level, stores.len(), block_size)?;
        for (disk, store) in stores.iter().enumerate() {
            if store.block_size() != block_size {
                return Err(ConfigError::StoreBlockSize {
                    disk,
                    expected: block_size,
                    actual: store.block_size(),
                });
            }
        }
        Ok(Self {
            layout,
            stores,
            block_size,
            metrics: None,
        })
    }

    /// `with_metrics` reports every logical and physical operation to `sink`.
    #[must_use]
    pub fn with_metrics(mut self, sink: Arc<dyn MetricsSink>) -> Self {
        self.metrics = Some(sink);
        self
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.layout.level()
    }

    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    #[must_use]
    pub const fn block_size(&self) -> usize {
        self.block_size
    }

    #[must_use]
    pub fn disks(&self) -> usize {
        self.stores.len()
    }

    #[must_use]
    pub fn stores(&self) -> &[S] {
        &self.stores
    }

    /// `into_stores` dissolves the array and hands back its disks.
    #[must_use]
    pub fn into_stores(self) -> Vec<S> {
        self.stores
    }

    /// `write` stores `data` at logical block `lbn`.
    ///
    /// For parity levels the sibling blocks of the stripe are read first, then the
    /// data block and finally the parity block are written. A failure between the
    /// two writes leaves that stripe's parity stale; nothing is rolled back.
    ///
    /// # Errors
    /// Returns [`RaidError::SizeMismatch`] if `data` is not one block long, or the
    /// first store error encountered.
    pub fn write(&mut self, lbn: u64, data: &[u8]) -> Result<(), RaidError> {
        if data.len() != self.block_size {
            return Err(RaidError::SizeMismatch {
                expected: self.block_size,
                actual: data.len(),
            });
        }
        let start = Instant::now();
        let plan = self.layout.write_plan(lbn);
        debug!(level = %self.level(), lbn, ?plan, "write");
        let result = match plan {
            WritePlan::Single(loc) => self.write_disk(loc, data),
            WritePlan::Mirror { block } => self.write_mirrors(block, data),
            WritePlan::Parity(stripe) => self.write_with_parity(&stripe, data),
        };
        self.record_raid_op(IoOpType::Write, lbn, start, result.is_err());
        result
    }

    /// `read` returns logical block `lbn`, zero-filled if it was never written.
    ///
    /// Exactly one disk is consulted; parity and other mirrors are never used.
    ///
    /// # Errors
    /// Returns the store error from the disk holding `lbn`.
    pub fn read(&self, lbn: u64) -> Result<Block, RaidError> {
        let start = Instant::now();
        let loc = self.layout.read_location(lbn);
        debug!(level = %self.level(), lbn, disk = loc.disk, block = loc.block, "read");
        let result = self.read_disk(loc);
        self.record_raid_op(IoOpType::Read, lbn, start, result.is_err());
        result
    }

    /// `verify_stripe` checks that the stored parity of `stripe` equals the XOR of its data.
    ///
    /// Returns `None` for levels without parity. Nothing is repaired.
    ///
    /// # Errors
    /// Returns the first store error encountered while reading the stripe.
    pub fn verify_stripe(&self, stripe: u64) -> Result<Option<bool>, RaidError> {
        let Some(members) = self.layout.parity_stripe(stripe, 0) else {
            return Ok(None);
        };
        let mut data = Vec::with_capacity(members.data_disks.len());
        for &disk in &members.data_disks {
            data.push(self.read_disk(Location::new(disk, stripe))?);
        }
        let stored = self.read_disk(members.parity())?;
        Ok(Some(parity::xor(data.as_slice()) == stored))
    }

    /// `sync` flushes every disk.
    ///
    /// # Errors
    /// Returns the first store error encountered.
    pub fn sync(&mut self) -> Result<(), RaidError> {
        for (disk, store) in self.stores.iter_mut().enumerate() {
            store.sync().map_err(|e| RaidError::disk(disk, e))?;
        }
        Ok(())
    }

    #[must_use]
    pub fn status_string(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} ({}), {} disks, {}-byte blocks",
            self.level(),
            self.level().name(),
            self.disks(),
            self.block_size
        );
        for (i, store) in self.stores.iter().enumerate() {
            let _ = writeln!(out, "disk {i}: {}", store.describe());
        }
        out
    }

    fn write_mirrors(&mut self, block: u64, data: &[u8]) -> Result<(), RaidError> {
        for loc in mirrors(block, self.stores.len()) {
            if let Err(e) = self.write_disk(loc, data) {
                if loc.disk > 0 {
                    warn!(
                        block,
                        written = loc.disk,
                        "mirror write failed, earlier mirrors diverge"
                    );
                }
                return Err(e);
            }
        }
        Ok(())
    }

    fn write_with_parity(
        &mut self,
        stripe: &ParityStripe,
        data: &[u8],
    ) -> Result<(), RaidError> {
        let mut members: Vec<Block> = Vec::with_capacity(stripe.data_disks.len());
        for (_, loc) in stripe.siblings() {
            members.push(self.read_disk(loc)?);
        }
        members.insert(stripe.slot, Block::from(data));
        let parity = parity::xor(members.as_slice());

        self.write_disk(stripe.target(), data)?;
        if let Err(e) = self.write_disk(stripe.parity(), parity.as_bytes()) {
            warn!(
                stripe = stripe.stripe,
                parity_disk = stripe.parity_disk,
                "parity write failed after data write, stripe parity is stale"
            );
            return Err(e);
        }
        Ok(())
    }

    fn write_disk(&mut self, loc: Location, data: &[u8]) -> Result<(), RaidError> {
        let start = Instant::now();
        trace!(disk = loc.disk, block = loc.block, "disk write");
        let result = self.stores[loc.disk]
            .write_block(loc.block, data)
            .map_err(|e| RaidError::disk(loc.disk, e));
        self.record_disk_op(loc.disk, IoOpType::Write, start, result.is_err());
        result
    }

    fn read_disk(&self, loc: Location) -> Result<Block, RaidError> {
        let start = Instant::now();
        trace!(disk = loc.disk, block = loc.block, "disk read");
        let result = self.stores[loc.disk]
            .read_block(loc.block)
            .map_err(|e| RaidError::disk(loc.disk, e));
        self.record_disk_op(loc.disk, IoOpType::Read, start, result.is_err());
        result
    }

    fn record_disk_op(&self, disk: usize, op: IoOpType, start: Instant, error: bool) {
        if let Some(sink) = &self.metrics {
            sink.record_disk_op(DiskOp {
                disk,
                op,
                bytes: self.block_size as u64,
                latency_seconds: start.elapsed().as_secs_f64(),
                error,
            });
        }
    }

    fn record_raid_op(&self, op: IoOpType, lbn: u64, start: Instant, error: bool) {
        if let Some(sink) = &self.metrics {
            sink.record_raid_op(RaidOp {
                level: self.level(),
                op,
                lbn,
                bytes: self.block_size as u64,
                latency_seconds: start.elapsed().as_secs_f64(),
                error,
            });
        }
    }
}

/// `validate` checks array parameters before any store is created.
///
/// # Errors
/// Returns a [`ConfigError`] if the block size is zero or the disk count does not suit
/// the level.
pub fn validate(level: Level, disks: usize, block_size: usize) -> Result<Layout, ConfigError> {
    if block_size == 0 {
        return Err(ConfigError::ZeroBlockSize);
    }
    Layout::new(level, disks)
}

//! RAID0 stripe layout implementation.

use crate::layout::{Location, split};

mod stripe_impl;
#[cfg(test)]
mod stripe_trait_tests;

/// Raid0 spreads consecutive blocks round-robin across all disks without parity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Raid0 {
    disks: usize,
}

impl Raid0 {
    /// # Panics
    /// Panics if `disks` is zero.
    #[must_use]
    pub fn new(disks: usize) -> Self {
        assert!(disks > 0, "RAID0 needs at least one disk.");
        Self { disks }
    }
}

/// `locate` maps `lbn` to disk `lbn mod disks`, block `lbn div disks`.
#[must_use]
pub fn locate(lbn: u64, disks: usize) -> Location {
    let (block, disk) = split(lbn, disks);
    Location::new(disk, block)
}

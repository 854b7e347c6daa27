//! RAID4 stripe layout implementation.

use crate::layout::{ParityStripe, split};

mod stripe_impl;
#[cfg(test)]
mod stripe_trait_tests;

/// Raid4 stripes data over all but the last disk, which holds every parity block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Raid4 {
    disks: usize,
}

impl Raid4 {
    /// # Panics
    /// Panics if there are fewer than two disks.
    #[must_use]
    pub fn new(disks: usize) -> Self {
        assert!(disks >= 2, "RAID4 needs at least two disks.");
        Self { disks }
    }

    #[must_use]
    pub const fn parity_index(&self) -> usize {
        self.disks - 1
    }
}

/// `members` lists the data disks and the parity disk of `stripe`.
#[must_use]
pub fn members(stripe: u64, slot: usize, disks: usize) -> ParityStripe {
    let parity_disk = disks - 1;
    ParityStripe {
        stripe,
        slot,
        data_disks: (0..parity_disk).collect(),
        parity_disk,
    }
}

/// `locate` maps `lbn` to its stripe with data index `lbn mod (disks - 1)`.
#[must_use]
pub fn locate(lbn: u64, disks: usize) -> ParityStripe {
    let (stripe, slot) = split(lbn, disks - 1);
    members(stripe, slot, disks)
}

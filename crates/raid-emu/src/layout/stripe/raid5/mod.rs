//! RAID5 stripe layout implementation.

use crate::layout::{ParityStripe, split};

mod stripe_impl;

/// Raid5 rotates the parity disk by stripe so parity writes spread over all disks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Raid5 {
    disks: usize,
}

impl Raid5 {
    /// # Panics
    /// Panics if there are fewer than two disks.
    #[must_use]
    pub fn new(disks: usize) -> Self {
        assert!(disks >= 2, "RAID5 needs at least two disks.");
        Self { disks }
    }
}

/// `parity_disk` is `stripe mod disks`.
#[must_use]
pub fn parity_disk(stripe: u64, disks: usize) -> usize {
    split(stripe, disks).1
}

/// `data_disk` maps a data index to its physical disk by skipping the parity disk.
#[must_use]
pub const fn data_disk(data_index: usize, parity_disk: usize) -> usize {
    if data_index >= parity_disk {
        data_index + 1
    } else {
        data_index
    }
}

/// `members` lists the data disks and the parity disk of `stripe`.
#[must_use]
pub fn members(stripe: u64, slot: usize, disks: usize) -> ParityStripe {
    let parity_disk = parity_disk(stripe, disks);
    ParityStripe {
        stripe,
        slot,
        data_disks: (0..disks - 1).map(|i| data_disk(i, parity_disk)).collect(),
        parity_disk,
    }
}

/// `locate` maps `lbn` to its stripe with data index `lbn mod (disks - 1)`.
#[must_use]
pub fn locate(lbn: u64, disks: usize) -> ParityStripe {
    let (stripe, slot) = split(lbn, disks - 1);
    members(stripe, slot, disks)
}

//! RAID1 stripe layout implementation.

use crate::layout::Location;

mod stripe_impl;
#[cfg(test)]
mod stripe_trait_tests;

/// Raid1 keeps an identical copy of every block on every disk.
///
/// Reads are always served by disk 0; the other mirrors are write-only from the
/// array's point of view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Raid1 {
    disks: usize,
}

impl Raid1 {
    /// # Panics
    /// Panics if `disks` is zero.
    #[must_use]
    pub fn new(disks: usize) -> Self {
        assert!(disks > 0, "RAID1 needs at least one disk.");
        Self { disks }
    }
}

/// `primary` is the copy reads come from.
#[must_use]
pub const fn primary(lbn: u64) -> Location {
    Location::new(0, lbn)
}

/// `mirrors` lists every copy of `lbn` in write order.
pub fn mirrors(lbn: u64, disks: usize) -> impl Iterator<Item = Location> {
    (0..disks).map(move |disk| Location::new(disk, lbn))
}

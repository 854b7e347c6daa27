//! Stripe trait definitions for mapping logical blocks onto disks.

use enum_dispatch::enum_dispatch;

use crate::layout::{Level, Location, ParityStripe, WritePlan};

/// Stripe describes the pure address arithmetic of one RAID layout.
///
/// Implementations never touch storage; the array executes the plans they return.
#[enum_dispatch]
pub trait Stripe {
    /// level identifies the scheme.
    fn level(&self) -> Level;
    /// disks is the total number of disks the layout spans.
    fn disks(&self) -> usize;
    /// data_per_stripe is the number of logical blocks sharing one physical block number.
    fn data_per_stripe(&self) -> usize;
    /// read_location returns the single physical block a read is served from.
    ///
    /// # Arguments
    /// * `lbn` - The logical block number.
    fn read_location(&self, lbn: u64) -> Location;
    /// write_plan returns every physical update a write of `lbn` performs.
    ///
    /// # Arguments
    /// * `lbn` - The logical block number.
    fn write_plan(&self, lbn: u64) -> WritePlan;
    /// parity_stripe describes the members of `stripe` with `slot` as the written data index.
    ///
    /// Layouts without parity return `None`.
    fn parity_stripe(&self, _stripe: u64, _slot: usize) -> Option<ParityStripe> {
        None
    }
    /// parity_disk returns the disk holding parity for `stripe`, if the layout has parity.
    fn parity_disk(&self, stripe: u64) -> Option<usize> {
        self.parity_stripe(stripe, 0).map(|p| p.parity_disk)
    }
}

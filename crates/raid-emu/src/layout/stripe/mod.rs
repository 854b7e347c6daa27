//! Stripe layout implementations for supported RAID modes.

pub mod raid0;
pub mod raid1;
pub mod raid4;
pub mod raid5;
pub mod traits;

use enum_dispatch::enum_dispatch;

use crate::error::ConfigError;
use crate::layout::{Level, Location, ParityStripe, WritePlan};
use raid0::Raid0;
use raid1::Raid1;
use raid4::Raid4;
use raid5::Raid5;
use traits::stripe::Stripe;

#[cfg(test)]
mod layout_tests;

/// Layout is the closed set of redundancy schemes an array can be bound to.
#[enum_dispatch(Stripe)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Layout {
    Raid0(Raid0),
    Raid1(Raid1),
    Raid4(Raid4),
    Raid5(Raid5),
}

impl Layout {
    /// `new` builds the layout for `level` over `disks` disks.
    ///
    /// # Errors
    /// Returns [`ConfigError::TooFewDisks`] if the level is undefined for that disk count.
    pub fn new(level: Level, disks: usize) -> Result<Self, ConfigError> {
        let min = level.min_disks();
        if disks < min {
            return Err(ConfigError::TooFewDisks { level, disks, min });
        }
        Ok(match level {
            Level::Raid0 => Raid0::new(disks).into(),
            Level::Raid1 => Raid1::new(disks).into(),
            Level::Raid4 => Raid4::new(disks).into(),
            Level::Raid5 => Raid5::new(disks).into(),
        })
    }
}

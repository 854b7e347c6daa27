use crate::layout::stripe::raid0::{Raid0, locate};
use crate::layout::stripe::traits::stripe::Stripe;
use crate::layout::{Level, Location, WritePlan};

impl Stripe for Raid0 {
    fn level(&self) -> Level {
        Level::Raid0
    }

    fn disks(&self) -> usize {
        self.disks
    }

    fn data_per_stripe(&self) -> usize {
        self.disks
    }

    fn read_location(&self, lbn: u64) -> Location {
        locate(lbn, self.disks)
    }

    fn write_plan(&self, lbn: u64) -> WritePlan {
        WritePlan::Single(locate(lbn, self.disks))
    }
}

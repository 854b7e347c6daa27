use crate::layout::stripe::raid1::{Raid1, primary};
use crate::layout::stripe::traits::stripe::Stripe;
use crate::layout::{Level, Location, WritePlan};

impl Stripe for Raid1 {
    fn level(&self) -> Level {
        Level::Raid1
    }

    fn disks(&self) -> usize {
        self.disks
    }

    fn data_per_stripe(&self) -> usize {
        1
    }

    fn read_location(&self, lbn: u64) -> Location {
        primary(lbn)
    }

    fn write_plan(&self, lbn: u64) -> WritePlan {
        WritePlan::Mirror { block: lbn }
    }
}

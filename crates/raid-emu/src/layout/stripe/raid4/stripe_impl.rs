use crate::layout::stripe::raid4::{Raid4, locate, members};
use crate::layout::stripe::traits::stripe::Stripe;
use crate::layout::{Level, Location, ParityStripe, WritePlan};

impl Stripe for Raid4 {
    fn level(&self) -> Level {
        Level::Raid4
    }

    fn disks(&self) -> usize {
        self.disks
    }

    fn data_per_stripe(&self) -> usize {
        self.disks - 1
    }

    fn read_location(&self, lbn: u64) -> Location {
        locate(lbn, self.disks).target()
    }

    fn write_plan(&self, lbn: u64) -> WritePlan {
        WritePlan::Parity(locate(lbn, self.disks))
    }

    fn parity_stripe(&self, stripe: u64, slot: usize) -> Option<ParityStripe> {
        Some(members(stripe, slot, self.disks))
    }
}

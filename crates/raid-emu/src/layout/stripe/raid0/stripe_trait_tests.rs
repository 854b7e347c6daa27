use crate::layout::stripe::raid0::{Raid0, locate};
use crate::layout::stripe::traits::stripe::Stripe;
use crate::layout::{Location, WritePlan};

#[test]
fn first_stripe_covers_every_disk_once() {
    for lbn in 0..5u64 {
        assert_eq!(locate(lbn, 5), Location::new(lbn as usize, 0), "lbn {lbn}");
    }
    assert_eq!(locate(5, 5), Location::new(0, 1));
    assert_eq!(locate(13, 5), Location::new(3, 2));
}

#[test]
fn data_per_stripe_matches_disk_count() {
    let r = Raid0::new(3);
    assert_eq!(r.disks(), 3);
    assert_eq!(r.data_per_stripe(), 3);
    assert!(r.parity_disk(0).is_none());
}

#[test]
fn write_plan_and_read_location_agree() {
    let r = Raid0::new(4);
    for lbn in 0..40u64 {
        assert_eq!(r.write_plan(lbn), WritePlan::Single(r.read_location(lbn)));
    }
}

#[test]
fn single_disk_is_linear() {
    for lbn in [0u64, 1, 7, 1 << 40] {
        assert_eq!(locate(lbn, 1), Location::new(0, lbn));
    }
}

#[test]
#[should_panic(expected = "RAID0 needs at least one disk.")]
fn zero_disks_panics() {
    let _ = Raid0::new(0);
}

use crate::layout::stripe::raid4::{Raid4, locate};
use crate::layout::stripe::traits::stripe::Stripe;
use crate::layout::{Location, WritePlan};

#[test]
fn parity_lives_on_last_disk_for_every_stripe() {
    let r = Raid4::new(5);
    assert_eq!(r.parity_index(), 4);
    for stripe in 0..20u64 {
        assert_eq!(r.parity_disk(stripe), Some(4));
    }
}

#[test]
fn data_fills_first_disks_in_order() {
    let r = Raid4::new(5);
    assert_eq!(r.data_per_stripe(), 4);
    let expected = [
        (0u64, Location::new(0, 0)),
        (1, Location::new(1, 0)),
        (3, Location::new(3, 0)),
        (4, Location::new(0, 1)),
        (11, Location::new(3, 2)),
    ];
    for (lbn, loc) in expected {
        assert_eq!(r.read_location(lbn), loc, "lbn {lbn}");
    }
}

#[test]
fn write_plan_lists_siblings_and_parity() {
    let plan = locate(6, 5);
    assert_eq!(plan.stripe, 1);
    assert_eq!(plan.slot, 2);
    assert_eq!(plan.target(), Location::new(2, 1));
    assert_eq!(plan.parity(), Location::new(4, 1));

    let siblings: Vec<_> = plan.siblings().collect();
    assert_eq!(
        siblings,
        vec![
            (0, Location::new(0, 1)),
            (1, Location::new(1, 1)),
            (3, Location::new(3, 1)),
        ]
    );
    assert_eq!(Raid4::new(5).write_plan(6), WritePlan::Parity(plan));
}

#[test]
fn two_disks_degenerate_to_mirrored_parity() {
    let plan = locate(3, 2);
    assert_eq!(plan.stripe, 3);
    assert_eq!(plan.target(), Location::new(0, 3));
    assert_eq!(plan.parity(), Location::new(1, 3));
    assert_eq!(plan.siblings().count(), 0);
}

#[test]
#[should_panic(expected = "RAID4 needs at least two disks.")]
fn one_disk_panics() {
    let _ = Raid4::new(1);
}

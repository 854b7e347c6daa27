use crate::layout::stripe::raid1::{Raid1, mirrors};
use crate::layout::stripe::traits::stripe::Stripe;
use crate::layout::{Location, WritePlan};

#[test]
fn data_per_stripe_is_one() {
    let r = Raid1::new(5);
    assert_eq!(r.data_per_stripe(), 1);
    assert_eq!(r.disks(), 5);
}

#[test]
fn reads_always_come_from_disk_zero() {
    let r = Raid1::new(3);
    for lbn in [0u64, 1, 2, 99, u64::MAX] {
        assert_eq!(r.read_location(lbn), Location::new(0, lbn));
    }
}

#[test]
fn write_targets_same_block_on_every_mirror_in_order() {
    let r = Raid1::new(4);
    assert_eq!(r.write_plan(17), WritePlan::Mirror { block: 17 });

    let copies: Vec<Location> = mirrors(17, 4).collect();
    assert_eq!(
        copies,
        vec![
            Location::new(0, 17),
            Location::new(1, 17),
            Location::new(2, 17),
            Location::new(3, 17),
        ]
    );
}

#[test]
fn has_no_parity() {
    assert!(Raid1::new(2).parity_stripe(0, 0).is_none());
}

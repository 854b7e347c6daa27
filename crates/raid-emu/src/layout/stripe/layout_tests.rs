use super::Layout;
use crate::error::ConfigError;
use crate::layout::{Level, Stripe, WritePlan};

#[test]
fn new_dispatches_to_matching_scheme() {
    for level in Level::ALL {
        let layout = Layout::new(level, 5).unwrap();
        assert_eq!(layout.level(), level);
        assert_eq!(layout.disks(), 5);
    }
}

#[test]
fn data_per_stripe_by_level() {
    assert_eq!(Layout::new(Level::Raid0, 5).unwrap().data_per_stripe(), 5);
    assert_eq!(Layout::new(Level::Raid1, 5).unwrap().data_per_stripe(), 1);
    assert_eq!(Layout::new(Level::Raid4, 5).unwrap().data_per_stripe(), 4);
    assert_eq!(Layout::new(Level::Raid5, 5).unwrap().data_per_stripe(), 4);
}

#[test]
fn parity_levels_reject_single_disk() {
    for level in [Level::Raid4, Level::Raid5] {
        let err = Layout::new(level, 1).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooFewDisks { disks: 1, min: 2, .. }
        ));
    }
    assert!(Layout::new(Level::Raid0, 0).is_err());
    assert!(Layout::new(Level::Raid1, 1).is_ok());
}

#[test]
fn only_parity_levels_plan_parity_writes() {
    for level in Level::ALL {
        let layout = Layout::new(level, 5).unwrap();
        let is_parity = matches!(layout.write_plan(9), WritePlan::Parity(_));
        assert_eq!(is_parity, level.has_parity(), "{level}");
        assert_eq!(layout.parity_disk(2).is_some(), level.has_parity(), "{level}");
    }
}

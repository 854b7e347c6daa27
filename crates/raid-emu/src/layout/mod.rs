//! Layout arithmetic: where each logical block lives and how parity is placed.

pub mod block;
pub mod level;
pub mod parity;
pub mod stripe;

pub use level::Level;
pub use stripe::Layout;
pub use stripe::traits::stripe::Stripe;

/// Location addresses one physical block on one disk of the array.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Location {
    pub disk: usize,
    pub block: u64,
}

impl Location {
    #[must_use]
    pub const fn new(disk: usize, block: u64) -> Self {
        Self { disk, block }
    }
}

/// ParityStripe describes the members of one parity stripe touched by a write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParityStripe {
    /// Stripe index; also the physical block number on every member disk.
    pub stripe: u64,
    /// Data index of the written block within the stripe.
    pub slot: usize,
    /// Physical disk for each data index, in data-index order.
    pub data_disks: Vec<usize>,
    pub parity_disk: usize,
}

impl ParityStripe {
    /// `target` is where the written data block lands.
    #[must_use]
    pub fn target(&self) -> Location {
        Location::new(self.data_disks[self.slot], self.stripe)
    }

    #[must_use]
    pub const fn parity(&self) -> Location {
        Location::new(self.parity_disk, self.stripe)
    }

    /// `siblings` yields `(data_index, location)` for every other data block of the stripe.
    pub fn siblings(&self) -> impl Iterator<Item = (usize, Location)> + '_ {
        self.data_disks
            .iter()
            .enumerate()
            .filter(move |(i, _)| *i != self.slot)
            .map(move |(i, &disk)| (i, Location::new(disk, self.stripe)))
    }
}

/// WritePlan lists the physical blocks a logical write must update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WritePlan {
    /// One data block, no redundancy.
    Single(Location),
    /// The same block number on every disk, written in disk order.
    Mirror { block: u64 },
    /// Read-modify-write of a data block and its stripe parity.
    Parity(ParityStripe),
}

/// `split` divides a logical block number into `(stripe, index within stripe)`.
///
/// # Panics
/// Panics if `per_stripe` is zero.
#[must_use]
pub fn split(lbn: u64, per_stripe: usize) -> (u64, usize) {
    assert!(per_stripe > 0, "stripe width must be positive.");
    let width = per_stripe as u64;
    // The remainder is below `per_stripe`, so it fits in usize.
    (lbn / width, (lbn % width) as usize)
}

//! RAID level identifiers and their parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;


/// Level names one of the supported redundancy schemes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    /// Striping without redundancy.
    Raid0,
    /// Every disk holds a full copy.
    Raid1,
    /// Striping with the parity on the last disk.
    Raid4,
    /// Striping with parity rotating across disks by stripe.
    Raid5,
}

impl Level {
    pub const ALL: [Self; 4] = [Self::Raid0, Self::Raid1, Self::Raid4, Self::Raid5];

    /// Numeric identifier as used on the command line ("0", "1", "4", "5").
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Raid0 => "0",
            Self::Raid1 => "1",
            Self::Raid4 => "4",
            Self::Raid5 => "5",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Raid0 => "striping",
            Self::Raid1 => "mirroring",
            Self::Raid4 => "dedicated-parity",
            Self::Raid5 => "rotating-parity",
        }
    }

    #[must_use]
    pub const fn has_parity(self) -> bool {
        matches!(self, Self::Raid4 | Self::Raid5)
    }

    /// Smallest disk count the layout arithmetic is defined for.
    #[must_use]
    pub const fn min_disks(self) -> usize {
        if self.has_parity() { 2 } else { 1 }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RAID{}", self.id())
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" | "raid0" | "striping" => Ok(Self::Raid0),
            "1" | "raid1" | "mirroring" => Ok(Self::Raid1),
            "4" | "raid4" | "dedicated-parity" => Ok(Self::Raid4),
            "5" | "raid5" | "rotating-parity" => Ok(Self::Raid5),
            _ => Err(ConfigError::UnknownLevel(s.to_string())),
        }
    }
}

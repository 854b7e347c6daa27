use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use raid_emu::{DEFAULT_BLOCK_SIZE, Level};

#[derive(Parser)]
#[command(name = "raid-emu", author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write one block per level and read it back.
    Check(CheckArgs),

    /// Sequential write/read throughput per level.
    Bench(BenchArgs),

    /// Print where logical blocks land, without touching storage.
    Map(MapArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ArrayArgs {
    /// Directory holding the disk files.
    #[arg(long, env = "RAID_EMU_DIR", default_value = ".")]
    pub dir: PathBuf,

    #[arg(long, env = "RAID_EMU_BLOCK_SIZE", default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    #[arg(long, env = "RAID_EMU_STORE", value_enum, default_value_t = StoreKind::File)]
    pub store: StoreKind,

    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [RaidMode::Raid0, RaidMode::Raid1, RaidMode::Raid4, RaidMode::Raid5]
    )]
    pub levels: Vec<RaidMode>,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    #[command(flatten)]
    pub array: ArrayArgs,
}

#[derive(Args, Debug, Clone)]
pub struct BenchArgs {
    #[command(flatten)]
    pub array: ArrayArgs,

    /// Size of the data set written and read back, in MiB.
    #[arg(
        long,
        env = "RAID_EMU_BENCH_MB",
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub mb: u64,

    /// Seed for the random block pattern.
    #[arg(long, env = "RAID_EMU_SEED", default_value_t = 42)]
    pub seed: u64,
}

#[derive(Args, Debug, Clone)]
pub struct MapArgs {
    #[arg(long, value_enum)]
    pub level: RaidMode,

    #[arg(long, default_value_t = 0)]
    pub lbn: u64,

    #[arg(long, default_value_t = 1)]
    pub count: u64,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RaidMode {
    #[value(aliases = ["0", "striping"])]
    Raid0,
    #[value(aliases = ["1", "mirroring"])]
    Raid1,
    #[value(aliases = ["4", "dedicated-parity"])]
    Raid4,
    #[value(aliases = ["5", "rotating-parity"])]
    Raid5,
}

impl From<RaidMode> for Level {
    fn from(mode: RaidMode) -> Self {
        match mode {
            RaidMode::Raid0 => Self::Raid0,
            RaidMode::Raid1 => Self::Raid1,
            RaidMode::Raid4 => Self::Raid4,
            RaidMode::Raid5 => Self::Raid5,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreKind {
    /// Regular files with a sync after every block write.
    File,
    /// Memory-mapped image files.
    Mmap,
    /// In-process memory, nothing persisted.
    Mem,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case("5", RaidMode::Raid5)]
    #[case("raid4", RaidMode::Raid4)]
    #[case("mirroring", RaidMode::Raid1)]
    #[case("0", RaidMode::Raid0)]
    fn map_accepts_level_aliases(#[case] level: &str, #[case] expected: RaidMode) {
        let cli = Cli::try_parse_from(["raid-emu", "map", "--level", level]).unwrap();
        let Command::Map(args) = cli.command else {
            panic!("expected map subcommand");
        };
        assert_eq!(args.level, expected);
        assert_eq!(args.count, 1);
    }

    #[test]
    fn bench_defaults_cover_all_levels() {
        let cli = Cli::try_parse_from(["raid-emu", "bench"]).unwrap();
        let Command::Bench(args) = cli.command else {
            panic!("expected bench subcommand");
        };
        assert_eq!(args.mb, 100);
        assert_eq!(args.seed, 42);
        assert_eq!(args.array.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(
            args.array.levels,
            vec![RaidMode::Raid0, RaidMode::Raid1, RaidMode::Raid4, RaidMode::Raid5]
        );
    }

    #[test]
    fn levels_accept_comma_list() {
        let cli =
            Cli::try_parse_from(["raid-emu", "check", "--levels", "4,5", "--store", "mem"])
                .unwrap();
        let Command::Check(args) = cli.command else {
            panic!("expected check subcommand");
        };
        assert_eq!(args.array.levels, vec![RaidMode::Raid4, RaidMode::Raid5]);
        assert_eq!(args.array.store, StoreKind::Mem);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(Cli::try_parse_from(["raid-emu", "map", "--level", "3"]).is_err());
    }
}

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use raid_emu::{DISKS, Level};
use tracing::info;

use crate::cli::BenchArgs;
use crate::store::open_array;
use crate::tally::DiskTally;

const MIB: u64 = 1024 * 1024;

/// BenchReport holds the timings of one sequential write and read-back pass.
#[derive(Debug)]
pub struct BenchReport {
    pub level: Level,
    pub blocks: u64,
    pub block_size: usize,
    pub write: Duration,
    pub read: Duration,
    pub disk_writes: Vec<u64>,
    pub disk_reads: Vec<u64>,
}

impl BenchReport {
    fn total_mb(&self) -> f64 {
        (self.blocks * self.block_size as u64) as f64 / MIB as f64
    }

    fn per_block(&self, total: Duration) -> Duration {
        total.div_f64(self.blocks as f64)
    }

    fn throughput(&self, total: Duration) -> f64 {
        self.total_mb() / total.as_secs_f64().max(f64::EPSILON)
    }

    fn print(&self) {
        println!("Benchmark RAID level {}", self.level.id());
        println!(
            "Total size: {:.0} MB, block size: {} bytes, blocks: {}",
            self.total_mb(),
            self.block_size,
            self.blocks
        );
        println!(
            "Write: total = {:?}, per block = {:?}, throughput = {:.2} MB/s",
            self.write,
            self.per_block(self.write),
            self.throughput(self.write)
        );
        println!(
            "Read : total = {:?}, per block = {:?}, throughput = {:.2} MB/s",
            self.read,
            self.per_block(self.read),
            self.throughput(self.read)
        );
        println!("Disk writes: {:?}", self.disk_writes);
        println!("Disk reads : {:?}", self.disk_reads);
        println!();
    }
}

pub fn run(args: &BenchArgs) -> Result<()> {
    for &mode in &args.array.levels {
        let report = bench_level(Level::from(mode), args)?;
        report.print();
    }
    Ok(())
}

/// `bench_level` writes `mb` MiB of one seeded random block sequentially, then reads it all back.
pub fn bench_level(level: Level, args: &BenchArgs) -> Result<BenchReport> {
    let block_size = args.array.block_size;
    let bytes = args
        .mb
        .checked_mul(MIB)
        .with_context(|| format!("{} MiB does not fit in a byte count", args.mb))?;
    let blocks = bytes / block_size as u64;
    ensure!(
        blocks > 0,
        "{} MiB holds no {block_size}-byte blocks",
        args.mb
    );

    let tally = Arc::new(DiskTally::new(DISKS));
    let mut array = open_array(level, &args.array, &format!("bench_raid{}", level.id()))?
        .with_metrics(tally.clone());

    let mut data = vec![0u8; block_size];
    StdRng::seed_from_u64(args.seed).fill_bytes(&mut data);

    info!(level = %level, blocks, block_size, "bench write pass");
    let start = Instant::now();
    for lbn in 0..blocks {
        array.write(lbn, &data)?;
    }
    let write = start.elapsed();
    let disk_writes = tally.writes();
    tally.reset();

    info!(level = %level, blocks, block_size, "bench read pass");
    let start = Instant::now();
    for lbn in 0..blocks {
        array.read(lbn)?;
    }
    let read = start.elapsed();

    Ok(BenchReport {
        level,
        blocks,
        block_size,
        write,
        read,
        disk_writes,
        disk_reads: tally.reads(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ArrayArgs, StoreKind};

    fn args(store: StoreKind, block_size: usize, dir: &tempfile::TempDir) -> BenchArgs {
        BenchArgs {
            array: ArrayArgs {
                dir: dir.path().to_path_buf(),
                block_size,
                store,
                levels: Vec::new(),
            },
            mb: 1,
            seed: 42,
        }
    }

    #[test]
    fn rotating_parity_balances_disk_writes() {
        let dir = tempfile::TempDir::new().unwrap();
        let report = bench_level(Level::Raid5, &args(StoreKind::Mem, 4096, &dir)).unwrap();
        // 256 blocks over 64 stripes, parity rotating across 5 disks.
        assert_eq!(report.blocks, 256);
        assert_eq!(report.disk_writes.iter().sum::<u64>(), 512);
        let max = report.disk_writes.iter().max().copied().unwrap();
        let min = report.disk_writes.iter().min().copied().unwrap();
        assert!(max - min <= 8, "{:?}", report.disk_writes);
        assert_eq!(report.disk_reads.iter().sum::<u64>(), 256);
    }

    #[test]
    fn mirroring_reads_only_from_first_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let report = bench_level(Level::Raid1, &args(StoreKind::Mem, 4096, &dir)).unwrap();
        assert_eq!(report.disk_writes, vec![256; 5]);
        assert_eq!(report.disk_reads, vec![256, 0, 0, 0, 0]);
    }

    #[test]
    fn file_backed_bench_leaves_disk_images() {
        let dir = tempfile::TempDir::new().unwrap();
        let report = bench_level(Level::Raid0, &args(StoreKind::File, 65536, &dir)).unwrap();
        assert_eq!(report.blocks, 16);
        assert!(dir.path().join("bench_raid0_disk4.dat").exists());
    }

    #[test]
    fn data_set_too_large_to_address_is_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut args = args(StoreKind::Mem, 4096, &dir);
        args.mb = u64::MAX;
        let err = bench_level(Level::Raid0, &args).unwrap_err();
        assert!(err.to_string().contains("does not fit"), "{err}");
    }

    #[test]
    fn oversized_blocks_are_rejected() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(bench_level(Level::Raid0, &args(StoreKind::Mem, 2 * 1024 * 1024, &dir)).is_err());
    }
}

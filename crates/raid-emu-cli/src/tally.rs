use std::sync::atomic::{AtomicU64, Ordering};

use raid_emu::metrics::{DiskOp, IoOpType, MetricsSink, RaidOp};

/// DiskTally counts physical operations per disk.
pub struct DiskTally {
    reads: Vec<AtomicU64>,
    writes: Vec<AtomicU64>,
}

impl DiskTally {
    pub fn new(disks: usize) -> Self {
        Self {
            reads: (0..disks).map(|_| AtomicU64::new(0)).collect(),
            writes: (0..disks).map(|_| AtomicU64::new(0)).collect(),
        }
    }

    pub fn reads(&self) -> Vec<u64> {
        snapshot(&self.reads)
    }

    pub fn writes(&self) -> Vec<u64> {
        snapshot(&self.writes)
    }

    pub fn reset(&self) {
        for c in self.reads.iter().chain(&self.writes) {
            c.store(0, Ordering::Relaxed);
        }
    }
}

fn snapshot(counters: &[AtomicU64]) -> Vec<u64> {
    counters.iter().map(|c| c.load(Ordering::Relaxed)).collect()
}

impl MetricsSink for DiskTally {
    fn record_disk_op(&self, op: DiskOp) {
        let counters = match op.op {
            IoOpType::Read => &self.reads,
            IoOpType::Write => &self.writes,
        };
        if let Some(c) = counters.get(op.disk) {
            c.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn record_raid_op(&self, _op: RaidOp) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use raid_emu::{Level, MemStore, RaidArray};
    use std::sync::Arc;

    fn array(level: Level, tally: &Arc<DiskTally>) -> RaidArray<MemStore> {
        let stores = (0..5).map(|_| MemStore::new(8)).collect();
        RaidArray::new(level, stores, 8)
            .unwrap()
            .with_metrics(tally.clone())
    }

    #[test]
    fn dedicated_parity_concentrates_writes_on_last_disk() {
        let tally = Arc::new(DiskTally::new(5));
        let mut a = array(Level::Raid4, &tally);
        for lbn in 0..40 {
            a.write(lbn, &[1u8; 8]).unwrap();
        }
        assert_eq!(tally.writes(), vec![10, 10, 10, 10, 40]);
    }

    #[test]
    fn rotating_parity_spreads_writes() {
        let tally = Arc::new(DiskTally::new(5));
        let mut a = array(Level::Raid5, &tally);
        for lbn in 0..40 {
            a.write(lbn, &[1u8; 8]).unwrap();
        }
        assert_eq!(tally.writes(), vec![16; 5]);
        tally.reset();
        assert_eq!(tally.writes(), vec![0; 5]);
        assert_eq!(tally.reads(), vec![0; 5]);
    }

    #[test]
    fn only_physical_operations_are_counted() {
        let tally = Arc::new(DiskTally::new(5));
        let mut a = array(Level::Raid0, &tally);
        a.write(0, &[1u8; 8]).unwrap();
        assert!(a.write(1, &[1u8; 3]).is_err());
        a.read(0).unwrap();
        assert_eq!(tally.writes(), vec![1, 0, 0, 0, 0]);
        assert_eq!(tally.reads(), vec![1, 0, 0, 0, 0]);
    }
}

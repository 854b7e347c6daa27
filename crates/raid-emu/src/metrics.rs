//! Operation hooks an array reports to when a sink is attached.

use crate::layout::Level;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IoOpType {
    Read,
    Write,
}

/// One physical block read or write on one disk.
#[derive(Copy, Clone, Debug)]
pub struct DiskOp {
    pub disk: usize,
    pub op: IoOpType,
    pub bytes: u64,
    pub latency_seconds: f64,
    pub error: bool,
}

/// One logical `read` or `write` call on an array.
#[derive(Copy, Clone, Debug)]
pub struct RaidOp {
    pub level: Level,
    pub op: IoOpType,
    pub lbn: u64,
    pub bytes: u64,
    pub latency_seconds: f64,
    pub error: bool,
}

pub trait MetricsSink: Send + Sync + 'static {
    fn record_disk_op(&self, op: DiskOp);
    fn record_raid_op(&self, op: RaidOp);
}

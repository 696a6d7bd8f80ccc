use crate::geo::Label;
use crate::partition::{CellIndex, ClusteredPartition};
use serde::Serialize;
use tracing::debug;

/// Diagnostic summary emitted once per clustered partition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartitionReport {
    pub cell: CellIndex,
    pub id_offset: Label,
    pub cluster_count: usize,
    pub partition_size: usize,
}

impl From<&ClusteredPartition> for PartitionReport {
    fn from(p: &ClusteredPartition) -> Self {
        Self {
            cell: p.cell,
            id_offset: p.id_offset,
            cluster_count: p.cluster_count,
            partition_size: p.points.len(),
        }
    }
}

/// Observer for partition reports. Called from worker tasks concurrently.
pub trait ReportSink: Send + Sync {
    fn report(&self, report: &PartitionReport);
}

/// Prints one line per partition to stdout
pub struct ConsoleReporter;

impl ReportSink for ConsoleReporter {
    fn report(&self, report: &PartitionReport) {
        println!(
            "Partition {:10} : [{:4},{:6}]",
            report.id_offset, report.cluster_count, report.partition_size
        );
        debug!(
            cell = %report.cell,
            id_offset = report.id_offset,
            clusters = report.cluster_count,
            size = report.partition_size,
            "partition clustered"
        );
    }
}

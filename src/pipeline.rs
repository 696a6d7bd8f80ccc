use crate::config::ClusterConfig;
use crate::error::GridscanError;
use crate::geo::{BoundingBox, LabeledPoint};
use crate::partition::{ClusteredPartition, Grid};
use crate::scheduler::{PartitionReport, ReportSink, Scheduler};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Validated configuration bound to a report sink
pub struct Pipeline {
    config: ClusterConfig,
    scheduler: Scheduler,
}

impl Pipeline {
    /// Fails if `config` is out of range; nothing is partitioned until it passes
    pub fn new(config: ClusterConfig, sink: Arc<dyn ReportSink>) -> Result<Self, GridscanError> {
        config.validate()?;
        let scheduler = Scheduler::from_config(&config, sink);
        Ok(Self { config, scheduler })
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    pub fn partition(&self, points: &[LabeledPoint], bbox: &BoundingBox) -> Grid {
        let grid = Grid::build(points, bbox, self.config.grid_dimension, self.config.params());
        info!(
            partitions = grid.partition_count(),
            points = grid.total_points(),
            "grid built"
        );
        grid
    }

    pub async fn cluster(&self, grid: Grid) -> Result<Vec<ClusteredPartition>, GridscanError> {
        Ok(self.scheduler.run(grid).await?)
    }

    /// Partition and cluster in one call
    pub async fn run(
        &self,
        points: &[LabeledPoint],
        bbox: &BoundingBox,
    ) -> Result<Vec<ClusteredPartition>, GridscanError> {
        let grid = self.partition(points, bbox);
        self.cluster(grid).await
    }
}

/// Machine-readable outcome of a run
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub started_at: String,
    pub input_points: usize,
    pub partitioned_points: usize,
    pub bounds: BoundingBox,
    pub config: ClusterConfig,
    pub total_clusters: usize,
    pub noise_points: usize,
    pub elapsed_secs: f64,
    pub partitions: Vec<PartitionReport>,
}

impl RunSummary {
    pub fn new(
        started_at: DateTime<Utc>,
        input_points: usize,
        bounds: BoundingBox,
        config: &ClusterConfig,
        results: &[ClusteredPartition],
        elapsed_secs: f64,
    ) -> Self {
        let mut partitions: Vec<PartitionReport> = results.iter().map(PartitionReport::from).collect();
        partitions.sort_by_key(|r| r.id_offset);

        Self {
            started_at: started_at.to_rfc3339(),
            input_points,
            partitioned_points: partitions.iter().map(|r| r.partition_size).sum(),
            bounds,
            config: config.clone(),
            total_clusters: partitions.iter().map(|r| r.cluster_count).sum(),
            noise_points: results.iter().map(ClusteredPartition::noise_count).sum(),
            elapsed_secs,
            partitions,
        }
    }
}

mod error;
mod report;


pub use error::SchedulerError;
pub use report::{ConsoleReporter, PartitionReport, ReportSink};

use crate::config::ClusterConfig;
use crate::geo::Label;
use crate::partition::{CELL_STRIDE, ClusteredPartition, Grid, Partition};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tokio::task::{self, JoinSet};
use tracing::{debug, info, warn};

type WorkQueue = Arc<Mutex<mpsc::Receiver<Partition>>>;

/// Producer/consumer pipeline that clusters every partition of a grid once
pub struct Scheduler {
    workers: usize,
    queue_capacity: usize,
    sink: Arc<dyn ReportSink>,
}

impl Scheduler {
    pub fn new(workers: usize, queue_capacity: usize, sink: Arc<dyn ReportSink>) -> Self {
        Self {
            workers: workers.max(1),
            queue_capacity: queue_capacity.max(1),
            sink,
        }
    }

    pub fn from_config(config: &ClusterConfig, sink: Arc<dyn ReportSink>) -> Self {
        Self::new(config.workers, config.queue_capacity, sink)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Channel capacity for a run: below the partition count so the
    /// producer sees backpressure, but never zero
    pub fn effective_capacity(&self, partitions: usize) -> usize {
        self.queue_capacity
            .min(partitions.saturating_sub(1))
            .max(1)
    }

    /// Cluster every partition of `grid`, returning once all workers are done.
    ///
    /// Partitions are queued in grid order and taken by whichever worker is
    /// free; completion order is unspecified. Any worker failure aborts the
    /// run and no results are returned.
    pub async fn run(&self, grid: Grid) -> Result<Vec<ClusteredPartition>, SchedulerError> {
        let expected = grid.partition_count();
        let capacity = self.effective_capacity(expected);
        info!(
            partitions = expected,
            workers = self.workers,
            capacity,
            "starting partition scheduler"
        );

        let (tx, rx) = mpsc::channel(capacity);
        let queue: WorkQueue = Arc::new(Mutex::new(rx));

        let mut workers = JoinSet::new();
        for worker in 0..self.workers {
            workers.spawn(consume(worker, Arc::clone(&queue), Arc::clone(&self.sink)));
        }
        drop(queue);

        let producer = tokio::spawn(produce(grid, tx));

        let mut completed = Vec::with_capacity(expected);
        while let Some(joined) = workers.join_next().await {
            match joined.map_err(SchedulerError::from).and_then(|r| r) {
                Ok(done) => completed.extend(done),
                Err(e) => {
                    warn!(error = %e, "aborting run");
                    workers.abort_all();
                    producer.abort();
                    return Err(e);
                }
            }
        }

        let submitted = producer.await.map_err(SchedulerError::ProducerFailed)?;
        if submitted != expected || completed.len() != submitted {
            return Err(SchedulerError::LostPartitions {
                expected,
                submitted,
                completed: completed.len(),
            });
        }

        info!(partitions = completed.len(), "all partitions clustered");
        Ok(completed)
    }
}

/// Push partitions in grid order, then close the queue by dropping `tx`
async fn produce(grid: Grid, tx: mpsc::Sender<Partition>) -> usize {
    let mut submitted = 0;

    for partition in grid.into_partitions() {
        if tx.send(partition).await.is_err() {
            warn!(submitted, "work queue closed before all partitions were sent");
            break;
        }
        submitted += 1;
    }

    debug!(submitted, "producer done");
    submitted
}

/// Take partitions until the queue is closed and drained
async fn consume(
    worker: usize,
    queue: WorkQueue,
    sink: Arc<dyn ReportSink>,
) -> Result<Vec<ClusteredPartition>, SchedulerError> {
    let mut done = Vec::new();

    loop {
        let next = queue.lock().await.recv().await;
        let Some(partition) = next else {
            break;
        };

        let cell = partition.cell;
        let clustered = task::spawn_blocking(move || partition.cluster())
            .await
            .map_err(|e| {
                if e.is_panic() {
                    SchedulerError::WorkerPanicked { worker, cell }
                } else {
                    SchedulerError::WorkerJoin(e)
                }
            })?;

        if clustered.cluster_count as Label >= CELL_STRIDE {
            warn!(
                %cell,
                clusters = clustered.cluster_count,
                "cluster count exceeds label stride; ids may overlap a neighbouring cell"
            );
        }

        sink.report(&PartitionReport::from(&clustered));
        done.push(clustered);
    }

    debug!(worker, partitions = done.len(), "worker finished");
    Ok(done)
}

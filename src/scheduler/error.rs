use crate::partition::CellIndex;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("Worker {worker} panicked while clustering partition {cell}")]
    WorkerPanicked { worker: usize, cell: CellIndex },

    #[error("Worker task failed: {0}")]
    WorkerJoin(#[from] JoinError),

    #[error("Producer task failed: {0}")]
    ProducerFailed(JoinError),

    #[error("Submitted {submitted} of {expected} partitions but {completed} completed")]
    LostPartitions {
        expected: usize,
        submitted: usize,
        completed: usize,
    },
}

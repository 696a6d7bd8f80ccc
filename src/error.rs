use crate::{config::ConfigError, ingest::IngestError, scheduler::SchedulerError};
use thiserror::Error;

/// Any failure that ends a clustering run
#[derive(Error, Debug)]
pub enum GridscanError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),
}

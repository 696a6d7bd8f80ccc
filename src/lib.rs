// Public API exports
pub mod clusterer;
pub mod config;
pub mod error;
pub mod geo;
pub mod ingest;
pub mod partition;
pub mod pipeline;
pub mod scheduler;

// Re-export main types for convenience
pub use error::GridscanError;

pub use geo::{BoundingBox, Coordinate, Label, LabeledPoint, NOISE, PointId, UNDEFINED, distance};

pub use clusterer::{ClusterParams, cluster, find_neighbours};

pub use partition::{CellIndex, ClusteredPartition, Grid, Partition, id_offset};

pub use scheduler::{ConsoleReporter, PartitionReport, ReportSink, Scheduler, SchedulerError};

pub use config::{ClusterConfig, ConfigError};

pub use pipeline::{Pipeline, RunSummary};

pub use ingest::{Dataset, IngestError, TripColumns, read_trip_file, read_trips};

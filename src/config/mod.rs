mod error;


pub use error::ConfigError;

use crate::clusterer::ClusterParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grid divisions per axis
pub const DEFAULT_GRID_DIMENSION: usize = 4;

/// Concurrent clustering workers
pub const DEFAULT_WORKERS: usize = 4;

/// Neighbours required for a core point
pub const DEFAULT_MIN_PTS: usize = 5;

/// Neighbourhood radius in degrees
pub const DEFAULT_EPS: f64 = 0.0003;

/// Partitions buffered between producer and workers
pub const DEFAULT_QUEUE_CAPACITY: usize = 5;

/// Tunables for one clustering run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub grid_dimension: usize,
    pub workers: usize,
    pub min_pts: usize,
    pub eps: f64,
    pub queue_capacity: usize,
}

impl ClusterConfig {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self {
            grid_dimension: DEFAULT_GRID_DIMENSION,
            workers: DEFAULT_WORKERS,
            min_pts: DEFAULT_MIN_PTS,
            eps: DEFAULT_EPS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }

    /// Load settings from a JSON file; absent fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn with_grid_dimension(mut self, n: usize) -> Self {
        self.grid_dimension = n;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Reject settings that cannot produce a run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_dimension == 0 {
            return Err(ConfigError::ZeroGridDimension);
        }
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.min_pts == 0 {
            return Err(ConfigError::ZeroMinPts);
        }
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(ConfigError::InvalidEps(self.eps));
        }
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        Ok(())
    }

    pub fn params(&self) -> ClusterParams {
        ClusterParams::new(self.min_pts, self.eps)
    }

    pub fn partition_count(&self) -> usize {
        self.grid_dimension * self.grid_dimension
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self::new()
    }
}

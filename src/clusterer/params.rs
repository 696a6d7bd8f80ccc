use serde::{Deserialize, Serialize};

/// DBSCAN density parameters applied to one partition
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterParams {
    /// Minimum neighbour count (excluding the point itself) for a core point
    pub min_pts: usize,
    /// Neighbourhood radius, inclusive
    pub eps: f64,
}

impl ClusterParams {
    pub fn new(min_pts: usize, eps: f64) -> Self {
        Self { min_pts, eps }
    }
}

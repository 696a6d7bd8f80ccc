mod metric;
mod point;


pub use metric::distance;
pub use point::{BoundingBox, Coordinate, LabeledPoint, PointId};

/// Cluster label type. Partition-local ids are offset so they stay distinct across partitions.
pub type Label = i64;

/// Label of a point that has not been visited yet
pub const UNDEFINED: Label = 0;

/// Label of a point with too few neighbours when it was evaluated
pub const NOISE: Label = -1;

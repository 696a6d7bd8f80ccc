use super::{Label, NOISE, UNDEFINED};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of an ingested point (starts at 1)
pub type PointId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub long: f64,
}

impl Coordinate {
    pub fn new(lat: f64, long: f64) -> Self {
        Self { lat, long }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.long.is_finite()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6} , {:.6})", self.lat, self.long)
    }
}

/// A point together with its cluster label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledPoint {
    pub coord: Coordinate,
    /// Identity of the point, shared by every replica of it across partitions
    pub id: PointId,
    /// `0` undefined, `-1` noise, positive values are cluster ids
    pub label: Label,
}

impl LabeledPoint {
    /// Create an unvisited point
    pub fn new(id: PointId, lat: f64, long: f64) -> Self {
        Self {
            coord: Coordinate::new(lat, long),
            id,
            label: UNDEFINED,
        }
    }

    pub fn is_noise(&self) -> bool {
        self.label == NOISE
    }

    pub fn is_clustered(&self) -> bool {
        self.label > 0
    }
}

/// Rectangular clustering region
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub southwest: Coordinate,
    pub northeast: Coordinate,
}

impl BoundingBox {
    pub fn new(southwest: Coordinate, northeast: Coordinate) -> Self {
        Self {
            southwest,
            northeast,
        }
    }

    /// Smallest box containing every point, or `None` for an empty set
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a LabeledPoint>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?.coord;
        let mut sw = first;
        let mut ne = first;

        for p in iter {
            sw.lat = sw.lat.min(p.coord.lat);
            sw.long = sw.long.min(p.coord.long);
            ne.lat = ne.lat.max(p.coord.lat);
            ne.long = ne.long.max(p.coord.long);
        }

        Some(Self::new(sw, ne))
    }

    pub fn lat_span(&self) -> f64 {
        self.northeast.lat - self.southwest.lat
    }

    pub fn long_span(&self) -> f64 {
        self.northeast.long - self.southwest.long
    }

    /// True when the box has zero extent along either axis
    pub fn is_degenerate(&self) -> bool {
        self.lat_span() <= 0.0 || self.long_span() <= 0.0
    }
}

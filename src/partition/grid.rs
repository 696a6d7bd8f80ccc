use crate::clusterer::{self, ClusterParams};
use crate::geo::{BoundingBox, Label, LabeledPoint};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Label range reserved for one grid cell
pub const CELL_STRIDE: Label = 1_000_000;

/// Position of a cell in the grid: `i` along longitude, `j` along latitude
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellIndex {
    pub i: usize,
    pub j: usize,
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.i, self.j)
    }
}

/// Label offset of cell `(i, j)` in a `dimension`×`dimension` grid.
///
/// Grids up to 10×10 get `i * 10_000_000 + j * 1_000_000`; larger grids widen
/// the row stride so offsets never overlap.
pub fn id_offset(cell: CellIndex, dimension: usize) -> Label {
    let row_stride = CELL_STRIDE * dimension.max(10) as Label;
    cell.i as Label * row_stride + cell.j as Label * CELL_STRIDE
}

/// One unit of clustering work
#[derive(Debug, Clone)]
pub struct Partition {
    pub cell: CellIndex,
    pub points: Vec<LabeledPoint>,
    pub params: ClusterParams,
    pub id_offset: Label,
}

impl Partition {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Run DBSCAN over this partition's own copy of its points
    pub fn cluster(mut self) -> ClusteredPartition {
        let cluster_count = clusterer::cluster(&mut self.points, self.params, self.id_offset);

        ClusteredPartition {
            cell: self.cell,
            id_offset: self.id_offset,
            cluster_count,
            points: self.points,
        }
    }
}

/// A partition after clustering, with final labels
#[derive(Debug, Clone, Serialize)]
pub struct ClusteredPartition {
    pub cell: CellIndex,
    pub id_offset: Label,
    pub cluster_count: usize,
    pub points: Vec<LabeledPoint>,
}

impl ClusteredPartition {
    pub fn noise_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_noise()).count()
    }
}

/// N×N grid of overlapping partitions.
///
/// Cells are stored latitude-row by latitude-row (`j` outer, `i` inner),
/// which is also the order they are handed to workers.
#[derive(Debug, Clone)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Partition>,
}

impl Grid {
    /// Split `points` into `dimension`×`dimension` cells over `bbox`.
    ///
    /// Cell `(i, j)` covers the half-open ranges
    /// `[sw.long + i*incx - eps, sw.long + (i+1)*incx + eps)` and
    /// `[sw.lat + j*incy - eps, sw.lat + (j+1)*incy + eps)`, so points near an
    /// edge are copied into every cell they fall in. Points outside every
    /// expanded cell are dropped. Input points are not modified.
    pub fn build(
        points: &[LabeledPoint],
        bbox: &BoundingBox,
        dimension: usize,
        params: ClusterParams,
    ) -> Self {
        let n = dimension as f64;
        let incx = bbox.long_span() / n;
        let incy = bbox.lat_span() / n;
        let eps = params.eps;
        let sw = bbox.southwest;

        let mut cells = Vec::with_capacity(dimension * dimension);

        for j in 0..dimension {
            let lat_lo = sw.lat + j as f64 * incy - eps;
            let lat_hi = sw.lat + (j + 1) as f64 * incy + eps;

            for i in 0..dimension {
                let long_lo = sw.long + i as f64 * incx - eps;
                let long_hi = sw.long + (i + 1) as f64 * incx + eps;

                let members: Vec<LabeledPoint> = points
                    .iter()
                    .filter(|p| {
                        p.coord.long >= long_lo
                            && p.coord.long < long_hi
                            && p.coord.lat >= lat_lo
                            && p.coord.lat < lat_hi
                    })
                    .copied()
                    .collect();

                let cell = CellIndex { i, j };
                debug!(%cell, points = members.len(), "partition built");

                cells.push(Partition {
                    cell,
                    points: members,
                    params,
                    id_offset: id_offset(cell, dimension),
                });
            }
        }

        Self { dimension, cells }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn partition_count(&self) -> usize {
        self.cells.len()
    }

    /// Total points across all cells, counting replicas once per cell
    pub fn total_points(&self) -> usize {
        self.cells.iter().map(Partition::len).sum()
    }

    pub fn cell(&self, i: usize, j: usize) -> Option<&Partition> {
        if i >= self.dimension || j >= self.dimension {
            return None;
        }
        self.cells.get(j * self.dimension + i)
    }

    pub fn partitions(&self) -> impl Iterator<Item = &Partition> {
        self.cells.iter()
    }

    /// Consume the grid, yielding partitions in dispatch order
    pub fn into_partitions(self) -> impl Iterator<Item = Partition> {
        self.cells.into_iter()
    }
}

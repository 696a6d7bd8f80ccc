use crate::geo::{LabeledPoint, distance};

/// Indices of every point within `eps` of `points[query]`, in scan order.
///
/// The query point itself is excluded by id, so a replica sharing its id is
/// never counted as its own neighbour. Linear scan; partitions are small
/// enough in extent that no spatial index is kept.
pub fn find_neighbours(points: &[LabeledPoint], query: usize, eps: f64) -> Vec<usize> {
    let q = &points[query];

    points
        .iter()
        .enumerate()
        .filter(|(_, r)| r.id != q.id && distance(&q.coord, &r.coord) <= eps)
        .map(|(i, _)| i)
        .collect()
}

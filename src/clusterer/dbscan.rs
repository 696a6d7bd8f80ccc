use crate::clusterer::{ClusterParams, neighbours::find_neighbours};
use crate::geo::{Label, LabeledPoint, NOISE, UNDEFINED};

/// Run DBSCAN over one partition, labelling `points` in place.
///
/// Cluster ids start at `id_offset + 1`. Points left with fewer than
/// `min_pts` neighbours are marked noise; a later expansion may still
/// promote them to border points, never the reverse.
///
/// Returns the number of clusters found.
pub fn cluster(points: &mut [LabeledPoint], params: ClusterParams, id_offset: Label) -> usize {
    let mut clusters = 0usize;

    for i in 0..points.len() {
        // Already visited, including noise awaiting promotion
        if points[i].label != UNDEFINED {
            continue;
        }

        let neighbours = find_neighbours(points, i, params.eps);
        if neighbours.len() < params.min_pts {
            points[i].label = NOISE;
            continue;
        }

        clusters += 1;
        let label = clusters as Label + id_offset;
        points[i].label = label;

        expand(points, neighbours, label, params);
    }

    clusters
}

/// Grow a cluster from a core point's neighbourhood.
///
/// The seed set is a worklist of indices into `points`; neighbours of every
/// newly reached core point are appended and visited in the same pass.
fn expand(points: &mut [LabeledPoint], mut seeds: Vec<usize>, label: Label, params: ClusterParams) {
    let mut cursor = 0;

    while cursor < seeds.len() {
        let s = seeds[cursor];
        cursor += 1;

        match points[s].label {
            NOISE => {
                // Border point: joins the cluster but does not expand it
                points[s].label = label;
            }
            UNDEFINED => {
                points[s].label = label;

                let reach = find_neighbours(points, s, params.eps);
                if reach.len() >= params.min_pts {
                    seeds.extend(reach);
                }
            }
            _ => {}
        }
    }
}

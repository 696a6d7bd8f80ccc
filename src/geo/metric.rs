use super::Coordinate;

/// Planar Euclidean distance between two coordinates, in degrees
pub fn distance(p: &Coordinate, q: &Coordinate) -> f64 {
    let dlat = p.lat - q.lat;
    let dlong = p.long - q.long;
    (dlat * dlat + dlong * dlong).sqrt()
}

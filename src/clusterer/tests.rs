use super::*;
use crate::geo::{LabeledPoint, NOISE, UNDEFINED};

fn points_from(coords: &[(f64, f64)]) -> Vec<LabeledPoint> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(lat, long))| LabeledPoint::new(i as u64 + 1, lat, long))
        .collect()
}

#[test]
fn test_neighbours_exclude_self() {
    let points = points_from(&[(0.0, 0.0), (0.0, 0.5), (0.0, 3.0)]);
    let found = find_neighbours(&points, 0, 1.0);
    assert_eq!(found, vec![1]);
}

#[test]
fn test_neighbours_radius_is_inclusive() {
    let points = points_from(&[(0.0, 0.0), (0.0, 1.0), (0.0, 1.5)]);
    let found = find_neighbours(&points, 0, 1.0);
    assert_eq!(found, vec![1]);
}

#[test]
fn test_neighbours_count_coincident_points() {
    // Same coordinate, different id
    let points = points_from(&[(2.0, 2.0), (2.0, 2.0)]);
    assert_eq!(find_neighbours(&points, 0, 0.1), vec![1]);
    assert_eq!(find_neighbours(&points, 1, 0.1), vec![0]);
}

#[test]
fn test_neighbours_follow_scan_order() {
    let points = points_from(&[(0.0, 0.9), (0.0, 0.0), (0.0, 0.1), (0.0, 0.5)]);
    assert_eq!(find_neighbours(&points, 1, 1.0), vec![0, 2, 3]);
}

#[test]
fn test_three_close_points_and_one_outlier() {
    let mut points = points_from(&[(0.0, 0.0), (0.0, 0.0001), (0.0, 0.0002), (10.0, 10.0)]);

    let n = cluster(&mut points, ClusterParams::new(2, 0.0003), 0);

    assert_eq!(n, 1);
    assert_eq!(points[0].label, 1);
    assert_eq!(points[1].label, 1);
    assert_eq!(points[2].label, 1);
    assert_eq!(points[3].label, NOISE);
}

#[test]
fn test_chained_expansion_reaches_far_endpoints() {
    // Spaced eps/2 apart: endpoints are 2*eps from each other
    let eps = 1.0;
    let coords: Vec<(f64, f64)> = (0..5).map(|i| (0.0, i as f64 * eps / 2.0)).collect();
    let mut points = points_from(&coords);

    let n = cluster(&mut points, ClusterParams::new(3, eps), 0);

    assert_eq!(n, 1);
    for p in &points {
        assert_eq!(p.label, 1, "point {} should be in the chain cluster", p.id);
    }
}

#[test]
fn test_exactly_min_pts_is_core() {
    // Center has exactly two neighbours; the ends only see the center
    let mut points = points_from(&[(0.0, 0.0), (0.0, 1.0), (0.0, -1.0)]);

    let n = cluster(&mut points, ClusterParams::new(2, 1.0), 0);

    assert_eq!(n, 1);
    assert!(points.iter().all(|p| p.label == 1));
}

#[test]
fn test_noise_promoted_to_border() {
    // First point is scanned before the core point that reaches it
    let mut points = points_from(&[(0.0, 1.0), (0.0, 0.0), (0.0, -1.0)]);
    let params = ClusterParams::new(2, 1.0);

    let n = cluster(&mut points, params, 0);

    assert_eq!(n, 1);
    assert_eq!(points[0].label, 1, "noise should be promoted, not kept at -1");
    assert_eq!(points[1].label, 1);
    assert_eq!(points[2].label, 1);
}

#[test]
fn test_border_point_does_not_expand() {
    // Only b (index 1) is dense; c is reached as a border point and d sits past it
    let mut points = points_from(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0), (0.5, 1.0)]);

    let n = cluster(&mut points, ClusterParams::new(3, 1.0), 0);

    assert_eq!(n, 1);
    assert_eq!(points[0].label, 1);
    assert_eq!(points[1].label, 1);
    assert_eq!(points[2].label, 1);
    assert_eq!(points[3].label, NOISE, "d is only reachable through border c");
    assert_eq!(points[4].label, 1);
}

#[test]
fn test_two_separate_clusters() {
    let mut points = points_from(&[
        (0.0, 0.0),
        (0.0, 0.1),
        (0.0, 0.2),
        (5.0, 5.0),
        (5.0, 5.1),
        (5.0, 5.2),
    ]);

    let n = cluster(&mut points, ClusterParams::new(2, 0.15), 0);

    assert_eq!(n, 2);
    assert_eq!(points[0].label, 1);
    assert_eq!(points[3].label, 2);
    assert_eq!(points[0].label, points[2].label);
    assert_eq!(points[3].label, points[5].label);
}

#[test]
fn test_id_offset_applied_to_labels() {
    let mut points = points_from(&[(0.0, 0.0), (0.0, 0.1), (0.0, 0.2)]);

    let n = cluster(&mut points, ClusterParams::new(2, 0.25), 21_000_000);

    assert_eq!(n, 1);
    assert!(points.iter().all(|p| p.label == 21_000_001));
}

#[test]
fn test_every_point_labeled() {
    // Deterministic scatter: dense block plus sparse stragglers
    let mut coords = Vec::new();
    for i in 0..10 {
        for j in 0..10 {
            coords.push((i as f64 * 0.01, j as f64 * 0.01));
        }
    }
    for k in 0..20 {
        coords.push((1.0 + k as f64 * 0.37, -2.0 - (k * k) as f64 * 0.11));
    }
    let mut points = points_from(&coords);

    let n = cluster(&mut points, ClusterParams::new(4, 0.015), 0);

    assert_eq!(n, 1);
    assert!(points.iter().all(|p| p.label != UNDEFINED));
    assert!(points[..100].iter().all(|p| p.label == 1));
    assert!(points[100..].iter().all(|p| p.label == NOISE));
}

#[test]
fn test_empty_partition() {
    let mut points: Vec<LabeledPoint> = vec![];
    assert_eq!(cluster(&mut points, ClusterParams::new(5, 0.0003), 0), 0);
}

#[test]
fn test_single_point_is_noise() {
    let mut points = points_from(&[(1.0, 1.0)]);
    assert_eq!(cluster(&mut points, ClusterParams::new(1, 0.5), 0), 0);
    assert_eq!(points[0].label, NOISE);
}

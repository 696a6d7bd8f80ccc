use super::*;
use std::io::Write;

const HEADER: &str = "vendor,pickup,dropoff,passengers,distance,rate,flag,payment,long,lat";

fn trip(long: &str, lat: &str) -> String {
    format!("VTS,2009-01-15 09:00:00,2009-01-15 09:10:00,1,1.2,1,N,CASH,{long},{lat}")
}

#[test]
fn test_read_points_and_bounds() {
    let csv = format!(
        "{HEADER}\n{}\n{}\n{}\n",
        trip("-73.99", "40.75"),
        trip("-73.95", "40.78"),
        trip("-74.00", "40.71")
    );

    let dataset = read_trips(csv.as_bytes(), TripColumns::default()).unwrap();

    assert_eq!(dataset.len(), 3);
    let ids: Vec<u64> = dataset.points.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(dataset.points.iter().all(|p| p.label == 0));
    assert_eq!(dataset.points[0].coord.lat, 40.75);
    assert_eq!(dataset.points[0].coord.long, -73.99);

    let bounds = dataset.bounds.unwrap();
    assert_eq!(bounds.southwest.lat, 40.71);
    assert_eq!(bounds.southwest.long, -74.00);
    assert_eq!(bounds.northeast.lat, 40.78);
    assert_eq!(bounds.northeast.long, -73.95);
}

#[test]
fn test_header_only_has_no_bounds() {
    let csv = format!("{HEADER}\n");
    let dataset = read_trips(csv.as_bytes(), TripColumns::default()).unwrap();
    assert!(dataset.is_empty());
    assert!(dataset.bounds.is_none());
}

#[test]
fn test_empty_input_rejected() {
    let err = read_trips("".as_bytes(), TripColumns::default()).unwrap_err();
    assert!(matches!(err, IngestError::Empty));
}

#[test]
fn test_bad_latitude_rejected() {
    let csv = format!("{HEADER}\n{}\n{}\n", trip("-73.99", "40.75"), trip("-73.99", "north"));

    let err = read_trips(csv.as_bytes(), TripColumns::default()).unwrap_err();
    match err {
        IngestError::InvalidCoordinate { line, field, value } => {
            assert_eq!(line, 3);
            assert_eq!(field, "lat");
            assert_eq!(value, "north");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_short_record_rejected() {
    let csv = format!("{HEADER}\nVTS,1,2\n");
    let err = read_trips(csv.as_bytes(), TripColumns::default()).unwrap_err();
    assert!(matches!(err, IngestError::MissingField { column: 9, .. }));
}

#[test]
fn test_non_finite_rejected() {
    let csv = format!("{HEADER}\n{}\n", trip("inf", "40.7"));
    let err = read_trips(csv.as_bytes(), TripColumns::default()).unwrap_err();
    assert!(matches!(err, IngestError::NonFinite { line: 2 }));
}

#[test]
fn test_custom_columns() {
    let csv = "lat,long\n1.5,2.5\n";
    let dataset = read_trips(csv.as_bytes(), TripColumns { long: 1, lat: 0 }).unwrap();
    assert_eq!(dataset.points[0].coord.lat, 1.5);
    assert_eq!(dataset.points[0].coord.long, 2.5);
}

#[test]
fn test_read_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}").unwrap();
    writeln!(file, "{}", trip("-73.97", "40.76")).unwrap();

    let dataset = read_trip_file(file.path(), TripColumns::default()).unwrap();
    assert_eq!(dataset.len(), 1);
}

#[test]
fn test_missing_file() {
    let err = read_trip_file("/nonexistent/trips.csv", TripColumns::default()).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/trips.csv"));
}

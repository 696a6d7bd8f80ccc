mod error;

#[cfg(test)]
mod tests;

pub use error::IngestError;

use crate::geo::{BoundingBox, LabeledPoint, PointId};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Column positions (0-based) of the pickup coordinates in a trip record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripColumns {
    pub long: usize,
    pub lat: usize,
}

impl Default for TripColumns {
    fn default() -> Self {
        Self { long: 8, lat: 9 }
    }
}

/// Points read from a trip file plus the box that encloses them
#[derive(Debug, Clone)]
pub struct Dataset {
    pub points: Vec<LabeledPoint>,
    /// `None` when the file has a header but no records
    pub bounds: Option<BoundingBox>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Read pickup locations from a trip CSV file
pub fn read_trip_file(path: impl AsRef<Path>, columns: TripColumns) -> Result<Dataset, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let dataset = read_trips(file, columns)?;
    info!(path = %path.display(), points = dataset.len(), "trip file loaded");
    Ok(dataset)
}

/// Read pickup locations from CSV with a header row.
///
/// Points get ids `1..=n` in record order and an undefined label. Any
/// malformed record fails the whole read.
pub fn read_trips<R: Read>(source: R, columns: TripColumns) -> Result<Dataset, IngestError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);

    let mut record = csv::StringRecord::new();
    if !reader.read_record(&mut record)? {
        return Err(IngestError::Empty);
    }

    let mut points = Vec::with_capacity(5000);
    let mut next_id: PointId = 1;

    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        let lat = parse_field(&record, columns.lat, "lat", line)?;
        let long = parse_field(&record, columns.long, "long", line)?;
        if !lat.is_finite() || !long.is_finite() {
            return Err(IngestError::NonFinite { line });
        }

        points.push(LabeledPoint::new(next_id, lat, long));
        next_id += 1;
    }

    let bounds = BoundingBox::enclosing(&points);
    Ok(Dataset { points, bounds })
}

fn parse_field(
    record: &csv::StringRecord,
    column: usize,
    field: &'static str,
    line: u64,
) -> Result<f64, IngestError> {
    let raw = record
        .get(column)
        .ok_or(IngestError::MissingField { line, column })?;

    raw.trim()
        .parse::<f64>()
        .map_err(|_| IngestError::InvalidCoordinate {
            line,
            field,
            value: raw.to_string(),
        })
}

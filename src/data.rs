//! CSV loading for daily closing prices

use crate::error::{Result, TrendError};
use chrono::NaiveDate;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Date format used by the input files, e.g. "02-Jan-15"
pub const DATE_FORMAT: &str = "%d-%b-%y";

const DATE_COLUMN: usize = 0;
const CLOSE_COLUMN: usize = 4;

/// A single day's closing price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    /// Trading day
    pub date: NaiveDate,
    /// Closing price in dollars
    pub close: f64,
}

/// Load daily closing prices from a CSV file.
///
/// The file must carry a header row; column 0 holds the date in
/// [`DATE_FORMAT`] and column 4 the closing price. Any other columns are
/// ignored. The returned points are sorted ascending by date (stable, so
/// duplicate dates keep their input order).
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<PricePoint>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;
        let date_field = record
            .get(DATE_COLUMN)
            .ok_or_else(|| TrendError::Parse("row is missing the date column".to_string()))?;
        let close_field = record.get(CLOSE_COLUMN).ok_or_else(|| {
            TrendError::Parse(format!(
                "row for '{date_field}' is missing the closing price column"
            ))
        })?;

        let date = NaiveDate::parse_from_str(date_field, DATE_FORMAT)
            .map_err(|e| TrendError::Parse(format!("bad date '{date_field}': {e}")))?;
        let close: f64 = close_field.trim().parse().map_err(|_| {
            TrendError::Parse(format!("bad closing price '{close_field}' on {date}"))
        })?;

        points.push(PricePoint { date, close });
    }

    points.sort_by_key(|p| p.date);
    debug!(rows = points.len(), "loaded closing prices");

    Ok(points)
}

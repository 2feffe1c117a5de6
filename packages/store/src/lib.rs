#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Immutable in-memory store of incident records.
//!
//! A [`RecordStore`] is constructed explicitly from a CSV file (or any
//! `Read` source) at startup and is read-only for the rest of the process
//! lifetime — it is safe to share behind an `Arc` without locking. There
//! is intentionally no process-wide singleton; tests construct stores
//! from synthetic data.
//!
//! The input CSV contract is fixed: columns `dtg` (timestamp), `lat`,
//! `lon`, `cause`. Rows with an unparseable timestamp are skipped with a
//! trace log rather than failing the whole load.

use std::io::Read;
use std::path::Path;

use incident_dash_event_models::{DatasetSpan, Incident, parsing::parse_timestamp};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The CSV file could not be read or parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The input yielded no valid records, so the dataset span is
    /// undefined.
    #[error("input contained no valid incident records")]
    Empty,
}

/// One raw CSV row. The timestamp stays a string here so that row-level
/// parse failures can be skipped instead of aborting the load.
#[derive(Debug, Deserialize)]
struct RawRow {
    dtg: String,
    lat: f64,
    lon: f64,
    cause: String,
}

/// An ordered, immutable collection of incidents plus the dataset span
/// derived from it at load time.
#[derive(Debug, Clone)]
pub struct RecordStore {
    incidents: Vec<Incident>,
    span: DatasetSpan,
}

impl RecordStore {
    /// Loads a record store from the CSV file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or contains no
    /// valid records.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path.as_ref())?;
        Self::load(reader)
    }

    /// Loads a record store from CSV data in any `Read` source.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the data cannot be parsed as CSV or
    /// contains no valid records.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, StoreError> {
        let reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        Self::load(reader)
    }

    fn load<R: Read>(mut reader: csv::Reader<R>) -> Result<Self, StoreError> {
        let mut incidents = Vec::new();

        for result in reader.deserialize::<RawRow>() {
            let row = match result {
                Ok(r) => r,
                Err(e) => {
                    log::trace!("skipping malformed row: {e}");
                    continue;
                }
            };

            let Some(dtg) = parse_timestamp(&row.dtg) else {
                log::trace!("skipping row with unparseable timestamp {:?}", row.dtg);
                continue;
            };

            incidents.push(Incident {
                dtg,
                lat: row.lat,
                lon: row.lon,
                cause: row.cause,
            });
        }

        let span = DatasetSpan::of(incidents.iter().map(|i| i.dtg)).ok_or(StoreError::Empty)?;

        log::debug!(
            "loaded {} incidents spanning {} - {}",
            incidents.len(),
            span.start,
            span.end
        );

        Ok(Self { incidents, span })
    }

    /// All incidents, in load order.
    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// The `[earliest, latest]` timestamp range of the loaded data.
    #[must_use]
    pub const fn span(&self) -> DatasetSpan {
        self.span
    }

    /// The distinct cause labels present in the data, sorted
    /// lexicographically.
    #[must_use]
    pub fn causes(&self) -> Vec<String> {
        let mut causes: Vec<String> = self.incidents.iter().map(|i| i.cause.clone()).collect();
        causes.sort_unstable();
        causes.dedup();
        causes
    }

    /// Number of loaded incidents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    /// Returns `true` if the store holds no incidents. Always `false`
    /// for a successfully constructed store, but kept for API symmetry
    /// with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
dtg,lat,lon,cause
2020-03-02 08:00:00,52.1,10.2,storm
2020-03-10 12:30:00,52.4,10.0,storm
2020-04-05 09:15:00,51.9,9.8,flood
";

    #[test]
    fn loads_rows_in_order() {
        let store = RecordStore::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.incidents()[0].cause, "storm");
        assert_eq!(store.incidents()[2].cause, "flood");
        assert!((store.incidents()[0].lat - 52.1).abs() < f64::EPSILON);
    }

    #[test]
    fn span_covers_earliest_and_latest() {
        let store = RecordStore::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        let span = store.span();
        assert_eq!(span.start.to_string(), "2020-03-02 08:00:00 UTC");
        assert_eq!(span.end.to_string(), "2020-04-05 09:15:00 UTC");
    }

    #[test]
    fn causes_are_sorted_and_distinct() {
        let store = RecordStore::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(store.causes(), vec!["flood".to_string(), "storm".to_string()]);
    }

    #[test]
    fn skips_rows_with_bad_timestamps() {
        let data = "\
dtg,lat,lon,cause
not-a-date,52.1,10.2,storm
2020-03-10 12:30:00,52.4,10.0,storm
";
        let store = RecordStore::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn empty_input_is_an_error() {
        let data = "dtg,lat,lon,cause\n";
        let err = RecordStore::from_csv_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, StoreError::Empty));
    }

    #[test]
    fn accepts_bare_dates() {
        let data = "dtg,lat,lon,cause\n2020-03-15,52.0,10.0,storm\n";
        let store = RecordStore::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(
            store.incidents()[0].dtg.to_string(),
            "2020-03-15 00:00:00 UTC"
        );
    }
}

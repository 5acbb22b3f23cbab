#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV loading and normalization for outage incident data.
//!
//! Raw ticket exports are read with headers
//! `Ticket ID, Region, District, Client, Event Time, Latitude, Longitude`.
//! Normalization parses every `Event Time` into a timestamp and maps
//! long-form region labels to their short codes. A row whose timestamp
//! cannot be parsed is a data error reported to the caller — rows are
//! never silently coerced or dropped.

pub mod parsing;

use std::path::Path;
use std::time::Instant;

use outage_map_incident_models::{Dataset, Incident, regions::region_code};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading and normalizing a dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Reading the input file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV was structurally malformed or a field failed to
    /// deserialize.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row's `Event Time` could not be parsed as a timestamp.
    #[error("malformed timestamp {value:?} on line {line}")]
    MalformedTimestamp {
        /// 1-based line number of the offending row (header is line 1).
        line: u64,
        /// The raw, unparseable value.
        value: String,
    },
}

/// One row of the raw ticket export, exactly as it appears in the CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RawIncident {
    /// Ticket identifier.
    #[serde(rename = "Ticket ID")]
    pub ticket_id: String,
    /// Region label, possibly in long organizational form.
    #[serde(rename = "Region")]
    pub region: String,
    /// District name.
    #[serde(rename = "District")]
    pub district: String,
    /// Client identifier.
    #[serde(rename = "Client")]
    pub client: String,
    /// Unparsed event timestamp.
    #[serde(rename = "Event Time")]
    pub event_time: String,
    /// Reported latitude.
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    /// Reported longitude.
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

/// Loads and normalizes a CSV ticket export into a [`Dataset`].
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be read, the CSV is
/// malformed, or any row carries an unparseable `Event Time`.
pub fn load_dataset(path: &Path) -> Result<Dataset, IngestError> {
    let start = Instant::now();

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Physical line the record starts on; a quoted field may span
        // several lines, so this is not simply the record index.
        let line = record.position().map_or(0, csv::Position::line);
        rows.push((line, record.deserialize::<RawIncident>(Some(&headers))?));
    }

    let dataset = normalize(rows)?;

    log::info!(
        "Loaded {} incidents from {} in {:.1}ms",
        dataset.len(),
        path.display(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(dataset)
}

/// Normalizes raw rows into an immutable [`Dataset`].
///
/// Each row is paired with its 1-based source line number so malformed
/// timestamps can be reported against the original file.
///
/// # Errors
///
/// Returns [`IngestError::MalformedTimestamp`] for the first row whose
/// `Event Time` does not parse. The caller decides whether to drop the
/// row from its input and retry, or abort the load.
pub fn normalize(rows: Vec<(u64, RawIncident)>) -> Result<Dataset, IngestError> {
    let mut incidents = Vec::with_capacity(rows.len());

    for (line, raw) in rows {
        let event_time = parsing::parse_event_time(&raw.event_time).ok_or_else(|| {
            IngestError::MalformedTimestamp {
                line,
                value: raw.event_time.clone(),
            }
        })?;

        incidents.push(Incident {
            ticket_id: raw.ticket_id,
            region: region_code(&raw.region).to_string(),
            district: raw.district,
            client: raw.client,
            event_time,
            latitude: raw.latitude,
            longitude: raw.longitude,
        });
    }

    Ok(Dataset::new(incidents))
}

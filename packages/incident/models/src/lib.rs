#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical outage incident types.
//!
//! This crate defines the normalized incident record shared across the
//! entire outage-map system, the immutable [`Dataset`] container the
//! analytics pipeline reads from, and the region taxonomy (label mapping
//! and display priority) applied during normalization.

pub mod regions;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A single normalized network-outage incident.
///
/// `ticket_id` is carried for display only; filtering and aggregation
/// never key on it. `latitude`/`longitude` are passed through exactly as
/// reported — coordinate validation is the map layer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Source ticket identifier (display only).
    pub ticket_id: String,
    /// Canonical region code (e.g. "RIO-1") after label mapping.
    pub region: String,
    /// District the outage occurred in.
    pub district: String,
    /// Affected client identifier.
    pub client: String,
    /// When the outage event occurred.
    pub event_time: NaiveDateTime,
    /// Reported latitude.
    pub latitude: f64,
    /// Reported longitude.
    pub longitude: f64,
}

/// An immutable, column-homogeneous in-memory incident table.
///
/// Built once per session by normalization; every downstream view is
/// derived from it without mutation, so repeated pipeline runs with
/// different filter states are safe and reentrant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    rows: Vec<Incident>,
}

impl Dataset {
    /// Wraps normalized rows into a dataset.
    #[must_use]
    pub fn new(rows: Vec<Incident>) -> Self {
        Self { rows }
    }

    /// Number of incidents in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the dataset holds no incidents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All incident rows, in load order.
    #[must_use]
    pub fn rows(&self) -> &[Incident] {
        &self.rows
    }

    /// Iterates over the incident rows in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Incident> {
        self.rows.iter()
    }

    /// SHA-256 content hash of the dataset, hex-encoded.
    ///
    /// Stable across runs for identical content, so it can serve as the
    /// cache key for derived structures (e.g. a dimension index) that are
    /// pure functions of the dataset.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for row in &self.rows {
            hasher.update(row.ticket_id.as_bytes());
            hasher.update([0]);
            hasher.update(row.region.as_bytes());
            hasher.update([0]);
            hasher.update(row.district.as_bytes());
            hasher.update([0]);
            hasher.update(row.client.as_bytes());
            hasher.update([0]);
            hasher.update(row.event_time.and_utc().timestamp().to_le_bytes());
            hasher.update(row.latitude.to_le_bytes());
            hasher.update(row.longitude.to_le_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Incident;
    type IntoIter = std::slice::Iter<'a, Incident>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

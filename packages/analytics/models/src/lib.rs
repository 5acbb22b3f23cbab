#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Input and output types for the outage analytics pipeline.
//!
//! [`FilterState`] is the single contract between the UI widgets and the
//! core: four optional/defaultable fields, rebuilt fresh on every
//! interaction. The widget-layer "Overall" sentinel never reaches these
//! types — "no restriction" is an absent field or an empty set.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use outage_map_incident_models::Incident;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// An inclusive calendar-date range, compared at date granularity to
/// match the UI's date pickers.
///
/// An inverted range (`start > end`) is a valid value that matches no
/// incidents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// First date included.
    pub start: NaiveDate,
    /// Last date included.
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns `true` if `date` falls inside the range, inclusive on both
    /// ends. Always `false` for an inverted range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// The user's current filter selections, rebuilt from widget values on
/// every interaction.
///
/// `None` for region or district and an empty `clients` set each mean
/// "no restriction on this dimension". Every combination of fields is
/// valid; stale selections that no longer exist in the dataset simply
/// match no rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Region restriction, if any.
    pub region: Option<String>,
    /// District restriction, if any.
    pub district: Option<String>,
    /// Client restriction; empty means unrestricted.
    pub clients: BTreeSet<String>,
    /// Event-date restriction, if any.
    pub date_range: Option<DateRange>,
}

impl FilterState {
    /// Returns `true` if no field restricts anything.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.region.is_none()
            && self.district.is_none()
            && self.clients.is_empty()
            && self.date_range.is_none()
    }
}

/// The subset of a dataset satisfying a [`FilterState`].
///
/// Owns its rows, so a view stays valid and unchanged however the caller
/// goes on to filter the same base dataset. Exposed to the presentation
/// layer as plain iterable data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredView {
    rows: Vec<Incident>,
}

impl FilteredView {
    /// Wraps filtered rows into a view.
    #[must_use]
    pub fn new(rows: Vec<Incident>) -> Self {
        Self { rows }
    }

    /// Number of incidents in the view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no incidents matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The matching incident rows, in dataset order.
    #[must_use]
    pub fn rows(&self) -> &[Incident] {
        &self.rows
    }

    /// Iterates over the matching rows in dataset order.
    pub fn iter(&self) -> std::slice::Iter<'_, Incident> {
        self.rows.iter()
    }

    /// Consumes the view, returning its rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<Incident> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a FilteredView {
    type Item = &'a Incident;
    type IntoIter = std::slice::Iter<'a, Incident>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Dimension an aggregate table can be keyed by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Dimension {
    /// Calendar date of the event.
    Date,
    /// English weekday name of the event.
    DayOfWeek,
    /// Region code.
    Region,
    /// District name.
    District,
    /// Client identifier.
    Client,
}

impl Dimension {
    /// Returns all dimensions.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Date,
            Self::DayOfWeek,
            Self::Region,
            Self::District,
            Self::Client,
        ]
    }
}

/// Count of incidents sharing one dimension key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionCount {
    /// Dimension key (date string, weekday name, region, district, or
    /// client).
    pub key: String,
    /// Number of incidents with this key.
    pub count: u64,
}

/// Ordered count-by-key summary of a [`FilteredView`] along one dimension.
///
/// Rows appear in order of first occurrence in the view and only for keys
/// actually present, so date tables are sparse rather than a dense
/// calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateTable {
    /// Dimension the table is keyed by.
    pub dimension: Dimension,
    /// Key/count rows in first-occurrence order.
    pub rows: Vec<DimensionCount>,
}

impl AggregateTable {
    /// Sum of all row counts; equals the length of the view the table was
    /// derived from.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.rows.iter().map(|r| r.count).sum()
    }
}

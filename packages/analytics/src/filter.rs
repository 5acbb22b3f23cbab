//! Filter pipeline: pure narrowing predicates composed over a dataset.
//!
//! Each stage keeps the rows matching one [`FilterState`] field and
//! passes the view through untouched when that field is unrestricted. No
//! stage depends on a side effect of another, so the stages commute —
//! [`apply`] fixes an order only for readability.

use std::collections::BTreeSet;

use outage_map_analytics_models::{DateRange, FilterState, FilteredView};
use outage_map_incident_models::Dataset;

/// Keeps rows whose region equals `region`; no-op when `None`.
#[must_use]
pub fn by_region(view: FilteredView, region: Option<&str>) -> FilteredView {
    match region {
        Some(region) => FilteredView::new(
            view.into_rows()
                .into_iter()
                .filter(|i| i.region == region)
                .collect(),
        ),
        None => view,
    }
}

/// Keeps rows whose district equals `district`; no-op when `None`.
#[must_use]
pub fn by_district(view: FilteredView, district: Option<&str>) -> FilteredView {
    match district {
        Some(district) => FilteredView::new(
            view.into_rows()
                .into_iter()
                .filter(|i| i.district == district)
                .collect(),
        ),
        None => view,
    }
}

/// Keeps rows whose event date falls inside `range`, inclusive on both
/// ends at date granularity; no-op when `None`.
///
/// An inverted range matches nothing, so out-of-order picker bounds
/// select the empty set rather than raising.
#[must_use]
pub fn by_date_range(view: FilteredView, range: Option<&DateRange>) -> FilteredView {
    match range {
        Some(range) => FilteredView::new(
            view.into_rows()
                .into_iter()
                .filter(|i| range.contains(i.event_time.date()))
                .collect(),
        ),
        None => view,
    }
}

/// Keeps rows whose client is in `clients`; no-op when the set is empty.
#[must_use]
pub fn by_clients(view: FilteredView, clients: &BTreeSet<String>) -> FilteredView {
    if clients.is_empty() {
        return view;
    }
    FilteredView::new(
        view.into_rows()
            .into_iter()
            .filter(|i| clients.contains(i.client.as_str()))
            .collect(),
    )
}

/// Applies all four filter stages to a dataset.
///
/// Total over every [`FilterState`]: all combinations of present and
/// absent fields yield a (possibly empty) view, never an error. The
/// source dataset is never mutated; each call derives a fresh view.
#[must_use]
pub fn apply(dataset: &Dataset, state: &FilterState) -> FilteredView {
    let view = FilteredView::new(dataset.rows().to_vec());
    let view = by_region(view, state.region.as_deref());
    let view = by_district(view, state.district.as_deref());
    let view = by_date_range(view, state.date_range.as_ref());
    by_clients(view, &state.clients)
}

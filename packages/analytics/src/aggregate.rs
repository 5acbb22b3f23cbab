//! Frequency tables over a filtered view.
//!
//! Groups rows by a dimension projection and counts them. Keys appear in
//! order of first occurrence in the view and only when their count is
//! positive — date tables are sparse, matching charts that skip empty
//! days.

use std::collections::HashMap;

use outage_map_analytics_models::{AggregateTable, Dimension, DimensionCount, FilteredView};
use outage_map_incident_models::Incident;

fn projection(incident: &Incident, dimension: Dimension) -> String {
    match dimension {
        Dimension::Date => incident.event_time.date().format("%Y-%m-%d").to_string(),
        Dimension::DayOfWeek => incident.event_time.format("%A").to_string(),
        Dimension::Region => incident.region.clone(),
        Dimension::District => incident.district.clone(),
        Dimension::Client => incident.client.clone(),
    }
}

/// Counts the rows of `view` grouped by `dimension`.
///
/// Deterministic: the same view and dimension always produce an identical
/// table, and the sum of row counts equals `view.len()`.
#[must_use]
pub fn aggregate(view: &FilteredView, dimension: Dimension) -> AggregateTable {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<DimensionCount> = Vec::new();

    for incident in view {
        let key = projection(incident, dimension);
        if let Some(&idx) = positions.get(&key) {
            rows[idx].count += 1;
        } else {
            positions.insert(key.clone(), rows.len());
            rows.push(DimensionCount { key, count: 1 });
        }
    }

    AggregateTable { dimension, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn incident(region: &str, client: &str, day: u32) -> Incident {
        Incident {
            ticket_id: format!("T-{day}"),
            region: region.to_string(),
            district: "Dhaka".to_string(),
            client: client.to_string(),
            event_time: NaiveDate::from_ymd_opt(2024, 3, day)
                .unwrap()
                .and_hms_opt(8, 15, 0)
                .unwrap(),
            latitude: 23.7,
            longitude: 90.4,
        }
    }

    #[test]
    fn counts_by_region() {
        let view = FilteredView::new(vec![
            incident("RIO-2", "Acme", 1),
            incident("RIO-2", "Globex", 2),
            incident("RIO-1", "Acme", 3),
        ]);
        let table = aggregate(&view, Dimension::Region);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].key, "RIO-2");
        assert_eq!(table.rows[0].count, 2);
        assert_eq!(table.rows[1].key, "RIO-1");
        assert_eq!(table.rows[1].count, 1);
    }

    #[test]
    fn date_table_is_sparse() {
        // 2024-03-01 and 2024-03-10 with a nine-day gap between them.
        let view = FilteredView::new(vec![
            incident("RIO-1", "Acme", 1),
            incident("RIO-1", "Acme", 10),
            incident("RIO-1", "Acme", 1),
        ]);
        let table = aggregate(&view, Dimension::Date);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].key, "2024-03-01");
        assert_eq!(table.rows[0].count, 2);
        assert_eq!(table.rows[1].key, "2024-03-10");
        assert_eq!(table.rows[1].count, 1);
    }

    #[test]
    fn day_of_week_uses_english_names_in_first_occurrence_order() {
        // 2024-03-01 was a Friday, 2024-03-04 a Monday.
        let view = FilteredView::new(vec![
            incident("RIO-1", "Acme", 4),
            incident("RIO-1", "Acme", 1),
            incident("RIO-1", "Acme", 8),
        ]);
        let table = aggregate(&view, Dimension::DayOfWeek);
        assert_eq!(table.rows[0].key, "Monday");
        assert_eq!(table.rows[0].count, 1);
        assert_eq!(table.rows[1].key, "Friday");
        assert_eq!(table.rows[1].count, 2);
    }

    #[test]
    fn empty_view_gives_empty_table() {
        let table = aggregate(&FilteredView::default(), Dimension::Client);
        assert!(table.rows.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn aggregation_is_deterministic() {
        let view = FilteredView::new(vec![
            incident("RIO-1", "Acme", 1),
            incident("RIO-2", "Globex", 2),
            incident("RIO-1", "Acme", 3),
        ]);
        for dim in Dimension::all() {
            assert_eq!(aggregate(&view, *dim), aggregate(&view, *dim));
        }
    }
}

//! Precomputed distinct-value and membership lookups over a dataset.
//!
//! Built once per dataset load and shared across interactions; the
//! recorded dataset fingerprint lets callers key a cache and rebuild only
//! when the dataset actually changes.

use std::collections::BTreeMap;
use std::time::Instant;

use outage_map_incident_models::{Dataset, regions::region_rank};

/// Distinct regions, districts, and clients observed in a dataset, plus
/// the membership maps that drive the cascading dropdowns.
///
/// District lists come from actual row membership, never a static lookup
/// table, so a district that first appears in new data shows up without
/// any code change. Client lists depend on the selected district — the
/// one place where the dropdown dependency graph is not a plain
/// region→district chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionIndex {
    fingerprint: String,
    regions: Vec<String>,
    districts: Vec<String>,
    clients: Vec<String>,
    region_districts: BTreeMap<String, Vec<String>>,
    district_clients: BTreeMap<String, Vec<String>>,
}

impl DimensionIndex {
    /// Builds the index from a dataset. Pure function of the dataset
    /// contents.
    #[must_use]
    pub fn build(dataset: &Dataset) -> Self {
        let start = Instant::now();

        let mut regions: Vec<String> = Vec::new();
        let mut districts: Vec<String> = Vec::new();
        let mut clients: Vec<String> = Vec::new();
        let mut region_districts: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut district_clients: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for incident in dataset {
            push_first_seen(&mut regions, &incident.region);
            push_first_seen(&mut districts, &incident.district);
            push_first_seen(&mut clients, &incident.client);
            push_first_seen(
                region_districts.entry(incident.region.clone()).or_default(),
                &incident.district,
            );
            push_first_seen(
                district_clients
                    .entry(incident.district.clone())
                    .or_default(),
                &incident.client,
            );
        }

        // Priority rank first, source order of first appearance as the
        // tie-break. The sort is stable, so first-appearance order
        // survives within each rank.
        regions.sort_by_key(|r| region_rank(r));

        let index = Self {
            fingerprint: dataset.fingerprint(),
            regions,
            districts,
            clients,
            region_districts,
            district_clients,
        };

        log::debug!(
            "Built dimension index ({} regions, {} districts, {} clients) in {:.1}ms",
            index.regions.len(),
            index.districts.len(),
            index.clients.len(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        index
    }

    /// Fingerprint of the dataset this index was built from. Suitable as
    /// a cache key: equal fingerprints imply an identical index.
    #[must_use]
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Distinct regions in display order: fixed priority rank first,
    /// unranked regions after, ties broken by first appearance.
    #[must_use]
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// Districts observed in rows of `region`, or all districts when no
    /// region is given. Unknown regions have no districts.
    #[must_use]
    pub fn districts(&self, region: Option<&str>) -> &[String] {
        region.map_or(self.districts.as_slice(), |r| {
            self.region_districts.get(r).map_or(&[], Vec::as_slice)
        })
    }

    /// Clients observed in rows of `district`, or all clients when no
    /// district is given. Unknown districts have no clients.
    #[must_use]
    pub fn clients(&self, district: Option<&str>) -> &[String] {
        district.map_or(self.clients.as_slice(), |d| {
            self.district_clients.get(d).map_or(&[], Vec::as_slice)
        })
    }
}

fn push_first_seen(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outage_map_incident_models::Incident;

    fn incident(region: &str, district: &str, client: &str) -> Incident {
        Incident {
            ticket_id: "T-1".to_string(),
            region: region.to_string(),
            district: district.to_string(),
            client: client.to_string(),
            event_time: chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            latitude: 23.7,
            longitude: 90.4,
        }
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            incident("RIO-3", "Sylhet", "Acme"),
            incident("RIO-1", "Dhaka", "Globex"),
            incident("Metro NOC", "Gazipur", "Initech"),
            incident("RIO-1", "Tangail", "Acme"),
            incident("RIO-3", "Sylhet", "Globex"),
        ])
    }

    #[test]
    fn regions_ordered_by_priority_then_appearance() {
        let index = DimensionIndex::build(&dataset());
        assert_eq!(index.regions(), ["RIO-1", "RIO-3", "Metro NOC"]);
    }

    #[test]
    fn unranked_regions_keep_appearance_order() {
        let ds = Dataset::new(vec![
            incident("Metro NOC", "Gazipur", "Acme"),
            incident("Backbone", "Dhaka", "Acme"),
            incident("RIO-2", "Bogra", "Acme"),
        ]);
        let index = DimensionIndex::build(&ds);
        assert_eq!(index.regions(), ["RIO-2", "Metro NOC", "Backbone"]);
    }

    #[test]
    fn districts_restricted_to_region_membership() {
        let index = DimensionIndex::build(&dataset());
        assert_eq!(index.districts(Some("RIO-1")), ["Dhaka", "Tangail"]);
        assert_eq!(
            index.districts(None),
            ["Sylhet", "Dhaka", "Gazipur", "Tangail"]
        );
    }

    #[test]
    fn region_districts_are_subset_of_all() {
        let index = DimensionIndex::build(&dataset());
        for region in index.regions() {
            for district in index.districts(Some(region)) {
                assert!(index.districts(None).contains(district));
            }
        }
    }

    #[test]
    fn unknown_region_has_no_districts() {
        let index = DimensionIndex::build(&dataset());
        assert!(index.districts(Some("RIO-4")).is_empty());
    }

    #[test]
    fn clients_depend_on_district() {
        let index = DimensionIndex::build(&dataset());
        assert_eq!(index.clients(Some("Sylhet")), ["Acme", "Globex"]);
        assert_eq!(index.clients(Some("Gazipur")), ["Initech"]);
        assert!(!index.clients(Some("Dhaka")).contains(&"Acme".to_string()));
    }

    #[test]
    fn fingerprint_matches_dataset() {
        let ds = dataset();
        let index = DimensionIndex::build(&ds);
        assert_eq!(index.fingerprint(), ds.fingerprint());
    }
}

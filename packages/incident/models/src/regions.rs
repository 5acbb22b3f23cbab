//! Region taxonomy: label canonicalization and display priority.
//!
//! Source exports label regions with their long organizational names.
//! Normalization maps those to the short codes used everywhere else in
//! the system; codes already in short form pass through unchanged, so the
//! mapping is idempotent.

/// Display priority for region codes.
///
/// Regions are shown in this order in selection lists; regions not in the
/// list sort after it, in order of first appearance in the dataset.
pub const REGION_PRIORITY: &[&str] = &["RIO-1", "RIO-2", "RIO-3", "RIO-4"];

/// Maps a raw region label to its canonical short code.
///
/// Labels not present in the mapping (including codes that are already
/// canonical) are returned unchanged.
#[must_use]
pub fn region_code(label: &str) -> &str {
    match label {
        "Regional Implementation & Operations 1" => "RIO-1",
        "Regional Implementation & Operations 2" => "RIO-2",
        "Regional Implementation & Operations 3" => "RIO-3",
        "Regional Implementation & Operations 4" => "RIO-4",
        other => other,
    }
}

/// Rank of a region code in the fixed display priority.
///
/// Unranked regions all share `REGION_PRIORITY.len()`, which sorts them
/// after every ranked region.
#[must_use]
pub fn region_rank(code: &str) -> usize {
    REGION_PRIORITY
        .iter()
        .position(|r| *r == code)
        .unwrap_or(REGION_PRIORITY.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_long_labels_to_codes() {
        assert_eq!(
            region_code("Regional Implementation & Operations 1"),
            "RIO-1"
        );
        assert_eq!(
            region_code("Regional Implementation & Operations 4"),
            "RIO-4"
        );
    }

    #[test]
    fn mapping_is_idempotent() {
        for label in [
            "Regional Implementation & Operations 2",
            "RIO-2",
            "Metro NOC",
        ] {
            let once = region_code(label);
            assert_eq!(region_code(once), once);
        }
    }

    #[test]
    fn unknown_labels_pass_through() {
        assert_eq!(region_code("Metro NOC"), "Metro NOC");
    }

    #[test]
    fn ranked_regions_precede_unranked() {
        assert!(region_rank("RIO-1") < region_rank("RIO-4"));
        assert!(region_rank("RIO-4") < region_rank("Metro NOC"));
        assert_eq!(region_rank("Metro NOC"), region_rank("Other NOC"));
    }
}

//! `GeoJSON` boundary loading and point-in-district lookup.

use std::path::Path;

use geo::{Contains, MultiPolygon};
use geojson::GeoJson;
use rstar::{AABB, RTree, RTreeObject};

use crate::GeoError;

/// Feature properties checked, in order, for a district name.
const NAME_PROPERTIES: &[&str] = &["name", "NAME", "ADM2_EN", "district"];

/// One district boundary: a name and its polygon geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct DistrictBoundary {
    /// District name from the feature properties, or a positional
    /// fallback when the feature carries none.
    pub name: String,
    /// Boundary geometry. Single polygons are promoted to a one-element
    /// multi-polygon.
    pub geometry: MultiPolygon<f64>,
}

struct BoundaryEntry {
    index: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for BoundaryEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// District boundaries loaded from a `GeoJSON` file, with an R-tree for
/// point lookups.
///
/// Built once at load time and handed to the map layer; the analytics
/// core never sees it.
pub struct BoundaryOverlay {
    boundaries: Vec<DistrictBoundary>,
    tree: RTree<BoundaryEntry>,
}

impl BoundaryOverlay {
    /// Loads district boundaries from a `GeoJSON` file.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if the file cannot be read, is not valid
    /// `GeoJSON`, or is not a `FeatureCollection`.
    pub fn load(path: &Path) -> Result<Self, GeoError> {
        let contents = std::fs::read_to_string(path)?;
        let overlay = Self::from_geojson_str(&contents)?;
        log::info!(
            "Loaded {} district boundaries from {}",
            overlay.boundaries.len(),
            path.display()
        );
        Ok(overlay)
    }

    /// Parses district boundaries from `GeoJSON` text.
    ///
    /// Features whose geometry is neither `Polygon` nor `MultiPolygon`
    /// are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError`] if the text is not valid `GeoJSON` or is not
    /// a `FeatureCollection`.
    pub fn from_geojson_str(contents: &str) -> Result<Self, GeoError> {
        let geojson: GeoJson = contents.parse()?;
        let GeoJson::FeatureCollection(collection) = geojson else {
            return Err(GeoError::Conversion {
                message: "expected a GeoJSON FeatureCollection".to_string(),
            });
        };

        let mut boundaries = Vec::new();
        for (idx, feature) in collection.features.into_iter().enumerate() {
            let name = feature_name(&feature, idx);

            let Some(geometry) = feature.geometry else {
                log::warn!("Skipping boundary {name}: no geometry");
                continue;
            };
            let Some(multi_polygon) = to_multipolygon(geometry) else {
                log::warn!("Skipping boundary {name}: unsupported geometry type");
                continue;
            };

            boundaries.push(DistrictBoundary {
                name,
                geometry: multi_polygon,
            });
        }

        let entries = boundaries
            .iter()
            .enumerate()
            .map(|(index, boundary)| BoundaryEntry {
                index,
                envelope: compute_envelope(&boundary.geometry),
            })
            .collect();

        Ok(Self {
            boundaries,
            tree: RTree::bulk_load(entries),
        })
    }

    /// The loaded boundaries, in feature order.
    #[must_use]
    pub fn boundaries(&self) -> &[DistrictBoundary] {
        &self.boundaries
    }

    /// Finds the district containing a point.
    ///
    /// Districts tile the country without overlap, so first match wins.
    #[must_use]
    pub fn locate(&self, lng: f64, lat: f64) -> Option<&str> {
        let point = geo::Point::new(lng, lat);
        let query_env = AABB::from_point([lng, lat]);

        for entry in self.tree.locate_in_envelope_intersecting(&query_env) {
            let boundary = &self.boundaries[entry.index];
            if boundary.geometry.contains(&point) {
                return Some(&boundary.name);
            }
        }
        None
    }
}

fn feature_name(feature: &geojson::Feature, idx: usize) -> String {
    NAME_PROPERTIES
        .iter()
        .find_map(|key| feature.property(key).and_then(|v| v.as_str()))
        .map_or_else(|| format!("district-{idx}"), ToString::to_string)
}

/// Converts a `GeoJSON` geometry into a [`MultiPolygon`], promoting a
/// single `Polygon` to a one-element multi-polygon.
fn to_multipolygon(geometry: geojson::Geometry) -> Option<MultiPolygon<f64>> {
    let geo_geom: geo::Geometry<f64> = geometry.try_into().ok()?;
    match geo_geom {
        geo::Geometry::MultiPolygon(mp) => Some(mp),
        geo::Geometry::Polygon(p) => Some(MultiPolygon(vec![p])),
        _ => None,
    }
}

fn compute_envelope(mp: &MultiPolygon<f64>) -> AABB<[f64; 2]> {
    use geo::BoundingRect;

    mp.bounding_rect().map_or_else(
        || AABB::from_point([0.0, 0.0]),
        |rect| AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
    )
}

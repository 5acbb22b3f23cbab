#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! District boundary overlay for the outage map presentation layer.
//!
//! Loads a `GeoJSON` boundary file and exposes the district polygons as
//! plain data for map rendering, plus an R-tree point-in-district lookup
//! for marker bucketing. The analytics core never depends on this crate;
//! geometry is strictly a presentation concern.

pub mod overlay;

use thiserror::Error;

pub use overlay::{BoundaryOverlay, DistrictBoundary};

/// Errors that can occur while loading boundary data.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Reading the boundary file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid `GeoJSON`.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Geometry conversion error.
    #[error("Conversion error: {message}")]
    Conversion {
        /// Description of what went wrong.
        message: String,
    },
}

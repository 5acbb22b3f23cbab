#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter-and-aggregate pipeline core for the outage dashboard.
//!
//! Everything here is a pure function of `(Dataset, FilterState)` — there
//! is no ambient session state. The [`index`] module precomputes the
//! distinct-value and membership lookups that drive cascading dropdowns;
//! [`filter`] narrows a dataset to the rows matching a filter state; and
//! [`aggregate`] turns a filtered view into ordered count tables for the
//! presentation layer.
//!
//! All operations are total: every filter state, including stale
//! selections that no longer exist in the dataset, yields a (possibly
//! empty) result rather than an error.

pub mod aggregate;
pub mod filter;
pub mod index;

pub use aggregate::aggregate;
pub use filter::apply;
pub use index::DimensionIndex;

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line front end for the outage analytics pipeline.
//!
//! Stands in for the dashboard shell: loads a ticket export, shows the
//! dependent dropdown option lists the sidebar would offer, and runs the
//! filter-and-aggregate pipeline, printing count tables or a JSON
//! document for a front end to render.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use outage_map_analytics::{DimensionIndex, aggregate, apply};
use outage_map_analytics_models::{
    AggregateTable, DateRange, Dimension, FilterState, FilteredView,
};
use outage_map_geography::BoundaryOverlay;

#[derive(Parser)]
#[command(name = "outage_map_cli", about = "Outage incident analytics tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show overall counts by region, district, and client
    Summary {
        /// Path to the ticket export CSV
        dataset: PathBuf,
    },
    /// Show the dependent filter option lists for the current selection
    Options {
        /// Path to the ticket export CSV
        dataset: PathBuf,
        /// Selected region (restricts the district list)
        #[arg(long)]
        region: Option<String>,
        /// Selected district (restricts the client list)
        #[arg(long)]
        district: Option<String>,
    },
    /// Filter the dataset and print aggregate tables
    Filter {
        /// Path to the ticket export CSV
        dataset: PathBuf,
        /// Region to filter by
        #[arg(long)]
        region: Option<String>,
        /// District to filter by
        #[arg(long)]
        district: Option<String>,
        /// Comma-separated client identifiers to filter by
        #[arg(long)]
        clients: Option<String>,
        /// Start of the event-date range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// End of the event-date range (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Dimension to aggregate by (repeatable; defaults to date and
        /// `day_of_week`, the dashboard's two charts)
        #[arg(long = "by")]
        dimensions: Vec<Dimension>,
        /// `GeoJSON` district boundary file; when given, filtered rows are
        /// also bucketed by the boundary containing them
        #[arg(long)]
        boundaries: Option<PathBuf>,
        /// Emit the filtered rows and tables as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Summary { dataset } => {
            let dataset = outage_map_ingest::load_dataset(&dataset)?;
            let view = apply(&dataset, &FilterState::default());
            println!("Total incidents: {}", view.len());
            for dim in [Dimension::Region, Dimension::District, Dimension::Client] {
                println!();
                print_table(&aggregate(&view, dim));
            }
        }
        Commands::Options {
            dataset,
            region,
            district,
        } => {
            let dataset = outage_map_ingest::load_dataset(&dataset)?;
            let index = DimensionIndex::build(&dataset);

            print_options("REGIONS", index.regions());
            print_options("DISTRICTS", index.districts(region.as_deref()));
            print_options("CLIENTS", index.clients(district.as_deref()));
        }
        Commands::Filter {
            dataset,
            region,
            district,
            clients,
            from,
            to,
            dimensions,
            boundaries,
            json,
        } => {
            let start = Instant::now();
            let dataset = outage_map_ingest::load_dataset(&dataset)?;

            let state = FilterState {
                region,
                district,
                clients: clients.map_or_else(BTreeSet::new, |list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(ToString::to_string)
                        .collect()
                }),
                // Both bounds are required to restrict; a single bound
                // leaves the date dimension unfiltered, matching the
                // date-picker contract.
                date_range: from
                    .zip(to)
                    .map(|(start, end)| DateRange { start, end }),
            };

            let view = apply(&dataset, &state);
            let dimensions = if dimensions.is_empty() {
                vec![Dimension::Date, Dimension::DayOfWeek]
            } else {
                dimensions
            };
            let tables: Vec<AggregateTable> =
                dimensions.iter().map(|dim| aggregate(&view, *dim)).collect();

            log::info!(
                "Pipeline run: {} of {} incidents matched in {:.1}ms",
                view.len(),
                dataset.len(),
                start.elapsed().as_secs_f64() * 1000.0
            );

            let buckets = boundaries
                .map(|path| {
                    BoundaryOverlay::load(&path).map(|overlay| bucket_by_boundary(&overlay, &view))
                })
                .transpose()?;

            if json {
                let report = serde_json::json!({
                    "totalCount": view.len(),
                    "rows": view.rows(),
                    "tables": tables,
                    "boundaryBuckets": buckets,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Total count: {}", view.len());
                for table in &tables {
                    println!();
                    print_table(table);
                }
                if let Some(buckets) = buckets {
                    println!();
                    println!("{:<24} COUNT", "BOUNDARY");
                    println!("{}", "-".repeat(32));
                    for (name, count) in buckets {
                        println!("{name:<24} {count}");
                    }
                }
            }
        }
    }

    Ok(())
}

/// Buckets filtered rows by the boundary polygon containing them.
///
/// Rows falling outside every boundary are collected under `(outside)`,
/// in last position.
fn bucket_by_boundary(overlay: &BoundaryOverlay, view: &FilteredView) -> Vec<(String, u64)> {
    let mut buckets: Vec<(String, u64)> = Vec::new();
    let mut outside: u64 = 0;

    for incident in view {
        match overlay.locate(incident.longitude, incident.latitude) {
            Some(name) => {
                if let Some(bucket) = buckets.iter_mut().find(|(n, _)| n == name) {
                    bucket.1 += 1;
                } else {
                    buckets.push((name.to_string(), 1));
                }
            }
            None => outside += 1,
        }
    }

    if outside > 0 {
        buckets.push(("(outside)".to_string(), outside));
    }
    buckets
}

fn print_table(table: &AggregateTable) {
    println!("{:<24} COUNT", table.dimension.as_ref().to_uppercase());
    println!("{}", "-".repeat(32));
    for row in &table.rows {
        println!("{:<24} {}", row.key, row.count);
    }
}

fn print_options(title: &str, values: &[String]) {
    println!("{title}");
    println!("{}", "-".repeat(title.len().max(8)));
    if values.is_empty() {
        println!("(none)");
    } else {
        for value in values {
            println!("{value}");
        }
    }
    println!();
}

mod parse;

use crate::parse::{Args, Command};
use chrono::{Datelike, Utc};
use clap::Parser;
use fossilmapped::citation::bibtex_citation;
use fossilmapped::export::save_to_csv;
use fossilmapped::grid::derive_grid_reference;
use fossilmapped::record::{FindRecord, Measurements};
use fossilmapped::stats::{compute_activity, compute_period_stats};
use fossilmapped::store::{FindStore, StoreConfig};
use indicatif::ProgressBar;
use rand::Rng;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// Utility functions
fn grid_label(find: &FindRecord) -> String {
    derive_grid_reference(find.latitude, find.longitude)
        .map(|grid| grid.to_string())
        .unwrap_or_else(|_| "n/a".to_string())
}

/// New catalogue identifiers follow the FMP-<year>-<serial> convention.
fn new_find_id() -> String {
    let serial: u32 = rand::rng().random_range(0..10_000);
    format!("FMP-{}-{:04}", Utc::now().year(), serial)
}

pub fn print_summary(records: &[FindRecord]) {
    if records.is_empty() {
        println!("No records to summarize");
        return;
    }

    println!("\nSummary:");
    println!("Total finds: {}", records.len());

    let unique_taxa: HashSet<&String> = records
        .iter()
        .map(|r| &r.taxon)
        .filter(|taxon| !taxon.is_empty())
        .collect();
    println!("Unique taxa: {}", unique_taxa.len());

    // Get collection date range
    let dates: Vec<&String> = records
        .iter()
        .map(|r| &r.date_collected)
        .filter(|date| !date.is_empty())
        .collect();

    if !dates.is_empty() {
        let min_date = dates.iter().min().unwrap();
        let max_date = dates.iter().max().unwrap();
        println!("Date range: {} to {}", min_date, max_date);
    }

    println!("Distribution by period:");
    for stat in compute_period_stats(records) {
        println!("  {}: {}% [{}]", stat.label, stat.percent, stat.color);
    }

    println!("Recent activity:");
    for find in compute_activity(records) {
        println!(
            "  {}  {} from {} (grid {}) shared {}",
            find.id,
            find.taxon,
            find.location_name,
            grid_label(&find),
            find.shared_at
        );
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse()?;
    // Initialize logger
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::init();
    }

    let env = StoreConfig::from_env();
    let config = StoreConfig::new(
        args.base_url.unwrap_or(env.base_url),
        args.api_key.unwrap_or(env.api_key),
    )
    .with_timeout(args.timeout);
    let store = FindStore::new(config);

    match args.command {
        Command::Fetch { output } => {
            println!("\nFetching shared finds...");
            let start = Instant::now();

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Contacting shared_finds table");
            spinner.enable_steady_tick(Duration::from_millis(100));
            let records = store.fetch_shared_finds().await;
            spinner.finish_and_clear();

            println!(
                "Fetched {} records in {:.2?}",
                records.len(),
                start.elapsed()
            );

            // Save to CSV
            save_to_csv(&records, &output)?;

            // Print summary
            print_summary(&records);
        }

        Command::Share {
            collector,
            email,
            taxon,
            element,
            period,
            location,
            lat,
            lon,
            date,
            length,
            width,
            thickness,
            weight,
            notes,
        } => {
            // reject out-of-range coordinates before they reach the shared table
            derive_grid_reference(lat, lon)?;

            let measurements = if length.is_some()
                || width.is_some()
                || thickness.is_some()
                || weight.is_some()
            {
                Some(Measurements {
                    length,
                    width,
                    thickness,
                    weight,
                })
            } else {
                None
            };

            let record = FindRecord {
                id: new_find_id(),
                collector_name: collector,
                collector_email: email,
                taxon,
                element,
                period,
                location_name: location,
                latitude: lat,
                longitude: lon,
                date_collected: date,
                shared_at: Utc::now().format("%Y-%m-%d").to_string(),
                photos: Vec::new(),
                measurements,
                notes,
                is_public: true,
            };

            let stored = store.share_find(&record).await?;
            println!("Shared find {} ({})", stored.id, stored.taxon);
        }

        Command::Cite { id } => {
            let records = store.fetch_shared_finds().await;
            match records.iter().find(|record| record.id == id) {
                Some(record) => println!("{}", bibtex_citation(record)),
                None => return Err(format!("no record with id {}", id).into()),
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_label_for_valid_coordinates() {
        let find = FindRecord {
            latitude: 54.4858,
            longitude: -0.6206,
            ..FindRecord::default()
        };
        let label = grid_label(&find);
        assert!(label.starts_with("SY "));
    }

    #[test]
    fn test_grid_label_falls_back_on_bad_coordinates() {
        let find = FindRecord {
            latitude: 200.0,
            longitude: 0.0,
            ..FindRecord::default()
        };
        assert_eq!(grid_label(&find), "n/a");
    }

    #[test]
    fn test_new_find_id_format() {
        let id = new_find_id();
        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "FMP");
        assert_eq!(parts[1].len(), 4);
        assert_eq!(parts[2].len(), 4);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }
}

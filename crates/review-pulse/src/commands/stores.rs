//! Stores command: the store catalog with review counts.

use clap::Args;
use owo_colors::OwoColorize;
use review_pulse_core::config::Config;
use review_pulse_core::ingest::Dataset;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{DatasetArgs, load_dataset};

/// Arguments for the `stores` subcommand.
#[derive(Args, Debug, Default)]
pub struct StoresArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct StoreRow {
    store_id: u32,
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    location: String,
    review_count: usize,
}

/// Catalog stores in catalog order, then stores that only appear in reviews.
fn store_rows(dataset: &Dataset) -> Vec<StoreRow> {
    let mut rows: Vec<StoreRow> = dataset
        .stores
        .iter()
        .map(|s| StoreRow {
            store_id: s.store_id,
            name: s.name.clone(),
            location: s.location.clone(),
            review_count: dataset.review_count(s.store_id),
        })
        .collect();

    for review in &dataset.reviews {
        if !rows.iter().any(|r| r.store_id == review.store_id) {
            rows.push(StoreRow {
                store_id: review.store_id,
                name: format!("Store {}", review.store_id),
                location: String::new(),
                review_count: dataset.review_count(review.store_id),
            });
        }
    }
    rows
}

/// List stores and how many reviews each has.
#[instrument(name = "cmd_stores", skip_all)]
pub fn cmd_stores(
    args: StoresArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(data = ?args.dataset.data, "executing stores command");

    let dataset = load_dataset(&args.dataset, config, max_input)?;
    let rows = store_rows(&dataset);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        let location = if row.location.is_empty() {
            String::new()
        } else {
            format!(" {}", format!("({})", row.location).dimmed())
        };
        println!(
            "{:>4}  {}{location}  {} reviews",
            row.store_id.cyan(),
            row.name.bold(),
            row.review_count,
        );
    }
    Ok(())
}

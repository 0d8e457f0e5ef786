//! Command implementations.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use review_pulse_core::config::Config;
use review_pulse_core::ingest::{self, Dataset};

pub mod analyze;
pub mod extract;
pub mod info;
pub mod reviews;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod stores;

/// Dataset selection shared by the data-driven commands.
#[derive(Args, Debug, Default, Clone)]
pub struct DatasetArgs {
    /// Review dataset (JSON). Defaults to the configured dataset, then the bundled sample.
    #[arg(long, value_name = "FILE")]
    pub data: Option<Utf8PathBuf>,
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Load the dataset named by `--data`, else the configured one, else the bundled sample.
pub fn load_dataset(
    args: &DatasetArgs,
    config: &Config,
    max_bytes: Option<usize>,
) -> anyhow::Result<Dataset> {
    match args.data.as_ref().or(config.dataset.as_ref()) {
        Some(path) => {
            let content = read_input_file(path, max_bytes)?;
            ingest::parse_dataset(&content).with_context(|| format!("failed to load {path}"))
        }
        None => {
            tracing::debug!("no dataset given, using bundled sample");
            ingest::sample_dataset().context("bundled sample dataset is invalid")
        }
    }
}

/// Store name from the catalog, or the `Store <id>` fallback.
pub fn store_label(dataset: &Dataset, store_id: u32) -> String {
    dataset
        .store(store_id)
        .map_or_else(|| format!("Store {store_id}"), |s| s.name.clone())
}

//! Extract command: run the text extractors over a piece of review text.

use clap::Args;
use owo_colors::OwoColorize;
use review_pulse_core::extract::{self, TextFacets};
use tracing::{debug, instrument};

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
    /// Review text to analyze.
    pub text: String,
}

/// Print the facets found in the given text.
#[instrument(name = "cmd_extract", skip_all, fields(len = args.text.len()))]
pub fn cmd_extract(args: ExtractArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing extract command");

    let facets = extract::extract_facets(&args.text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(());
    }

    print_facets(&facets);
    Ok(())
}

fn print_facets(facets: &TextFacets) {
    let none = "none".dimmed().to_string();
    let size_fit = facets
        .size_fit
        .map_or_else(|| none.clone(), |s| s.display_label().to_string());
    let fabric = facets.fabric_quality.clone().unwrap_or_else(|| none.clone());
    let list = |items: &[String]| {
        if items.is_empty() {
            none.clone()
        } else {
            items.join(", ")
        }
    };

    println!("{}: {}", "Size fit".dimmed(), size_fit);
    println!("{}: {}", "Colors".dimmed(), list(&facets.colors));
    println!("{}: {}", "Fabric".dimmed(), fabric);
    println!("{}: {}", "Products".dimmed(), list(&facets.products));
}

//! Analyze command: the full analytics report for one store or all stores.

use clap::Args;
use owo_colors::OwoColorize;
use review_pulse_core::analytics::{self, AnalyticsReport};
use review_pulse_core::config::Config;
use review_pulse_core::review::StoreSelector;
use tracing::{debug, instrument};

use super::{DatasetArgs, load_dataset, store_label};

/// How many entries of each ranked list the text output shows.
const TOP_N: usize = 5;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Store to analyze: `all` or a numeric store id.
    #[arg(long, value_name = "all|ID")]
    pub store: Option<StoreSelector>,
}

/// Compute and print the analytics report.
#[instrument(name = "cmd_analyze", skip_all, fields(store))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let selector = args.store.or(config.default_store).unwrap_or_default();
    tracing::Span::current().record("store", tracing::field::display(selector));
    debug!(data = ?args.dataset.data, %selector, "executing analyze command");

    let dataset = load_dataset(&args.dataset, config, max_input)?;
    let report = analytics::compute_analytics(&dataset.reviews, &dataset.stores, selector);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let heading = match selector {
        StoreSelector::All => "All stores".to_string(),
        StoreSelector::Store(id) => format!("{} (store {id})", store_label(&dataset, id)),
    };
    println!("{}", heading.bold());
    print_report(&report);

    Ok(())
}

fn print_report(report: &AnalyticsReport) {
    let health = &report.brand_health;
    let breakdown = &health.sentiment_breakdown;
    println!(
        "\n  {} {} avg over {} reviews ({} positive / {} neutral / {} negative)",
        "Brand health:".cyan(),
        health.avg_rating.bold(),
        health.total_reviews,
        breakdown.positive.green(),
        breakdown.neutral,
        breakdown.negative.red(),
    );

    let fit: Vec<_> = report
        .size_fit
        .iter()
        .map(|e| format!("{} {}% ({})", e.label, e.percentage, e.count))
        .collect();
    println!("\n  {} {}", "Size fit:".cyan(), fit.join(", "));

    if !report.product_feedback.is_empty() {
        println!("\n  {}", "Products:".cyan());
        for p in report.product_feedback.iter().take(TOP_N) {
            let score = if p.sentiment_score >= 70 {
                p.sentiment_score.green().to_string()
            } else if p.sentiment_score >= 40 {
                p.sentiment_score.yellow().to_string()
            } else {
                p.sentiment_score.red().to_string()
            };
            println!(
                "    {} score {score}, {} mentions (+{} ={} -{})",
                p.name, p.total, p.positive, p.neutral, p.negative,
            );
        }
    }

    if !report.color_mentions.is_empty() {
        let colors: Vec<_> = report
            .color_mentions
            .iter()
            .take(TOP_N)
            .map(|c| format!("{} ({})", c.name, c.count))
            .collect();
        println!("\n  {} {}", "Colors:".cyan(), colors.join(", "));
    }

    if !report.fabric_feedback.is_empty() {
        let fabric: Vec<_> = report
            .fabric_feedback
            .iter()
            .take(TOP_N)
            .map(|f| format!("{} ({}, {})", f.name, f.count, f.tone))
            .collect();
        println!("\n  {} {}", "Fabric:".cyan(), fabric.join(", "));
    }

    let stores: Vec<_> = report
        .demographics
        .stores
        .iter()
        .map(|s| format!("{} {}%", s.name, s.percentage))
        .collect();
    if !stores.is_empty() {
        println!("\n  {} {}", "Stores:".cyan(), stores.join(", "));
    }
    let ratings: Vec<_> = report
        .demographics
        .ratings
        .iter()
        .map(|r| format!("{}★ {}", r.rating, r.count))
        .collect();
    println!("  {} {}", "Ratings:".cyan(), ratings.join(", "));
}

//! Reviews command: newest reviews first.

use clap::Args;
use owo_colors::OwoColorize;
use review_pulse_core::config::Config;
use review_pulse_core::filter::{filter_by_store, most_recent};
use review_pulse_core::resolve::resolve_sentiment;
use review_pulse_core::review::{Review, Sentiment, StoreSelector};
use tracing::{debug, instrument};

use super::{DatasetArgs, load_dataset, store_label};

/// Reviews listed when neither `--limit` nor `recent_limit` is set.
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Arguments for the `reviews` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReviewsArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Store to list: `all` or a numeric store id.
    #[arg(long, value_name = "all|ID")]
    pub store: Option<StoreSelector>,

    /// Maximum number of reviews to show.
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Only show reviews with this sentiment.
    #[arg(long, value_enum)]
    pub sentiment: Option<Sentiment>,
}

/// Select reviews for `selector`, keep those matching `sentiment`, newest first.
fn select_reviews<'a>(
    reviews: &'a [Review],
    selector: StoreSelector,
    sentiment: Option<Sentiment>,
    limit: usize,
) -> Vec<&'a Review> {
    let matching: Vec<&Review> = filter_by_store(reviews, selector)
        .into_iter()
        .filter(|r| sentiment.is_none_or(|s| resolve_sentiment(r) == Some(s)))
        .collect();
    most_recent(&matching, Some(limit))
}

/// List the most recent reviews.
#[instrument(name = "cmd_reviews", skip_all)]
pub fn cmd_reviews(
    args: ReviewsArgs,
    global_json: bool,
    config: &Config,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let selector = args.store.or(config.default_store).unwrap_or_default();
    let limit = args
        .limit
        .or(config.recent_limit)
        .unwrap_or(DEFAULT_RECENT_LIMIT);
    debug!(%selector, limit, sentiment = ?args.sentiment, "executing reviews command");

    let dataset = load_dataset(&args.dataset, config, max_input)?;
    let selected = select_reviews(&dataset.reviews, selector, args.sentiment, limit);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("{}", "No reviews found".yellow());
        return Ok(());
    }

    for review in selected {
        let filled = usize::from(review.rating.min(5));
        let stars = format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled));
        let author = review.author_name.as_deref().unwrap_or("Anonymous");
        let date = review
            .timestamp
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        println!(
            "{} {}  {}  {}",
            stars.yellow(),
            author.bold(),
            store_label(&dataset, review.store_id).dimmed(),
            date.dimmed(),
        );
        if let Some(ref text) = review.text {
            println!("    {text}");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use review_pulse_core::ingest::sample_dataset;

    #[test]
    fn newest_first_with_limit() {
        let dataset = sample_dataset().unwrap();
        let ids: Vec<_> = select_reviews(&dataset.reviews, StoreSelector::Store(1), None, 2)
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "2"]);
    }

    #[test]
    fn sentiment_filter_applies() {
        let dataset = sample_dataset().unwrap();
        let selected = select_reviews(
            &dataset.reviews,
            StoreSelector::All,
            Some(Sentiment::Negative),
            10,
        );
        let ids: Vec<_> = selected.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["12", "5"]);
    }

    #[test]
    fn reviews_command_succeeds() {
        assert!(cmd_reviews(ReviewsArgs::default(), false, &Config::default(), None).is_ok());
    }
}

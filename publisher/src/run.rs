//! Run control
//!
//! One linear pass per invocation: gates, cache load, windowing, rendering,
//! then the two-call publish protocol. Skips are successes; only unexpected
//! API outcomes fail the run.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Utc};
use tracing::info;

use crate::config::{site_base_url, Config};
use crate::digest::{render_digest, MAX_ITEMS};
use crate::feed::{load_items, weekly_window};
use crate::gate::{credential, is_posting_day, SkipReason};
use crate::medium::{MediumApi, NewPost};

/// How a run ended. Both variants map to exit code 0.
#[derive(Debug)]
pub enum Outcome {
    Published,
    Skipped(SkipReason),
}

/// Execute one publish run against the given API at the given moment.
///
/// `now` is passed in rather than read here so the weekly window and the
/// day-of-week gate are reproducible in tests.
pub async fn run<A: MediumApi>(config: &Config, api: &A, now: DateTime<Utc>) -> Result<Outcome> {
    if !is_posting_day(now.weekday(), config.force_post) {
        return Ok(Outcome::Skipped(SkipReason::NotPostingDay));
    }
    if credential(config.medium_token.as_deref()).is_none() {
        return Ok(Outcome::Skipped(SkipReason::MissingToken));
    }

    let base_url = site_base_url(&config.site_dir);
    let items = load_items(&config.feeds_path());
    if items.is_empty() {
        return Ok(Outcome::Skipped(SkipReason::EmptyCache));
    }

    let iso = now.iso_week();
    let title = format!(
        "Weekly Digest: AI/ML & Strategy — Week {}-W{:02}",
        iso.year(),
        iso.week()
    );

    let user_id = api.me().await.context("Medium /me failed")?;

    let mut window = weekly_window(&items, now);
    if window.is_empty() {
        // A quiet week still gets a post: fall back to the head of the
        // unfiltered cache.
        window = items.into_iter().take(MAX_ITEMS).collect();
    }

    let content = render_digest(&base_url, &window, iso.year(), iso.week());
    let canonical_url = (!base_url.is_empty()).then(|| base_url.clone());
    let post = NewPost::digest(title, content, canonical_url);

    let url = api
        .create_post(&user_id, &post)
        .await
        .context("Medium publish failed")?;
    match url {
        Some(url) => info!("Published digest to Medium: {}", url),
        None => info!("Published digest to Medium"),
    }

    Ok(Outcome::Published)
}

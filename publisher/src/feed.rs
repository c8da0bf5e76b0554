//! Feed cache access and weekly windowing
//!
//! The aggregation job owns `data/feeds.json`; this module only reads it.
//! A cache that is missing or does not parse means "nothing to publish",
//! never an error.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single aggregated link record from the feed cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub source: String,
    /// Publish timestamp, ISO-8601 expected but not validated.
    #[serde(default)]
    pub published: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FeedCache {
    #[serde(default)]
    items: Vec<FeedItem>,
}

/// Load cached feed items.
pub fn load_items(path: &Path) -> Vec<FeedItem> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("feed cache not readable at {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    match serde_json::from_str::<FeedCache>(&contents) {
        Ok(cache) => cache.items,
        Err(e) => {
            warn!("feed cache malformed at {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Parse an item timestamp, substituting `now` when it does not parse.
///
/// An unparseable (or absent) timestamp keeps the item in the window at the
/// most-recent sort position. Lenient inclusion is deliberate policy.
fn parse_published(raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    let raw = match raw {
        Some(raw) => raw,
        None => return now,
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    // Offset-less timestamps are assumed UTC.
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return naive.and_utc();
    }
    if let Some(midnight) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return midnight.and_utc();
    }
    now
}

/// Select items published within the trailing 7 days, newest first.
pub fn weekly_window(items: &[FeedItem], now: DateTime<Utc>) -> Vec<FeedItem> {
    let cutoff = now - Duration::days(7);
    let mut selected: Vec<(DateTime<Utc>, FeedItem)> = items
        .iter()
        .filter_map(|item| {
            let published = parse_published(item.published.as_deref(), now);
            (published >= cutoff).then(|| (published, item.clone()))
        })
        .collect();
    // Stable sort, so equal timestamps keep cache order.
    selected.sort_by(|a, b| b.0.cmp(&a.0));
    selected.into_iter().map(|(_, item)| item).collect()
}

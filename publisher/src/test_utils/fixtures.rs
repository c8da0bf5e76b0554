//! Test fixtures
//!
//! Feed items keyed off a reference "now", plus helpers that lay out a site
//! directory (config file, feed cache) the way production expects it.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};

use crate::feed::FeedItem;

/// An item whose link and source derive from its title.
pub fn test_item(title: &str, published: Option<String>) -> FeedItem {
    FeedItem {
        title: title.to_string(),
        link: format!("http://x/{}", title.to_lowercase()),
        source: "X".to_string(),
        published,
    }
}

/// RFC 3339 timestamp `days` days before `now`.
pub fn days_ago(now: DateTime<Utc>, days: i64) -> String {
    (now - Duration::days(days)).to_rfc3339()
}

/// Write a `hugo.toml` declaring the given base URL.
pub fn write_site_config(site_dir: &Path, base_url: &str) {
    fs::write(
        site_dir.join("hugo.toml"),
        format!("baseURL = \"{}\"\n", base_url),
    )
    .unwrap();
}

/// Write `data/feeds.json` with (title, link, published) triples.
pub fn write_feed_cache(site_dir: &Path, items: &[(&str, &str, String)]) {
    let items: Vec<serde_json::Value> = items
        .iter()
        .map(|(title, link, published)| {
            serde_json::json!({
                "title": title,
                "link": link,
                "source": "X",
                "published": published,
            })
        })
        .collect();
    let data_dir = site_dir.join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(
        data_dir.join("feeds.json"),
        serde_json::to_string(&serde_json::json!({ "items": items })).unwrap(),
    )
    .unwrap();
}

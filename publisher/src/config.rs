//! Runtime configuration
//!
//! Environment variables plus the scan of the site config for the canonical
//! base URL. Gating decisions over these values live in `gate`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Site config files scanned for the base URL, in priority order.
const SITE_CONFIG_FILES: [&str; 2] = ["hugo.toml", "config.toml"];

#[derive(Clone)]
pub struct Config {
    /// Medium integration token; the run is a no-op without it
    pub medium_token: Option<String>,
    /// When set to exactly "1", bypasses the Monday-only gate
    pub force_post: bool,
    /// Root of the site checkout; config files and `data/feeds.json` live here
    pub site_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            medium_token: env::var("MEDIUM_TOKEN").ok(),
            force_post: env::var("FORCE_WEEKLY_POST")
                .map(|v| v == "1")
                .unwrap_or(false),
            site_dir: env::var("SITE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Location of the feed cache written by the aggregation job.
    pub fn feeds_path(&self) -> PathBuf {
        self.site_dir.join("data").join("feeds.json")
    }
}

/// Scan the site config for a `baseurl = "..."` assignment.
///
/// Checks `hugo.toml` then `config.toml`; the first matching line across both
/// files wins. A missing file is treated the same as a missing key, and an
/// unresolved base URL comes back as an empty string.
pub fn site_base_url(site_dir: &Path) -> String {
    for name in SITE_CONFIG_FILES {
        let contents = match fs::read_to_string(site_dir.join(name)) {
            Ok(contents) => contents,
            Err(_) => continue,
        };
        for line in contents.lines() {
            let line = line.trim();
            if !line.to_ascii_lowercase().starts_with("baseurl") {
                continue;
            }
            if let Some((_, value)) = line.split_once('=') {
                return value
                    .trim()
                    .trim_matches(|c| c == '"' || c == '\'')
                    .to_string();
            }
        }
    }
    String::new()
}

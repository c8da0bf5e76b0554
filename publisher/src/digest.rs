//! Digest document rendering
//!
//! Pure markdown assembly; deterministic for a given (base URL, items, year,
//! week) input. The document is transient and never persisted.

use crate::feed::FeedItem;

/// Cap on bullets per digest, however many items the window returned.
pub const MAX_ITEMS: usize = 15;

/// Render the weekly digest markdown document.
pub fn render_digest(base_url: &str, items: &[FeedItem], year: i32, week: u32) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Weekly Digest — AI/ML, SWE, Strategy (Week {}-W{:02})\n",
        year, week
    ));
    lines.push(format!(
        "Curated links from reputable sources. More at {}\n",
        base_url
    ));
    for item in items.iter().take(MAX_ITEMS) {
        lines.push(format!(
            "- [{}]({}) — {}",
            item.title, item.link, item.source
        ));
    }
    lines.push("\n—\n".to_string());
    lines.push(format!("Canonical: {}", base_url));
    lines.join("\n")
}

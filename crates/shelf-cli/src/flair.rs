//! Decorative quote fetch for the stats view.
//!
//! Strictly cosmetic: any failure (offline, timeout, bad response) renders
//! nothing, and no caller treats that as an error.

use std::time::Duration;

use log::debug;

const QUOTE_URL: &str = "https://api.quotable.io/random?tags=literature|books";
const FETCH_TIMEOUT: Duration = Duration::from_secs(2);

/// Fetch a short literary quote, or `None` on any failure.
pub fn fetch_quote() -> Option<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .ok()?;

    let response = client.get(QUOTE_URL).send().ok()?;
    if !response.status().is_success() {
        debug!("flair fetch returned status {}", response.status());
        return None;
    }

    let body: serde_json::Value = response.json().ok()?;
    let content = body.get("content")?.as_str()?;
    let line = match body.get("author").and_then(|v| v.as_str()) {
        Some(author) => format!("\u{201C}{}\u{201D} - {}", content, author),
        None => format!("\u{201C}{}\u{201D}", content),
    };
    Some(line)
}

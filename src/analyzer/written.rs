//! Written-text extraction for completed-event tweets
//!
//! Strips everything the app generated (links, hashtags, the service
//! mention and the completion template itself) and reports whatever the
//! person typed on top.

use crate::models::Category;
use regex::Regex;
use std::sync::LazyLock;

static URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)https?://\S+").unwrap());
static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").unwrap());
static SERVICE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(with|via|on)\s+@runkeeper\.?").unwrap());
static COURTESY_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)check it out!?").unwrap());

// The completion templates must stop at the first separator: the service
// mention, a spaced dash, a period or end of input. The separator is
// captured and restored in the replacement so that stripping consumes the
// template but keeps whatever follows it.
static TEMPLATE_WITH_DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)just\s*(completed|posted|finished)\s+an?\s*\d+\.?\d*\s*(km|mi|miles?|kilometers?)\s+[a-z][a-z\- ]*?(?P<sep>\s+(with|via|on)\s+@runkeeper|\s*[–—-]\s|\.|$)",
    )
    .unwrap()
});
static TEMPLATE_NO_DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)just\s*(completed|posted|finished)\s+(an?\s+)?[a-z][a-z\- ]*?(?P<sep>\s+(with|via|on)\s+@runkeeper|\s*[–—-]\s|\.|$)",
    )
    .unwrap()
});

static DASH_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*[–—-]\s*").unwrap());
static TRAILING_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.|!]+\s*$").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)[a-z0-9]").unwrap());

/// Reduce a tweet to whatever the app did not generate
fn reduce(text: &str) -> String {
    let clean = URL.replace_all(text, "");
    let clean = HASHTAG.replace_all(&clean, "");
    let clean = SERVICE_MENTION.replace_all(&clean, "");
    let clean = COURTESY_PHRASE.replace_all(&clean, "");
    let clean = TEMPLATE_WITH_DISTANCE.replace_all(&clean, "$sep");
    let clean = TEMPLATE_NO_DISTANCE.replace_all(&clean, "$sep");
    let clean = DASH_SEPARATOR.replace_all(&clean, " ");
    let clean = TRAILING_PUNCT.replace_all(&clean, "");
    WHITESPACE.replace_all(&clean, " ").trim().to_string()
}

/// Whether a completed-event tweet carries text the person wrote
pub fn has_written_text(text: &str, category: Category) -> bool {
    if category != Category::CompletedEvent {
        return false;
    }
    ALPHANUMERIC.is_match(&reduce(text))
}

/// The user-written part of the tweet, empty when there is none
pub fn written_text(text: &str, category: Category) -> String {
    if !has_written_text(text, category) {
        return String::new();
    }
    reduce(text)
}

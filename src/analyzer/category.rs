//! Tweet category classification
//!
//! Assigns one of four mutually exclusive categories from key phrases.

use crate::models::Category;
use regex::Regex;
use std::sync::LazyLock;

/// Ordered (pattern, category) rules, first match wins. All achievement
/// phrases come before the completion phrases so a record post that also
/// says "just completed" still counts as an achievement, and completion
/// phrases come before the live ones.
static CATEGORY_RULES: LazyLock<Vec<(Regex, Category)>> = LazyLock::new(|| {
    [
        // achievements
        (r"achiev(ed|ement)", Category::Achievement),
        (r"personal\s*record|\bpr\b", Category::Achievement),
        (r"new\s*(longest|fastest|furthest)", Category::Achievement),
        (r"set\s+a\s+goal", Category::Achievement),
        (r"reached\s+(my\s+)?goal", Category::Achievement),
        (r"milestone", Category::Achievement),
        // completed activities
        (r"just\s*completed", Category::CompletedEvent),
        (r"just\s*posted", Category::CompletedEvent),
        (r"just\s*finished", Category::CompletedEvent),
        (r"completed\s+(an?\s+)?\d", Category::CompletedEvent),
        (r"finished\s+(an?\s+)?\d", Category::CompletedEvent),
        // live activities
        (r"just\s*started", Category::LiveEvent),
        (r"watch\b", Category::LiveEvent),
        (r"live\b", Category::LiveEvent),
        (r"cheer\s*me\s*on", Category::LiveEvent),
        (r"starting\s+(a|my)\b", Category::LiveEvent),
        (r"on\s+(a|my)\s+(run|ride|walk|bike)", Category::LiveEvent),
    ]
    .into_iter()
    .map(|(pattern, category)| (Regex::new(pattern).unwrap(), category))
    .collect()
});

/// Classify a tweet into exactly one category
pub fn classify(text: &str) -> Category {
    let text = text.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&text))
        .map(|(_, category)| *category)
        .unwrap_or(Category::Miscellaneous)
}

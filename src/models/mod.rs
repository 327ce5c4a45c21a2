//! Core data types for fitness tweet analysis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Twitter `created_at` format, e.g. "Sun Sep 30 06:58:57 +0000 2018"
const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Raw tweet as stored in the saved-tweets JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTweet {
    /// The raw tweet body
    pub text: String,
    /// Creation date string in Twitter format
    pub created_at: String,
}

/// One immutable fitness tweet ready for analysis
#[derive(Debug, Clone)]
pub struct Tweet {
    text: String,
    time: DateTime<Utc>,
}

impl Tweet {
    /// Create a tweet from its body and creation date string
    pub fn new(text: &str, created_at: &str) -> Self {
        Self {
            text: text.to_string(),
            time: parse_created_at(created_at),
        }
    }

    /// Raw tweet body
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Creation time in UTC
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

impl From<RawTweet> for Tweet {
    fn from(raw: RawTweet) -> Self {
        Self {
            time: parse_created_at(&raw.created_at),
            text: raw.text,
        }
    }
}

/// Parse a creation date string. Accepts the Twitter format, RFC 3339 and
/// RFC 2822; anything else maps to the Unix epoch so that construction
/// never fails.
fn parse_created_at(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(raw, CREATED_AT_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .map(|time| time.with_timezone(&Utc))
        .unwrap_or_else(|_| {
            log::debug!("unparseable created_at {:?}, using epoch", raw);
            DateTime::UNIX_EPOCH
        })
}

/// Tweet category derived from key phrases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// A finished activity posted through the app
    CompletedEvent,
    /// An activity in progress or about to start
    LiveEvent,
    /// A record, goal or milestone
    Achievement,
    /// Anything else
    Miscellaneous,
}

impl Category {
    /// Get the category name
    pub fn name(&self) -> &'static str {
        match self {
            Category::CompletedEvent => "completed_event",
            Category::LiveEvent => "live_event",
            Category::Achievement => "achievement",
            Category::Miscellaneous => "miscellaneous",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Three-way sentiment classification of written text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    /// More positive than negative lexicon hits
    Positive,
    /// More negative than positive lexicon hits
    Negative,
    /// Balanced or no lexicon hits
    Neutral,
}

impl SentimentLabel {
    /// Map a signed lexicon hit count to a label
    pub fn from_score(score: i32) -> Self {
        if score > 0 {
            SentimentLabel::Positive
        } else if score < 0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    /// Get the label name
    pub fn name(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Complete derived facts for one tweet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TweetAnalysis {
    /// Tweet category
    pub category: Category,
    /// Whether the tweet carries user-written text
    pub has_written_text: bool,
    /// The user-written text, empty when there is none
    pub written_text: String,
    /// Canonical activity label, "unknown" for non-completed tweets
    pub activity_type: String,
    /// Less-normalized activity label
    pub detailed_activity_type: String,
    /// Distance in miles, 0.0 when no distance phrase is present
    pub distance_miles: f64,
    /// Signed lexicon hit count over the written text
    pub sentiment_score: i32,
    /// Three-way sentiment label
    pub sentiment_label: SentimentLabel,
    /// Tweet creation time
    pub timestamp: DateTime<Utc>,
}

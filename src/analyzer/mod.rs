//! Tweet classification modules
//!
//! Each stage derives one family of facts from the raw tweet text. The
//! category drives everything downstream: written text, activity types
//! and distance are only extracted for completed events.

pub mod activity;
pub mod category;
pub mod distance;
pub mod sentiment;
pub mod written;

pub use sentiment::SentimentScorer;

use crate::models::{SentimentLabel, Tweet, TweetAnalysis};

/// Main tweet analyzer combining all classification stages
pub struct TweetAnalyzer {
    scorer: SentimentScorer,
}

impl TweetAnalyzer {
    /// Create an analyzer with the default sentiment lexicon
    pub fn new() -> Self {
        Self {
            scorer: SentimentScorer::new(),
        }
    }

    /// Create an analyzer scoring sentiment with a custom lexicon
    pub fn with_scorer(scorer: SentimentScorer) -> Self {
        Self { scorer }
    }

    /// Derive the complete set of facts for one tweet
    pub fn analyze(&self, tweet: &Tweet) -> TweetAnalysis {
        let text = tweet.text();
        let category = category::classify(text);
        let written_text = written::written_text(text, category);
        let sentiment_score = self.scorer.score(&written_text);

        TweetAnalysis {
            category,
            has_written_text: written::has_written_text(text, category),
            activity_type: activity::activity_type(text, category),
            detailed_activity_type: activity::detailed_activity_type(text, category),
            distance_miles: distance::distance_miles(text, category),
            sentiment_score,
            sentiment_label: SentimentLabel::from_score(sentiment_score),
            written_text,
            timestamp: tweet.time(),
        }
    }

    /// Analyze a slice of tweets, keeping input order
    pub fn analyze_batch(&self, tweets: &[Tweet]) -> Vec<TweetAnalysis> {
        tweets.iter().map(|tweet| self.analyze(tweet)).collect()
    }
}

impl Default for TweetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

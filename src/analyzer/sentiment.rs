//! Sentiment scoring for written tweet text
//!
//! Counts positive and negative lexicon words in the runner's own
//! commentary. The score is a plain signed count, so template-only
//! tweets with no written text always land on neutral.

use crate::models::SentimentLabel;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]+").unwrap());

/// Lexicon-based sentiment scorer
pub struct SentimentScorer {
    positive_words: HashSet<String>,
    negative_words: HashSet<String>,
}

impl SentimentScorer {
    /// Create a scorer with the default fitness lexicon
    pub fn new() -> Self {
        Self {
            positive_words: Self::build_positive_lexicon(),
            negative_words: Self::build_negative_lexicon(),
        }
    }

    /// Create a scorer with a caller-supplied lexicon
    pub fn with_lexicon(positive_words: HashSet<String>, negative_words: HashSet<String>) -> Self {
        Self {
            positive_words,
            negative_words,
        }
    }

    /// Signed word count: +1 per positive word, -1 per negative word.
    /// A word on both lists contributes both.
    pub fn score(&self, written_text: &str) -> i32 {
        let lower = written_text.to_lowercase();
        let mut score = 0;
        for token in WORD.find_iter(&lower) {
            let word = token.as_str();
            if self.positive_words.contains(word) {
                score += 1;
            }
            if self.negative_words.contains(word) {
                score -= 1;
            }
        }
        score
    }

    /// Score mapped onto a positive/negative/neutral label
    pub fn label(&self, written_text: &str) -> SentimentLabel {
        SentimentLabel::from_score(self.score(written_text))
    }

    /// Build positive word lexicon
    fn build_positive_lexicon() -> HashSet<String> {
        [
            "great", "good", "awesome", "amazing", "nice", "fun", "happy",
            "love", "strong", "fast", "better", "best", "beautiful", "enjoy",
            "proud",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    /// Build negative word lexicon
    fn build_negative_lexicon() -> HashSet<String> {
        [
            "bad", "tired", "hurt", "pain", "slow", "worst", "injured",
            "sick", "hate", "boring", "hard", "sad", "frustrated",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("Great morning, felt strong!"), 2);
        assert_eq!(scorer.label("Great morning, felt strong!"), SentimentLabel::Positive);
    }

    #[test]
    fn test_negative_text() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("legs hurt and I'm so tired"), -2);
        assert_eq!(scorer.label("legs hurt and I'm so tired"), SentimentLabel::Negative);
    }

    #[test]
    fn test_mixed_text_cancels_out() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("great but tired"), 0);
        assert_eq!(scorer.label("great but tired"), SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score(""), 0);
        assert_eq!(scorer.label(""), SentimentLabel::Neutral);
    }

    #[test]
    fn test_unknown_words_are_neutral() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("ran along the river at dawn"), 0);
    }

    #[test]
    fn test_case_insensitive() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("GREAT RUN"), 1);
    }

    #[test]
    fn test_punctuation_separates_words() {
        let scorer = SentimentScorer::new();
        assert_eq!(scorer.score("happy,proud.fast!"), 3);
    }

    #[test]
    fn test_custom_lexicon() {
        let positive: HashSet<String> = ["stoked"].into_iter().map(String::from).collect();
        let negative: HashSet<String> = ["meh"].into_iter().map(String::from).collect();
        let scorer = SentimentScorer::with_lexicon(positive, negative);

        assert_eq!(scorer.score("stoked about this one"), 1);
        assert_eq!(scorer.score("meh"), -1);
        // default lexicon words mean nothing to a custom scorer
        assert_eq!(scorer.score("great run"), 0);
    }
}

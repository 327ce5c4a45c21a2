//! # Fitness Tweet Analyzer
//!
//! A Rust implementation of rule-based analysis for Runkeeper fitness tweets.
//!
//! This library provides:
//! - Tweet categorization from key completion, live and achievement phrases
//! - Written-text extraction from templated posts
//! - Activity type, distance and sentiment derivation
//! - Batch statistics: category breakdowns, activity rankings, distance means
//!
//! ## Example
//!
//! ```rust
//! use fitness_tweet_analyzer::{Tweet, TweetAnalyzer};
//!
//! fn main() {
//!     let tweet = Tweet::new(
//!         "Just completed a 5.00 km run with @Runkeeper. Check it out!",
//!         "Sun Sep 30 06:58:57 +0000 2018",
//!     );
//!
//!     let analyzer = TweetAnalyzer::new();
//!     let analysis = analyzer.analyze(&tweet);
//!
//!     println!("{}: {:.2} miles", analysis.activity_type, analysis.distance_miles);
//! }
//! ```

pub mod analyzer;
pub mod loader;
pub mod models;
pub mod stats;

// Re-export main types from analyzer
pub use analyzer::{SentimentScorer, TweetAnalyzer};

// Re-export core types from models
pub use models::{Category, RawTweet, SentimentLabel, Tweet, TweetAnalysis};

// Re-export the metric conversion factor
pub use analyzer::distance::KM_TO_MILES;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

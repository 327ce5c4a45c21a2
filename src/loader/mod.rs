//! Saved-tweet ingestion
//!
//! Reads the saved-tweets export: a JSON array of objects carrying at
//! least `text` and `created_at`. Unknown fields are ignored, so a raw
//! Twitter API dump works unchanged.

use crate::models::RawTweet;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a JSON array of raw tweets
pub fn parse_tweets(json: &str) -> Result<Vec<RawTweet>> {
    serde_json::from_str(json).context("Failed to parse saved tweets JSON")
}

/// Load raw tweets from a JSON file on disk
pub fn load_saved_tweets<P: AsRef<Path>>(path: P) -> Result<Vec<RawTweet>> {
    let json = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read file: {:?}", path.as_ref()))?;
    parse_tweets(&json)
}

/// Small built-in sample covering the common tweet shapes
pub fn fallback_sample() -> Vec<RawTweet> {
    vec![
        RawTweet {
            text: "Just completed a 5.0 km run with @Runkeeper. Check it out! \
                   https://t.co/test1 #Runkeeper"
                .to_string(),
            created_at: "Sun Sep 30 06:58:57 +0000 2018".to_string(),
        },
        RawTweet {
            text: "Just completed a 3.2 mi walk with @Runkeeper. Check it out! \
                   https://t.co/test2 #Runkeeper"
                .to_string(),
            created_at: "Sun Sep 30 07:00:00 +0000 2018".to_string(),
        },
        RawTweet {
            text: "Just posted a 10.5 km run - Great workout today! https://t.co/test3 #Runkeeper"
                .to_string(),
            created_at: "Sun Sep 30 07:30:00 +0000 2018".to_string(),
        },
    ]
}

/// Load tweets from disk, falling back to the built-in sample when the
/// file is missing or unreadable
pub fn load_or_sample<P: AsRef<Path>>(path: P) -> Vec<RawTweet> {
    match load_saved_tweets(&path) {
        Ok(tweets) => tweets,
        Err(err) => {
            log::warn!("Could not load saved tweets: {}. Using built-in sample.", err);
            fallback_sample()
        }
    }
}

//! Search the written text of saved tweets
//!
//! This example analyzes the saved tweets and prints every tweet whose
//! written text contains the search term. The term comes from the first
//! command line argument and defaults to "great".

use fitness_tweet_analyzer::{loader, stats, Tweet, TweetAnalyzer};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let term = std::env::args().nth(1).unwrap_or_else(|| "great".to_string());

    let raw = loader::load_or_sample("data/saved_tweets.json");
    let tweets: Vec<Tweet> = raw.into_iter().map(Tweet::from).collect();
    let analyses = TweetAnalyzer::new().analyze_batch(&tweets);

    let hits = stats::search_written(&analyses, &term);
    println!("=== {} written texts matching {:?} ===\n", hits.len(), term);

    for (index, analysis) in hits.iter().enumerate() {
        println!(
            "{:>3}. [{} | {}] {}",
            index + 1,
            analysis.activity_type,
            analysis.sentiment_label,
            analysis.written_text
        );
    }
}

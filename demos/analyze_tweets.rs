//! Batch analysis of saved Runkeeper tweets
//!
//! This example loads the saved-tweets JSON (falling back to a built-in
//! sample), runs every tweet through the analyzer and prints aggregate
//! statistics over the batch.

use fitness_tweet_analyzer::{loader, stats, Category, Tweet, TweetAnalyzer};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Fitness Tweet Analysis ===\n");

    let raw = loader::load_or_sample("data/saved_tweets.json");
    let tweets: Vec<Tweet> = raw.into_iter().map(Tweet::from).collect();

    let analyzer = TweetAnalyzer::new();
    let analyses = analyzer.analyze_batch(&tweets);

    if let Some((first, last)) = stats::date_range(&analyses) {
        println!(
            "{} tweets from {} to {}\n",
            analyses.len(),
            first.format("%A, %B %e, %Y"),
            last.format("%A, %B %e, %Y")
        );
    }

    let breakdown = stats::breakdown(&analyses);
    println!("--- Categories ---");
    println!(
        "  Completed events:  {} ({:.2}%)",
        breakdown.completed_events,
        breakdown.pct(Category::CompletedEvent)
    );
    println!(
        "  Live events:       {} ({:.2}%)",
        breakdown.live_events,
        breakdown.pct(Category::LiveEvent)
    );
    println!(
        "  Achievements:      {} ({:.2}%)",
        breakdown.achievements,
        breakdown.pct(Category::Achievement)
    );
    println!(
        "  Miscellaneous:     {} ({:.2}%)",
        breakdown.miscellaneous,
        breakdown.pct(Category::Miscellaneous)
    );
    println!(
        "  With written text: {} ({:.2}% of completed)\n",
        breakdown.written,
        breakdown.written_pct()
    );

    let counts = stats::activity_counts(&analyses);
    println!("--- Activities ---");
    println!("  {} distinct activity types", counts.len());
    let top = stats::top_activities(&analyses, 3);
    for (rank, (activity, count)) in top.iter().enumerate() {
        println!("  {}. {} ({} tweets)", rank + 1, activity, count);
    }
    println!();

    println!("--- Distances ---");
    let means = stats::mean_distance_by_activity(&analyses);
    if let Some((longest, shortest)) = stats::distance_extremes(&means) {
        println!("  Longest mean distance:  {} ({:.2} miles)", longest, means[&longest]);
        println!("  Shortest mean distance: {} ({:.2} miles)", shortest, means[&shortest]);
    }
    let spread = stats::weekday_weekend_spread(&analyses);
    println!("  Weekday mean: {:.2} miles", spread.weekday_mean);
    println!("  Weekend mean: {:.2} miles", spread.weekend_mean);
    println!("  Longer distances fall on {}\n", spread.longer());

    if let Some((activity, _)) = top.first() {
        println!("--- Mean {} distance by weekday ---", activity);
        let by_day = stats::mean_distance_by_weekday(&analyses, activity);
        let mut days: Vec<_> = by_day.into_iter().collect();
        days.sort_by_key(|(day, _)| day.num_days_from_sunday());
        for (day, mean) in days {
            println!("  {}: {:.2} miles", day, mean);
        }
    }

    println!("\n=== Analysis Complete ===");
}

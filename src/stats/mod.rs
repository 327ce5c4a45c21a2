//! Aggregate statistics over analyzed tweets
//!
//! Everything here works on a finished batch of analyses. Distance
//! statistics only look at completed events with a parsed distance;
//! tweets that fell back to 0.0 miles never skew a mean.

use crate::models::{Category, TweetAnalysis};
use chrono::{DateTime, Datelike, Utc, Weekday};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Category counts for one batch of analyses
#[derive(Debug, Clone, Default)]
pub struct CategoryBreakdown {
    pub total: usize,
    pub completed_events: usize,
    pub live_events: usize,
    pub achievements: usize,
    pub miscellaneous: usize,
    /// Completed events carrying written text
    pub written: usize,
}

impl CategoryBreakdown {
    /// Share of the batch in the given category, in percent
    pub fn pct(&self, category: Category) -> f64 {
        let count = match category {
            Category::CompletedEvent => self.completed_events,
            Category::LiveEvent => self.live_events,
            Category::Achievement => self.achievements,
            Category::Miscellaneous => self.miscellaneous,
        };
        percentage(count, self.total)
    }

    /// Share of completed events with written text, in percent
    pub fn written_pct(&self) -> f64 {
        percentage(self.written, self.completed_events)
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

/// Count categories and written-text tweets across a batch
pub fn breakdown(analyses: &[TweetAnalysis]) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown {
        total: analyses.len(),
        ..Default::default()
    };
    for analysis in analyses {
        match analysis.category {
            Category::CompletedEvent => breakdown.completed_events += 1,
            Category::LiveEvent => breakdown.live_events += 1,
            Category::Achievement => breakdown.achievements += 1,
            Category::Miscellaneous => breakdown.miscellaneous += 1,
        }
        if analysis.has_written_text {
            breakdown.written += 1;
        }
    }
    breakdown
}

/// Earliest and latest tweet times, None for an empty batch
pub fn date_range(analyses: &[TweetAnalysis]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let first = analyses.iter().map(|analysis| analysis.timestamp).min()?;
    let last = analyses.iter().map(|analysis| analysis.timestamp).max()?;
    Some((first, last))
}

fn completed(analyses: &[TweetAnalysis]) -> impl Iterator<Item = &TweetAnalysis> + '_ {
    analyses
        .iter()
        .filter(|analysis| analysis.category == Category::CompletedEvent)
}

fn distance_based(analyses: &[TweetAnalysis]) -> impl Iterator<Item = &TweetAnalysis> + '_ {
    completed(analyses).filter(|analysis| analysis.distance_miles > 0.0)
}

/// Completed-event count per activity label
pub fn activity_counts(analyses: &[TweetAnalysis]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for analysis in completed(analyses) {
        *counts.entry(analysis.activity_type.clone()).or_insert(0) += 1;
    }
    counts
}

/// The n most frequent activities among distance-based completed events,
/// sorted by count with alphabetical tie-breaks
pub fn top_activities(analyses: &[TweetAnalysis], n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for analysis in distance_based(analyses) {
        *counts.entry(analysis.activity_type.clone()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(n);
    ranked
}

/// Mean distance in miles per activity over distance-based events
pub fn mean_distance_by_activity(analyses: &[TweetAnalysis]) -> HashMap<String, f64> {
    let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
    for analysis in distance_based(analyses) {
        let entry = sums.entry(analysis.activity_type.clone()).or_insert((0.0, 0));
        entry.0 += analysis.distance_miles;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(activity, (sum, count))| (activity, sum / count as f64))
        .collect()
}

/// Mean distance in miles per weekday for one activity
pub fn mean_distance_by_weekday(
    analyses: &[TweetAnalysis],
    activity: &str,
) -> HashMap<Weekday, f64> {
    let mut sums: HashMap<Weekday, (f64, usize)> = HashMap::new();
    for analysis in distance_based(analyses) {
        if analysis.activity_type != activity {
            continue;
        }
        let entry = sums
            .entry(analysis.timestamp.weekday())
            .or_insert((0.0, 0));
        entry.0 += analysis.distance_miles;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(day, (sum, count))| (day, sum / count as f64))
        .collect()
}

/// Activities with the longest and shortest mean distance. Ties resolve
/// alphabetically; None when the map is empty.
pub fn distance_extremes(means: &HashMap<String, f64>) -> Option<(String, String)> {
    let mut ranked: Vec<(&String, &f64)> = means.iter().collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    let longest = ranked.first()?.0.clone();
    let shortest = ranked.last()?.0.clone();
    Some((longest, shortest))
}

/// Mean distance split into weekday and weekend tweets
#[derive(Debug, Clone, Default)]
pub struct WeekdayWeekendSpread {
    pub weekday_mean: f64,
    pub weekend_mean: f64,
}

impl WeekdayWeekendSpread {
    /// Which half of the week carries the longer mean distance
    pub fn longer(&self) -> &'static str {
        if self.weekend_mean > self.weekday_mean {
            "weekends"
        } else {
            "weekdays"
        }
    }
}

/// Compare mean distance on weekdays against weekends. Saturday and
/// Sunday count as the weekend.
pub fn weekday_weekend_spread(analyses: &[TweetAnalysis]) -> WeekdayWeekendSpread {
    let mut weekday = (0.0, 0usize);
    let mut weekend = (0.0, 0usize);
    for analysis in distance_based(analyses) {
        let bucket = match analysis.timestamp.weekday() {
            Weekday::Sat | Weekday::Sun => &mut weekend,
            _ => &mut weekday,
        };
        bucket.0 += analysis.distance_miles;
        bucket.1 += 1;
    }
    WeekdayWeekendSpread {
        weekday_mean: mean(weekday),
        weekend_mean: mean(weekend),
    }
}

fn mean((sum, count): (f64, usize)) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Case-insensitive substring search over written text. A blank search
/// term matches nothing.
pub fn search_written<'a>(analyses: &'a [TweetAnalysis], term: &str) -> Vec<&'a TweetAnalysis> {
    let lowered = term.to_lowercase();
    if lowered.trim().is_empty() {
        return Vec::new();
    }
    analyses
        .iter()
        .filter(|analysis| {
            analysis.has_written_text && analysis.written_text.to_lowercase().contains(&lowered)
        })
        .collect()
}

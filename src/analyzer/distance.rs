//! Distance extraction for completed-event tweets

use crate::models::Category;
use regex::Regex;
use std::sync::LazyLock;

/// Conversion factor applied to metric distances
pub const KM_TO_MILES: f64 = 0.621371;

static DISTANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+\.?\d*)\s*(km|mi|miles?|kilometers?)").unwrap());

/// Distance in miles parsed from the first value-unit pair in the tweet.
/// Returns 0.0 for non-completed categories and for tweets without a
/// recognizable distance.
pub fn distance_miles(text: &str, category: Category) -> f64 {
    if category != Category::CompletedEvent {
        return 0.0;
    }
    let caps = match DISTANCE.captures(text) {
        Some(caps) => caps,
        None => return 0.0,
    };
    let value: f64 = caps[1].parse().unwrap_or(0.0);
    let unit = caps[2].to_lowercase();
    if unit.contains("km") || unit.contains("kilometer") {
        value * KM_TO_MILES
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETED: Category = Category::CompletedEvent;

    #[test]
    fn test_km_converted_to_miles() {
        let miles = distance_miles("Just completed a 5.00 km run with @Runkeeper.", COMPLETED);
        assert!((miles - 5.0 * KM_TO_MILES).abs() < 1e-9);
    }

    #[test]
    fn test_miles_passed_through() {
        let miles = distance_miles("Just completed a 3.2 mi walk with @Runkeeper.", COMPLETED);
        assert!((miles - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_spelled_out_units() {
        let miles = distance_miles("Just completed a 4.0 miles run today", COMPLETED);
        assert!((miles - 4.0).abs() < 1e-9);

        let miles = distance_miles("Just completed a 12.0 kilometers bike ride", COMPLETED);
        assert!((miles - 12.0 * KM_TO_MILES).abs() < 1e-9);
    }

    #[test]
    fn test_first_value_unit_pair_wins() {
        let miles = distance_miles(
            "Just completed a 5.0 km run, that makes 100 km this month",
            COMPLETED,
        );
        assert!((miles - 5.0 * KM_TO_MILES).abs() < 1e-9);
    }

    #[test]
    fn test_integer_distance() {
        let miles = distance_miles("Just completed a 10 km run", COMPLETED);
        assert!((miles - 10.0 * KM_TO_MILES).abs() < 1e-9);
    }

    #[test]
    fn test_no_distance_is_zero() {
        assert_eq!(
            distance_miles("Just completed a yoga session with @Runkeeper", COMPLETED),
            0.0
        );
    }

    #[test]
    fn test_non_completed_is_zero() {
        assert_eq!(
            distance_miles("Just started a 5.0 km run", Category::LiveEvent),
            0.0
        );
        assert_eq!(
            distance_miles("Achieved a new PR on my 10 km route", Category::Achievement),
            0.0
        );
    }
}

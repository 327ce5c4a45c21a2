//! Activity type extraction for completed-event tweets
//!
//! Works in two phases: pull a candidate phrase out of the completion
//! template, then map it onto a canonical label through an ordered rule
//! table. When no template matches, a flat keyword scan over the whole
//! tweet takes over. Labels are an open vocabulary: an unrecognized
//! phrase falls back to its first token.

use crate::models::Category;
use regex::Regex;
use std::sync::LazyLock;

// Candidate extraction, tried in order: the distance-bearing completion
// template, then the completion-without-distance template.
static DISTANCE_THEN_ACTIVITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"just\s+(completed|posted)\s+a\s+[^\d]*\d+\.?\d*\s*(km|mi|miles?|kilometers?)\s+([a-z][a-z\- ]+)",
    )
    .unwrap()
});
static COMPLETED_NO_DISTANCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"just\s+(completed|finished)\s+(?:an?\s+)?(.+?)\s+(?:with\s+@runkeeper|https?://t\.co/\w+)")
        .unwrap()
});
// Detailed variant keeps apostrophes in the captured phrase
static DISTANCE_THEN_ACTIVITY_DETAILED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"just\s+(completed|posted)\s+a\s+[^\d]*\d+\.?\d*\s*(km|mi|miles?|kilometers?)\s+([a-z][a-z\- ']+)",
    )
    .unwrap()
});

static PHRASE_CLEAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z\s-]").unwrap());
static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").unwrap());
static MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());
static DETAIL_CLEAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z\- ']").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Ordered (pattern, canonical label) rules for a captured activity
/// phrase, grouped by domain with specific variants before their general
/// parent. First match wins.
static NORMALIZE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        // running
        (r"(treadmill|tm)\s*run", "treadmill running"),
        (r"trail\s*run(ning)?", "trail running"),
        (r"(road|street)\s*run(ning)?", "road running"),
        (r"run|jog(ging)?", "running"),
        // walking
        (r"hike|hiking", "hiking"),
        (r"(nordic|power)\s*walk(ing)?", "nordic walking"),
        (r"(treadmill|tm)\s*walk(ing)?", "treadmill walking"),
        (r"walk(ing)?", "walking"),
        // cycling
        (r"(mountain\s*bike|mtb)", "mountain biking"),
        (r"(indoor\s*cycling|spin(ning)?|spin\s*class)", "spinning"),
        (r"(road\s*cycle|road\s*bike)", "road cycling"),
        (r"cycle|cycling|bike|biking", "cycling"),
        // water
        (r"swim(ming)?", "swimming"),
        (r"row(ing)?|crew", "rowing"),
        (r"kayak(ing)?", "kayaking"),
        (r"canoe(ing)?", "canoeing"),
        (r"(sup|stand\s*up\s*paddle)", "stand up paddle"),
        (r"surf(ing)?", "surfing"),
        // snow and ice
        (r"(xc|cross[-\s]?country)\s*ski(ing)?", "cross-country skiing"),
        (r"roller\s*ski(ing)?", "roller skiing"),
        (r"ski(ing)?", "skiing"),
        (r"snowboard(ing)?", "snowboarding"),
        (r"(ice\s*)?skate(ing)?", "ice skating"),
        // gym and conditioning
        (r"elliptical", "elliptical"),
        (r"stair(\s*master)?|stairs", "stairs"),
        (r"(strength|weight|weights|lift(ing)?|barbell|dumbbell)", "strength training"),
        (r"crossfit", "crossfit"),
        (r"hiit|intervals?", "interval training"),
        (r"circuit", "circuit training"),
        (r"boxing|kickbox(ing)?", "boxing"),
        (r"(martial\s*arts|karate|judo|tae\s*kwon|tkd|bjj|jiu[-\s]*jitsu)", "martial arts"),
        (r"yoga", "yoga"),
        (r"pilates", "pilates"),
        // field and court sports
        (r"soccer", "soccer"),
        (r"(american\s*)?football", "american football"),
        (r"basketball", "basketball"),
        (r"tennis", "tennis"),
        (r"volleyball", "volleyball"),
        (r"badminton", "badminton"),
        (r"pickleball", "pickleball"),
        (r"cricket", "cricket"),
        (r"(soft|base)ball", "baseball"),
        (r"rugby", "rugby"),
        (r"hockey", "hockey"),
        (r"lacrosse", "lacrosse"),
        (r"handball", "handball"),
        (r"(table\s*)?tennis|ping[-\s]*pong", "table tennis"),
        (r"squash|racquetball", "squash"),
        (r"golf", "golf"),
        (r"frisbee|ultimate", "ultimate frisbee"),
        // everything else
        (r"(inline )?skate(ing)?|rollerblade(ing)?", "skating"),
        (r"skateboard(ing)?", "skateboarding"),
        (r"climb(ing)?|bouldering", "climbing"),
        (r"mountaineer(ing)?", "mountaineering"),
        (r"orienteer(ing)?", "orienteering"),
        (r"(horse|equestrian)\s*(ride|riding)", "horseback riding"),
        (r"triathlon", "triathlon"),
        (r"duathlon", "duathlon"),
        (r"hand\s*(cycle|cycling)|handbike|hand\s*bike", "handcycling"),
        (r"wheelchair", "wheelchair"),
        (r"workout|training|exercise", "workout"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).unwrap(), label))
    .collect()
});

/// Tokens that cannot stand alone as an activity label
const FIRST_TOKEN_BLACKLIST: &[&str] = &[
    "mysports", "just", "a", "an", "the", "with", "and", "for", "of",
    "morning", "evening", "afternoon", "night", "great", "awesome", "good",
    "cool", "nice", "quick", "easy", "hard", "fast", "slow", "my",
];

/// Map a captured activity phrase onto a canonical label
fn normalize_activity(raw: &str) -> String {
    let name = raw.trim().to_lowercase();
    let name = PHRASE_CLEAN.replace_all(&name, "");
    let name = WHITESPACE.replace_all(&name, " ");

    for (pattern, label) in NORMALIZE_RULES.iter() {
        if pattern.is_match(&name) {
            return (*label).to_string();
        }
    }

    let first_token = name.split(' ').next().unwrap_or("");
    if first_token.is_empty() || FIRST_TOKEN_BLACKLIST.contains(&first_token) {
        return "other".to_string();
    }
    first_token.to_string()
}

// Flat keyword fallback over the whole tweet when no completion template
// matches. Same ordering discipline as the normalization rules; the
// spaced variants (" run ") avoid matching inside longer words.
static FALLBACK_RULES_HEAD: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"(treadmill|tm)\s*run", "treadmill running"),
        (r"trail\s*run", "trail running"),
        (r" run |km run|mi run|mile run", "running"),
        (r" hike|km hike|mi hike|hiking", "hiking"),
        (r"(nordic|power)\s*walk", "nordic walking"),
        (r"(treadmill|tm)\s*walk", "treadmill walking"),
        (r" walk|km walk|mi walk|mile walk", "walking"),
        (r"(mountain\s*bike|mtb)", "mountain biking"),
        (r"spinning|spin\s*class", "spinning"),
        (r" road\s*(cycle|bike)", "road cycling"),
        (r" bike|km bike|mi bike|cycling|cycle", "cycling"),
        (r" swim|km swim|mi swim", "swimming"),
        (r"row|crew", "rowing"),
        (r"kayak", "kayaking"),
        (r"canoe", "canoeing"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).unwrap(), label))
    .collect()
});
static XC_OR_SKI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(xc|cross[-\s]?country).*ski|\bski(ing)?\b").unwrap());
static XC_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(xc|cross[-\s]?country)").unwrap());
static FALLBACK_RULES_TAIL: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"roller\s*ski", "roller skiing"),
        (r"snowboard", "snowboarding"),
        (r"ice\s*skate|skating", "ice skating"),
        (r"elliptical", "elliptical"),
        (r"stair|stairs", "stairs"),
        (r"strength|weights|lift|barbell|dumbbell", "strength training"),
        (r"crossfit", "crossfit"),
        (r"hiit|interval", "interval training"),
        (r"circuit", "circuit training"),
        (r"boxing|kickbox", "boxing"),
        (r"martial|karate|judo|bjj|jiu", "martial arts"),
        (r"yoga", "yoga"),
        (r"pilates", "pilates"),
        (r"soccer", "soccer"),
        (r"(american\s*)?football", "american football"),
        (r"basketball", "basketball"),
        (r"tennis", "tennis"),
        (r"volleyball", "volleyball"),
        (r"badminton", "badminton"),
        (r"pickleball", "pickleball"),
        (r"cricket", "cricket"),
        (r"golf", "golf"),
        (r"(table\s*)?tennis|ping[-\s]*pong", "table tennis"),
        (r"squash|racquetball", "squash"),
        (r"frisbee|ultimate", "ultimate frisbee"),
        (r"climb|boulder", "climbing"),
        (r"(sup|stand\s*up\s*paddle)", "stand up paddle"),
        (r"surf", "surfing"),
        (r"skateboard", "skateboarding"),
        (r"(inline )?skate|rollerblade", "skating"),
        (r"hand\s*(cycle|cycling)|handbike|hand\s*bike", "handcycling"),
        (r"wheelchair", "wheelchair"),
        (r"workout|training|exercise", "workout"),
    ]
    .into_iter()
    .map(|(pattern, label)| (Regex::new(pattern).unwrap(), label))
    .collect()
});

/// Keyword scan used when no completion template matches
fn scan_keywords(text: &str) -> String {
    for (pattern, label) in FALLBACK_RULES_HEAD.iter() {
        if pattern.is_match(text) {
            return (*label).to_string();
        }
    }
    // Ski phrases need a second look: a cross-country marker anywhere in
    // the text wins over plain skiing.
    if XC_OR_SKI.is_match(text) {
        let label = if XC_MARKER.is_match(text) {
            "cross-country skiing"
        } else {
            "skiing"
        };
        return label.to_string();
    }
    for (pattern, label) in FALLBACK_RULES_TAIL.iter() {
        if pattern.is_match(text) {
            return (*label).to_string();
        }
    }
    "other".to_string()
}

/// Canonical activity label for a completed-event tweet
pub fn activity_type(text: &str, category: Category) -> String {
    if category != Category::CompletedEvent {
        return "unknown".to_string();
    }
    let lower = text.to_lowercase();

    if let Some(phrase) = DISTANCE_THEN_ACTIVITY.captures(&lower).and_then(|caps| caps.get(3)) {
        return normalize_activity(phrase.as_str());
    }
    if let Some(phrase) = COMPLETED_NO_DISTANCE.captures(&lower).and_then(|caps| caps.get(2)) {
        return normalize_activity(phrase.as_str());
    }
    scan_keywords(&lower)
}

/// Less-normalized activity label keeping more of the original phrase
pub fn detailed_activity_type(text: &str, category: Category) -> String {
    if category != Category::CompletedEvent {
        return "unknown".to_string();
    }
    let lower = text.to_lowercase();

    let candidate = DISTANCE_THEN_ACTIVITY_DETAILED
        .captures(&lower)
        .and_then(|caps| caps.get(3))
        .or_else(|| COMPLETED_NO_DISTANCE.captures(&lower).and_then(|caps| caps.get(2)))
        .map(|phrase| phrase.as_str().to_string())
        .unwrap_or_default();

    if candidate.is_empty() {
        return activity_type(text, category);
    }

    let candidate = HASHTAG.replace_all(&candidate, "");
    let candidate = MENTION.replace_all(&candidate, "");
    let candidate = DETAIL_CLEAN.replace_all(&candidate, " ");
    let candidate = WHITESPACE.replace_all(&candidate, " ");
    let candidate = candidate.trim();

    if candidate.len() < 3 {
        return activity_type(text, category);
    }
    candidate.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETED: Category = Category::CompletedEvent;

    #[test]
    fn test_distance_template_extraction() {
        assert_eq!(
            activity_type("Just completed a 5.00 km run with @Runkeeper.", COMPLETED),
            "running"
        );
        assert_eq!(
            activity_type("Just completed a 3.2 mi walk with @Runkeeper.", COMPLETED),
            "walking"
        );
        assert_eq!(
            activity_type("Just completed a 25.0 km bike ride with @Runkeeper.", COMPLETED),
            "cycling"
        );
        assert_eq!(
            activity_type("Just posted a 2.4 km swim with @Runkeeper.", COMPLETED),
            "swimming"
        );
    }

    #[test]
    fn test_no_distance_template_extraction() {
        assert_eq!(
            activity_type("Just completed a yoga session with @Runkeeper https://t.co/x", COMPLETED),
            "yoga"
        );
        assert_eq!(
            activity_type("Just finished a quick gym workout with @Runkeeper", COMPLETED),
            "workout"
        );
    }

    #[test]
    fn test_specific_variants_beat_general() {
        assert_eq!(
            activity_type("Just completed a 8.0 km trail run with @Runkeeper.", COMPLETED),
            "trail running"
        );
        assert_eq!(
            activity_type("Just completed a 6.0 km nordic walk with @Runkeeper.", COMPLETED),
            "nordic walking"
        );
        assert_eq!(
            activity_type("Just completed a 20.0 km mountain bike ride with @Runkeeper.", COMPLETED),
            "mountain biking"
        );
    }

    #[test]
    fn test_open_vocabulary_first_token() {
        assert_eq!(
            activity_type("Just completed a zumba class with @Runkeeper", COMPLETED),
            "zumba"
        );
    }

    #[test]
    fn test_blacklisted_first_token_is_other() {
        assert_eq!(
            activity_type("Just completed a great session with @Runkeeper", COMPLETED),
            "other"
        );
    }

    #[test]
    fn test_fallback_keyword_scan() {
        // completion phrasing the templates do not cover
        assert_eq!(
            activity_type("Completed a 5 km run this morning, new route", COMPLETED),
            "running"
        );
        assert_eq!(
            activity_type("Completed 3 sets at the climbing gym", COMPLETED),
            "climbing"
        );
    }

    #[test]
    fn test_fallback_cross_country_ski() {
        assert_eq!(
            activity_type("Completed a 12 km xc ski session today", COMPLETED),
            "cross-country skiing"
        );
        assert_eq!(
            activity_type("Completed a 12 km ski session today", COMPLETED),
            "skiing"
        );
    }

    #[test]
    fn test_non_completed_is_unknown() {
        assert_eq!(activity_type("Just started a run", Category::LiveEvent), "unknown");
        assert_eq!(activity_type("anything", Category::Miscellaneous), "unknown");
        assert_eq!(
            detailed_activity_type("Just started a run", Category::LiveEvent),
            "unknown"
        );
    }

    #[test]
    fn test_detailed_keeps_phrase() {
        assert_eq!(
            detailed_activity_type("Just completed a 8.0 km trail run with @Runkeeper.", COMPLETED),
            "trail run with"
        );
    }

    #[test]
    fn test_detailed_falls_back_to_normalized_when_short() {
        // the captured phrase cleans down to under three characters
        let text = "Just completed a 5.0 km go! https://t.co/x";
        assert_eq!(
            detailed_activity_type(text, COMPLETED),
            activity_type(text, COMPLETED)
        );
        assert_eq!(detailed_activity_type(text, COMPLETED), "go");
    }

    #[test]
    fn test_normalize_activity_table() {
        assert_eq!(normalize_activity("run"), "running");
        assert_eq!(normalize_activity("jogging"), "running");
        assert_eq!(normalize_activity("treadmill run"), "treadmill running");
        assert_eq!(normalize_activity("hiking trip"), "hiking");
        assert_eq!(normalize_activity("spin class"), "spinning");
        assert_eq!(normalize_activity("road bike"), "road cycling");
        assert_eq!(normalize_activity("kayaking"), "kayaking");
        assert_eq!(normalize_activity("snowboarding"), "snowboarding");
        assert_eq!(normalize_activity("weights"), "strength training");
        assert_eq!(normalize_activity("hiit"), "interval training");
        assert_eq!(normalize_activity("pilates"), "pilates");
        assert_eq!(normalize_activity("ultimate"), "ultimate frisbee");
        assert_eq!(normalize_activity("wheelchair"), "wheelchair");
    }
}

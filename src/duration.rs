/// Parsing and formatting of `mm:ss` lecture duration strings

use regex::Regex;
use std::sync::OnceLock;

/// Get the regex pattern for a well-formed duration string
fn get_duration_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        // Minutes unbounded and unpadded, seconds always two digits below 60
        Regex::new(r"^(\d+):([0-5][0-9])$").unwrap()
    })
}

/// Parse a `minutes:seconds` duration string into total seconds.
///
/// Anything that is not exactly `minutes:seconds` parses to 0. Catalog data
/// with a malformed duration degrades to a zero-length lecture rather than
/// failing; callers must guard division by the total themselves.
pub fn parse_duration(value: &str) -> u32 {
    let Some(caps) = get_duration_regex().captures(value.trim()) else {
        return 0;
    };

    // Both groups are digit-only by construction; minutes past u32 range
    // are treated as malformed.
    let minutes: u32 = match caps[1].parse() {
        Ok(m) => m,
        Err(_) => return 0,
    };
    let seconds: u32 = caps[2].parse().unwrap_or(0);

    minutes.saturating_mul(60).saturating_add(seconds)
}

/// Format a second count as `m:ss` (minutes unpadded, matching the source
/// strings in the lecture catalog).
pub fn format_duration(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

//! Candidate filtering for swept text.

use std::sync::LazyLock;

use regex::Regex;

/// Matches strings with nothing worth translating: digits, whitespace,
/// punctuation, and currency symbols only.
static SKIPPABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-–—\d\s:,.%₹$()]+$").unwrap_or_else(|err| {
        panic!("skippable pattern failed to compile: {err}");
    })
});

/// Matches clock times with an optional meridiem suffix (`12:30 PM`).
static CLOCK_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}:\d{2}(:\d{2})?\s*(?i:[ap]\.?m\.?)?$").unwrap_or_else(|err| {
        panic!("clock-time pattern failed to compile: {err}");
    })
});

/// Whether a text is worth sending to translation.
///
/// Rejects blank strings, strings longer than `max_len` characters (unlikely
/// to be atomic UI strings), strings composed solely of digits, punctuation,
/// and currency symbols, and bare clock times.
#[must_use]
pub fn is_candidate(text: &str, max_len: usize) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.chars().count() > max_len {
        return false;
    }
    !SKIPPABLE.is_match(trimmed) && !CLOCK_TIME.is_match(trimmed)
}

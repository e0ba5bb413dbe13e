/*!
 * SRT timecode parsing and formatting.
 *
 * Timecodes use the fixed `HH:MM:SS,mmm` shape: hours zero-padded to at
 * least two digits but unbounded above, minutes and seconds exactly two
 * digits below 60, milliseconds exactly three digits. `format_timecode`
 * is the exact inverse of `parse_timecode` for every non-negative
 * millisecond value.
 */

use once_cell::sync::Lazy;
use regex::Regex;

// @const: SRT timecode regex
static TIMECODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2,}):(\d{2}):(\d{2}),(\d{3})$").expect("Invalid timecode regex")
});

/// Parse an `HH:MM:SS,mmm` timecode to milliseconds.
///
/// Returns `None` on any malformed input so callers can skip the
/// enclosing block instead of aborting the document.
pub fn parse_timecode(text: &str) -> Option<u64> {
    let caps = TIMECODE_REGEX.captures(text.trim())?;
    let hours: u64 = caps[1].parse().ok()?;
    let minutes: u64 = caps[2].parse().ok()?;
    let seconds: u64 = caps[3].parse().ok()?;
    let millis: u64 = caps[4].parse().ok()?;

    if minutes >= 60 || seconds >= 60 {
        return None;
    }

    Some((hours * 3600 + minutes * 60 + seconds) * 1000 + millis)
}

/// Format a millisecond offset as an `HH:MM:SS,mmm` timecode.
///
/// Hours are not clamped to 24. Negative offsets cannot be represented;
/// callers clamp computed offsets with saturating arithmetic first.
pub fn format_timecode(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    let millis = ms % 1_000;

    format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
}

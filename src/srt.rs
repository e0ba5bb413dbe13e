/*!
 * SRT block parser and serializer.
 *
 * Parsing is deliberately lenient: the document is cut into candidate
 * blocks on blank-line runs, and any block missing a parsable index, a
 * parsable time range, or a text payload is skipped with a warning
 * instead of failing the whole document. A completely malformed input
 * parses to an empty entry list.
 */

use std::fmt;

use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::timecode::{format_timecode, parse_timecode};

// @const: time-range line regex (`start --> end`)
static TIME_RANGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\S+)\s*-->\s*(\S+)\s*$").expect("Invalid time range regex")
});

/// Minimum lines per block: index, time range, at least one text line
const MIN_BLOCK_LINES: usize = 3;

// @struct: Single subtitle entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    /// Sequence number as written in the document (1-based for a
    /// spec-compliant SRT; passed through as parsed)
    pub index: u32,

    /// Start time in ms
    pub start_ms: u64,

    /// End time in ms. The parser passes `end_ms < start_ms` through
    /// unrepaired; the synthesizer never produces it.
    pub end_ms: u64,

    /// Text payload, one string per displayed line, no embedded newlines
    pub lines: Vec<String>,
}

impl SubtitleEntry {
    /// Creates a new subtitle entry
    pub fn new(index: u32, start_ms: u64, end_ms: u64, lines: Vec<String>) -> Self {
        SubtitleEntry {
            index,
            start_ms,
            end_ms,
            lines,
        }
    }

    /// Text payload joined with line breaks
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for SubtitleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\n{} --> {}",
            self.index,
            format_timecode(self.start_ms),
            format_timecode(self.end_ms)
        )?;
        for line in &self.lines {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Parse SRT format text into subtitle entries.
///
/// Total over any string input; malformed blocks are dropped, never
/// surfaced as errors.
pub fn parse(raw: &str) -> Vec<SubtitleEntry> {
    let mut entries = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            if !block.is_empty() {
                if let Some(entry) = parse_block(&block) {
                    entries.push(entry);
                }
                block.clear();
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        if let Some(entry) = parse_block(&block) {
            entries.push(entry);
        }
    }

    entries
}

/// Parse one candidate block; `None` drops it.
fn parse_block(lines: &[&str]) -> Option<SubtitleEntry> {
    if lines.len() < MIN_BLOCK_LINES {
        warn!(
            "Skipping subtitle block with {} line(s), expected at least {}",
            lines.len(),
            MIN_BLOCK_LINES
        );
        return None;
    }

    let index: u32 = match lines[0].trim().parse() {
        Ok(n) => n,
        Err(_) => {
            warn!("Skipping subtitle block with unparsable index: {}", lines[0].trim());
            return None;
        }
    };

    let caps = match TIME_RANGE_REGEX.captures(lines[1]) {
        Some(caps) => caps,
        None => {
            warn!("Skipping subtitle block {} with unparsable time range: {}", index, lines[1].trim());
            return None;
        }
    };

    let (start_ms, end_ms) = match (parse_timecode(&caps[1]), parse_timecode(&caps[2])) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            warn!("Skipping subtitle block {} with malformed timecode: {}", index, lines[1].trim());
            return None;
        }
    };

    let text_lines = lines[2..]
        .iter()
        .map(|line| line.trim().to_string())
        .collect();

    Some(SubtitleEntry::new(index, start_ms, end_ms, text_lines))
}

/// Serialize subtitle entries back to SRT format text.
///
/// Blocks are separated by exactly one blank line, with a single
/// trailing newline after the last block. `serialize(parse(x))` is not
/// byte-identical to `x` in general but is idempotent.
pub fn serialize(entries: &[SubtitleEntry]) -> String {
    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

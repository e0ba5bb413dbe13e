/*!
 * Reformat operation: rewrap the text payloads of an existing SRT
 * document while passing indices and timing through untouched.
 */

use log::{debug, warn};

use crate::line_wrapper;
use crate::options::FormatOptions;
use crate::srt;

/// Sentence-ending punctuation that takes a pause marker
const PAUSE_PUNCTUATION: [char; 3] = ['。', '！', '？'];

/// Reformat `raw` according to `options`.
///
/// Never fails: malformed blocks are dropped during parsing, and a
/// document with no parsable blocks yields an empty (still valid) SRT
/// string. Callers treat an unexpectedly empty result as a signal to
/// fall back, not as an error.
pub fn format_srt(raw: &str, options: &FormatOptions) -> String {
    let mut entries = srt::parse(raw);
    if entries.is_empty() {
        warn!("No parsable subtitle blocks in input, returning empty document");
        return srt::serialize(&entries);
    }

    let rules = options.kinsoku_rules();
    for entry in &mut entries {
        let mut wrapped = Vec::new();
        for paragraph in &entry.lines {
            // Blank paragraphs survive as empty lines
            if paragraph.trim().is_empty() {
                wrapped.push(String::new());
                continue;
            }
            let text = if options.insert_pause_after_punctuation {
                insert_pause_markers(paragraph)
            } else {
                paragraph.clone()
            };
            wrapped.extend(line_wrapper::wrap(&text, options.max_line_width, &rules));
        }
        entry.lines = wrapped;
    }

    debug!("Reformatted {} subtitle entries", entries.len());
    srt::serialize(&entries)
}

/// Insert a single space after sentence-ending punctuation not already
/// followed by whitespace. The space is a placeholder pause marker for
/// downstream text-to-speech; timing stays untouched here.
fn insert_pause_markers(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if PAUSE_PUNCTUATION.contains(&c) {
            if let Some(&next) = chars.peek() {
                if !next.is_whitespace() {
                    out.push(' ');
                }
            }
        }
    }

    out
}

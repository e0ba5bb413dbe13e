/*!
 * Synthesize operation: build a fully-formed SRT from unstructured
 * Japanese text.
 *
 * The text is split on sentence terminators, each sentence gets a
 * display duration proportional to its character count, and sentences
 * are laid out on a running clock with a fixed gap between entries.
 */

use log::debug;

use crate::kinsoku::KinsokuRules;
use crate::line_wrapper;
use crate::options::SynthesizeOptions;
use crate::srt::{self, SubtitleEntry};

/// Japanese sentence terminators
const SENTENCE_TERMINATORS: [char; 3] = ['。', '！', '？'];

/// Synthesize an SRT document from plain text.
///
/// Input without any terminator yields an empty document; that is
/// accepted behavior, not an error.
pub fn synthesize(text: &str, options: &SynthesizeOptions) -> String {
    let rules = KinsokuRules::default();
    let mut entries = Vec::new();
    let mut clock: u64 = 0;

    for (i, sentence) in split_sentences(text).into_iter().enumerate() {
        // Duration counts every character of the sentence, terminator
        // included.
        let duration = sentence.chars().count() as u64 * options.ms_per_char;
        let start_ms = clock;
        let end_ms = clock + duration;
        clock = end_ms + options.gap_ms;

        let lines = line_wrapper::wrap(&sentence, options.max_line_width, &rules);
        entries.push(SubtitleEntry::new((i + 1) as u32, start_ms, end_ms, lines));
    }

    debug!("Synthesized {} subtitle entries", entries.len());
    srt::serialize(&entries)
}

/// Split text on sentence terminators, re-appending the terminator to
/// its sentence. Empty fragments and a trailing unterminated fragment
/// are discarded.
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if SENTENCE_TERMINATORS.contains(&c) {
            let body = current.trim();
            if !body.is_empty() {
                let mut sentence = body.to_string();
                sentence.push(c);
                sentences.push(sentence);
            }
            current.clear();
        } else {
            current.push(c);
        }
    }

    sentences
}

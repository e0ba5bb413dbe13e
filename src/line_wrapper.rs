/*!
 * Width-budgeted, kinsoku-aware greedy line wrapper.
 *
 * The wrapper walks the input once, character by character, with one
 * character of lookahead and lookbehind. Break decisions happen when the
 * next character would push the running line over its width budget:
 *
 * 1. If that character is forbidden at line start, it is appended to the
 *    closing line anyway (hanging punctuation, slightly over budget).
 * 2. Otherwise, if the closing line ends with a character forbidden at
 *    line end, that character moves to the new line together with its
 *    successor.
 * 3. Otherwise a plain break.
 *
 * The start-forbidden check runs before the end-forbidden check; the
 * precedence is observable at boundaries that trip both rules at once
 * and is locked by tests.
 */

use crate::char_width::width_of;
use crate::kinsoku::KinsokuRules;

/// Wrap `text` into lines of at most `max_width` width units.
///
/// Total over any input: an empty string yields a single empty line, and
/// a character is never split, so a lone character wider than the budget
/// still forms its own line. A non-positive `max_width` degrades to one
/// character per line.
pub fn wrap(text: &str, max_width: f64, rules: &KinsokuRules) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0.0_f64;

    for c in text.chars() {
        let w = width_of(c);
        if line_width + w > max_width && !line.is_empty() {
            let trailing = line.chars().next_back().filter(|&p| rules.is_end_forbidden(p));
            if rules.is_start_forbidden(c) {
                // Hanging punctuation: close the line with the forbidden
                // character attached, over budget by one character.
                line.push(c);
                lines.push(std::mem::take(&mut line));
                line_width = 0.0;
            } else if let Some(prev) = trailing {
                // The closing line must not end with an opening bracket;
                // carry it to the new line with its successor.
                line.pop();
                lines.push(std::mem::take(&mut line));
                line.push(prev);
                line.push(c);
                line_width = width_of(prev) + w;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push(c);
                line_width = w;
            }
        } else {
            line.push(c);
            line_width += w;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

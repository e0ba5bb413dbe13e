/*!
 * Display-width classification for single characters.
 *
 * Line budgets are expressed in width units: a half-width character
 * (ASCII or half-width katakana) counts 0.5, everything else counts 1.0.
 * A budget of 20 therefore admits 40 ASCII characters or 20 full-width
 * Japanese characters per line, mixed proportionally.
 */

/// Half-width katakana block (U+FF61..=U+FF9F)
const HALFWIDTH_KATAKANA_START: char = '\u{FF61}';
const HALFWIDTH_KATAKANA_END: char = '\u{FF9F}';

/// Display width class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharWidth {
    /// Half-width: ASCII and half-width katakana, 0.5 units
    Narrow,
    /// Full-width: everything else, 1.0 units
    Wide,
}

impl CharWidth {
    /// Classify a single character. Pure and total: every Unicode scalar
    /// value maps to exactly one class, character by character (grapheme
    /// clusters are not considered).
    pub fn of(c: char) -> Self {
        if c.is_ascii() || (HALFWIDTH_KATAKANA_START..=HALFWIDTH_KATAKANA_END).contains(&c) {
            CharWidth::Narrow
        } else {
            CharWidth::Wide
        }
    }

    /// Width of this class in width units
    pub fn units(self) -> f64 {
        match self {
            CharWidth::Narrow => 0.5,
            CharWidth::Wide => 1.0,
        }
    }
}

/// Width of a single character in width units
pub fn width_of(c: char) -> f64 {
    CharWidth::of(c).units()
}

/// Total width of a string in width units
pub fn text_width(text: &str) -> f64 {
    text.chars().map(width_of).sum()
}

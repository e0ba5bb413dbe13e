/*!
 * Option structs for the two exposed operations.
 *
 * Both structs deserialize directly from request JSON with per-field
 * defaults, so a caller may supply any subset of fields. `validate`
 * enforces the externally agreed ranges at the boundary; the formatting
 * core does not re-check them.
 */

use serde::{Deserialize, Serialize};

use crate::errors::JimakuError;
use crate::kinsoku::KinsokuRules;

fn default_max_line_width() -> f64 {
    20.0
}

fn default_pause_duration_ms() -> u64 {
    120
}

fn default_ms_per_char() -> u64 {
    150
}

fn default_gap_ms() -> u64 {
    300
}

/// Options for reformatting an existing SRT document
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FormatOptions {
    /// Maximum line width in width units (one full-width character = 1.0)
    #[serde(default = "default_max_line_width")]
    pub max_line_width: f64,

    /// Override set of characters forbidden at line start
    #[serde(default)]
    pub forbidden_leading: Option<String>,

    /// Insert a space after sentence-ending punctuation as a pause
    /// marker for downstream text-to-speech
    #[serde(default)]
    pub insert_pause_after_punctuation: bool,

    /// Pause length hint for the downstream speech scheduler, in ms.
    /// Carried through to that scheduler; timing in this crate is never
    /// changed by it.
    #[serde(default = "default_pause_duration_ms")]
    pub pause_duration_ms: u64,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            max_line_width: default_max_line_width(),
            forbidden_leading: None,
            insert_pause_after_punctuation: false,
            pause_duration_ms: default_pause_duration_ms(),
        }
    }
}

impl FormatOptions {
    /// Check the externally agreed value ranges
    pub fn validate(&self) -> Result<(), JimakuError> {
        if !(10.0..=50.0).contains(&self.max_line_width) {
            return Err(JimakuError::InvalidOptions(format!(
                "max_line_width must be within 10..=50, got {}",
                self.max_line_width
            )));
        }
        if !(50..=500).contains(&self.pause_duration_ms) {
            return Err(JimakuError::InvalidOptions(format!(
                "pause_duration_ms must be within 50..=500, got {}",
                self.pause_duration_ms
            )));
        }
        Ok(())
    }

    /// Kinsoku rules honoring the leading-character override, if any
    pub fn kinsoku_rules(&self) -> KinsokuRules {
        match &self.forbidden_leading {
            Some(chars) => KinsokuRules::with_start_forbidden(chars),
            None => KinsokuRules::default(),
        }
    }
}

/// Options for synthesizing an SRT from plain text
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SynthesizeOptions {
    /// Display duration per character, in ms. Hand-tuned reading-speed
    /// default for Japanese.
    #[serde(default = "default_ms_per_char")]
    pub ms_per_char: u64,

    /// Gap between consecutive subtitles, in ms
    #[serde(default = "default_gap_ms")]
    pub gap_ms: u64,

    /// Maximum line width in width units
    #[serde(default = "default_max_line_width")]
    pub max_line_width: f64,
}

impl Default for SynthesizeOptions {
    fn default() -> Self {
        SynthesizeOptions {
            ms_per_char: default_ms_per_char(),
            gap_ms: default_gap_ms(),
            max_line_width: default_max_line_width(),
        }
    }
}

impl SynthesizeOptions {
    /// Check the externally agreed value ranges
    pub fn validate(&self) -> Result<(), JimakuError> {
        if !(50..=500).contains(&self.ms_per_char) {
            return Err(JimakuError::InvalidOptions(format!(
                "ms_per_char must be within 50..=500, got {}",
                self.ms_per_char
            )));
        }
        if self.gap_ms > 2000 {
            return Err(JimakuError::InvalidOptions(format!(
                "gap_ms must be within 0..=2000, got {}",
                self.gap_ms
            )));
        }
        if !(10.0..=50.0).contains(&self.max_line_width) {
            return Err(JimakuError::InvalidOptions(format!(
                "max_line_width must be within 10..=50, got {}",
                self.max_line_width
            )));
        }
        Ok(())
    }
}

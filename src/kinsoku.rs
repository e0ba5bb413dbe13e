/*!
 * Kinsoku shori rule tables.
 *
 * Japanese typesetting forbids certain punctuation and bracket characters
 * from starting or ending a printed line. The rules are modeled as two
 * immutable character sets so the policy stays auditable and testable
 * independently of the wrapping algorithm.
 */

use std::borrow::Cow;

/// Characters that must never begin a line
const START_FORBIDDEN: &str = "、。！？：；）]】』」>≫…ー";

/// Characters that must never end a line
const END_FORBIDDEN: &str = "（[【『「<≪";

/// Membership tests for forbidden line-start and line-end characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KinsokuRules {
    start_forbidden: Cow<'static, str>,
    end_forbidden: Cow<'static, str>,
}

impl Default for KinsokuRules {
    fn default() -> Self {
        KinsokuRules {
            start_forbidden: Cow::Borrowed(START_FORBIDDEN),
            end_forbidden: Cow::Borrowed(END_FORBIDDEN),
        }
    }
}

impl KinsokuRules {
    /// Rules with a caller-supplied set of forbidden leading characters,
    /// keeping the default trailing set
    pub fn with_start_forbidden(chars: &str) -> Self {
        KinsokuRules {
            start_forbidden: Cow::Owned(chars.to_string()),
            ..KinsokuRules::default()
        }
    }

    /// True if `c` must not begin a line
    pub fn is_start_forbidden(&self, c: char) -> bool {
        self.start_forbidden.contains(c)
    }

    /// True if `c` must not end a line
    pub fn is_end_forbidden(&self, c: char) -> bool {
        self.end_forbidden.contains(c)
    }
}

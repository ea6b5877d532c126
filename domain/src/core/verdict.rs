//! Verdict value object and answer parsing

use serde::{Deserialize, Serialize};
use std::ops::Not;

/// Tri-state answer to a yes/no question (Value Object)
///
/// `Undefined` means the model replied, but not with something readable as
/// true or false. It is not an error: transport failures are reported
/// separately by the querying layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    True,
    False,
    Undefined,
}

impl Verdict {
    /// Logical negation; `Undefined` stays `Undefined`.
    pub fn negate(self) -> Self {
        match self {
            Verdict::True => Verdict::False,
            Verdict::False => Verdict::True,
            Verdict::Undefined => Verdict::Undefined,
        }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Verdict::True => Some(true),
            Verdict::False => Some(false),
            Verdict::Undefined => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::True => "true",
            Verdict::False => "false",
            Verdict::Undefined => "undefined",
        }
    }
}

impl Not for Verdict {
    type Output = Verdict;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl From<bool> for Verdict {
    fn from(value: bool) -> Self {
        if value { Verdict::True } else { Verdict::False }
    }
}

impl From<Option<bool>> for Verdict {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Verdict::Undefined, Verdict::from)
    }
}

impl From<Verdict> for Option<bool> {
    fn from(value: Verdict) -> Self {
        value.as_bool()
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Interpret a model's reply as a [`Verdict`].
///
/// The reply is trimmed and compared case-insensitively. Only the exact words
/// `true` and `false` are definite; everything else, the empty string
/// included, is `Undefined`.
///
/// ```
/// use is_even_ai_domain::{Verdict, parse_verdict};
///
/// assert_eq!(parse_verdict("  TRUE\n"), Verdict::True);
/// assert_eq!(parse_verdict("false"), Verdict::False);
/// assert_eq!(parse_verdict("True."), Verdict::Undefined);
/// ```
pub fn parse_verdict(reply: &str) -> Verdict {
    match reply.trim().to_lowercase().as_str() {
        "true" => Verdict::True,
        "false" => Verdict::False,
        _ => Verdict::Undefined,
    }
}

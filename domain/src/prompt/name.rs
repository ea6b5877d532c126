//! Operation names for prompt templates

use crate::core::error::TemplateError;
use serde::{Deserialize, Serialize};

/// One of the six questions that can be put to a model.
///
/// `IsEven`, `AreEqual` and `IsGreaterThan` are mandatory: every template set
/// is expected to phrase them. The other three are optional and can be
/// derived from their complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PromptName {
    IsEven,
    IsOdd,
    AreEqual,
    AreNotEqual,
    IsGreaterThan,
    IsLessThan,
}

impl PromptName {
    pub const ALL: [PromptName; 6] = [
        PromptName::IsEven,
        PromptName::IsOdd,
        PromptName::AreEqual,
        PromptName::AreNotEqual,
        PromptName::IsGreaterThan,
        PromptName::IsLessThan,
    ];

    /// Get the template name used in prompts and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            PromptName::IsEven => "isEven",
            PromptName::IsOdd => "isOdd",
            PromptName::AreEqual => "areEqual",
            PromptName::AreNotEqual => "areNotEqual",
            PromptName::IsGreaterThan => "isGreaterThan",
            PromptName::IsLessThan => "isLessThan",
        }
    }

    /// Number of integer operands the template takes
    pub fn arity(&self) -> usize {
        match self {
            PromptName::IsEven | PromptName::IsOdd => 1,
            _ => 2,
        }
    }

    pub fn is_mandatory(&self) -> bool {
        matches!(
            self,
            PromptName::IsEven | PromptName::AreEqual | PromptName::IsGreaterThan
        )
    }

    /// The mandatory operation an optional one is derived from.
    ///
    /// `isLessThan(a, b)` is answered as `!isGreaterThan(b, a)`; see
    /// [`Question::complement`](crate::Question::complement) for the operand swap.
    pub fn complement(&self) -> Option<PromptName> {
        match self {
            PromptName::IsOdd => Some(PromptName::IsEven),
            PromptName::AreNotEqual => Some(PromptName::AreEqual),
            PromptName::IsLessThan => Some(PromptName::IsGreaterThan),
            _ => None,
        }
    }
}

impl std::fmt::Display for PromptName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PromptName {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| TemplateError::UnknownPrompt(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for name in PromptName::ALL {
            assert_eq!(name.as_str().parse::<PromptName>().unwrap(), name);
        }
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "isPrime".parse::<PromptName>().unwrap_err();
        assert_eq!(err, TemplateError::UnknownPrompt("isPrime".to_string()));
        assert_eq!(err.to_string(), "unknown prompt name: isPrime");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!("IsEven".parse::<PromptName>().is_err());
    }

    #[test]
    fn test_mandatory_names_have_no_complement() {
        for name in PromptName::ALL {
            assert_eq!(name.is_mandatory(), name.complement().is_none());
        }
    }

    #[test]
    fn test_complement_is_mandatory() {
        assert_eq!(PromptName::IsOdd.complement(), Some(PromptName::IsEven));
        assert_eq!(PromptName::AreNotEqual.complement(), Some(PromptName::AreEqual));
        assert_eq!(PromptName::IsLessThan.complement(), Some(PromptName::IsGreaterThan));
    }
}

//! Question value object

use crate::prompt::PromptName;
use serde::{Deserialize, Serialize};

/// A numeric question to put to a model (Value Object)
///
/// Pairs an operation with its operands. Displays as a call expression,
/// e.g. `isLessThan(5, 3)`, which is how errors identify the failing question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    name: PromptName,
    args: Vec<i64>,
}

impl Question {
    /// Create a question from raw parts.
    ///
    /// The operand count is not validated here; template rendering reports
    /// a shortfall.
    pub fn new(name: PromptName, args: impl Into<Vec<i64>>) -> Self {
        Self {
            name,
            args: args.into(),
        }
    }

    pub fn is_even(n: i64) -> Self {
        Self::new(PromptName::IsEven, [n])
    }

    pub fn is_odd(n: i64) -> Self {
        Self::new(PromptName::IsOdd, [n])
    }

    pub fn are_equal(a: i64, b: i64) -> Self {
        Self::new(PromptName::AreEqual, [a, b])
    }

    pub fn are_not_equal(a: i64, b: i64) -> Self {
        Self::new(PromptName::AreNotEqual, [a, b])
    }

    pub fn is_greater_than(a: i64, b: i64) -> Self {
        Self::new(PromptName::IsGreaterThan, [a, b])
    }

    pub fn is_less_than(a: i64, b: i64) -> Self {
        Self::new(PromptName::IsLessThan, [a, b])
    }

    pub fn name(&self) -> PromptName {
        self.name
    }

    pub fn args(&self) -> &[i64] {
        &self.args
    }

    /// The question whose negated answer answers this one.
    ///
    /// Only optional operations have a complement. `isLessThan(a, b)` maps to
    /// `isGreaterThan(b, a)`; operands past the second are dropped.
    pub fn complement(&self) -> Option<Question> {
        let name = self.name.complement()?;
        let args = match (self.name, &self.args[..]) {
            (PromptName::IsLessThan, [a, b, ..]) => vec![*b, *a],
            _ => self.args.clone(),
        };
        Some(Question { name, args })
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let args: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
        write!(f, "{}({})", self.name, args.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_display() {
        assert_eq!(Question::is_even(4).to_string(), "isEven(4)");
        assert_eq!(Question::is_less_than(5, -3).to_string(), "isLessThan(5, -3)");
    }

    #[test]
    fn test_complement_keeps_operands() {
        assert_eq!(Question::is_odd(7).complement(), Some(Question::is_even(7)));
        assert_eq!(
            Question::are_not_equal(1, 2).complement(),
            Some(Question::are_equal(1, 2))
        );
    }

    #[test]
    fn test_less_than_complement_swaps_operands() {
        assert_eq!(
            Question::is_less_than(3, 5).complement(),
            Some(Question::is_greater_than(5, 3))
        );
    }

    #[test]
    fn test_less_than_complement_ignores_surplus_operands() {
        let question = Question::new(PromptName::IsLessThan, [1, 2, 3]);
        assert_eq!(question.complement(), Some(Question::is_greater_than(2, 1)));
    }

    #[test]
    fn test_mandatory_questions_have_no_complement() {
        assert!(Question::is_even(1).complement().is_none());
        assert!(Question::are_equal(1, 1).complement().is_none());
        assert!(Question::is_greater_than(2, 1).complement().is_none());
    }
}

//! Prompt templates for numeric questions

use super::name::PromptName;
use crate::core::error::TemplateError;
use crate::core::question::Question;
use std::sync::Arc;

/// Template phrasing a one-operand question
pub type UnaryTemplate = Arc<dyn Fn(i64) -> String + Send + Sync>;

/// Template phrasing a two-operand question
pub type BinaryTemplate = Arc<dyn Fn(i64, i64) -> String + Send + Sync>;

/// The set of templates used to turn questions into prompts.
///
/// Every slot may be left empty. Requesting an empty mandatory slot is an
/// error; an empty optional slot yields no prompt, which tells the caller to
/// derive the answer from the complement.
#[derive(Clone, Default)]
pub struct PromptTemplates {
    pub is_even: Option<UnaryTemplate>,
    pub is_odd: Option<UnaryTemplate>,
    pub are_equal: Option<BinaryTemplate>,
    pub are_not_equal: Option<BinaryTemplate>,
    pub is_greater_than: Option<BinaryTemplate>,
    pub is_less_than: Option<BinaryTemplate>,
}

impl PromptTemplates {
    /// The English templates used by the bundled providers
    pub fn standard() -> Self {
        Self::default()
            .with_is_even(|n| format!("Is {} an even number?", n))
            .with_is_odd(|n| format!("Is {} an odd number?", n))
            .with_are_equal(|a, b| format!("Are {} and {} equal?", a, b))
            .with_are_not_equal(|a, b| format!("Are {} and {} not equal?", a, b))
            .with_is_greater_than(|a, b| format!("Is {} greater than {}?", a, b))
            .with_is_less_than(|a, b| format!("Is {} less than {}?", a, b))
    }

    pub fn with_is_even(mut self, template: impl Fn(i64) -> String + Send + Sync + 'static) -> Self {
        self.is_even = Some(Arc::new(template));
        self
    }

    pub fn with_is_odd(mut self, template: impl Fn(i64) -> String + Send + Sync + 'static) -> Self {
        self.is_odd = Some(Arc::new(template));
        self
    }

    pub fn with_are_equal(
        mut self,
        template: impl Fn(i64, i64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.are_equal = Some(Arc::new(template));
        self
    }

    pub fn with_are_not_equal(
        mut self,
        template: impl Fn(i64, i64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.are_not_equal = Some(Arc::new(template));
        self
    }

    pub fn with_is_greater_than(
        mut self,
        template: impl Fn(i64, i64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.is_greater_than = Some(Arc::new(template));
        self
    }

    pub fn with_is_less_than(
        mut self,
        template: impl Fn(i64, i64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.is_less_than = Some(Arc::new(template));
        self
    }

    /// Clear one slot
    pub fn without(mut self, name: PromptName) -> Self {
        match name {
            PromptName::IsEven => self.is_even = None,
            PromptName::IsOdd => self.is_odd = None,
            PromptName::AreEqual => self.are_equal = None,
            PromptName::AreNotEqual => self.are_not_equal = None,
            PromptName::IsGreaterThan => self.is_greater_than = None,
            PromptName::IsLessThan => self.is_less_than = None,
        }
        self
    }

    pub fn is_defined(&self, name: PromptName) -> bool {
        match name {
            PromptName::IsEven => self.is_even.is_some(),
            PromptName::IsOdd => self.is_odd.is_some(),
            PromptName::AreEqual => self.are_equal.is_some(),
            PromptName::AreNotEqual => self.are_not_equal.is_some(),
            PromptName::IsGreaterThan => self.is_greater_than.is_some(),
            PromptName::IsLessThan => self.is_less_than.is_some(),
        }
    }

    /// Render the prompt for `name` with the given operands.
    ///
    /// Returns `Ok(None)` when an optional template is not defined.
    /// Slot presence is checked before the operand count.
    pub fn render(&self, name: PromptName, args: &[i64]) -> Result<Option<String>, TemplateError> {
        let prompt = match name {
            PromptName::IsEven | PromptName::IsOdd => {
                let slot = if name == PromptName::IsEven {
                    &self.is_even
                } else {
                    &self.is_odd
                };
                let Some(template) = slot else {
                    return Self::missing(name);
                };
                let [n, ..] = args else {
                    return Err(Self::not_enough(name, args));
                };
                template(*n)
            }
            PromptName::AreEqual
            | PromptName::AreNotEqual
            | PromptName::IsGreaterThan
            | PromptName::IsLessThan => {
                let slot = match name {
                    PromptName::AreEqual => &self.are_equal,
                    PromptName::AreNotEqual => &self.are_not_equal,
                    PromptName::IsGreaterThan => &self.is_greater_than,
                    _ => &self.is_less_than,
                };
                let Some(template) = slot else {
                    return Self::missing(name);
                };
                let [a, b, ..] = args else {
                    return Err(Self::not_enough(name, args));
                };
                template(*a, *b)
            }
        };
        Ok(Some(prompt))
    }

    /// Render by template name, as used in configuration and error messages.
    pub fn render_named(&self, name: &str, args: &[i64]) -> Result<Option<String>, TemplateError> {
        self.render(name.parse()?, args)
    }

    pub fn render_question(&self, question: &Question) -> Result<Option<String>, TemplateError> {
        self.render(question.name(), question.args())
    }

    fn missing(name: PromptName) -> Result<Option<String>, TemplateError> {
        if name.is_mandatory() {
            Err(TemplateError::MandatoryMissing(name))
        } else {
            Ok(None)
        }
    }

    fn not_enough(name: PromptName, args: &[i64]) -> TemplateError {
        TemplateError::NotEnoughArguments {
            name,
            expected: name.arity(),
            got: args.len(),
        }
    }
}

impl std::fmt::Debug for PromptTemplates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let defined: Vec<&str> = PromptName::ALL
            .into_iter()
            .filter(|name| self.is_defined(*name))
            .map(|name| name.as_str())
            .collect();
        f.debug_struct("PromptTemplates")
            .field("defined", &defined)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled() -> PromptTemplates {
        PromptTemplates::default()
            .with_is_even(|n| format!("isEven {}", n))
            .with_is_odd(|n| format!("isOdd {}", n))
            .with_are_equal(|a, b| format!("areEqual {} {}", a, b))
            .with_are_not_equal(|a, b| format!("areNotEqual {} {}", a, b))
            .with_is_greater_than(|a, b| format!("isGreaterThan {} {}", a, b))
            .with_is_less_than(|a, b| format!("isLessThan {} {}", a, b))
    }

    #[test]
    fn test_render_each_template() {
        let templates = labelled();
        assert_eq!(
            templates.render(PromptName::IsEven, &[4]).unwrap().as_deref(),
            Some("isEven 4")
        );
        assert_eq!(
            templates.render(PromptName::IsLessThan, &[1, 2]).unwrap().as_deref(),
            Some("isLessThan 1 2")
        );
        assert_eq!(
            templates.render(PromptName::AreNotEqual, &[-3, 7]).unwrap().as_deref(),
            Some("areNotEqual -3 7")
        );
    }

    #[test]
    fn test_standard_templates() {
        let templates = PromptTemplates::standard();
        assert_eq!(
            templates.render(PromptName::IsEven, &[42]).unwrap().unwrap(),
            "Is 42 an even number?"
        );
        assert_eq!(
            templates.render(PromptName::IsGreaterThan, &[5, 3]).unwrap().unwrap(),
            "Is 5 greater than 3?"
        );
        for name in PromptName::ALL {
            assert!(templates.is_defined(name));
        }
    }

    #[test]
    fn test_missing_mandatory_is_error() {
        for name in [PromptName::IsEven, PromptName::AreEqual, PromptName::IsGreaterThan] {
            let templates = labelled().without(name);
            let err = templates.render(name, &[1, 2]).unwrap_err();
            assert_eq!(err, TemplateError::MandatoryMissing(name));
            assert!(err.to_string().contains("mandatory and not defined"));
        }
    }

    #[test]
    fn test_missing_optional_is_no_prompt() {
        let templates = PromptTemplates::default()
            .with_is_even(|n| n.to_string())
            .with_are_equal(|a, b| format!("{a}{b}"))
            .with_is_greater_than(|a, b| format!("{a}{b}"));
        for name in [PromptName::IsOdd, PromptName::AreNotEqual, PromptName::IsLessThan] {
            assert_eq!(templates.render(name, &[1, 2]).unwrap(), None);
        }
    }

    #[test]
    fn test_not_enough_arguments() {
        let templates = labelled();
        let err = templates.render(PromptName::AreEqual, &[1]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::NotEnoughArguments {
                name: PromptName::AreEqual,
                expected: 2,
                got: 1,
            }
        );
        assert!(templates.render(PromptName::IsEven, &[]).is_err());
    }

    #[test]
    fn test_presence_checked_before_arity() {
        // An absent optional template is "no prompt" even with missing operands.
        let templates = labelled().without(PromptName::IsLessThan);
        assert_eq!(templates.render(PromptName::IsLessThan, &[]).unwrap(), None);

        let templates = labelled().without(PromptName::IsEven);
        assert!(
            templates
                .render(PromptName::IsEven, &[])
                .unwrap_err()
                .is_mandatory_missing()
        );
    }

    #[test]
    fn test_render_named() {
        let templates = labelled();
        assert_eq!(
            templates.render_named("isOdd", &[3]).unwrap().as_deref(),
            Some("isOdd 3")
        );
        assert_eq!(
            templates.render_named("isPrime", &[3]).unwrap_err(),
            TemplateError::UnknownPrompt("isPrime".to_string())
        );
    }

    #[test]
    fn test_debug_lists_defined_slots() {
        let templates = PromptTemplates::default().with_is_even(|n| n.to_string());
        assert_eq!(
            format!("{:?}", templates),
            r#"PromptTemplates { defined: ["isEven"] }"#
        );
    }
}

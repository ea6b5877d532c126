//! Console output formatter for answers

use colored::Colorize;
use is_even_ai_domain::{PromptName, Question, Verdict};
use serde::Serialize;

/// The outcome of one question, as printed or serialized
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub question: Question,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// Record an outcome; errors keep their whole cause chain.
    pub fn new<E: std::error::Error>(question: Question, result: Result<Verdict, E>) -> Self {
        match result {
            Ok(verdict) => Self {
                question,
                verdict: Some(verdict),
                error: None,
            },
            Err(e) => Self {
                question,
                verdict: None,
                error: Some(error_chain(&e)),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Join an error and its sources, outermost first
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Phrase a question in plain English, e.g. `Is 4 even?`
    pub fn phrase(question: &Question) -> String {
        let args = question.args();
        let a = args.first().copied().unwrap_or_default();
        let b = args.get(1).copied().unwrap_or_default();
        match question.name() {
            PromptName::IsEven => format!("Is {} even?", a),
            PromptName::IsOdd => format!("Is {} odd?", a),
            PromptName::AreEqual => format!("Are {} and {} equal?", a, b),
            PromptName::AreNotEqual => format!("Are {} and {} not equal?", a, b),
            PromptName::IsGreaterThan => format!("Is {} greater than {}?", a, b),
            PromptName::IsLessThan => format!("Is {} less than {}?", a, b),
        }
    }

    pub fn verdict(verdict: Verdict) -> String {
        match verdict {
            Verdict::True => verdict.as_str().green().bold().to_string(),
            Verdict::False => verdict.as_str().red().bold().to_string(),
            Verdict::Undefined => verdict.as_str().yellow().to_string(),
        }
    }

    /// Format one report as a single line
    pub fn format(report: &Report) -> String {
        let phrase = Self::phrase(&report.question);
        match (&report.verdict, &report.error) {
            (Some(verdict), _) => format!("{} {}", phrase, Self::verdict(*verdict)),
            (None, Some(error)) => format!("{} {} {}", phrase, "error:".red().bold(), error),
            (None, None) => phrase,
        }
    }

    /// Format as JSON
    pub fn format_json(reports: &[Report]) -> String {
        serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
    }
}

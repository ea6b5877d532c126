//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use is_even_ai_domain::Question;
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One line per question
    Text,
    /// JSON array of reports
    Json,
}

/// CLI arguments for is-even-ai
#[derive(Parser, Debug)]
#[command(name = "is-even-ai")]
#[command(author, version, about = "Ask an AI model whether numbers are even, equal or ordered")]
#[command(long_about = r#"
is-even-ai answers trivial numeric questions by asking a language model.

The API key is read from the provider's environment variable
(GEMINI_API_KEY or OPENAI_API_KEY by default).

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./is-even-ai.toml      Project-level config
3. ~/.config/is-even-ai/config.toml   Global config

Example:
  is-even-ai even 4
  is-even-ai --provider openai less -- -3 5
  is-even-ai demo
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Provider to ask (gemini or openai)
    #[arg(short, long, value_name = "PROVIDER")]
    pub provider: Option<String>,

    /// Model name override
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Sampling temperature override
    #[arg(long, value_name = "TEMP")]
    pub temperature: Option<f32>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip global and project configuration files (an explicit --config file is still read)
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Question to ask
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Is N even?
    Even {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Is N odd?
    Odd {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },
    /// Are A and B equal?
    Equal {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Are A and B not equal?
    NotEqual {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Is A greater than B?
    Greater {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Is A less than B?
    Less {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
    },
    /// Ask a fixed tour of questions
    Demo,
}

impl Command {
    /// The questions this command asks, in order
    pub fn questions(&self) -> Vec<Question> {
        match *self {
            Command::Even { n } => vec![Question::is_even(n)],
            Command::Odd { n } => vec![Question::is_odd(n)],
            Command::Equal { a, b } => vec![Question::are_equal(a, b)],
            Command::NotEqual { a, b } => vec![Question::are_not_equal(a, b)],
            Command::Greater { a, b } => vec![Question::is_greater_than(a, b)],
            Command::Less { a, b } => vec![Question::is_less_than(a, b)],
            Command::Demo => demo_questions(),
        }
    }
}

fn demo_questions() -> Vec<Question> {
    let mut questions = Vec::new();
    for n in [4, 7, 0, 13, -2, 42] {
        questions.push(Question::is_even(n));
        questions.push(Question::is_odd(n));
    }
    questions.push(Question::are_equal(10, 10));
    questions.push(Question::are_not_equal(10, 10));
    questions.push(Question::are_equal(10, 5));
    questions.push(Question::are_not_equal(10, 5));
    questions.push(Question::is_greater_than(10, 5));
    questions.push(Question::is_less_than(10, 5));
    questions.push(Question::is_greater_than(5, 10));
    questions.push(Question::is_less_than(5, 10));
    questions
}

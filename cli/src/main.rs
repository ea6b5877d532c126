//! CLI entrypoint for is-even-ai
//!
//! This is the main binary that wires together all layers: it loads
//! configuration, configures the global instance and prints one answer per
//! question.

use anyhow::{Context, Result, bail};
use clap::Parser;
use futures::future::join_all;
use is_even_ai_infrastructure::{ConfigLoader, FileConfig, ProviderKind, global};
use is_even_ai_presentation::{Cli, ConsoleFormatter, OutputFormat, Report};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let Some(command) = cli.command.clone() else {
        bail!("A question is required, e.g. `is-even-ai even 4`. Use --help for more.");
    };

    // === Configuration ===
    let mut config = load_config(&cli)?;
    apply_overrides(&mut config, &cli)?;

    let provider = config.provider;
    let api_key = config.api_key(provider).with_context(|| {
        format!(
            "No {} API key found. Set {} or add api_key to the [{}] config section.",
            provider,
            config.api_key_env(provider),
            provider
        )
    })?;

    info!(provider = %provider, "Starting is-even-ai");
    global::configure(provider, &api_key, &config.provider_settings(provider))?;

    // === Ask ===
    let questions = command.questions();
    let results = join_all(questions.iter().cloned().map(global::ask)).await;
    let reports: Vec<Report> = questions
        .into_iter()
        .zip(results)
        .map(|(question, result)| Report::new(question, result))
        .collect();

    match cli.output {
        OutputFormat::Text => {
            for report in &reports {
                let line = ConsoleFormatter::format(report);
                if report.is_error() {
                    eprintln!("{}", line);
                } else {
                    println!("{}", line);
                }
            }
        }
        OutputFormat::Json => println!("{}", ConsoleFormatter::format_json(&reports)),
    }

    let failures = reports.iter().filter(|r| r.is_error()).count();
    if failures > 0 {
        warn!(failures, total = reports.len(), "Some questions failed");
        if failures == reports.len() {
            bail!("All {} questions failed", failures);
        }
    }

    Ok(())
}

/// Load configuration according to `--config` and `--no-config`
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = match (cli.no_config, cli.config.as_deref()) {
        (true, Some(path)) => ConfigLoader::load_file(path)?,
        (true, None) => ConfigLoader::load_defaults(),
        (false, path) => ConfigLoader::load(path)?,
    };
    Ok(config)
}

/// Apply command-line overrides on top of the loaded configuration
fn apply_overrides(config: &mut FileConfig, cli: &Cli) -> Result<()> {
    if let Some(provider) = &cli.provider {
        config.provider = provider.parse::<ProviderKind>().map_err(anyhow::Error::msg)?;
    }

    let provider = config.provider;
    let section = config.section_mut(provider);
    if let Some(model) = &cli.model {
        section.model = Some(model.clone());
    }
    if let Some(temperature) = cli.temperature {
        section.temperature = Some(temperature);
    }
    if let Some(timeout) = cli.timeout {
        section.timeout_secs = Some(timeout);
    }

    config.validate().map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        anyhow::anyhow!("Invalid options: {}", messages.join("; "))
    })?;
    Ok(())
}

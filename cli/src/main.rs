//! CLI entrypoint for decision-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::{CommandFactory, Parser};
use council_application::{ChatService, LlmGateway};
use council_domain::{
    ChatPhase, ChatRequest, ConfigIssue, OutputFormat as DomainOutputFormat, Severity,
};
use council_infrastructure::{ChatCompletionsGateway, ConfigLoader};
use council_presentation::{Cli, Command, ConsoleFormatter, OutputConfig, ProgressReporter};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting decision-council");

    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let (council_config, issues) = file_config.to_council_config();
    report_config_issues(&issues)?;

    let output = OutputConfig::new(
        file_config.output.format,
        file_config.output.color,
        file_config.output.show_progress,
    )
    .with_cli_overrides(cli.output, cli.quiet);
    if !output.color {
        colored::control::set_override(false);
    }

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // === Dependency Injection ===
    let gateway = Arc::new(ChatCompletionsGateway::new(
        file_config.provider.to_gateway_config(),
    )?);
    let service = Arc::new(ChatService::new(gateway, &council_config));

    match command {
        Command::Serve { bind } => {
            let addr = bind.unwrap_or_else(|| file_config.server.bind.clone());
            council_presentation::serve(service, &addr)
                .await
                .with_context(|| format!("Failed to serve on {}", addr))?;
        }
        Command::Intake { message, context } => {
            let mut request = ChatRequest::new(message, ChatPhase::Intake);
            request.context = parse_json_arg("--context", context.as_deref())?;
            run_turn(&service, request, &output).await?;
        }
        Command::Debate {
            message,
            brief,
            context,
        } => {
            let mut request = ChatRequest::new(message, ChatPhase::Debate);
            request.context = parse_json_arg("--context", context.as_deref())?;
            request.brief = brief.as_deref().map(read_brief).transpose()?;
            run_turn(&service, request, &output).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // Initialize logging based on verbosity level
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter).with(console);

    let Some(path) = log_file else {
        registry.init();
        return Ok(None);
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    registry
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .init();
    Ok(Some(guard))
}

fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        match issue.severity {
            Severity::Warning => warn!("Config: {}", issue.message),
            Severity::Error => error!("Config: {}", issue.message),
        }
    }
    if ConfigIssue::has_errors(issues) {
        let messages: Vec<&str> = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .map(|i| i.message.as_str())
            .collect();
        bail!("Invalid configuration: {}", messages.join("; "));
    }
    Ok(())
}

fn parse_json_arg(flag: &str, raw: Option<&str>) -> Result<Option<Value>> {
    raw.map(|text| {
        serde_json::from_str(text).with_context(|| format!("{} must be valid JSON", flag))
    })
    .transpose()
}

fn read_brief(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read brief {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("Brief {} is not valid JSON", path.display()))
}

async fn run_turn<G: LlmGateway + 'static>(
    service: &ChatService<G>,
    request: ChatRequest,
    output: &OutputConfig,
) -> Result<()> {
    let response = if output.show_progress {
        let progress = ProgressReporter::new();
        service.handle_with_progress(request, &progress).await?
    } else {
        service.handle(request).await?
    };

    let rendered = match output.format {
        DomainOutputFormat::Text => ConsoleFormatter::format(&response),
        DomainOutputFormat::Json => ConsoleFormatter::format_json(&response),
    };
    println!("{}", rendered);

    Ok(())
}

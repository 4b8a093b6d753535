//! CLI entrypoint for Copilot Orchestra MCP
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use orchestra_application::{DecisionLogger, DispatchToolUseCase};
use orchestra_domain::ValidationMode;
use orchestra_infrastructure::{
    ConfigLoader, FileConfig, Implementation, JsonlDecisionLogger, McpServer,
};
use orchestra_presentation::{Cli, ConsoleFormatter, OutputFormat};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        let details: Vec<String> = issues.iter().map(|issue| issue.to_string()).collect();
        bail!("Invalid configuration: {}", details.join("; "));
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let guard = init_tracing(cli.verbose, config.logging.file.as_deref())?;

    // === Dependency Injection ===
    let mut params = config.elicitation_params();
    if cli.strict {
        params = params.with_validation_mode(ValidationMode::Strict);
    }

    let mut dispatcher = DispatchToolUseCase::new(params);
    if let Some(logger) = decision_logger(&config) {
        dispatcher = dispatcher.with_decision_logger(logger);
    }

    if cli.list_tools {
        let tools = dispatcher.list_tools();
        let output = match cli.output {
            OutputFormat::Text => ConsoleFormatter::format_tool_list(&tools),
            OutputFormat::Json => ConsoleFormatter::format_tool_list_json(&tools),
        };
        println!("{}", output);
        return Ok(());
    }

    info!(
        "Starting {} (validation: {})",
        config.server.name, params.validation_mode
    );

    let server = McpServer::new(
        dispatcher,
        Implementation::new(&config.server.name, &config.server.version),
    );

    let interrupted = tokio::select! {
        result = server.serve_stdio(config.server.max_message_bytes) => {
            result.context("MCP server stopped")?;
            false
        }
        _ = tokio::signal::ctrl_c() => true,
    };

    if interrupted {
        info!("Interrupted, shutting down");
        // A pending stdin read would block runtime shutdown
        drop(guard);
        std::process::exit(0);
    }

    drop(guard);
    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// Output goes to stderr unless a log file is configured; stdout carries
/// protocol messages only.
fn init_tracing(verbose: u8, file: Option<&Path>) -> Result<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (writer, guard, ansi) = match file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(log_file_appender(path)?);
            (writer, guard, false)
        }
        None => {
            let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());
            (writer, guard, true)
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(writer)
        .init();

    Ok(guard)
}

/// Open `path` for appending log lines; the file is never rotated.
fn log_file_appender(path: &Path) -> Result<RollingFileAppender> {
    let Some(file_name) = path.file_name() else {
        bail!("Log file path has no file name: {}", path.display());
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

fn decision_logger(config: &FileConfig) -> Option<Arc<dyn DecisionLogger>> {
    let path = config.logging.decision_log.as_ref()?;
    match JsonlDecisionLogger::open(path) {
        Some(logger) => {
            info!("Recording decisions to {}", path.display());
            Some(Arc::new(logger))
        }
        None => {
            warn!("Decision log disabled: could not open {}", path.display());
            None
        }
    }
}

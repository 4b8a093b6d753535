//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for `--list-tools`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Text,
    /// The `tools/list` JSON payload
    Json,
}

/// CLI arguments for copilot-orchestra-mcp
#[derive(Parser, Debug)]
#[command(name = "copilot-orchestra-mcp")]
#[command(author, version, about = "MCP elicitation server for plan and phase-commit approvals")]
#[command(long_about = r#"
Copilot Orchestra MCP serves two elicitation tools over stdio:

  request_plan_approval          approve | request_changes | cancel
  request_phase_commit_approval  commit_and_continue | commit_and_pause | revise | abort

Messages are newline-delimited JSON-RPC on stdin/stdout. Diagnostics go to
stderr (or the configured log file).

Configuration is loaded from (in priority order):
1. ORCHESTRA_* env vars  e.g. ORCHESTRA_VALIDATION__STRICT_FIELDS=true
2. --config <path>       Explicit config file
3. ./orchestra.toml      Project-level config
4. ~/.config/copilot-orchestra/config.toml   Global config

Example:
  copilot-orchestra-mcp
  copilot-orchestra-mcp --strict -vv
  copilot-orchestra-mcp --list-tools -o json
"#)]
pub struct Cli {
    /// Print the tool descriptors and exit
    #[arg(long)]
    pub list_tools: bool,

    /// Output format for --list-tools
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Reject argument keys not declared in a tool's schema
    #[arg(long)]
    pub strict: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

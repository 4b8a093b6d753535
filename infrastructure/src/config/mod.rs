//! Configuration file loading for copilot-orchestra-mcp
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ORCHESTRA_*` environment variables (`__` separates sections, e.g.
//!    `ORCHESTRA_SERVER__NAME`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./orchestra.toml` or `./.orchestra.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/copilot-orchestra/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_SERVER_NAME, DEFAULT_SERVER_VERSION, FileConfig,
    FileLoggingConfig, FileServerConfig, FileValidationConfig,
};
pub use loader::{ConfigLoader, ConfigSource};

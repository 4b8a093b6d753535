//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "copilot-orchestra";
const PROJECT_FILES: [&str; 2] = ["orchestra.toml", ".orchestra.toml"];

/// Prefix of environment overrides, e.g. `ORCHESTRA_SERVER__NAME`.
pub const ENV_PREFIX: &str = "ORCHESTRA_";

/// One place a config file may come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub label: &'static str,
    pub path: PathBuf,
    pub found: bool,
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ORCHESTRA_*` environment variables (`__` separates sections)
    /// 2. Explicit config path (if provided, must exist)
    /// 3. Project root: `./orchestra.toml` or `./.orchestra.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/copilot-orchestra/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::load_with_env(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
            ENV_PREFIX,
        )
    }

    /// Merge the given files over the defaults, then environment variables
    /// starting with `env_prefix` over the files.
    pub fn load_with_env(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
        env_prefix: &str,
    ) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(global, project, explicit)?
            .merge(Env::prefixed(env_prefix).split("__"))
            .extract()
            .map_err(Box::new)
    }

    /// Merge the given files over the defaults. Missing global / project
    /// files are skipped; a missing explicit file is an error.
    pub fn load_from_sources(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(global, project, explicit)?
            .extract()
            .map_err(Box::new)
    }

    fn figment(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Figment, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(path) = global
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = project
            && path.exists()
        {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(Box::new(figment::Error::from(format!(
                    "config file not found: {}",
                    path.display()
                ))));
            }
            figment = figment.merge(Toml::file(path));
        }

        Ok(figment)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/copilot-orchestra/config.toml` if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Every source consulted by [`load`](Self::load), highest priority first.
    pub fn config_sources(config_path: Option<&PathBuf>) -> Vec<ConfigSource> {
        let mut sources = Vec::new();

        if let Some(path) = config_path {
            sources.push(ConfigSource {
                label: "Explicit",
                path: path.clone(),
                found: path.exists(),
            });
        }

        match Self::project_config_path() {
            Some(path) => sources.push(ConfigSource {
                label: "Project",
                path,
                found: true,
            }),
            None => sources.push(ConfigSource {
                label: "Project",
                path: PathBuf::from(PROJECT_FILES[0]),
                found: false,
            }),
        }

        if let Some(path) = Self::global_config_path() {
            let found = path.exists();
            sources.push(ConfigSource {
                label: "Global",
                path,
                found,
            });
        }

        sources
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] {:<8} {}* variables", "Env:", ENV_PREFIX);
        for source in Self::config_sources(config_path) {
            let marker = if source.found { "FOUND" } else { "     " };
            println!(
                "  [{}] {:<8} {}",
                marker,
                format!("{}:", source.label),
                source.path.display()
            );
        }
        println!("  [     ] Default: built-in defaults");
    }
}

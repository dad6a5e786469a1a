mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::level_filters::LevelFilter;

const DEFAULT_LOG_LEVEL: &str = "info";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub seed_path: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TOML file replayed into the store at startup.
    pub seed_path: Option<PathBuf>,
    /// Where the REPL keeps its command history, if anywhere.
    pub history_path: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let seed_path = file
            .seed_path
            .map(PathBuf::from)
            .or_else(|| cli.seed_path.clone());
        if let Some(path) = &seed_path {
            if !path.is_file() {
                bail!("Seed file does not exist: {:?}", path);
            }
        }

        let history_path = file
            .history_path
            .map(PathBuf::from)
            .or_else(|| cli.history_path.clone());

        let log_level_str = file
            .log_level
            .or_else(|| cli.log_level.clone())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_level = match parse_log_level(&log_level_str) {
            Some(level) => level,
            None => bail!("Invalid log level: {}", log_level_str),
        };

        Ok(Self {
            seed_path,
            history_path,
            log_level,
        })
    }
}

fn parse_log_level(s: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(s).ok()
}

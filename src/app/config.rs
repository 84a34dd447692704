use crate::theme::PaletteType;
use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Parser, Default)]
#[command(name = "shopsearch")]
#[command(about = "Search a product catalog from the terminal", long_about = None)]
pub struct CliArgs {
    /// Base URL of the products API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Quiet period after the last keystroke before searching
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Per-request timeout
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(long, value_enum)]
    pub theme: Option<PaletteType>,

    /// Config file to read instead of ~/.config/shopsearch/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub debounce_ms: u64,
    pub timeout_secs: u64,
    pub theme: PaletteType,
    pub currency: String,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: PaletteType::CatppuccinMocha,
            currency: "€".to_string(),
            log_file: None,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("shopsearch");
        path
    })
}

impl Config {
    /// Reads the config file (explicit path or the default location) and
    /// applies CLI overrides on top.
    ///
    /// A missing file yields defaults; a malformed one is an error.
    pub fn load(args: &CliArgs) -> Result<Self> {
        let path = args
            .config
            .clone()
            .or_else(|| config_dir().map(|dir| dir.join("config.toml")));

        let mut config = match path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) if args.config.is_some() => {
                anyhow::bail!("config file not found: {}", path.display())
            }
            _ => Self::default(),
        };
        config.apply_overrides(args);
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn apply_overrides(&mut self, args: &CliArgs) {
        if let Some(url) = &args.api_url {
            self.api_url.clone_from(url);
        }
        if let Some(ms) = args.debounce_ms {
            self.debounce_ms = ms;
        }
        if let Some(secs) = args.timeout_secs {
            self.timeout_secs = secs;
        }
        if let Some(theme) = args.theme {
            self.theme = theme;
        }
        if let Some(path) = &args.log_file {
            self.log_file = Some(path.clone());
        }
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            config_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("shopsearch.log")
        })
    }
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::transcript;

/// The well-known dashboard server port.
pub const DEFAULT_DASHBOARD_PORT: u16 = 29999;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Robot address offered in the connection bar on startup
    #[serde(default = "default_host")]
    pub host: String,
    /// Dashboard server port
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub transcript: TranscriptConfig,
    /// Extra command templates merged into completion and the quick-pick list
    #[serde(default)]
    pub commands: Vec<String>,

    // This field is not serialized, just used at runtime
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Cap on retained transcript entries
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
    /// Default target offered when saving the transcript
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_DASHBOARD_PORT
}

fn default_max_entries() -> usize {
    transcript::DEFAULT_MAX_ENTRIES
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            log_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            transcript: TranscriptConfig::default(),
            commands: Vec::new(),
            config_path: None,
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must be nonzero");
        }
        if self.transcript.max_entries == 0 {
            anyhow::bail!("transcript.max_entries must be positive");
        }
        for command in &self.commands {
            if command.trim().is_empty() {
                anyhow::bail!("commands entries must not be blank");
            }
        }
        Ok(())
    }
}

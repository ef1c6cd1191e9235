//! Configuration for xrefstore

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Readline history file; `null` keeps history in memory only
    #[serde(default = "default_history_file")]
    pub history_file: Option<PathBuf>,

    /// Directory for the log file
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Log level used when none is given on the command line
    #[serde(default)]
    pub log_level: Option<String>,

    /// Interactive prompt
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Number of ranked words shown by `stats`
    #[serde(default = "default_top_words")]
    pub top_words: usize,
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("xrefstore")
}

fn default_history_file() -> Option<PathBuf> {
    Some(data_dir().join("history.txt"))
}

fn default_log_dir() -> PathBuf {
    data_dir().join("logs")
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_top_words() -> usize {
    crate::DEFAULT_TOP_WORDS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
            log_dir: default_log_dir(),
            log_level: None,
            prompt: default_prompt(),
            top_words: default_top_words(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::load_file(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("xrefstore").join("config.yml")),
            Some(PathBuf::from("xrefstore.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::load_file(path);
            }
        }

        Ok(Config::default())
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("Failed to read config: {}", path.display()))?;
        serde_yaml::from_str(&content).context(format!("Failed to parse config: {}", path.display()))
    }
}

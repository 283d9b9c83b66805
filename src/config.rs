//! Application configuration, loaded once at startup from a YAML file.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Daily punch sequence: four events (entry, lunch out, lunch in, exit)
    /// when true, entry/exit only when false.
    #[serde(default = "default_detailed")]
    pub detailed: bool,

    /// Origin tag stamped on punches registered from this tool.
    #[serde(default = "default_source_label")]
    pub source_label: String,
}

fn default_detailed() -> bool {
    true
}

fn default_source_label() -> String {
    "cli".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detailed: default_detailed(),
            source_label: default_source_label(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ponto")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ponto")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ponto.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("Failed to read configuration file");
            serde_yaml::from_str(&content).expect("Failed to parse configuration file")
        } else {
            Config::default()
        }
    }
}

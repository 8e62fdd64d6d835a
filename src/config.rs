//! Project configuration (stampcard.yaml).
//!
//! The configuration file is optional; every field has a default and CLI
//! flags override whatever the file says.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StampError};

/// The name of the configuration file.
pub const CONFIG_FILENAME: &str = "stampcard.yaml";

/// Configuration loaded from stampcard.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding card templates, position files and the sprite.
    pub assets: PathBuf,

    /// Output directory for CLI renders.
    pub output: PathBuf,

    /// Address the serve command binds to.
    pub bind: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            output: PathBuf::from("dist"),
            bind: "127.0.0.1:8080".parse().expect("valid default address"),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StampError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read configuration: {e}"),
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| StampError::Config {
            message: format!("Invalid configuration: {e}"),
            help: Some(format!("Check {CONFIG_FILENAME} syntax")),
        })
    }

    /// Load from the conventional location under `dir`, falling back to
    /// defaults when no file exists.
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

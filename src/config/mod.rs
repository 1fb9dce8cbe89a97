//! armgraph configuration file.
//!
//! Configuration lives in `~/.armgraph/config.toml` (or the path given with
//! `--config` / `ARMGRAPH_CONFIG`). A missing file means defaults. Every table is
//! optional:
//!
//! ```toml
//! [resolver]
//! function_tokens = ["resourceId", "parameters", "concat", "variables"]
//! provider_marker = "providers/"
//!
//! [filter]
//! exclude_types = ["Principal"]
//!
//! [render]
//! output_dir = "graphs"
//! error_color = "red"
//! ```
//!
//! Command-line flags take precedence over values read here.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::ArmGraphError;
use crate::render::DEFAULT_ERROR_COLOR;
use crate::resolver::ResolverRules;

/// Environment variable naming an alternative configuration file.
pub const CONFIG_ENV: &str = "ARMGRAPH_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Expression tokens for the reference resolver.
    pub resolver: ResolverRules,
    pub filter: FilterConfig,
    pub render: RenderConfig,
}

/// `[filter]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Nodes whose identity contains any of these substrings are not rendered.
    pub exclude_types: Vec<String>,
}

/// `[render]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Directory rendered graphs are written to.
    pub output_dir: PathBuf,
    /// Fill color of flagged nodes.
    pub error_color: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            error_color: DEFAULT_ERROR_COLOR.to_string(),
        }
    }
}

impl Config {
    /// Default configuration path (`~/.armgraph/config.toml`).
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?;
        Ok(home.join(".armgraph").join("config.toml"))
    }

    /// Load from `path`, else `ARMGRAPH_CONFIG`, else the default path.
    ///
    /// An explicitly named file must exist; the default file may be absent.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ArmGraphError::ConfigError {
                        message: format!("config file {} does not exist", path.display()),
                    }
                    .into());
                }
                Self::load_from(&path).await
            }
            None => match Self::default_path() {
                Ok(path) if path.exists() => Self::load_from(&path).await,
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load from a specific file.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

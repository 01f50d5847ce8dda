//! Configuration types for class-order.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for class-order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Ordering rule configuration.
    #[serde(default)]
    pub order: OrderConfig,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// Analyzer-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Root directory to analyze (default: current directory).
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Glob patterns to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            exclude: vec!["**/migrations/**".to_string(), "**/venv/**".to_string()],
            respect_gitignore: true,
        }
    }
}

/// Configuration of the ordering rule itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Require strict segregation of protected/private members.
    #[serde(default)]
    pub strict_mode: bool,

    /// Explicit category order; overrides the built-in tables.
    #[serde(default)]
    pub custom_order: Option<Vec<String>>,

    /// Exclude docstrings from ordering checks.
    #[serde(default)]
    pub ignore_docstring: bool,

    /// Relation-constructor names recognized for `outer_field`
    /// classification. Defaults to the common ORM field constructors.
    #[serde(default)]
    pub relation_constructors: Option<Vec<String>>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

/// Errors when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read config file.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// IO error.
        source: std::io::Error,
    },
    /// Failed to parse TOML.
    #[error("invalid config: {message}")]
    Parse {
        /// Parse error detail.
        message: String,
    },
}

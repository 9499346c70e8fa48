//! Parser configuration (pagematter.yml)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Validator suggested when YAML front-matter fails to parse
pub const DEFAULT_YAML_LINT_URL: &str = "http://yamllint.com";

/// Front-matter parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Extensions probed, in order, for data files named without one
    pub data_extensions: Vec<String>,
    /// Validator named in YAML syntax errors; `None` drops the hint
    pub yaml_lint_url: Option<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            data_extensions: vec!["json".to_string(), "yml".to_string(), "yaml".to_string()],
            yaml_lint_url: Some(DEFAULT_YAML_LINT_URL.to_string()),
        }
    }
}

impl ParserConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ParserConfig = serde_yaml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded parser config from {:?}", path);
        Ok(config)
    }
}

//! Page model and page parsing

use indexmap::IndexMap;
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::frontmatter::{self, DecodeError, Format};
use crate::config::ParserConfig;
use crate::error::{Error, Result};

/// Decoded front-matter, keyed in document order
pub type Metadata = IndexMap<String, serde_yaml::Value>;

/// A page split into its front-matter and its body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    /// Decoded front-matter, empty when the page has none
    pub metadata: Metadata,
    /// Raw (unconverted) body with the front-matter block removed
    pub content: String,
}

impl Page {
    /// A page without front-matter
    fn plain(text: &str) -> Self {
        Self {
            metadata: Metadata::new(),
            content: text.to_string(),
        }
    }

    /// Look up a top-level metadata value
    pub fn get(&self, key: &str) -> Option<&serde_yaml::Value> {
        self.metadata.get(key)
    }

    /// Look up a top-level string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.as_str())
    }
}

/// Read a page from disk and split off its front-matter
pub fn parse_file(config: &ParserConfig, path: &Path) -> Result<Page> {
    let text = fs::read_to_string(path).map_err(|source| Error::read_text(path, source))?;

    parse_str(config, &text, path)
}

/// Split front-matter from page text already in memory.
///
/// `path` only labels errors and log lines.
pub fn parse_str(config: &ParserConfig, text: &str, path: &Path) -> Result<Page> {
    let block = match frontmatter::find_block(text) {
        Some(block) => block,
        None => {
            // Opening delimiter without a closing one: leave the page alone
            if let Some(format) = Format::detect(text) {
                tracing::debug!(
                    "Unterminated {:?} front-matter in {:?}, treating as content",
                    format,
                    path
                );
            }
            return Ok(Page::plain(text));
        }
    };

    let metadata = block
        .decode()
        .map_err(|e| syntax_error(config, path, e))?;

    tracing::debug!(
        "Parsed {:?} front-matter in {:?} ({} keys)",
        block.format,
        path,
        metadata.len()
    );

    Ok(Page {
        metadata,
        content: block.strip(text),
    })
}

fn syntax_error(config: &ParserConfig, path: &Path, err: DecodeError) -> Error {
    let hint = match err {
        DecodeError::Yaml(_) => config.yaml_lint_url.clone(),
        DecodeError::Json(_) => None,
    };

    Error::MetadataSyntax {
        path: path.to_path_buf(),
        message: err.to_string(),
        hint,
    }
}

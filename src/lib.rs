//! pagematter: front-matter extraction for pages and data files
//!
//! A page is a text file that may open with a metadata block, either YAML
//! between `---` lines or a JSON object whose braces sit on their own lines.
//! [`FrontMatterParser::parse_page`] splits such a file into its decoded
//! metadata and the remaining body. [`FrontMatterParser::load_data_file`]
//! loads standalone YAML/JSON files looked up by extension-less name.

pub mod config;
pub mod content;
pub mod error;

use std::path::Path;

pub use config::ParserConfig;
pub use content::{DataValue, Format, Metadata, Page};
pub use error::{Error, Result};

/// Front-matter parser
#[derive(Debug, Clone, Default)]
pub struct FrontMatterParser {
    /// Parser configuration
    pub config: ParserConfig,
}

impl FrontMatterParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an explicit configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Create a parser from a YAML configuration file
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::with_config(ParserConfig::load(path)?))
    }

    /// Read a page and split it into metadata and body
    pub fn parse_page<P: AsRef<Path>>(&self, filepath: P) -> Result<Page> {
        content::page::parse_file(&self.config, filepath.as_ref())
    }

    /// Split page text already in memory; `source` labels errors
    pub fn parse_str<P: AsRef<Path>>(&self, text: &str, source: P) -> Result<Page> {
        content::page::parse_str(&self.config, text, source.as_ref())
    }

    /// Load the data file named by `segments`.
    ///
    /// Without an extension the configured extensions are probed in order;
    /// `Ok(None)` means no candidate exists.
    pub fn load_data_file<S: AsRef<Path>>(&self, segments: &[S]) -> Result<Option<DataValue>> {
        content::data::load(&self.config, segments)
    }
}

/// Parse a page with the default configuration
pub fn parse_page<P: AsRef<Path>>(filepath: P) -> Result<Page> {
    FrontMatterParser::new().parse_page(filepath)
}

/// Load a data file with the default configuration
pub fn load_data_file<S: AsRef<Path>>(segments: &[S]) -> Result<Option<DataValue>> {
    FrontMatterParser::new().load_data_file(segments)
}

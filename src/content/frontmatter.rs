//! Front-matter detection and decoding
//!
//! A page may open with one metadata block, either YAML between two `---`
//! lines or a JSON object whose braces sit alone on the first line and on a
//! later line. Detection only looks at the first line; the matchers below
//! then find the shortest block that starts at the top of the text.

use lazy_static::lazy_static;
use regex::Regex;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

use super::page::Metadata;

lazy_static! {
    /// `---` line, payload, next `---` line. Whitespace trailing the closing
    /// delimiter is part of the block, blank lines included.
    static ref YAML_BLOCK: Regex =
        Regex::new(r"(?ms)\A[\s&&[^\n]]*---\s*\n(?P<payload>.*?)\n?^---\s*$\n?")
            .expect("YAML front-matter pattern is valid");

    /// `{` line through the first line holding only `}`.
    static ref JSON_BLOCK: Regex =
        Regex::new(r"(?ms)\A[\s&&[^\n]]*\{\s*\n.*?\n?^\}\s*$\n?")
            .expect("JSON front-matter pattern is valid");
}

/// Encoding of a metadata payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Decide the front-matter format from the first line of a page.
    ///
    /// Returns `None` when the trimmed first line is neither `---` nor `{`,
    /// in which case the page has no front-matter at all.
    pub fn detect(text: &str) -> Option<Self> {
        match text.lines().next().map(str::trim) {
            Some("---") => Some(Format::Yaml),
            Some("{") => Some(Format::Json),
            _ => None,
        }
    }

    /// Format of a data file: `.json` is JSON, anything else is YAML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// A matched front-matter block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub format: Format,
    /// Byte range of the whole block, delimiters included
    pub span: Range<usize>,
    /// Text handed to the decoder
    pub payload: &'a str,
}

impl<'a> Block<'a> {
    /// The page text with this block removed
    pub fn strip(&self, text: &str) -> String {
        let mut content = String::with_capacity(text.len());
        content.push_str(&text[..self.span.start]);
        content.push_str(&text[self.span.end..]);
        content
    }

    /// Decode the payload into metadata
    pub fn decode(&self) -> Result<Metadata, DecodeError> {
        match self.format {
            Format::Yaml => decode_yaml(self.payload).map_err(DecodeError::Yaml),
            Format::Json => decode_json(self.payload).map_err(DecodeError::Json),
        }
    }
}

/// Failure to decode a block payload
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Match a YAML block at the top of `text`.
///
/// The payload excludes both delimiter lines.
pub fn yaml_block(text: &str) -> Option<Block<'_>> {
    let caps = YAML_BLOCK.captures(text)?;
    let whole = caps.get(0)?;
    let payload = caps.name("payload").map_or("", |m| m.as_str());

    Some(Block {
        format: Format::Yaml,
        span: whole.range(),
        payload,
    })
}

/// Match a JSON block at the top of `text`.
///
/// The payload is the whole block, braces included.
pub fn json_block(text: &str) -> Option<Block<'_>> {
    let whole = JSON_BLOCK.find(text)?;

    Some(Block {
        format: Format::Json,
        span: whole.range(),
        payload: whole.as_str(),
    })
}

/// Detect the format from the first line and match the block for it
pub fn find_block(text: &str) -> Option<Block<'_>> {
    match Format::detect(text)? {
        Format::Yaml => yaml_block(text),
        Format::Json => json_block(text),
    }
}

/// Decode a YAML mapping. Empty and null documents give an empty mapping.
pub fn decode_yaml(payload: &str) -> Result<Metadata, serde_yaml::Error> {
    if payload.trim().is_empty() {
        return Ok(Metadata::new());
    }

    let metadata: Option<Metadata> = serde_yaml::from_str(payload)?;
    Ok(metadata.unwrap_or_default())
}

/// Decode a JSON object. `null` gives an empty mapping.
pub fn decode_json(payload: &str) -> Result<Metadata, serde_json::Error> {
    let metadata: Option<Metadata> = serde_json::from_str(payload)?;
    Ok(metadata.unwrap_or_default())
}

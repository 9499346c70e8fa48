//! Data files - standalone YAML/JSON documents looked up by name

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::frontmatter::Format;
use crate::config::ParserConfig;
use crate::error::{Error, Result};

/// Decoded data file. Usually a mapping, but lists and scalars pass through.
pub type DataValue = serde_yaml::Value;

/// Resolve path segments to a data file.
///
/// A path with an extension is returned as is, without checking the disk.
/// Otherwise each extension is appended in turn and the first existing file
/// wins.
pub fn resolve<S: AsRef<Path>>(segments: &[S], extensions: &[String]) -> Option<PathBuf> {
    let joined: PathBuf = segments.iter().collect();
    if joined.as_os_str().is_empty() {
        return None;
    }

    if joined.extension().is_some() {
        return Some(joined);
    }

    extensions.iter().map(|ext| joined.with_extension(ext)).find(|candidate| {
        tracing::trace!("Probing data file {:?}", candidate);
        candidate.is_file()
    })
}

/// Load a data file, `Ok(None)` when nothing matches the segments
pub fn load<S: AsRef<Path>>(config: &ParserConfig, segments: &[S]) -> Result<Option<DataValue>> {
    let path = match resolve(segments, &config.data_extensions) {
        Some(path) => path,
        None => return Ok(None),
    };

    let text = fs::read_to_string(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;

    let value = decode(&path, &text)?;
    tracing::debug!("Loaded data file: {:?}", path);
    Ok(Some(value))
}

fn decode(path: &Path, text: &str) -> Result<DataValue> {
    if text.trim().is_empty() {
        return Ok(empty());
    }

    let value: DataValue = match Format::from_path(path) {
        Format::Json => serde_json::from_str(text).map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?,
        Format::Yaml => first_yaml_document(text).map_err(|e| Error::MetadataSyntax {
            path: path.to_path_buf(),
            message: e.to_string(),
            hint: None,
        })?,
    };

    Ok(if value.is_null() { empty() } else { value })
}

/// Decode the first document of a YAML stream; later documents are ignored
fn first_yaml_document(text: &str) -> std::result::Result<DataValue, serde_yaml::Error> {
    match serde_yaml::Deserializer::from_str(text).next() {
        Some(document) => DataValue::deserialize(document),
        None => Ok(DataValue::Null),
    }
}

fn empty() -> DataValue {
    DataValue::Mapping(serde_yaml::Mapping::new())
}

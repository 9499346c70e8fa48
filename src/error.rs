//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading pages, data files or configuration
#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "Error trying to read meta-data from {}. It's probably a non text-based file like an image. \
         Please remove it or omit it from your query. Error details: {source}",
        .path.display()
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax error while parsing metadata in {}\n{message}{}", .path.display(), hint_line(.hint))]
    MetadataSyntax {
        path: PathBuf,
        message: String,
        /// Where to validate the payload, shown under the message
        hint: Option<String>,
    },

    #[error("Failed to decode JSON data file {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid parser configuration in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

fn hint_line(hint: &Option<String>) -> String {
    match hint {
        Some(url) => format!("\nTry validating the YAML metadata using {}", url),
        None => String::new(),
    }
}

impl Error {
    /// Error for a page that could not be read as text.
    ///
    /// Undecodable bytes get the non-text-file advice; other I/O failures
    /// are reported plainly.
    pub fn read_text(path: &std::path::Path, source: std::io::Error) -> Self {
        let path = path.to_path_buf();
        if source.kind() == std::io::ErrorKind::InvalidData {
            Error::Read { path, source }
        } else {
            Error::Io { path, source }
        }
    }

    /// Path of the file the error relates to
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::Read { path, .. }
            | Error::Io { path, .. }
            | Error::MetadataSyntax { path, .. }
            | Error::Decode { path, .. }
            | Error::Config { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_syntax_message_with_hint() {
        let err = Error::MetadataSyntax {
            path: PathBuf::from("posts/hello.md"),
            message: "mapping values are not allowed here".to_string(),
            hint: Some("http://yamllint.com".to_string()),
        };

        let msg = err.to_string();
        assert!(msg.contains("posts/hello.md"));
        assert!(msg.contains("mapping values are not allowed here"));
        assert!(msg.ends_with("Try validating the YAML metadata using http://yamllint.com"));
    }

    #[test]
    fn test_metadata_syntax_message_without_hint() {
        let err = Error::MetadataSyntax {
            path: PathBuf::from("data/nav.yml"),
            message: "bad indentation".to_string(),
            hint: None,
        };

        assert!(!err.to_string().contains("yamllint"));
        assert_eq!(err.path(), std::path::Path::new("data/nav.yml"));
    }

    #[test]
    fn test_read_text_picks_variant_by_kind() {
        let err = Error::read_text(
            std::path::Path::new("images/logo.png"),
            std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        );
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("non text-based file"));

        let err = Error::read_text(
            std::path::Path::new("posts/missing.md"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert!(matches!(err, Error::Io { .. }));
        let msg = err.to_string();
        assert_eq!(msg, "Failed to read posts/missing.md: No such file or directory");
    }

    #[test]
    fn test_read_message_names_file() {
        let err = Error::Read {
            path: PathBuf::from("images/logo.png"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };

        let msg = err.to_string();
        assert!(msg.contains("images/logo.png"));
        assert!(msg.contains("omit it from your query"));
    }
}

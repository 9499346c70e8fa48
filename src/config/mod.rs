//! Configuration module

mod parser;

pub use parser::ParserConfig;
pub use parser::DEFAULT_YAML_LINT_URL;

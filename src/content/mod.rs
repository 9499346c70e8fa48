//! Content module - front-matter extraction for pages and data files

pub mod data;
pub mod frontmatter;
pub(crate) mod page;

pub use data::DataValue;
pub use frontmatter::{Block, Format};
pub use page::{Metadata, Page};

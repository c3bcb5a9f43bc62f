pub mod parser;
pub mod section;
pub mod template;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use section::{DocType, Section, find_section, next_root_id};

/// A complete specification document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecDocument {
    pub title: String,
    pub doc_type: DocType,
    /// Ordered root sections.
    pub content: Vec<Section>,
}

impl SpecDocument {
    pub fn new(title: impl Into<String>, doc_type: DocType, content: Vec<Section>) -> Self {
        SpecDocument {
            title: title.into(),
            doc_type,
            content,
        }
    }
}

impl fmt::Display for SpecDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        for section in &self.content {
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}

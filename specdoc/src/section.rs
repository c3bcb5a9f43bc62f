use std::fmt;

use serde::{Deserialize, Serialize};

/// Document classification controlling which content variant the engine's
/// generators emit. Immutable for the lifetime of a document instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocType {
    Functional,
    Technical,
}

impl DocType {
    /// Fallback classifier: guess the document kind from root section
    /// titles. Invoked only when no explicit doc type is available (e.g.
    /// markdown import); never recomputed once a document carries one.
    pub fn infer(sections: &[Section]) -> DocType {
        let technical = sections.iter().any(|s| {
            let title = s.title.to_lowercase();
            title.contains("technical") || title.contains("development")
        });
        if technical {
            DocType::Technical
        } else {
            DocType::Functional
        }
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocType::Functional => write!(f, "functional"),
            DocType::Technical => write!(f, "technical"),
        }
    }
}

/// A titled node of document content.
/// Roots are level 1 and may carry ordered subsections; subsections are
/// level 2 and never nest further. Ids double as stable display numbering:
/// roots use sequential integer strings, a subsection id is
/// `{parent_id}.{child_index}` (1-based). Ids are append-only and never
/// reassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: String,
    pub level: u8,
    /// Ordered children; order is reading order, not a sort key.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Section>,
}

impl Section {
    /// A level-1 section with no subsections.
    pub fn root(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Section {
        Section {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            level: 1,
            subsections: Vec::new(),
        }
    }

    /// A level-2 section with the id derived from its parent and 1-based
    /// child index.
    pub fn subsection(
        parent_id: &str,
        index: usize,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Section {
        Section {
            id: format!("{}.{}", parent_id, index),
            title: title.into(),
            content: content.into(),
            level: 2,
            subsections: Vec::new(),
        }
    }
}

/// The id for a newly appended root: the maximum numeric root id plus one.
/// Non-numeric ids are skipped by the scan. Computed from the ids rather
/// than the list length so gaps left by deletions never cause a collision.
pub fn next_root_id(sections: &[Section]) -> String {
    let max = sections
        .iter()
        .filter_map(|s| s.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}

/// Find a section by id: roots first, then one subsection level.
pub fn find_section<'a>(sections: &'a [Section], id: &str) -> Option<&'a Section> {
    for section in sections {
        if section.id == id {
            return Some(section);
        }
        for sub in &section.subsections {
            if sub.id == id {
                return Some(sub);
            }
        }
    }
    None
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.level <= 1 { "##" } else { "###" };
        writeln!(f, "{} {} {}", marker, self.id, self.title)?;
        writeln!(f)?;
        if !self.content.is_empty() {
            writeln!(f, "{}", self.content)?;
            writeln!(f)?;
        }
        for sub in &self.subsections {
            write!(f, "{}", sub)?;
        }
        Ok(())
    }
}

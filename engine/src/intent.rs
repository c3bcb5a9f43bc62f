use specdoc::Section;

use crate::resolver::resolve;

/// Keywords signaling creation intent.
const ADD_KEYWORDS: &[&str] = &["add", "create", "include", "new section", "additional"];

/// Keywords signaling expand/improve intent.
const ENHANCE_KEYWORDS: &[&str] = &[
    "enhance",
    "expand",
    "improve",
    "detail",
    "elaborate",
    "comprehensive",
];

/// The classified purpose of an instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent<'a> {
    /// Create a new root section.
    AddSection,
    /// Rewrite every section relevant to the instruction.
    EnhanceSection,
    /// Rewrite the one section the instruction names.
    ModifySection(&'a Section),
    /// Fallback: enhance the most relevant section.
    EnhanceRelevant,
}

/// Classify an instruction into an intent.
///
/// Rules are tried in priority order and the first true predicate
/// short-circuits the rest: creation keywords win over enhancement
/// keywords ("add a section about X that expands on Y" creates), and a
/// named-section match wins over the generic fallback.
pub fn classify<'a>(instruction: &str, sections: &'a [Section]) -> Intent<'a> {
    let lower = instruction.to_lowercase();

    if contains_any(&lower, ADD_KEYWORDS) {
        return Intent::AddSection;
    }
    if contains_any(&lower, ENHANCE_KEYWORDS) {
        return Intent::EnhanceSection;
    }
    if let Some(target) = resolve(instruction, sections) {
        return Intent::ModifySection(target);
    }
    Intent::EnhanceRelevant
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

use specdoc::{DocType, Section};

/// Everything a generator may read while synthesizing content.
///
/// `current` is the section being rewritten (None when a brand-new section
/// is being scaffolded); `siblings` is the full root list, available for
/// cross-referencing. Generators themselves are pure functions of the
/// current content, the instruction, and the doc type.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisContext<'a> {
    pub instruction: &'a str,
    pub doc_type: DocType,
    pub current: Option<&'a Section>,
    pub siblings: &'a [Section],
}

impl<'a> SynthesisContext<'a> {
    pub fn new(
        instruction: &'a str,
        doc_type: DocType,
        current: Option<&'a Section>,
        siblings: &'a [Section],
    ) -> Self {
        SynthesisContext {
            instruction,
            doc_type,
            current,
            siblings,
        }
    }

    /// The content of the current section, or empty for a new section.
    pub fn current_content(&self) -> &str {
        self.current.map(|s| s.content.as_str()).unwrap_or("")
    }
}

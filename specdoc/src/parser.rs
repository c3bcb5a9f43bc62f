use std::fmt;

use pulldown_cmark::{Event, Options, Parser as CmarkParser, Tag, TagEnd};

use crate::section::Section;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Result of importing a plain-markdown document.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedDocument {
    pub title: String,
    pub sections: Vec<Section>,
}

/// Import failure.
#[derive(Debug)]
pub enum ParseError {
    /// The source contained no headings and no body text.
    Empty,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "document is empty"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse plain-markdown source into a section tree.
///
/// A leading `#` heading becomes the document title, `##` headings open
/// root sections and `###` (or deeper) headings open subsections of the
/// current root. Body text accumulates into the enclosing section's
/// content, blank-line separated. Root ids are assigned "1", "2", ... in
/// document order; subsection ids follow the `{parent}.{n}` shape.
pub fn parse_markdown(source: &str) -> Result<ImportedDocument, ParseError> {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = CmarkParser::new_ext(source, options);

    let mut state = ImportState::new();
    for event in parser {
        state.process(event);
    }
    state.finalize()
}

// ---------------------------------------------------------------------------
// Import state
// ---------------------------------------------------------------------------

/// Drop a leading id-like token ("3", "3.1", "3.1.") from a heading, so
/// exported documents re-import with clean titles.
fn strip_numbering(title: &str) -> String {
    let mut parts = title.splitn(2, char::is_whitespace);
    let first = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("");
    let numeric = !first.is_empty()
        && first
            .chars()
            .all(|c| c.is_ascii_digit() || c == '.');
    if numeric && !rest.trim().is_empty() {
        rest.trim().to_string()
    } else {
        title.trim().to_string()
    }
}

struct SectionBuilder {
    id: String,
    title: String,
    content: String,
    subsections: Vec<Section>,
}

impl SectionBuilder {
    fn new(id: String, title: String) -> Self {
        SectionBuilder {
            id,
            title,
            content: String::new(),
            subsections: Vec::new(),
        }
    }

    fn push_block(&mut self, block: &str) {
        if !self.content.is_empty() {
            self.content.push_str("\n\n");
        }
        self.content.push_str(block);
    }

    fn into_section(self, level: u8) -> Section {
        Section {
            id: self.id,
            title: self.title,
            content: self.content,
            level,
            subsections: self.subsections,
        }
    }
}

struct ImportState {
    title: Option<String>,
    roots: Vec<Section>,
    current_root: Option<SectionBuilder>,
    current_sub: Option<SectionBuilder>,
    /// Text of the heading currently being read, with its clamped level.
    heading: Option<(u8, String)>,
    /// Text of the block element currently being read.
    block: String,
    /// Body text seen before the first section heading.
    preamble: String,
}

impl ImportState {
    fn new() -> Self {
        ImportState {
            title: None,
            roots: Vec::new(),
            current_root: None,
            current_sub: None,
            heading: None,
            block: String::new(),
            preamble: String::new(),
        }
    }

    fn process(&mut self, event: Event<'_>) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                self.flush_block();
                self.heading = Some((level as u8, String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = self.heading.take() {
                    self.open_section(level, text.trim().to_string());
                }
            }
            Event::Text(text) | Event::Code(text) => {
                match &mut self.heading {
                    Some((_, heading_text)) => heading_text.push_str(&text),
                    None => self.block.push_str(&text),
                }
            }
            Event::SoftBreak | Event::HardBreak => match &mut self.heading {
                Some((_, heading_text)) => heading_text.push(' '),
                None => self.block.push('\n'),
            },
            Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Item)
            | Event::End(TagEnd::CodeBlock)
            | Event::End(TagEnd::TableCell) => {
                self.flush_block();
            }
            _ => {}
        }
    }

    /// Move accumulated block text into the innermost open section, or the
    /// preamble when no section is open yet.
    fn flush_block(&mut self) {
        let block = std::mem::take(&mut self.block);
        let block = block.trim();
        if block.is_empty() {
            return;
        }
        if let Some(sub) = &mut self.current_sub {
            sub.push_block(block);
        } else if let Some(root) = &mut self.current_root {
            root.push_block(block);
        } else {
            if !self.preamble.is_empty() {
                self.preamble.push_str("\n\n");
            }
            self.preamble.push_str(block);
        }
    }

    fn open_section(&mut self, level: u8, title: String) {
        let title = strip_numbering(&title);
        if title.is_empty() {
            return;
        }
        match level {
            1 if self.title.is_none() && self.roots.is_empty() && self.current_root.is_none() => {
                self.title = Some(title);
            }
            // Later `#` headings and all `##` headings open root sections.
            1 | 2 => self.open_root(title),
            // `###` and deeper: subsection of the current root, or promoted
            // to a root when none is open yet.
            _ => {
                if self.current_root.is_none() {
                    self.open_root(title);
                } else {
                    self.close_sub();
                    if let Some(root) = &self.current_root {
                        let id = format!("{}.{}", root.id, root.subsections.len() + 1);
                        self.current_sub = Some(SectionBuilder::new(id, title));
                    }
                }
            }
        }
    }

    fn open_root(&mut self, title: String) {
        self.close_sub();
        self.close_root();
        let id = (self.roots.len() + 1).to_string();
        self.current_root = Some(SectionBuilder::new(id, title));
    }

    fn close_sub(&mut self) {
        if let Some(sub) = self.current_sub.take() {
            if let Some(root) = &mut self.current_root {
                root.subsections.push(sub.into_section(2));
            }
        }
    }

    fn close_root(&mut self) {
        if let Some(root) = self.current_root.take() {
            self.roots.push(root.into_section(1));
        }
    }

    fn finalize(mut self) -> Result<ImportedDocument, ParseError> {
        self.flush_block();
        self.close_sub();
        self.close_root();

        // Body text with no heading at all still yields a usable document.
        if self.roots.is_empty() && !self.preamble.is_empty() {
            self.roots
                .push(Section::root("1", "Overview", std::mem::take(&mut self.preamble)));
        } else if !self.preamble.is_empty() {
            // Preamble text between the title and the first section heading
            // belongs to the first section.
            let first = &mut self.roots[0];
            let body = std::mem::take(&mut first.content);
            first.content = if body.is_empty() {
                std::mem::take(&mut self.preamble)
            } else {
                format!("{}\n\n{}", self.preamble, body)
            };
        }

        if self.roots.is_empty() {
            return Err(ParseError::Empty);
        }

        Ok(ImportedDocument {
            title: self
                .title
                .unwrap_or_else(|| "Imported Document".to_string()),
            sections: self.roots,
        })
    }
}

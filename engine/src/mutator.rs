//! Pure tree rewrites.
//!
//! Every function takes the current root list by reference and returns a
//! brand-new tree; the input is never mutated. The mutator has no failure
//! modes of its own: a replace against an unknown id returns the tree
//! unchanged rather than signaling an error.

use specdoc::{DocType, Section};

use crate::context::SynthesisContext;
use crate::generators::synthesize_for_instruction;

/// Append a new root section. The caller assigns the id (max numeric root
/// id plus one, via `specdoc::next_root_id`).
pub fn append_root(sections: &[Section], new_root: Section) -> Vec<Section> {
    let mut out = sections.to_vec();
    out.push(new_root);
    out
}

/// Structural copy of the tree with exactly the matching node replaced:
/// roots are checked first, then one subsection level. When
/// `new_subsections` is given the matching node's children are replaced
/// wholesale.
pub fn replace_section(
    sections: &[Section],
    id: &str,
    new_content: String,
    new_subsections: Option<Vec<Section>>,
) -> Vec<Section> {
    sections
        .iter()
        .map(|section| {
            if section.id == id {
                return Section {
                    id: section.id.clone(),
                    title: section.title.clone(),
                    content: new_content.clone(),
                    level: section.level,
                    subsections: match &new_subsections {
                        Some(subs) => subs.clone(),
                        None => section.subsections.clone(),
                    },
                };
            }
            if section.subsections.iter().any(|sub| sub.id == id) {
                let subsections = section
                    .subsections
                    .iter()
                    .map(|sub| {
                        if sub.id == id {
                            Section {
                                id: sub.id.clone(),
                                title: sub.title.clone(),
                                content: new_content.clone(),
                                level: sub.level,
                                subsections: Vec::new(),
                            }
                        } else {
                            sub.clone()
                        }
                    })
                    .collect();
                return Section {
                    subsections,
                    ..section.clone()
                };
            }
            section.clone()
        })
        .collect()
}

/// Is a section relevant to an instruction? Any instruction word longer
/// than 3 characters contained in the lower-cased title, or the title
/// contained in the instruction.
pub fn is_relevant(section: &Section, instruction: &str) -> bool {
    let lower_instruction = instruction.to_lowercase();
    let lower_title = section.title.to_lowercase();

    lower_instruction
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .any(|word| lower_title.contains(word))
        || lower_instruction.contains(&lower_title)
}

/// Rewrite every root judged relevant to the instruction, cascading the
/// rewrite into all of that root's subsections. Irrelevant roots pass
/// through unchanged.
pub fn enhance_matching(
    sections: &[Section],
    instruction: &str,
    doc_type: DocType,
) -> Vec<Section> {
    sections
        .iter()
        .map(|section| {
            if !is_relevant(section, instruction) {
                return section.clone();
            }
            let ctx = SynthesisContext::new(instruction, doc_type, Some(section), sections);
            let subsections = section
                .subsections
                .iter()
                .map(|sub| {
                    let sub_ctx = SynthesisContext::new(instruction, doc_type, Some(sub), &[]);
                    Section {
                        content: synthesize_for_instruction(&sub_ctx),
                        ..sub.clone()
                    }
                })
                .collect();
            Section {
                content: synthesize_for_instruction(&ctx),
                subsections,
                ..section.clone()
            }
        })
        .collect()
}

/// Fallback enhancement: pick the single most plausible root and
/// regenerate its content; everything else passes through unchanged.
/// Preference order: first relevant root, then a root titled after
/// requirements or the executive summary, then index `min(1, len - 1)`.
pub fn enhance_relevant(
    sections: &[Section],
    instruction: &str,
    doc_type: DocType,
) -> Vec<Section> {
    let target = sections
        .iter()
        .position(|section| is_relevant(section, instruction))
        .or_else(|| {
            sections.iter().position(|section| {
                let title = section.title.to_lowercase();
                title.contains("requirement") || title.contains("executive summary")
            })
        })
        .unwrap_or_else(|| 1.min(sections.len().saturating_sub(1)));

    sections
        .iter()
        .enumerate()
        .map(|(index, section)| {
            if index != target {
                return section.clone();
            }
            let ctx = SynthesisContext::new(instruction, doc_type, Some(section), sections);
            Section {
                content: synthesize_for_instruction(&ctx),
                ..section.clone()
            }
        })
        .collect()
}

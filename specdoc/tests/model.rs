use specdoc::parser::{ParseError, parse_markdown};
use specdoc::template::{functional_template, sap_mm_stock_template, technical_template};
use specdoc::{DocType, Section, SpecDocument, find_section, next_root_id};

fn unique_ids(sections: &[Section]) -> bool {
    let mut ids: Vec<&str> = Vec::new();
    for section in sections {
        ids.push(section.id.as_str());
        for sub in &section.subsections {
            ids.push(sub.id.as_str());
        }
    }
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    ids.len() == before
}

// --- Ids ---

#[test]
fn next_root_id_counts_from_the_max() {
    let sections = vec![
        Section::root("1", "A", ""),
        Section::root("2", "B", ""),
    ];
    assert_eq!(next_root_id(&sections), "3");
}

#[test]
fn next_root_id_survives_gaps() {
    // A deleted "2" must not be reused.
    let sections = vec![
        Section::root("1", "A", ""),
        Section::root("3", "C", ""),
    ];
    assert_eq!(next_root_id(&sections), "4");
}

#[test]
fn next_root_id_ignores_non_numeric_ids() {
    let sections = vec![
        Section::root("1", "A", ""),
        Section::root("appendix", "Z", ""),
    ];
    assert_eq!(next_root_id(&sections), "2");
}

#[test]
fn subsection_ids_are_namespaced_by_parent() {
    let sub = Section::subsection("3", 2, "Details", "");
    assert_eq!(sub.id, "3.2");
    assert_eq!(sub.level, 2);
}

#[test]
fn find_section_checks_roots_then_subsections() {
    let mut root = Section::root("1", "A", "");
    root.subsections = vec![Section::subsection("1", 1, "A1", "")];
    let sections = vec![root, Section::root("2", "B", "")];

    assert_eq!(find_section(&sections, "2").map(|s| s.title.as_str()), Some("B"));
    assert_eq!(find_section(&sections, "1.1").map(|s| s.title.as_str()), Some("A1"));
    assert!(find_section(&sections, "9").is_none());
}

// --- Doc type inference ---

#[test]
fn infer_defaults_to_functional() {
    let sections = vec![Section::root("1", "Executive Summary", "")];
    assert_eq!(DocType::infer(&sections), DocType::Functional);
}

#[test]
fn infer_detects_technical_titles() {
    let sections = vec![Section::root("1", "Development Objects", "")];
    assert_eq!(DocType::infer(&sections), DocType::Technical);

    let sections = vec![Section::root("1", "Technical Overview", "")];
    assert_eq!(DocType::infer(&sections), DocType::Technical);
}

// --- Templates ---

#[test]
fn templates_have_unique_ids() {
    assert!(unique_ids(&functional_template()));
    assert!(unique_ids(&technical_template()));
    assert!(unique_ids(&sap_mm_stock_template()));
}

#[test]
fn templates_match_their_doc_kind() {
    assert_eq!(DocType::infer(&functional_template()), DocType::Functional);
    assert_eq!(DocType::infer(&technical_template()), DocType::Technical);
}

#[test]
fn functional_template_shape() {
    let sections = functional_template();
    assert_eq!(sections[0].title, "Executive Summary");
    let requirements = sections
        .iter()
        .find(|s| s.title == "Functional Requirements")
        .expect("missing requirements section");
    assert!(!requirements.subsections.is_empty());
}

// --- Rendering ---

#[test]
fn display_renders_numbered_markdown() {
    let mut root = Section::root("1", "Overview", "Body text.");
    root.subsections = vec![Section::subsection("1", 1, "Scope", "Scope text.")];
    let document = SpecDocument::new("My Spec", DocType::Functional, vec![root]);

    let rendered = document.to_string();
    assert!(rendered.starts_with("# My Spec\n"));
    assert!(rendered.contains("## 1 Overview"));
    assert!(rendered.contains("Body text."));
    assert!(rendered.contains("### 1.1 Scope"));
}

// --- Markdown import ---

#[test]
fn parse_markdown_builds_the_tree() {
    let source = "\
# Stock Report Spec

## Overview

First paragraph.

Second paragraph.

## Requirements

### Selection

Selection body.

### Output

Output body.
";
    let doc = parse_markdown(source).expect("parse failed");
    assert_eq!(doc.title, "Stock Report Spec");
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[0].id, "1");
    assert_eq!(doc.sections[0].content, "First paragraph.\n\nSecond paragraph.");
    assert_eq!(doc.sections[1].subsections.len(), 2);
    assert_eq!(doc.sections[1].subsections[0].id, "2.1");
    assert_eq!(doc.sections[1].subsections[1].title, "Output");
}

#[test]
fn parse_markdown_strips_heading_numbers() {
    let source = "## 3 Testing Requirements\n\nBody.\n";
    let doc = parse_markdown(source).expect("parse failed");
    assert_eq!(doc.sections[0].title, "Testing Requirements");
    assert_eq!(doc.sections[0].id, "1");
}

#[test]
fn parse_markdown_promotes_orphan_subsection() {
    let source = "### Lonely\n\nBody.\n";
    let doc = parse_markdown(source).expect("parse failed");
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].level, 1);
    assert_eq!(doc.sections[0].title, "Lonely");
}

#[test]
fn parse_markdown_defaults_title() {
    let doc = parse_markdown("## Only Section\n\nBody.\n").expect("parse failed");
    assert_eq!(doc.title, "Imported Document");
}

#[test]
fn parse_markdown_wraps_headingless_text() {
    let doc = parse_markdown("Just a paragraph.\n").expect("parse failed");
    assert_eq!(doc.sections.len(), 1);
    assert_eq!(doc.sections[0].title, "Overview");
    assert_eq!(doc.sections[0].content, "Just a paragraph.");
}

#[test]
fn parse_markdown_rejects_empty_input() {
    assert!(matches!(parse_markdown(""), Err(ParseError::Empty)));
    assert!(matches!(parse_markdown("   \n"), Err(ParseError::Empty)));
}

// --- Export / import round trip ---

#[test]
fn export_then_import_preserves_structure() {
    let mut requirements = Section::root("1", "Functional Requirements", "Requirements body.");
    requirements.subsections = vec![
        Section::subsection("1", 1, "Selection Screen", "Selection body."),
        Section::subsection("1", 2, "Output Layout", "Output body."),
    ];
    let document = SpecDocument::new(
        "Round Trip",
        DocType::Functional,
        vec![requirements, Section::root("2", "Testing Requirements", "Testing body.")],
    );

    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("export.md");
    std::fs::write(&path, document.to_string()).expect("write failed");

    let source = std::fs::read_to_string(&path).expect("read failed");
    let imported = parse_markdown(&source).expect("parse failed");

    assert_eq!(imported.title, "Round Trip");
    assert_eq!(imported.sections.len(), 2);
    assert_eq!(imported.sections[0].title, "Functional Requirements");
    assert_eq!(imported.sections[0].id, "1");
    assert_eq!(imported.sections[0].content, "Requirements body.");
    assert_eq!(imported.sections[0].subsections.len(), 2);
    assert_eq!(imported.sections[0].subsections[1].title, "Output Layout");
    assert_eq!(imported.sections[1].content, "Testing body.");
}

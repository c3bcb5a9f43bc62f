use std::time::Duration;

use engine::{EngineError, Intent, apply_instruction_with_latency, classify, resolve};
use engine::taxonomy::{AddKind, GeneratorKind, derive_title, select_add_planner, select_generator};
use specdoc::{DocType, Section, SpecDocument, next_root_id};

fn doc(doc_type: DocType, sections: Vec<Section>) -> SpecDocument {
    SpecDocument::new("Test Document", doc_type, sections)
}

fn base_sections() -> Vec<Section> {
    vec![
        Section::root("1", "Executive Summary", "Summary body."),
        Section::root("2", "Functional Requirements", "Requirements body."),
        Section::root("3", "Testing Requirements", "Testing body."),
    ]
}

async fn apply(instruction: &str, document: &SpecDocument) -> Vec<Section> {
    apply_instruction_with_latency(instruction, document, Duration::ZERO)
        .await
        .expect("apply failed")
}

// --- Classifier ---

#[test]
fn classifier_add_wins_over_enhance() {
    let sections = base_sections();
    // "add" must win even though "expands" suggests enhancement.
    let intent = classify("add a section that expands on testing", &sections);
    assert_eq!(intent, Intent::AddSection);
}

#[test]
fn classifier_enhance_keywords() {
    let sections = base_sections();
    assert_eq!(
        classify("expand the testing strategy", &sections),
        Intent::EnhanceSection
    );
    assert_eq!(
        classify("make the process flows comprehensive", &sections),
        Intent::EnhanceSection
    );
}

#[test]
fn classifier_named_section_wins_over_fallback() {
    let sections = base_sections();
    match classify("update the executive summary with current figures", &sections) {
        Intent::ModifySection(target) => assert_eq!(target.id, "1"),
        other => panic!("expected ModifySection, got {:?}", other),
    }
}

#[test]
fn classifier_fallback() {
    let sections = base_sections();
    assert_eq!(classify("please help", &sections), Intent::EnhanceRelevant);
}

// --- Resolver ---

#[test]
fn resolver_matches_named_section() {
    let sections = vec![
        Section::root("1", "Overview", ""),
        Section::root("2", "Security", ""),
    ];
    let target = resolve("update the security section", &sections).expect("no match");
    assert_eq!(target.id, "2");
}

#[test]
fn resolver_first_hit_wins() {
    // "testing" is a substring hit for the earlier root even though the
    // later title is the longer match.
    let sections = vec![
        Section::root("1", "Testing", ""),
        Section::root("2", "Integration Testing", ""),
    ];
    let target = resolve("improve integration testing", &sections).expect("no match");
    assert_eq!(target.id, "1");
}

#[test]
fn resolver_checks_subsections() {
    let mut root = Section::root("1", "Functional Requirements", "");
    root.subsections = vec![Section::subsection("1", 1, "Selection Screen", "")];
    let sections = vec![root];
    let target = resolve("rework the selection screen", &sections).expect("no match");
    assert_eq!(target.id, "1.1");
}

#[test]
fn resolver_returns_none_without_match() {
    let sections = base_sections();
    assert!(resolve("something entirely unrelated", &sections).is_none());
}

// --- Taxonomy ---

#[test]
fn taxonomy_first_match_wins() {
    // "field" hits the data set before "api" could hit the interface set.
    assert_eq!(
        select_generator("map each field of the api"),
        GeneratorKind::DataSpecification
    );
    assert_eq!(
        select_generator("document the api connection"),
        GeneratorKind::InterfaceSpecification
    );
    assert_eq!(
        select_generator("tighten role permissions"),
        GeneratorKind::Authorization
    );
    assert_eq!(
        select_generator("no keyword applies here"),
        GeneratorKind::GenericEnhancement
    );
}

#[test]
fn add_taxonomy_selection() {
    assert_eq!(
        select_add_planner("add user role restrictions"),
        AddKind::Authorization
    );
    assert_eq!(
        select_add_planner("include data migration steps"),
        AddKind::DataMigration
    );
    assert_eq!(select_add_planner("add an interface"), AddKind::Interface);
    assert_eq!(select_add_planner("add field mapping"), AddKind::Generic);
}

#[test]
fn derive_title_rules() {
    assert_eq!(derive_title("add monitoring hooks"), "Monitoring and Alerting");
    assert_eq!(derive_title("add a backup plan"), "Backup and Recovery");
    assert_eq!(derive_title("add deployment notes"), "Deployment Strategy");
    assert_eq!(derive_title("add something else"), "Additional Requirements");
}

// --- Add paths ---

#[tokio::test]
async fn add_new_testing_section() {
    let document = doc(
        DocType::Functional,
        vec![
            Section::root("1", "Executive Summary", "Summary body."),
            Section::root("2", "Functional Requirements", "Requirements body."),
        ],
    );
    let result = apply("add a new section for testing", &document).await;

    assert_eq!(result.len(), 3);
    let added = &result[2];
    assert_eq!(added.id, "3");
    assert_eq!(added.title, "Testing Requirements and Strategy");
    assert_eq!(added.subsections.len(), 2);
    assert_eq!(added.subsections[0].id, "3.1");
    assert_eq!(added.subsections[1].id, "3.2");
    assert!(added.content.contains("add a new section for testing"));
}

#[tokio::test]
async fn add_absorbed_by_existing_testing_section() {
    let document = doc(DocType::Functional, base_sections());
    let result = apply("add more testing scenarios", &document).await;

    // No new root: the existing testing section absorbs the addition.
    assert_eq!(result.len(), 3);
    let testing = &result[2];
    assert_eq!(testing.id, "3");
    assert_eq!(testing.subsections.len(), 5);
    assert_eq!(testing.subsections[0].title, "Unit Testing Scenarios");
    assert_eq!(testing.subsections[4].title, "Negative Testing Scenarios");
    assert!(testing.content.contains("add more testing scenarios"));
}

#[tokio::test]
async fn add_authorization_section_has_fixed_subsections() {
    let document = doc(DocType::Functional, base_sections());
    let result = apply("add a security section", &document).await;

    assert_eq!(result.len(), 4);
    let added = &result[3];
    assert_eq!(added.title, "Security and Authorization");
    assert_eq!(added.subsections.len(), 2);
    assert_eq!(added.subsections[0].title, "Authorization Objects and Roles");
    assert_eq!(added.subsections[1].title, "Security Testing and Validation");
}

#[tokio::test]
async fn add_generic_section_derives_title() {
    let document = doc(DocType::Functional, base_sections());
    let result = apply("please include monitoring coverage", &document).await;

    let added = &result[3];
    assert_eq!(added.title, "Monitoring and Alerting");
    assert!(added.subsections.is_empty());
    assert!(added.content.ends_with("please include monitoring coverage"));
}

#[tokio::test]
async fn add_assigns_max_plus_one_id() {
    // A gap from a deleted section must not cause an id collision.
    let document = doc(
        DocType::Functional,
        vec![
            Section::root("1", "Executive Summary", ""),
            Section::root("3", "Testing Requirements", ""),
        ],
    );
    assert_eq!(next_root_id(&document.content), "4");

    let result = apply("add a security section", &document).await;
    assert_eq!(result[2].id, "4");

    let mut ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), result.len());
}

// --- Enhance and modify paths ---

#[tokio::test]
async fn enhance_rewrites_relevant_sections_only() {
    let document = doc(DocType::Functional, base_sections());
    let result = apply("expand testing", &document).await;

    assert_eq!(result.len(), 3);
    // Only the testing section matches the instruction.
    assert_eq!(result[0].content, "Summary body.");
    assert_eq!(result[1].content, "Requirements body.");
    assert!(result[2].content.starts_with("Testing body."));
    assert!(result[2].content.contains("expand testing"));
}

#[tokio::test]
async fn enhance_cascades_into_subsections() {
    let mut testing = Section::root("1", "Testing Requirements", "Testing body.");
    testing.subsections = vec![
        Section::subsection("1", 1, "Unit Testing", "Unit body."),
        Section::subsection("1", 2, "Integration Testing", "Integration body."),
    ];
    let document = doc(DocType::Functional, vec![testing]);
    let result = apply("expand testing", &document).await;

    for sub in &result[0].subsections {
        assert!(sub.content.contains("expand testing"));
    }
    // Ids and titles survive the rewrite.
    assert_eq!(result[0].subsections[0].id, "1.1");
    assert_eq!(result[0].subsections[1].title, "Integration Testing");
}

#[tokio::test]
async fn enhance_is_not_idempotent() {
    let document = doc(DocType::Functional, base_sections());
    let once = apply("expand testing", &document).await;
    let first_len = once[2].content.len();

    let document = doc(DocType::Functional, once);
    let twice = apply("expand testing", &document).await;

    // Each call appends new scaffolding on top of the previous content.
    assert!(twice[2].content.len() > first_len);
    assert!(twice[2].content.starts_with("Testing body."));
}

#[tokio::test]
async fn modify_named_section_changes_only_the_target() {
    let document = doc(DocType::Functional, base_sections());
    let result = apply("rework the executive summary for clarity", &document).await;

    assert!(result[0].content.starts_with("Summary body."));
    assert!(result[0].content.contains("rework the executive summary"));
    assert_eq!(result[1].content, "Requirements body.");
    assert_eq!(result[2].content, "Testing body.");
}

#[tokio::test]
async fn fallback_enhances_most_relevant_section() {
    let document = doc(
        DocType::Functional,
        vec![Section::root("1", "Executive Summary", "Summary body.")],
    );
    let result = apply("please help", &document).await;

    // No new section; generic content appended to the executive summary.
    assert_eq!(result.len(), 1);
    assert!(result[0].content.starts_with("Summary body."));
    assert!(result[0].content.ends_with("please help"));
}

// --- Doc type branching ---

#[tokio::test]
async fn doc_type_branches_data_specification() {
    let sections = vec![Section::root("1", "Overview", "")];

    let technical = doc(DocType::Technical, sections.clone());
    let result = apply("add field mapping", &technical).await;
    assert!(result[1].content.contains("Field Structure:"));

    let functional = doc(DocType::Functional, sections);
    let result = apply("add field mapping", &functional).await;
    assert!(!result[1].content.contains("Field Structure:"));
    assert!(result[1].content.contains("Comprehensive Data Requirements:"));
}

// --- Engine properties ---

#[tokio::test]
async fn apply_is_deterministic() {
    let document = doc(DocType::Functional, base_sections());
    let first = apply("expand testing coverage", &document).await;
    let second = apply("expand testing coverage", &document).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn apply_never_mutates_the_input() {
    let document = doc(DocType::Functional, base_sections());
    let snapshot = document.clone();
    let _ = apply("add a security section", &document).await;
    let _ = apply("expand testing", &document).await;
    assert_eq!(document, snapshot);
}

#[tokio::test]
async fn blank_instruction_is_rejected() {
    let document = doc(DocType::Functional, base_sections());
    let err = apply_instruction_with_latency("   ", &document, Duration::ZERO)
        .await
        .expect_err("expected rejection");
    assert_eq!(err, EngineError::EmptyInstruction);
}

#[tokio::test]
async fn empty_document_is_rejected() {
    let document = doc(DocType::Functional, Vec::new());
    let err = apply_instruction_with_latency("expand testing", &document, Duration::ZERO)
        .await
        .expect_err("expected rejection");
    assert_eq!(err, EngineError::EmptyDocument);
}

// --- Mutator edge cases ---

#[test]
fn replace_unknown_id_is_a_no_op() {
    let sections = base_sections();
    let result =
        engine::mutator::replace_section(&sections, "99", "new content".to_string(), None);
    assert_eq!(result, sections);
}

#[test]
fn replace_targets_subsections_too() {
    let mut root = Section::root("1", "Functional Requirements", "Body.");
    root.subsections = vec![Section::subsection("1", 1, "Selection Screen", "Old.")];
    let sections = vec![root];

    let result =
        engine::mutator::replace_section(&sections, "1.1", "New.".to_string(), None);
    assert_eq!(result[0].subsections[0].content, "New.");
    assert_eq!(result[0].content, "Body.");
}

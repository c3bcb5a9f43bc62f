//! Keyword taxonomies mapping instructions to generators.
//!
//! Both tables are ordered: they are evaluated top to bottom and the first
//! matching keyword set wins, the same short-circuit discipline the intent
//! classifier uses. The priority order is the data structure itself.

/// One topic category of content synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    FunctionalRequirements,
    DataSpecification,
    InterfaceSpecification,
    Testing,
    Authorization,
    ReportSpecification,
    ErrorHandling,
    Performance,
    UiSpecification,
    GenericEnhancement,
}

/// Content taxonomy for enhance/modify synthesis.
pub const TAXONOMY: &[(&[&str], GeneratorKind)] = &[
    (
        &["requirement", "functionality", "function", "feature"],
        GeneratorKind::FunctionalRequirements,
    ),
    (
        &["data", "table", "field", "database", "structure"],
        GeneratorKind::DataSpecification,
    ),
    (
        &["interface", "integration", "api", "connection"],
        GeneratorKind::InterfaceSpecification,
    ),
    (
        &["test", "testing", "scenario", "validation"],
        GeneratorKind::Testing,
    ),
    (
        &["authorization", "security", "access", "role", "permission"],
        GeneratorKind::Authorization,
    ),
    (
        &["report", "output", "display", "alv", "layout"],
        GeneratorKind::ReportSpecification,
    ),
    (
        &["error", "exception", "handling", "logging"],
        GeneratorKind::ErrorHandling,
    ),
    (
        &["performance", "optimization", "speed", "efficiency"],
        GeneratorKind::Performance,
    ),
    (
        &["screen", "ui", "user interface", "input", "selection"],
        GeneratorKind::UiSpecification,
    ),
];

/// Pick the content generator for an instruction. Falls back to the
/// generic enhancement generator when no keyword set matches.
pub fn select_generator(instruction: &str) -> GeneratorKind {
    let lower = instruction.to_lowercase();
    for (keywords, kind) in TAXONOMY {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *kind;
        }
    }
    GeneratorKind::GenericEnhancement
}

/// Dedicated planners for the add-section intent. Overlaps with the
/// content taxonomy but is a distinct table with its own priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddKind {
    Authorization,
    Testing,
    ErrorHandling,
    Performance,
    DataMigration,
    Interface,
    Generic,
}

/// Add taxonomy. Note "data migration" before the bare "migration"
/// keyword would be redundant inside one set, but "migration" alone must
/// not be claimed by an earlier set.
pub const ADD_TAXONOMY: &[(&[&str], AddKind)] = &[
    (
        &["user role", "authorization", "security"],
        AddKind::Authorization,
    ),
    (&["test", "testing"], AddKind::Testing),
    (&["error", "exception"], AddKind::ErrorHandling),
    (&["performance", "optimization"], AddKind::Performance),
    (&["data migration", "migration"], AddKind::DataMigration),
    (&["interface", "integration"], AddKind::Interface),
];

/// Pick the add planner for an instruction.
pub fn select_add_planner(instruction: &str) -> AddKind {
    let lower = instruction.to_lowercase();
    for (keywords, kind) in ADD_TAXONOMY {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *kind;
        }
    }
    AddKind::Generic
}

/// Canned titles for generic new sections.
pub const TITLE_RULES: &[(&str, &str)] = &[
    ("monitoring", "Monitoring and Alerting"),
    ("backup", "Backup and Recovery"),
    ("configuration", "Configuration Management"),
    ("deployment", "Deployment Strategy"),
    ("support", "Support and Maintenance"),
    ("training", "Training and Documentation"),
];

/// Derive a title for a generic new section from the instruction.
pub fn derive_title(instruction: &str) -> &'static str {
    let lower = instruction.to_lowercase();
    for (keyword, title) in TITLE_RULES {
        if lower.contains(keyword) {
            return title;
        }
    }
    "Additional Requirements"
}

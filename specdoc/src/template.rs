//! Built-in starting templates for new documents.
//!
//! The template provider is invoked once, at document creation; the
//! instruction engine never reads templates. Template prose is static data.

use crate::section::Section;

/// Starting sections for a functional specification.
pub fn functional_template() -> Vec<Section> {
    vec![
        Section::root(
            "1",
            "Executive Summary",
            "High-level summary of the business need, the proposed solution, \
             and the expected benefits. Intended for stakeholders who sign off \
             on scope and budget.",
        ),
        Section::root(
            "2",
            "Business Requirements",
            "Business drivers and objectives this solution must satisfy:\n\
             \u{2022} Reduce manual effort in the current process\n\
             \u{2022} Provide timely and accurate data to business users\n\
             \u{2022} Comply with internal audit and control requirements",
        ),
        Section {
            id: "3".to_string(),
            title: "Functional Requirements".to_string(),
            content: "Detailed functional behavior of the solution, described \
                      from the business user's point of view. Each requirement \
                      is numbered and traceable to a business requirement."
                .to_string(),
            level: 1,
            subsections: vec![
                Section::subsection(
                    "3",
                    1,
                    "Process Description",
                    "Step-by-step description of the business process the \
                     solution supports, including actors and decision points.",
                ),
                Section::subsection(
                    "3",
                    2,
                    "Input and Validation Rules",
                    "Required inputs, optional inputs, and the validation \
                     applied to each before processing.",
                ),
            ],
        },
        Section::root(
            "4",
            "Process Flows",
            "End-to-end process flows covering the standard path and the \
             main exception paths. Swimlane diagrams are maintained alongside \
             this document.",
        ),
        Section::root(
            "5",
            "Reporting Requirements",
            "Outputs the business needs from the solution: operational lists, \
             summary reports, and download formats, with their selection \
             criteria and layouts.",
        ),
        Section::root(
            "6",
            "Testing Requirements",
            "Test phases, responsibilities, and acceptance criteria. Business \
             sign-off requires all critical scenarios to pass.",
        ),
        Section::root(
            "7",
            "Assumptions and Constraints",
            "Assumptions made during requirements gathering and known \
             constraints (organizational, regulatory, technical) that bound \
             the solution.",
        ),
    ]
}

/// Starting sections for a technical specification.
pub fn technical_template() -> Vec<Section> {
    vec![
        Section::root(
            "1",
            "Technical Overview",
            "Summary of the technical solution: affected systems, development \
             objects, and the chosen implementation approach.",
        ),
        Section::root(
            "2",
            "Development Objects",
            "Inventory of objects to be created or changed:\n\
             \u{2022} Programs and classes\n\
             \u{2022} Function modules and interfaces\n\
             \u{2022} Dictionary objects (tables, structures, data elements)\n\
             \u{2022} Transport and package assignment",
        ),
        Section {
            id: "3".to_string(),
            title: "Data Model and Database Design".to_string(),
            content: "Tables, key structures, indexes, and relationships \
                      introduced or extended by this development."
                .to_string(),
            level: 1,
            subsections: vec![
                Section::subsection(
                    "3",
                    1,
                    "Table Definitions",
                    "Field-level definitions for each new table, including \
                     data elements, key fields, and delivery class.",
                ),
                Section::subsection(
                    "3",
                    2,
                    "Index and Buffering Strategy",
                    "Secondary indexes with their intended access paths; \
                     buffering settings and the rationale for each.",
                ),
            ],
        },
        Section::root(
            "4",
            "Interface Design",
            "Inbound and outbound interfaces: protocols, message formats, \
             mapping rules, and error queues.",
        ),
        Section::root(
            "5",
            "Error Handling and Logging",
            "Exception classes, application log objects, retry behavior, and \
             the monitoring transactions used in operations.",
        ),
        Section::root(
            "6",
            "Performance Considerations",
            "Expected data volumes, response-time targets, and the database \
             access patterns chosen to meet them.",
        ),
        Section::root(
            "7",
            "Technical Testing",
            "Unit test coverage, integration test setup, and the performance \
             measurements taken before transport to production.",
        ),
    ]
}

/// SAP MM stock-overview variant of the functional template.
/// Fixes the document kind to functional.
pub fn sap_mm_stock_template() -> Vec<Section> {
    vec![
        Section::root(
            "1",
            "Executive Summary",
            "Custom stock overview report for Materials Management. Provides \
             plant and storage-location stock levels with valuation in a \
             single ALV list, replacing manual MMBE lookups per material.",
        ),
        Section::root(
            "2",
            "Business Requirements",
            "\u{2022} Inventory planners need consolidated stock visibility \
             across plants\n\
             \u{2022} Slow-moving stock must be identifiable from the last \
             goods receipt date\n\
             \u{2022} Stock values must reconcile with material valuation \
             (MBEW)",
        ),
        Section {
            id: "3".to_string(),
            title: "Functional Requirements".to_string(),
            content: "The report reads storage-location stock (MARD), enriches \
                      it with material master and valuation data, and presents \
                      an interactive ALV grid."
                .to_string(),
            level: 1,
            subsections: vec![
                Section::subsection(
                    "3",
                    1,
                    "Selection Screen",
                    "Selection by plant (mandatory), material, storage \
                     location, and material group. Plant entries are checked \
                     against T001W and the user's authorizations.",
                ),
                Section::subsection(
                    "3",
                    2,
                    "Output Layout",
                    "ALV grid with material, description, plant, storage \
                     location, unrestricted/quality/blocked stock, total \
                     value, and last goods receipt date. Subtotals per plant.",
                ),
            ],
        },
        Section::root(
            "4",
            "Reporting Requirements",
            "Layout variants are user-savable; export to spreadsheet must \
             preserve subtotal rows. Background execution writes the list to \
             the spool.",
        ),
        Section::root(
            "5",
            "Testing Requirements",
            "Validation against MMBE for a sample of materials per plant; \
             authorization tests for plant-restricted users; volume test with \
             a full plant extraction.",
        ),
    ]
}

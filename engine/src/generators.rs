//! Content generators: one pure function per topic category.
//!
//! Every generator takes the section's current content, the instruction,
//! and (where the variant differs) the doc type, and returns the section's
//! full new content: the prior content exactly once, a structured scaffold
//! block, and a verbatim echo of the instruction last, so output is always
//! traceable back to the instruction that produced it.

use specdoc::{DocType, Section, next_root_id};

use crate::context::SynthesisContext;
use crate::taxonomy::{self, AddKind, GeneratorKind};

// ---------------------------------------------------------------------------
// Synthesis dispatch
// ---------------------------------------------------------------------------

/// Run one generator against a synthesis context.
pub fn synthesize(kind: GeneratorKind, ctx: &SynthesisContext<'_>) -> String {
    let current = ctx.current_content();
    let instruction = ctx.instruction;
    match kind {
        GeneratorKind::FunctionalRequirements => functional_requirements(current, instruction),
        GeneratorKind::DataSpecification => {
            data_specification(current, instruction, ctx.doc_type)
        }
        GeneratorKind::InterfaceSpecification => interface_specification(current, instruction),
        GeneratorKind::Testing => testing_content(current, instruction),
        GeneratorKind::Authorization => authorization_content(current, instruction),
        GeneratorKind::ReportSpecification => report_specification(current, instruction),
        GeneratorKind::ErrorHandling => error_handling_content(current, instruction),
        GeneratorKind::Performance => performance_content(current, instruction),
        GeneratorKind::UiSpecification => ui_specification(current, instruction),
        GeneratorKind::GenericEnhancement => {
            generic_enhancement(current, instruction, ctx.doc_type)
        }
    }
}

/// Dispatch through the content taxonomy for the context's instruction.
pub fn synthesize_for_instruction(ctx: &SynthesisContext<'_>) -> String {
    synthesize(taxonomy::select_generator(ctx.instruction), ctx)
}

/// Prefix a scaffold block with the section's current content, once.
fn with_current(current: &str, block: String) -> String {
    if current.is_empty() {
        block
    } else {
        format!("{current}\n\n{block}")
    }
}

// ---------------------------------------------------------------------------
// Content generators
// ---------------------------------------------------------------------------

fn functional_requirements(current: &str, instruction: &str) -> String {
    with_current(
        current,
        format!(
            "Enhanced Functional Requirements:\n\
             \n\
             Business Process Flow:\n\
             1. User initiates the process via the assigned transaction\n\
             2. System validates user authorization for the requested operation\n\
             3. User enters the required input parameters (plant mandatory, material optional with search help)\n\
             4. System validates mandatory fields, formats, and organizational authorizations\n\
             5. System executes the business logic against the relevant master and transaction data\n\
             6. System issues a confirmation or the requested output\n\
             7. The transaction is logged for the audit trail\n\
             \n\
             Key Functional Points:\n\
             \u{2022} Input validation with clear, field-positioned error messages\n\
             \u{2022} Authorization checks at transaction and field level\n\
             \u{2022} Integration with standard transactions where applicable\n\
             \u{2022} Support for multiple selection criteria with ranges and exclusions\n\
             \n\
             User Roles and Responsibilities:\n\
             \u{2022} Business User: display and create authority for standard operations\n\
             \u{2022} Power User: modification and reporting functions\n\
             \u{2022} Administrator: configuration and authorization management\n\
             \n\
             Data Validation Rules:\n\
             \u{2022} Mandatory fields populated before processing\n\
             \u{2022} Numeric fields checked for range and sign\n\
             \u{2022} Date fields checked for format and open posting period\n\
             \u{2022} Authorization group validation for restricted materials\n\
             \n\
             Detailed Requirements Based on Instruction:\n\
             {instruction}"
        ),
    )
}

fn data_specification(current: &str, instruction: &str, doc_type: DocType) -> String {
    match doc_type {
        DocType::Technical => with_current(
            current,
            format!(
                "Detailed Data Model Specifications:\n\
                 \n\
                 Primary Database Table: ZMM_STOCK_DATA\n\
                 Delivery Class: application table, transparent\n\
                 \n\
                 Field Structure:\n\
                 | Field  | Data Element | Type | Length | Key | Description        |\n\
                 |--------|--------------|------|--------|-----|--------------------|\n\
                 | MANDT  | MANDT        | CLNT | 3      | X   | Client             |\n\
                 | WERKS  | WERKS_D      | CHAR | 4      | X   | Plant              |\n\
                 | MATNR  | MATNR        | CHAR | 18     | X   | Material number    |\n\
                 | DATUM  | DATUM        | DATS | 8      |     | Date               |\n\
                 | MENGE  | MENG13       | QUAN | 13     |     | Quantity           |\n\
                 | MEINS  | MEINS        | UNIT | 3      |     | Unit of measure    |\n\
                 | WAERS  | WAERS        | CUKY | 5      |     | Currency           |\n\
                 | ERNAM  | ERNAM        | CHAR | 12     |     | Created by         |\n\
                 | ERDAT  | ERDAT        | DATS | 8      |     | Created on         |\n\
                 \n\
                 Secondary Indexes:\n\
                 \u{2022} MATNR + WERKS, non-unique, for material-plant queries\n\
                 \u{2022} ERDAT, non-unique, for date-based reporting\n\
                 \n\
                 Foreign Key Relationships:\n\
                 \u{2022} WERKS references T001W (plants)\n\
                 \u{2022} MATNR references MARA (material master)\n\
                 \u{2022} WAERS references TCURC (currencies)\n\
                 \n\
                 Technical Constraints:\n\
                 \u{2022} No table buffering: frequently updated transactional data\n\
                 \u{2022} Change logging via table logging\n\
                 \u{2022} Archiving after the retention period defined by compliance\n\
                 \n\
                 Enhancement Based on Instruction:\n\
                 {instruction}"
            ),
        ),
        DocType::Functional => with_current(
            current,
            format!(
                "Comprehensive Data Requirements:\n\
                 \n\
                 Master Data:\n\
                 \u{2022} Material master (MARA): material number, type, base unit, material group\n\
                 \u{2022} Plant data (MARC): MRP type, MRP controller, procurement type\n\
                 \u{2022} Storage location data (MARD): unrestricted, quality, and blocked stock\n\
                 \n\
                 Transaction Data:\n\
                 \u{2022} Document header: number, type, posting date, reference, created by\n\
                 \u{2022} Line items: material, quantity, unit, plant, storage location, movement type\n\
                 \n\
                 Data Validation Rules:\n\
                 \u{2022} Mandatory fields enforced before saving\n\
                 \u{2022} Material must exist and not be flagged for deletion\n\
                 \u{2022} Plant and storage location combinations must be valid\n\
                 \u{2022} Posting date must fall in an open period\n\
                 \n\
                 Referential Integrity:\n\
                 \u{2022} Material exists in MARA, plant in T001W, storage location in T001L\n\
                 \u{2022} Currency codes exist in TCURC\n\
                 \n\
                 Instruction-Specific Enhancement:\n\
                 {instruction}"
            ),
        ),
    }
}

fn interface_specification(current: &str, instruction: &str) -> String {
    with_current(
        current,
        format!(
            "Comprehensive Interface Specifications:\n\
             \n\
             Interface Overview:\n\
             \u{2022} Integration method: IDoc, RFC, web service, or file, per interface\n\
             \u{2022} Frequency: real-time or scheduled batch\n\
             \u{2022} Message format: XML or JSON, UTF-8, TLS for sensitive payloads\n\
             \n\
             Field-Level Mapping:\n\
             | Source Field  | Target Field | Transformation                         |\n\
             |---------------|--------------|----------------------------------------|\n\
             | MATERIAL_ID   | MARA-MATNR   | pad with leading zeros to 18 chars     |\n\
             | PLANT_CODE    | MARC-WERKS   | map via conversion table               |\n\
             | QTY           | MENGE        | convert to base unit of measure        |\n\
             | UOM           | MEINS        | map ISO code to internal code          |\n\
             | CURRENCY_CODE | WAERS        | map ISO 4217 to currency key           |\n\
             | EFFECTIVE_DATE| DATUM        | normalize to YYYYMMDD                  |\n\
             \n\
             Error Handling Strategy:\n\
             \u{2022} Validation errors: reject the record, return the reason to the source\n\
             \u{2022} System errors: retry with backoff, then alert the integration team\n\
             \u{2022} Business errors: return the message, source resolves before retry\n\
             \u{2022} All failures logged with payload for reprocessing\n\
             \n\
             Monitoring:\n\
             \u{2022} Messages processed per day, success rate, error-queue depth\n\
             \u{2022} Alerting when the error rate or queue size exceeds thresholds\n\
             \n\
             Enhancement for Current Request:\n\
             {instruction}"
        ),
    )
}

fn testing_content(current: &str, instruction: &str) -> String {
    with_current(
        current,
        format!(
            "Comprehensive Testing Strategy and Detailed Test Scenarios:\n\
             \n\
             Testing Phases:\n\
             1. Unit testing by the development team\n\
             2. Integration testing across modules\n\
             3. User acceptance testing by business users\n\
             4. Performance testing against agreed volumes\n\
             5. Regression testing before go-live\n\
             \n\
             Test Scenario 1: Happy Path\n\
             \u{2022} Valid plant, material, and quantity entered\n\
             \u{2022} Expected: document posted, stock updated, confirmation issued\n\
             \n\
             Test Scenario 2: Missing Mandatory Fields\n\
             \u{2022} Submission without plant or quantity\n\
             \u{2022} Expected: field-level error message, posting prevented\n\
             \n\
             Test Scenario 3: Authorization\n\
             \u{2022} User without plant authorization attempts access\n\
             \u{2022} Expected: authorization error, no data displayed, attempt logged\n\
             \n\
             Test Scenario 4: Business Rule Violations\n\
             \u{2022} Insufficient stock, blocked material, closed posting period\n\
             \u{2022} Expected: clear error per rule, transaction not completed\n\
             \n\
             Acceptance Criteria:\n\
             \u{2022} Critical scenarios pass at 100 percent\n\
             \u{2022} No open critical defects at go-live\n\
             \u{2022} Performance targets met under expected load\n\
             \n\
             Instruction-Specific Testing Enhancement:\n\
             {instruction}"
        ),
    )
}

fn authorization_content(current: &str, instruction: &str) -> String {
    with_current(
        current,
        format!(
            "Comprehensive Security and Authorization Framework:\n\
             \n\
             Security Model:\n\
             \u{2022} Role-based access control with authorization profiles per role\n\
             \u{2022} Least privilege: users receive the minimum access their duties need\n\
             \u{2022} Segregation of duties separating conflicting activities\n\
             \n\
             Primary Authorization Objects:\n\
             \u{2022} S_TCODE: transaction start authorization\n\
             \u{2022} M_MATE_WRK: material master data by plant, activity and plant fields\n\
             \u{2022} M_MSEG_BWA: goods movements by movement type and plant\n\
             \u{2022} M_MATE_MAR: material authorization group for restricted materials\n\
             \n\
             Role Design:\n\
             \u{2022} Inventory clerk: post standard movements for assigned plants\n\
             \u{2022} Inventory supervisor: all movement types, reversals, count adjustments\n\
             \u{2022} Materials planner: display inventory, maintain requisitions\n\
             \n\
             Segregation of Duties Controls:\n\
             \u{2022} Goods receipt posting separated from invoice verification\n\
             \u{2022} Vendor master maintenance separated from purchase order creation\n\
             \u{2022} Master data maintenance separated from physical inventory\n\
             \n\
             Audit and Review:\n\
             \u{2022} Quarterly access reviews for high-risk roles\n\
             \u{2022} Authorization failures captured in the security audit log\n\
             \n\
             Enhancement Based on User Instruction:\n\
             {instruction}"
        ),
    )
}

fn report_specification(current: &str, instruction: &str) -> String {
    with_current(
        current,
        format!(
            "Comprehensive Report Specifications:\n\
             \n\
             Selection Screen:\n\
             \u{2022} Plant: select-options, mandatory, checked against authorizations\n\
             \u{2022} Material: select-options, optional, leading-zero conversion applied\n\
             \u{2022} Storage location: select-options, validated per selected plant\n\
             \u{2022} Date range: defaults to the current month, to-date not before from-date\n\
             \n\
             Output Layout (ALV Grid):\n\
             \u{2022} Material and description, hotspot navigation to the master record\n\
             \u{2022} Plant and storage location as subtotal grouping keys\n\
             \u{2022} Unrestricted, quality, and blocked stock with unit reference\n\
             \u{2022} Total value in document currency with plant subtotals and a grand total\n\
             \u{2022} Last goods receipt date, highlighted when older than 90 days\n\
             \n\
             ALV Functions:\n\
             \u{2022} Sorting, filtering, and column sums\n\
             \u{2022} User layout variants, saved and reloaded per user\n\
             \u{2022} Export to spreadsheet preserving subtotal rows\n\
             \n\
             Processing Logic:\n\
             1. Validate selections and authorizations\n\
             2. Read storage-location stock for the selection\n\
             3. Enrich with material descriptions, plant names, and valuation\n\
             4. Compute totals and slow-moving indicators\n\
             5. Display the grid, or write to spool in background mode\n\
             \n\
             Enhancement for User Request:\n\
             {instruction}"
        ),
    )
}

fn error_handling_content(current: &str, instruction: &str) -> String {
    with_current(
        current,
        format!(
            "Comprehensive Error Handling and Exception Management Framework:\n\
             \n\
             Layered Approach:\n\
             1. Input validation prevents errors at the point of entry\n\
             2. Business rule validation catches policy violations\n\
             3. Technical exception handling covers system and database errors\n\
             4. Integration error handling manages interface failures\n\
             5. Logging and monitoring track every error for resolution\n\
             \n\
             Error Categories:\n\
             \u{2022} Validation errors: user correctable, message names the field and the fix\n\
             \u{2022} Business rule violations: processing blocked until resolved or overridden\n\
             \u{2022} Technical errors: logged with context, surfaced as a generic failure\n\
             \n\
             Message Principles:\n\
             \u{2022} State what failed, why, and the corrective action\n\
             \u{2022} Position the cursor on the first field in error\n\
             \u{2022} Never expose internal identifiers to business users\n\
             \n\
             Logging:\n\
             \u{2022} Application log with category, message, and timestamp\n\
             \u{2022} Retention per compliance requirements\n\
             \u{2022} Error queue for failed interface messages with reprocessing\n\
             \n\
             Enhancement Based on Instruction:\n\
             {instruction}"
        ),
    )
}

fn performance_content(current: &str, instruction: &str) -> String {
    with_current(
        current,
        format!(
            "Performance Optimization Strategy:\n\
             \n\
             Database Access:\n\
             \u{2022} Select only required fields, never the full row\n\
             \u{2022} Access tables via their primary key or a supporting index\n\
             \u{2022} Package large reads and avoid nested selects in loops\n\
             \n\
             Processing:\n\
             \u{2022} Sorted internal tables with binary search for lookups\n\
             \u{2022} Parallel processing for independent high-volume batches\n\
             \u{2022} Commit per batch to avoid long-running locks\n\
             \n\
             Targets and Measurement:\n\
             \u{2022} Online response under 2 seconds for a single document\n\
             \u{2022} Background batch of 1000 documents under 10 minutes\n\
             \u{2022} Runtime analysis before transport confirms no full table scans\n\
             \n\
             Enhancement for Current Request:\n\
             {instruction}"
        ),
    )
}

fn ui_specification(current: &str, instruction: &str) -> String {
    with_current(
        current,
        format!(
            "User Interface Specifications:\n\
             \n\
             Screen Design:\n\
             \u{2022} Selection screen with grouped blocks: primary criteria, dates, output options\n\
             \u{2022} Mandatory fields marked and validated on enter\n\
             \u{2022} Search helps on organizational and master data fields\n\
             \n\
             Input Behavior:\n\
             \u{2022} Leading-zero conversion on material numbers\n\
             \u{2022} Date fields default sensibly (current month, today)\n\
             \u{2022} Invalid combinations rejected with the cursor on the offending field\n\
             \n\
             Output Behavior:\n\
             \u{2022} Results in an interactive grid with drill-down navigation\n\
             \u{2022} Status messages in the standard message area\n\
             \u{2022} Long-running actions show a progress indicator\n\
             \n\
             Enhancement Based on Instruction:\n\
             {instruction}"
        ),
    )
}

fn generic_enhancement(current: &str, instruction: &str, doc_type: DocType) -> String {
    let approach = match doc_type {
        DocType::Technical => technical_approach(),
        DocType::Functional => functional_approach(),
    };
    with_current(
        current,
        format!(
            "Enhancement Based on User Request:\n\
             \n\
             1. Requirement Clarification:\n\
             \u{2022} Business need, user story, and measurable acceptance criteria\n\
             \n\
             2. Functional Impact:\n\
             \u{2022} Affected modules, dependencies, and integration points\n\
             \n\
             3. Proposed Approach:\n\
             {approach}\n\
             \n\
             4. Implementation Considerations:\n\
             \u{2022} Data requirements, authorization, performance, and testing\n\
             \n\
             5. Change Impact:\n\
             \u{2022} Process changes, training needs, and documentation updates\n\
             \n\
             Requested change:\n\
             {instruction}"
        ),
    )
}

fn technical_approach() -> &'static str {
    "Technical Implementation:\n\
     \u{2022} Development objects: program, class, and dictionary objects as needed\n\
     \u{2022} Object-oriented design with separated data access and business logic\n\
     \u{2022} Exception classes and application-log integration for failures\n\
     \u{2022} Unit tests for every public method before transport"
}

fn functional_approach() -> &'static str {
    "Functional Solution Design:\n\
     \u{2022} Business process flow from user action to system output\n\
     \u{2022} Screen inputs with field-level validation rules\n\
     \u{2022} Business rules and exception handling stated per step\n\
     \u{2022} Reporting scope, selection criteria, and output columns"
}

// ---------------------------------------------------------------------------
// Add planners
// ---------------------------------------------------------------------------

/// How an add-section instruction lands in the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum AddPlan {
    /// Append a new root section.
    NewRoot(Section),
    /// An existing section absorbs the addition: its content and
    /// subsections are replaced wholesale.
    ReplaceExisting {
        id: String,
        content: String,
        subsections: Vec<Section>,
    },
}

/// Plan the tree change for an add-section instruction. Subsection sets
/// are static per planner; only the parent content interpolates the
/// instruction.
pub fn plan_add(instruction: &str, doc_type: DocType, sections: &[Section]) -> AddPlan {
    match taxonomy::select_add_planner(instruction) {
        AddKind::Authorization => add_authorization(instruction, doc_type, sections),
        AddKind::Testing => add_testing(instruction, doc_type, sections),
        AddKind::ErrorHandling => add_error_handling(instruction, sections),
        AddKind::Performance => add_performance(instruction, sections),
        AddKind::DataMigration => add_data_migration(instruction, sections),
        AddKind::Interface => add_interface(instruction, sections),
        AddKind::Generic => add_generic(instruction, doc_type, sections),
    }
}

fn add_authorization(instruction: &str, doc_type: DocType, sections: &[Section]) -> AddPlan {
    let id = next_root_id(sections);
    let ctx = SynthesisContext::new(instruction, doc_type, None, sections);
    let subsections = vec![
        Section::subsection(
            &id,
            1,
            "Authorization Objects and Roles",
            "Authorization Configuration:\n\
             \n\
             Role-Based Access Control:\n\
             \u{2022} User roles with specific authorization profiles\n\
             \u{2022} Least privilege principle\n\
             \u{2022} Segregation of duties controls\n\
             \n\
             Authorization Objects:\n\
             \u{2022} M_MATE_WRK: material master by plant\n\
             \u{2022} M_MSEG_BWA: goods movements by movement type\n\
             \u{2022} S_TCODE: transaction code authorization\n\
             \n\
             Field-Level Security:\n\
             \u{2022} Sensitive fields masked for unauthorized users\n\
             \u{2022} Audit trail for critical data changes",
        ),
        Section::subsection(
            &id,
            2,
            "Security Testing and Validation",
            "Security Test Cases:\n\
             \n\
             Scenario 1: authorized user executes the transaction successfully\n\
             Scenario 2: unauthorized access is rejected with a clear message and logged\n\
             Scenario 3: sensitive fields stay hidden or masked without authorization",
        ),
    ];
    AddPlan::NewRoot(Section {
        id,
        title: "Security and Authorization".to_string(),
        content: synthesize_for_instruction(&ctx),
        level: 1,
        subsections,
    })
}

fn add_testing(instruction: &str, doc_type: DocType, sections: &[Section]) -> AddPlan {
    // An existing testing section absorbs the addition rather than creating
    // a duplicate root.
    if let Some(existing) = sections
        .iter()
        .find(|s| s.title.to_lowercase().contains("test"))
    {
        let ctx = SynthesisContext::new(instruction, doc_type, Some(existing), sections);
        let subsections = vec![
            Section::subsection(
                &existing.id,
                1,
                "Unit Testing Scenarios",
                "Comprehensive unit test cases with detailed test data and expected results.",
            ),
            Section::subsection(
                &existing.id,
                2,
                "Integration Testing",
                "End-to-end integration testing scenarios across modules and systems.",
            ),
            Section::subsection(
                &existing.id,
                3,
                "User Acceptance Testing (UAT)",
                "Business user validation scenarios with real-world data and workflows.",
            ),
            Section::subsection(
                &existing.id,
                4,
                "Performance Testing",
                "Load testing, stress testing, and performance benchmarking scenarios.",
            ),
            Section::subsection(
                &existing.id,
                5,
                "Negative Testing Scenarios",
                "Error handling validation with invalid inputs and edge cases.",
            ),
        ];
        return AddPlan::ReplaceExisting {
            id: existing.id.clone(),
            content: synthesize_for_instruction(&ctx),
            subsections,
        };
    }

    let id = next_root_id(sections);
    let subsections = vec![
        Section::subsection(
            &id,
            1,
            "Unit and Integration Testing",
            "Unit test cases covering all functional requirements, followed by \
             end-to-end integration scenarios with dependent systems.",
        ),
        Section::subsection(
            &id,
            2,
            "User Acceptance Testing (UAT)",
            "Business user validation scenarios and acceptance criteria.",
        ),
    ];
    AddPlan::NewRoot(Section {
        id,
        title: "Testing Requirements and Strategy".to_string(),
        content: testing_content("", instruction),
        level: 1,
        subsections,
    })
}

fn add_error_handling(instruction: &str, sections: &[Section]) -> AddPlan {
    let id = next_root_id(sections);
    let subsections = vec![
        Section::subsection(
            &id,
            1,
            "Error Categories and Response",
            "Classification of errors and appropriate handling strategies for each category.",
        ),
        Section::subsection(
            &id,
            2,
            "Logging and Monitoring",
            "Application logging framework and error monitoring procedures.",
        ),
    ];
    AddPlan::NewRoot(Section {
        id,
        title: "Error Handling and Exception Management".to_string(),
        content: error_handling_content("", instruction),
        level: 1,
        subsections,
    })
}

fn add_performance(instruction: &str, sections: &[Section]) -> AddPlan {
    let id = next_root_id(sections);
    let subsections = vec![
        Section::subsection(
            &id,
            1,
            "Database Optimization",
            "Index strategy, query optimization, and database performance tuning.",
        ),
        Section::subsection(
            &id,
            2,
            "Code Optimization",
            "Code performance best practices and optimization techniques.",
        ),
    ];
    AddPlan::NewRoot(Section {
        id,
        title: "Performance Optimization".to_string(),
        content: performance_content("", instruction),
        level: 1,
        subsections,
    })
}

fn add_data_migration(instruction: &str, sections: &[Section]) -> AddPlan {
    let id = next_root_id(sections);
    let content = format!(
        "Comprehensive Data Migration Plan:\n\
         \n\
         Migration Approach:\n\
         \u{2022} Phased migration by business unit or data category\n\
         \u{2022} Parallel run period to validate data accuracy\n\
         \u{2022} Cutover strategy with a rollback plan\n\
         \n\
         Data Mapping and Transformation:\n\
         \u{2022} Field-level mapping from source to target tables\n\
         \u{2022} Cleansing rules for data quality improvement\n\
         \u{2022} Unit of measure, currency, and date format standardization\n\
         \n\
         Migration Execution:\n\
         1. Extract data from source systems\n\
         2. Transform and validate\n\
         3. Load into staging tables\n\
         4. Execute migration programs\n\
         5. Validate completeness via reconciliation reports\n\
         \n\
         {instruction}"
    );
    let subsections = vec![
        Section::subsection(
            &id,
            1,
            "Data Mapping Specifications",
            "Detailed Field Mapping:\n\
             \n\
             \u{2022} Customer master: legacy customer records to KNA1\n\
             \u{2022} Material master: legacy items to MARA, MARC, MARD\n\
             \u{2022} Vendor master: legacy vendors to LFA1, LFB1\n\
             \n\
             Transformation Rules:\n\
             \u{2022} Dates normalized to YYYYMMDD\n\
             \u{2022} Material numbers padded with leading zeros to 18 characters\n\
             \u{2022} Currencies converted from ISO codes to currency keys",
        ),
        Section::subsection(
            &id,
            2,
            "Migration Testing and Validation",
            "Migration Testing Strategy:\n\
             \n\
             1. Unit testing of individual migration scripts with sample data\n\
             2. Integration testing with an end-to-end subset\n\
             3. Volume testing with the full extraction in a test system\n\
             4. Business validation of migrated data\n\
             \n\
             Validation Criteria:\n\
             \u{2022} Source and target record counts reconcile per entity\n\
             \u{2022} Value reconciliation for financial balances\n\
             \u{2022} Rejected records reported with reasons",
        ),
    ];
    AddPlan::NewRoot(Section {
        id,
        title: "Data Migration Strategy".to_string(),
        content,
        level: 1,
        subsections,
    })
}

fn add_interface(instruction: &str, sections: &[Section]) -> AddPlan {
    let id = next_root_id(sections);
    let subsections = vec![
        Section::subsection(
            &id,
            1,
            "Inbound Interfaces",
            "Specifications for data flowing in from external systems.",
        ),
        Section::subsection(
            &id,
            2,
            "Outbound Interfaces",
            "Specifications for data flowing out to external systems.",
        ),
    ];
    AddPlan::NewRoot(Section {
        id,
        title: "Interface and Integration Specifications".to_string(),
        content: interface_specification("", instruction),
        level: 1,
        subsections,
    })
}

fn add_generic(instruction: &str, doc_type: DocType, sections: &[Section]) -> AddPlan {
    let id = next_root_id(sections);
    let ctx = SynthesisContext::new(instruction, doc_type, None, sections);
    AddPlan::NewRoot(Section {
        id,
        title: taxonomy::derive_title(instruction).to_string(),
        content: synthesize_for_instruction(&ctx),
        level: 1,
        subsections: Vec::new(),
    })
}

//! Sequences one instruction through the engine.
//!
//! Per call: classify, resolve when the strategy needs a target,
//! synthesize, mutate, return a fresh tree. The engine holds no state
//! between calls and performs no internal locking; the caller serializes
//! submissions (at most one instruction in flight).

use std::time::Duration;

use tracing::{debug, warn};

use specdoc::{Section, SpecDocument};

use crate::context::SynthesisContext;
use crate::error::EngineError;
use crate::generators::{AddPlan, plan_add, synthesize_for_instruction};
use crate::intent::{Intent, classify};
use crate::mutator;

/// Artificial latency inserted before processing begins. This is the only
/// asynchronous suspension point in the engine.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Apply one instruction to a document, producing a new root list.
///
/// The input document is never mutated; replaying the same
/// `(instruction, document)` pair is deterministic. An error aborts the
/// single instruction and leaves the caller's previous document unchanged.
pub async fn apply_instruction(
    instruction: &str,
    document: &SpecDocument,
) -> Result<Vec<Section>, EngineError> {
    apply_instruction_with_latency(instruction, document, DEFAULT_LATENCY).await
}

/// `apply_instruction` with an explicit latency; pass `Duration::ZERO` to
/// process immediately.
pub async fn apply_instruction_with_latency(
    instruction: &str,
    document: &SpecDocument,
    latency: Duration,
) -> Result<Vec<Section>, EngineError> {
    let instruction = instruction.trim();
    if instruction.is_empty() {
        warn!("rejecting blank instruction");
        return Err(EngineError::EmptyInstruction);
    }
    if document.content.is_empty() {
        warn!("rejecting instruction against an empty document");
        return Err(EngineError::EmptyDocument);
    }

    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }

    let sections = &document.content;
    let doc_type = document.doc_type;
    let intent = classify(instruction, sections);
    debug!(?intent, doc_type = %doc_type, "classified instruction");

    let tree = match intent {
        Intent::AddSection => match plan_add(instruction, doc_type, sections) {
            AddPlan::NewRoot(root) => {
                debug!(id = %root.id, title = %root.title, "appending new root section");
                mutator::append_root(sections, root)
            }
            AddPlan::ReplaceExisting {
                id,
                content,
                subsections,
            } => {
                debug!(%id, "add absorbed by existing section");
                mutator::replace_section(sections, &id, content, Some(subsections))
            }
        },
        Intent::EnhanceSection => mutator::enhance_matching(sections, instruction, doc_type),
        Intent::ModifySection(target) => {
            debug!(id = %target.id, title = %target.title, "modifying named section");
            let ctx = SynthesisContext::new(instruction, doc_type, Some(target), sections);
            let content = synthesize_for_instruction(&ctx);
            mutator::replace_section(sections, &target.id, content, None)
        }
        Intent::EnhanceRelevant => mutator::enhance_relevant(sections, instruction, doc_type),
    };

    Ok(tree)
}

pub mod context;
pub mod error;
pub mod generators;
pub mod intent;
pub mod mutator;
pub mod orchestrator;
pub mod resolver;
pub mod taxonomy;

pub use context::SynthesisContext;
pub use error::EngineError;
pub use intent::{Intent, classify};
pub use orchestrator::{DEFAULT_LATENCY, apply_instruction, apply_instruction_with_latency};
pub use resolver::resolve;

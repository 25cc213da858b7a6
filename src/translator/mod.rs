// Translator module - substitution engine and the async translation entry point

mod engine;
mod service;

pub use engine::{SubstitutionEngine, SubstitutionMode};
pub use service::Translator;

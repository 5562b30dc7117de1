// Requirement-to-evidence mapping.
// Rule-based and deterministic: normalize → tokenize → score → rank. No LLM calls.

pub mod handlers;
pub mod proposer;
pub mod scoring;
pub mod text;

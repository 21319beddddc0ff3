//! Core library for Sana, the rule-based symptom-to-advice assistant.
//!
//! Free text goes in, a structured reply comes out: emergency phrases are
//! detected first, then conditions are matched exactly and fuzzily against
//! the built-in knowledge pack. The whole pipeline is pure, synchronous,
//! and stateless per turn; the knowledge base and its keyword index are
//! built once at startup and shared read-only.

pub mod config;
pub mod emergency;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod matcher;
pub mod normalize;
pub mod reply;
pub mod transcript;

pub use config::EngineConfig;
pub use engine::{Engine, ReplyKind, TurnReply};
pub use error::SanaError;
pub use knowledge::KnowledgeBase;

//! Per-turn answer engine.
//!
//! Built once at startup from an immutable knowledge base and validated
//! configuration, then shared read-only. Each turn is an independent
//! request/response computation; no state crosses turns.

use crate::config::EngineConfig;
use crate::emergency::detect_emergency;
use crate::error::SanaError;
use crate::knowledge::KnowledgeBase;
use crate::matcher::{self, ConditionMatch};
use crate::reply::{format_emergency, format_reply};
use serde::{Deserialize, Serialize};

/// What kind of reply a turn produced
///
/// WIRE COMPATIBILITY: tagged representation so shells can dispatch on
/// "type" without parsing the formatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyKind {
    /// An emergency phrase was detected; ordinary matching was bypassed
    Emergency { phrase: String },
    /// One or more conditions matched, in discovery order
    Advice { conditions: Vec<String> },
    /// Nothing matched confidently
    NoMatch,
}

/// Structured reply for one turn: the discriminated kind plus the formatted
/// text that is the wire contract for plain-text shells
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnReply {
    pub kind: ReplyKind,
    pub text: String,
}

/// The symptom-to-advice engine
#[derive(Debug, Clone)]
pub struct Engine {
    kb: KnowledgeBase,
    config: EngineConfig,
}

impl Engine {
    /// Build an engine from a knowledge base and configuration.
    /// Configuration errors surface here, before any input is accepted.
    pub fn new(kb: KnowledgeBase, config: EngineConfig) -> Result<Self, SanaError> {
        config.validate()?;
        Ok(Self { kb, config })
    }

    /// Build an engine over the built-in knowledge pack
    pub fn with_builtin_pack(config: EngineConfig) -> Result<Self, SanaError> {
        Self::new(KnowledgeBase::builtin()?, config)
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Answer one user turn.
    ///
    /// Emergency detection runs first and, on a hit, fully replaces ordinary
    /// matching for the turn.
    pub fn respond(&self, text: &str) -> TurnReply {
        if let Some(phrase) = detect_emergency(&self.kb, text) {
            return TurnReply {
                kind: ReplyKind::Emergency {
                    phrase: phrase.to_string(),
                },
                text: format_emergency(phrase),
            };
        }

        let matches = self.find_matches(text);
        let formatted = format_reply(&self.kb, &matches, self.config.reply_cap);
        let kind = if matches.is_empty() {
            ReplyKind::NoMatch
        } else {
            ReplyKind::Advice {
                conditions: matches.iter().map(|m| m.condition.clone()).collect(),
            }
        };

        TurnReply {
            kind,
            text: formatted,
        }
    }

    /// Matched conditions for a turn, in discovery order
    pub fn find_matches(&self, text: &str) -> Vec<ConditionMatch> {
        matcher::find_matches(&self.kb, &self.config, text)
    }
}

// Golden end-to-end tests are in tests/engine_tests.rs
